mod blocking;
mod lopdf_page_strategy;
mod pdf_extract_strategy;
mod pdf_oxide_strategy;
mod strategy_factory;
mod tesseract_ocr_strategy;

pub use lopdf_page_strategy::{LopdfPageStrategy, join_pages};
pub use pdf_extract_strategy::PdfExtractStrategy;
pub use pdf_oxide_strategy::PdfOxideStrategy;
pub use strategy_factory::{PDF_STRATEGY_ORDER, StrategyFactory, StrategyFactoryError};
pub use tesseract_ocr_strategy::{
    DEFAULT_TESSERACT_CMD, OcrReport, TesseractOcrStrategy, parse_tsv,
};
