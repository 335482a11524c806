mod extract;
mod health;
mod languages;

pub use extract::{
    ErrorResponse, ImageExtractionResponse, PdfExtractionResponse, assemble,
    image_extraction_handler, pdf_extraction_handler,
};
pub use health::health_handler;
pub use languages::{LanguagesResponse, languages_handler};
