use std::sync::Arc;

use anuvadakah::application::ports::{ExtractionStrategy, StrategyError, StrategyKind};
use anuvadakah::application::services::ExtractionSelector;
use anuvadakah::domain::{ErrorKind, Modality, OcrLanguageProfile};
use anuvadakah::infrastructure::text_processing::{TesseractOcrStrategy, parse_tsv};

use crate::helpers::{TEST_TIMEOUT, image_document, pdf_document};

const MISSING_BINARY: &str = "/nonexistent/anuvadakah/tesseract";

const HEADER: &str =
    "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

#[test]
fn given_word_rows_when_parsing_tsv_then_rebuilds_lines_and_mean_confidence() {
    let tsv = format!(
        "{HEADER}\n\
         4\t1\t1\t1\t1\t0\t0\t0\t100\t20\t-1\t\n\
         5\t1\t1\t1\t1\t1\t0\t0\t40\t20\t95.5\tकुल\n\
         5\t1\t1\t1\t1\t2\t50\t0\t40\t20\t84.5\t42\n\
         5\t1\t2\t1\t1\t1\t0\t40\t40\t20\t-1\t \n\
         5\t1\t2\t1\t1\t2\t0\t40\t40\t20\t90\tरुपये\n"
    );

    let report = parse_tsv(&tsv).unwrap();

    assert_eq!(report.text, "कुल 42\nरुपये");
    assert_eq!(report.word_count, 3);
    assert_eq!(report.confidence, Some(90.0));
}

#[test]
fn given_header_only_when_parsing_tsv_then_no_words_and_no_confidence() {
    let report = parse_tsv(&format!("{HEADER}\n")).unwrap();

    assert_eq!(report.text, "");
    assert_eq!(report.word_count, 0);
    assert_eq!(report.confidence, None);
}

#[test]
fn given_empty_output_when_parsing_tsv_then_malformed() {
    assert!(matches!(parse_tsv(""), Err(StrategyError::Malformed(_))));
}

#[tokio::test]
async fn given_missing_binary_when_attempting_ocr_then_unavailable() {
    let strategy = TesseractOcrStrategy::new(MISSING_BINARY, OcrLanguageProfile::default());

    let result = strategy.attempt(&image_document(b"\x89PNG")).await;

    assert!(matches!(result, Err(StrategyError::Unavailable(_))));
}

#[tokio::test]
async fn given_missing_binary_as_only_strategy_when_selecting_then_backend_unavailable() {
    let strategy = TesseractOcrStrategy::new(MISSING_BINARY, OcrLanguageProfile::default());
    let chain: Vec<Arc<dyn ExtractionStrategy>> = vec![Arc::new(strategy)];
    let selector = ExtractionSelector::new(TEST_TIMEOUT).with_chain(Modality::Image, chain);

    let result = selector.extract(&image_document(b"\x89PNG")).await;

    assert_eq!(result.error_kind(), Some(ErrorKind::BackendUnavailable));
}

#[tokio::test]
async fn given_pdf_document_when_attempting_ocr_then_rejects_content_type() {
    let strategy = TesseractOcrStrategy::new(MISSING_BINARY, OcrLanguageProfile::default());

    let result = strategy.attempt(&pdf_document(b"%PDF")).await;

    assert!(matches!(result, Err(StrategyError::UnsupportedContentType(_))));
}

#[test]
fn given_language_subset_when_building_strategy_then_profile_is_kept() {
    let strategy =
        TesseractOcrStrategy::new("tesseract", OcrLanguageProfile::from_codes(&["hi", "en"]));

    assert_eq!(strategy.profile().as_arg(), "hin+eng");
    assert_eq!(strategy.kind(), StrategyKind::Ocr);
}
