use anuvadakah::application::ports::StrategyKind;
use anuvadakah::domain::{CharacterFilter, ExtractionResult, Modality, TextNormalizer};
use anuvadakah::infrastructure::text_processing::{
    PDF_STRATEGY_ORDER, StrategyFactory, StrategyFactoryError,
};
use anuvadakah::presentation::config::{
    ExtractionSettings, ImageExtractionSettings, PdfExtractionSettings,
};
use bytes::Bytes;

use crate::helpers::pdf_with_pages;

fn kinds(settings: &PdfExtractionSettings) -> Vec<StrategyKind> {
    StrategyFactory::pdf_chain(settings)
        .unwrap()
        .iter()
        .map(|s| s.kind())
        .collect()
}

#[test]
fn given_default_settings_when_building_pdf_chain_then_uses_fixed_priority() {
    let chain = StrategyFactory::pdf_chain(&PdfExtractionSettings::default()).unwrap();

    let names: Vec<&str> = chain.iter().map(|s| s.name()).collect();

    assert_eq!(names, vec!["pdf_extract", "pdf_oxide", "lopdf_pages"]);
    assert_eq!(kinds(&PdfExtractionSettings::default()), PDF_STRATEGY_ORDER.to_vec());
}

#[test]
fn given_reordered_subset_when_building_pdf_chain_then_priority_is_not_changed() {
    let settings = PdfExtractionSettings {
        strategies: vec![
            StrategyKind::PageByPageFallback,
            StrategyKind::PrimaryLibraryCall,
        ],
        character_filter: CharacterFilter::PreserveScripts,
    };

    assert_eq!(
        kinds(&settings),
        vec![
            StrategyKind::PrimaryLibraryCall,
            StrategyKind::PageByPageFallback
        ]
    );
}

#[test]
fn given_ocr_listed_for_pdf_when_building_chain_then_rejected() {
    let settings = PdfExtractionSettings {
        strategies: vec![StrategyKind::Ocr],
        character_filter: CharacterFilter::PreserveScripts,
    };

    let result = StrategyFactory::pdf_chain(&settings);

    assert!(matches!(
        result,
        Err(StrategyFactoryError::UnsupportedForModality {
            kind: StrategyKind::Ocr,
            modality: Modality::Pdf,
        })
    ));
}

#[test]
fn given_image_extraction_disabled_when_building_chain_then_chain_is_empty() {
    let settings = ImageExtractionSettings {
        enabled: false,
        ..ImageExtractionSettings::default()
    };

    assert!(StrategyFactory::image_chain(&settings).unwrap().is_empty());
}

#[test]
fn given_blank_tesseract_command_when_building_chain_then_rejected() {
    let settings = ImageExtractionSettings {
        tesseract_cmd: "  ".to_string(),
        ..ImageExtractionSettings::default()
    };

    assert!(matches!(
        StrategyFactory::image_chain(&settings),
        Err(StrategyFactoryError::MissingTesseractCommand)
    ));
}

#[test]
fn given_default_settings_when_building_service_then_each_modality_has_its_chain() {
    let settings = ExtractionSettings {
        image: ImageExtractionSettings {
            character_filter: CharacterFilter::AsciiOnly,
            ..ImageExtractionSettings::default()
        },
        ..ExtractionSettings::default()
    };

    let service = StrategyFactory::build_service(&settings).unwrap();

    assert_eq!(service.selector().chain(Modality::Pdf).len(), 3);
    let image_chain = service.selector().chain(Modality::Image);
    assert_eq!(image_chain.len(), 1);
    assert_eq!(image_chain[0].kind(), StrategyKind::Ocr);
    assert_eq!(
        service.normalizer(Modality::Image),
        TextNormalizer::new(CharacterFilter::AsciiOnly)
    );
    assert_eq!(service.normalizer(Modality::Pdf), TextNormalizer::default());
}

#[test]
fn given_configured_timeout_and_cap_when_building_service_then_both_are_applied() {
    let settings = ExtractionSettings {
        max_upload_bytes: 2 * 1024 * 1024,
        attempt_timeout_secs: 5,
        ..ExtractionSettings::default()
    };

    let service = StrategyFactory::build_service(&settings).unwrap();

    assert_eq!(service.loader().max_upload_bytes(), 2 * 1024 * 1024);
    assert_eq!(service.selector().attempt_timeout().as_secs(), 5);
}

#[tokio::test]
async fn given_default_service_when_extracting_generated_pdf_then_returns_normalized_text() {
    let service = StrategyFactory::build_service(&ExtractionSettings::default()).unwrap();
    let pdf = pdf_with_pages(&[&["Hello", "World"], &["Foo"]]);
    let size = pdf.len() as u64;

    let result = service
        .extract(
            Bytes::from(pdf),
            "application/pdf",
            size,
            "two-pages.pdf".to_string(),
            Modality::Pdf,
        )
        .await;

    assert_eq!(
        result,
        ExtractionResult::Success {
            text: "Hello World Foo".to_string(),
            page_count: 2,
            confidence: None,
            word_count: None,
        }
    );
}
