use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ExtractionStrategy, StrategyKind};
use crate::application::services::{DocumentLoader, ExtractionSelector, ExtractionService};
use crate::domain::{Modality, TextNormalizer};
use crate::presentation::config::{
    ExtractionSettings, ImageExtractionSettings, PdfExtractionSettings,
};

use super::lopdf_page_strategy::LopdfPageStrategy;
use super::pdf_extract_strategy::PdfExtractStrategy;
use super::pdf_oxide_strategy::PdfOxideStrategy;
use super::tesseract_ocr_strategy::TesseractOcrStrategy;

/// Fixed PDF priority. Configuration may leave entries out but never reorders.
pub const PDF_STRATEGY_ORDER: [StrategyKind; 3] = [
    StrategyKind::PrimaryLibraryCall,
    StrategyKind::AlternateEntryPoint,
    StrategyKind::PageByPageFallback,
];

#[derive(Debug, thiserror::Error)]
pub enum StrategyFactoryError {
    #[error("strategy {kind} cannot extract {modality} documents")]
    UnsupportedForModality {
        kind: StrategyKind,
        modality: Modality,
    },
    #[error("tesseract_cmd is required when image extraction is enabled")]
    MissingTesseractCommand,
}

pub struct StrategyFactory;

impl StrategyFactory {
    pub fn pdf_chain(
        settings: &PdfExtractionSettings,
    ) -> Result<Vec<Arc<dyn ExtractionStrategy>>, StrategyFactoryError> {
        if let Some(kind) = settings
            .strategies
            .iter()
            .find(|kind| !PDF_STRATEGY_ORDER.contains(kind))
        {
            return Err(StrategyFactoryError::UnsupportedForModality {
                kind: *kind,
                modality: Modality::Pdf,
            });
        }

        let chain: Vec<Arc<dyn ExtractionStrategy>> = PDF_STRATEGY_ORDER
            .iter()
            .filter(|kind| settings.strategies.contains(kind))
            .filter_map(|kind| Self::pdf_strategy(*kind))
            .collect();

        let configured: Vec<StrategyKind> = chain.iter().map(|s| s.kind()).collect();
        if configured != settings.strategies {
            tracing::warn!(
                configured = ?settings.strategies,
                effective = ?configured,
                "PDF strategy list normalized to fixed priority order"
            );
        }

        tracing::info!(strategies = ?configured, "PDF extraction chain ready");
        Ok(chain)
    }

    fn pdf_strategy(kind: StrategyKind) -> Option<Arc<dyn ExtractionStrategy>> {
        match kind {
            StrategyKind::PrimaryLibraryCall => Some(Arc::new(PdfExtractStrategy::new())),
            StrategyKind::AlternateEntryPoint => Some(Arc::new(PdfOxideStrategy::new())),
            StrategyKind::PageByPageFallback => Some(Arc::new(LopdfPageStrategy::new())),
            StrategyKind::Ocr => None,
        }
    }

    pub fn image_chain(
        settings: &ImageExtractionSettings,
    ) -> Result<Vec<Arc<dyn ExtractionStrategy>>, StrategyFactoryError> {
        if !settings.enabled {
            tracing::info!("Image extraction disabled");
            return Ok(Vec::new());
        }

        let command = settings.tesseract_cmd.trim();
        if command.is_empty() {
            return Err(StrategyFactoryError::MissingTesseractCommand);
        }

        let profile = settings.ocr_profile();

        tracing::info!(command, languages = %profile.as_arg(), "OCR extraction chain ready");
        Ok(vec![Arc::new(TesseractOcrStrategy::new(command, profile))])
    }

    pub fn build_service(
        settings: &ExtractionSettings,
    ) -> Result<ExtractionService, StrategyFactoryError> {
        let selector = ExtractionSelector::new(Duration::from_secs(settings.attempt_timeout_secs))
            .with_chain(Modality::Pdf, Self::pdf_chain(&settings.pdf)?)
            .with_chain(Modality::Image, Self::image_chain(&settings.image)?);

        let normalizers = HashMap::from([
            (
                Modality::Pdf,
                TextNormalizer::new(settings.pdf.character_filter),
            ),
            (
                Modality::Image,
                TextNormalizer::new(settings.image.character_filter),
            ),
        ]);

        Ok(ExtractionService::new(
            DocumentLoader::new(settings.max_upload_bytes),
            selector,
            normalizers,
        ))
    }
}
