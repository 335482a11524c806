use std::collections::HashMap;

use bytes::Bytes;

use crate::domain::{ErrorKind, ExtractionResult, Modality, TextNormalizer};

use super::document_loader::{DocumentLoader, LoadError, size_limit_message};
use super::extraction_selector::{ExtractionSelector, subject};

/// Loader, selector and normalizer wired into the single request path.
pub struct ExtractionService {
    loader: DocumentLoader,
    selector: ExtractionSelector,
    normalizers: HashMap<Modality, TextNormalizer>,
}

impl ExtractionService {
    pub fn new(
        loader: DocumentLoader,
        selector: ExtractionSelector,
        normalizers: HashMap<Modality, TextNormalizer>,
    ) -> Self {
        Self {
            loader,
            selector,
            normalizers,
        }
    }

    pub fn loader(&self) -> &DocumentLoader {
        &self.loader
    }

    pub fn selector(&self) -> &ExtractionSelector {
        &self.selector
    }

    pub fn normalizer(&self, modality: Modality) -> TextNormalizer {
        self.normalizers
            .get(&modality)
            .cloned()
            .unwrap_or_default()
    }

    #[tracing::instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    pub async fn extract(
        &self,
        bytes: Bytes,
        declared_mime: &str,
        declared_size: u64,
        filename: String,
        modality: Modality,
    ) -> ExtractionResult {
        let document = match self
            .loader
            .load(bytes, declared_mime, declared_size, filename, modality)
        {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(error = %e, "Upload rejected");
                return load_failure(&e, modality, self.loader.max_upload_bytes());
            }
        };

        tracing::debug!(
            document_id = %document.id.as_uuid(),
            size_bytes = document.size_bytes,
            "Upload accepted"
        );

        let (text, page_count, confidence, word_count) =
            match self.selector.extract(&document).await {
                ExtractionResult::Success {
                    text,
                    page_count,
                    confidence,
                    word_count,
                } => (text, page_count, confidence, word_count),
                failure => return failure,
            };

        let normalized = self.normalizer(modality).normalize(&text);

        if normalized.is_empty() {
            tracing::warn!(
                document_id = %document.id.as_uuid(),
                raw_chars = text.len(),
                "Extracted text was empty after normalization"
            );
            return ExtractionResult::failure(
                ErrorKind::NoTextFound,
                format!("No text could be extracted from {}", subject(modality)),
            );
        }

        tracing::info!(
            document_id = %document.id.as_uuid(),
            page_count,
            chars = normalized.len(),
            "Text extraction complete"
        );

        ExtractionResult::Success {
            text: normalized,
            page_count,
            confidence,
            word_count,
        }
    }
}

fn load_failure(error: &LoadError, modality: Modality, limit: u64) -> ExtractionResult {
    let message = match error {
        LoadError::InvalidType { .. } => match modality {
            Modality::Pdf => "Only PDF files are supported".to_string(),
            Modality::Image => {
                "Only image files (JPEG, PNG, WebP, BMP, TIFF) are supported".to_string()
            }
        },
        LoadError::TooLarge { .. } => size_limit_message(limit),
        LoadError::EmptyPayload => "File buffer is empty".to_string(),
    };

    ExtractionResult::failure_with_details(error.kind(), message, error.to_string())
}
