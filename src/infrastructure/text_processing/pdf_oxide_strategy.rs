use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionStrategy, RawExtraction, StrategyError, StrategyKind};
use crate::domain::{ContentType, UploadedDocument};

use super::blocking::run_isolated;

/// Extraction through `pdf_oxide`, which only opens documents from a path.
#[derive(Debug, Default)]
pub struct PdfOxideStrategy;

impl PdfOxideStrategy {
    pub fn new() -> Self {
        Self
    }

    fn extract(data: &[u8]) -> Result<RawExtraction, StrategyError> {
        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| StrategyError::Failed(format!("failed to create temp file: {e}")))?;

        temp_file
            .write_all(data)
            .and_then(|()| temp_file.flush())
            .map_err(|e| StrategyError::Failed(format!("failed to write temp file: {e}")))?;

        Self::extract_path(temp_file.path())
    }

    fn extract_path(path: &Path) -> Result<RawExtraction, StrategyError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| StrategyError::Failed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| StrategyError::Malformed(format!("failed to read page count: {e}")))?;

        let mut text = String::new();

        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    tracing::debug!(page = page_index + 1, error = %e, "pdf_oxide page failed");
                }
            }
        }

        Ok(RawExtraction::text(text).with_page_count(page_count as u32))
    }
}

#[async_trait]
impl ExtractionStrategy for PdfOxideStrategy {
    fn name(&self) -> &'static str {
        "pdf_oxide"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::AlternateEntryPoint
    }

    #[tracing::instrument(
        skip(self, document),
        fields(document_id = %document.id.as_uuid(), filename = %document.filename)
    )]
    async fn attempt(&self, document: &UploadedDocument) -> Result<RawExtraction, StrategyError> {
        if document.content_type != ContentType::Pdf {
            return Err(StrategyError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let data = document.bytes.clone();
        run_isolated(self.name(), move || Self::extract(&data)).await
    }
}
