use async_trait::async_trait;

use crate::application::ports::{ExtractionStrategy, RawExtraction, StrategyError, StrategyKind};
use crate::domain::{ContentType, UploadedDocument};

use super::blocking::run_isolated;

/// Whole-buffer extraction through `pdf-extract` in a single call.
#[derive(Debug, Default)]
pub struct PdfExtractStrategy;

impl PdfExtractStrategy {
    pub fn new() -> Self {
        Self
    }

    fn extract(data: &[u8]) -> Result<RawExtraction, StrategyError> {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| StrategyError::Failed(format!("pdf-extract: {e}")))?;

        // The library does not report pages; count them from the page tree.
        let page_count = lopdf::Document::load_mem(data)
            .ok()
            .map(|doc| doc.get_pages().len() as u32);

        Ok(RawExtraction {
            text,
            page_count,
            ..RawExtraction::default()
        })
    }
}

#[async_trait]
impl ExtractionStrategy for PdfExtractStrategy {
    fn name(&self) -> &'static str {
        "pdf_extract"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::PrimaryLibraryCall
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
