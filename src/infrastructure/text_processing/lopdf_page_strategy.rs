use async_trait::async_trait;
use lopdf::Document;

use crate::application::ports::{ExtractionStrategy, RawExtraction, StrategyError, StrategyKind};
use crate::domain::{ContentType, UploadedDocument};

use super::blocking::run_isolated;

const MAX_PAGES: usize = 4_096;

/// Loads the page tree with `lopdf` and pulls text one page at a time.
#[derive(Debug, Default)]
pub struct LopdfPageStrategy;

impl LopdfPageStrategy {
    pub fn new() -> Self {
        Self
    }

    fn extract(data: &[u8]) -> Result<RawExtraction, StrategyError> {
        let document = Document::load_mem(data)
            .map_err(|e| StrategyError::Failed(format!("failed to load PDF: {e}")))?;

        let pages = document.get_pages();
        if pages.is_empty() {
            return Err(StrategyError::Malformed("document has no pages".to_string()));
        }
        if pages.len() > MAX_PAGES {
            return Err(StrategyError::Failed(format!(
                "PDF has {} pages, limit is {MAX_PAGES}",
                pages.len()
            )));
        }

        // BTreeMap keys are page numbers, so iteration is already 1..=N.
        let page_texts = pages.keys().map(|&number| {
            document.extract_text(&[number]).unwrap_or_else(|e| {
                tracing::debug!(page = number, error = %e, "lopdf page failed");
                String::new()
            })
        });

        Ok(RawExtraction::text(join_pages(page_texts)).with_page_count(pages.len() as u32))
    }
}

/// Concatenates page texts, terminating each page with a newline.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        text.push_str(page);
        if !page.ends_with('\n') {
            text.push('\n');
        }
    }
    text
}

#[async_trait]
impl ExtractionStrategy for LopdfPageStrategy {
    fn name(&self) -> &'static str {
        "lopdf_pages"
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::PageByPageFallback
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
