use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::UploadedDocument;

/// One way of turning document bytes into raw text.
///
/// Implementations must be stateless across requests: a single instance is
/// built at startup and shared by every request.
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn kind(&self) -> StrategyKind;

    async fn attempt(&self, document: &UploadedDocument) -> Result<RawExtraction, StrategyError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    PrimaryLibraryCall,
    AlternateEntryPoint,
    PageByPageFallback,
    Ocr,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::PrimaryLibraryCall => "primary_library_call",
            StrategyKind::AlternateEntryPoint => "alternate_entry_point",
            StrategyKind::PageByPageFallback => "page_by_page_fallback",
            StrategyKind::Ocr => "ocr",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Text as produced by a strategy, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawExtraction {
    pub text: String,
    pub page_count: Option<u32>,
    pub confidence: Option<f32>,
    pub word_count: Option<usize>,
}

impl RawExtraction {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = Some(page_count);
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("extraction failed: {0}")]
    Failed(String),
    #[error("malformed output: {0}")]
    Malformed(String),
    #[error("backend panicked: {0}")]
    Panicked(String),
    #[error("timed out after {0:?}")]
    TimedOut(Duration),
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
}

impl StrategyError {
    /// Turns a caught panic payload into a strategy failure.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        StrategyError::Panicked(message)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, StrategyError::Unavailable(_))
    }
}
