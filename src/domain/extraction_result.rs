use super::error_kind::ErrorKind;

/// Outcome of one extraction request.
///
/// `Success::text` is never empty once it leaves the orchestrator: a result
/// that normalizes to nothing is turned into `Failure { NoTextFound }`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionResult {
    Success {
        text: String,
        page_count: u32,
        confidence: Option<f32>,
        word_count: Option<usize>,
    },
    Failure {
        kind: ErrorKind,
        message: String,
        details: Option<String>,
    },
}

impl ExtractionResult {
    pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn failure_with_details(
        kind: ErrorKind,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text, .. } => Some(text),
            Self::Failure { .. } => None,
        }
    }
}
