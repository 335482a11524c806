use std::fmt;

/// Why an extraction request failed. Drives both the HTTP status and the
/// user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidType,
    TooLarge,
    EmptyPayload,
    NoTextFound,
    ExtractionExhausted,
    BackendUnavailable,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidType => "INVALID_TYPE",
            ErrorKind::TooLarge => "TOO_LARGE",
            ErrorKind::EmptyPayload => "EMPTY_PAYLOAD",
            ErrorKind::NoTextFound => "NO_TEXT_FOUND",
            ErrorKind::ExtractionExhausted => "EXTRACTION_EXHAUSTED",
            ErrorKind::BackendUnavailable => "BACKEND_UNAVAILABLE",
        }
    }

    /// Caller-input problems map to 400, backend problems to 500.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidType
                | ErrorKind::TooLarge
                | ErrorKind::EmptyPayload
                | ErrorKind::NoTextFound
        )
    }

    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
