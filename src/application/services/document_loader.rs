use bytes::Bytes;

use crate::domain::{ContentType, ErrorKind, Modality, UploadedDocument};

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// User-facing wording for an upload over `limit` bytes.
pub fn size_limit_message(limit: u64) -> String {
    format!("File size exceeds {}MB limit", limit / (1024 * 1024))
}

/// Validates an upload before any extraction work is attempted.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    max_upload_bytes: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("content type {declared} is not accepted by the {modality} endpoint")]
    InvalidType { declared: String, modality: Modality },
    #[error("declared size {declared} exceeds the {limit} byte limit")]
    TooLarge { declared: u64, limit: u64 },
    #[error("upload is empty")]
    EmptyPayload,
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::InvalidType { .. } => ErrorKind::InvalidType,
            LoadError::TooLarge { .. } => ErrorKind::TooLarge,
            LoadError::EmptyPayload => ErrorKind::EmptyPayload,
        }
    }
}

impl DocumentLoader {
    pub fn new(max_upload_bytes: u64) -> Self {
        Self { max_upload_bytes }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    /// Checks type, then size, then emptiness. Never touches disk or network.
    pub fn load(
        &self,
        bytes: Bytes,
        declared_mime: &str,
        declared_size: u64,
        filename: String,
        modality: Modality,
    ) -> Result<UploadedDocument, LoadError> {
        let content_type = ContentType::from_mime(declared_mime)
            .filter(|ct| ct.modality() == modality)
            .ok_or_else(|| LoadError::InvalidType {
                declared: declared_mime.to_string(),
                modality,
            })?;

        if declared_size > self.max_upload_bytes {
            return Err(LoadError::TooLarge {
                declared: declared_size,
                limit: self.max_upload_bytes,
            });
        }

        if bytes.is_empty() {
            return Err(LoadError::EmptyPayload);
        }

        Ok(UploadedDocument::new(filename, content_type, bytes))
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}
