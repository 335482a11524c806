mod document_loader;
mod extraction_selector;
mod extraction_service;

pub use document_loader::{
    DEFAULT_MAX_UPLOAD_BYTES, DocumentLoader, LoadError, size_limit_message,
};
pub use extraction_selector::{DEFAULT_ATTEMPT_TIMEOUT, ExtractionSelector};
pub use extraction_service::ExtractionService;
