mod document;
mod document_id;
mod error_kind;
mod extraction_result;
mod language;
mod normalization;

pub use document::{ContentType, Modality, UploadedDocument};
pub use document_id::DocumentId;
pub use error_kind::ErrorKind;
pub use extraction_result::ExtractionResult;
pub use language::{
    DEFAULT_OCR_LANGUAGES, LANGUAGES, Language, OcrLanguageProfile, find_language,
};
pub use normalization::{CharacterFilter, NormalizationRule, TextNormalizer};
