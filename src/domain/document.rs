use std::fmt;

use bytes::Bytes;

use super::document_id::DocumentId;

/// An upload that passed validation. Lives for one request only.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    pub bytes: Bytes,
    pub size_bytes: u64,
}

impl UploadedDocument {
    pub fn new(filename: String, content_type: ContentType, bytes: Bytes) -> Self {
        let size_bytes = bytes.len() as u64;
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            bytes,
            size_bytes,
        }
    }

    pub fn modality(&self) -> Modality {
        self.content_type.modality()
    }
}

/// The channel an upload arrives through. Each endpoint serves exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modality {
    Pdf,
    Image,
}

impl Modality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Pdf => "pdf",
            Modality::Image => "image",
        }
    }

    pub fn supported_types(&self) -> &'static [ContentType] {
        match self {
            Modality::Pdf => &[ContentType::Pdf],
            Modality::Image => &[
                ContentType::Jpeg,
                ContentType::Png,
                ContentType::Webp,
                ContentType::Bmp,
                ContentType::Tiff,
            ],
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Jpeg,
    Png,
    Webp,
    Bmp,
    Tiff,
}

impl ContentType {
    /// Parses a declared MIME type, ignoring parameters and letter case.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" => Some(Self::Pdf),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::Webp),
            "image/bmp" => Some(Self::Bmp),
            "image/tiff" => Some(Self::Tiff),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
        }
    }

    pub fn modality(&self) -> Modality {
        match self {
            Self::Pdf => Modality::Pdf,
            Self::Jpeg | Self::Png | Self::Webp | Self::Bmp | Self::Tiff => Modality::Image,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}
