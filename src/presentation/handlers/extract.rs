use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::{Bytes, BytesMut};
use serde::Serialize;

use crate::application::services::size_limit_message;
use crate::domain::{ErrorKind, ExtractionResult, Modality};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExtractionResponse {
    pub success: bool,
    pub text: String,
    pub page_count: u32,
}

#[derive(Debug, Serialize)]
pub struct ImageExtractionResponse {
    pub success: bool,
    pub text: String,
    pub confidence: Option<f32>,
    pub words: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn pdf_extraction_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match multipart {
        Ok(multipart) => run_extraction(&state, multipart, Modality::Pdf).await,
        Err(rejection) => assemble(not_multipart(&rejection), Modality::Pdf),
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn image_extraction_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match multipart {
        Ok(multipart) => run_extraction(&state, multipart, Modality::Image).await,
        Err(rejection) => assemble(not_multipart(&rejection), Modality::Image),
    }
}

async fn run_extraction(
    state: &AppState,
    mut multipart: Multipart,
    modality: Modality,
) -> Response {
    let limit = state.max_upload_bytes();

    let upload = match read_file_field(&mut multipart, limit).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!(%modality, "Extraction request with no file");
            return assemble(
                ExtractionResult::failure(ErrorKind::EmptyPayload, "No file provided"),
                modality,
            );
        }
        Err(e) => return assemble(multipart_failure(&e, limit), modality),
    };

    tracing::debug!(
        filename = %upload.filename,
        content_type = %upload.content_type,
        received_bytes = upload.received,
        "File upload received"
    );

    let result = state
        .extraction_service
        .extract(
            upload.bytes,
            &upload.content_type,
            upload.received,
            upload.filename,
            modality,
        )
        .await;

    match &result {
        ExtractionResult::Success { text, .. } => {
            tracing::debug!(preview = %preview_text(text), "Returning extracted text");
        }
        ExtractionResult::Failure { kind, message, .. } => {
            tracing::info!(kind = %kind, error = %message, "Extraction request failed");
        }
    }

    assemble(result, modality)
}

struct FileUpload {
    filename: String,
    content_type: String,
    bytes: Bytes,
    received: u64,
}

/// Streams the `file` field and stops once it passes `limit`.
///
/// `received` keeps counting the chunk that crossed the limit, so the loader
/// sees a size above the cap and rejects it before any strategy runs.
async fn read_file_field(
    multipart: &mut Multipart,
    limit: u64,
) -> Result<Option<FileUpload>, MultipartError> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("unknown").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let mut buffer = BytesMut::new();
        let mut received: u64 = 0;

        while let Some(chunk) = field.chunk().await? {
            received += chunk.len() as u64;
            if received > limit {
                tracing::warn!(received, limit, "Upload over limit, stopped reading");
                break;
            }
            buffer.extend_from_slice(&chunk);
        }

        return Ok(Some(FileUpload {
            filename,
            content_type,
            bytes: buffer.freeze(),
            received,
        }));
    }

    Ok(None)
}

fn not_multipart(rejection: &MultipartRejection) -> ExtractionResult {
    tracing::warn!(error = %rejection.body_text(), "Request is not multipart/form-data");
    ExtractionResult::failure_with_details(
        ErrorKind::EmptyPayload,
        "No file provided",
        rejection.body_text(),
    )
}

fn multipart_failure(error: &MultipartError, limit: u64) -> ExtractionResult {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(error = %error, "Request body over transport limit");
        return ExtractionResult::failure_with_details(
            ErrorKind::TooLarge,
            size_limit_message(limit),
            error.body_text(),
        );
    }

    tracing::warn!(error = %error, "Failed to read multipart");
    ExtractionResult::failure_with_details(
        ErrorKind::EmptyPayload,
        "No file provided",
        error.body_text(),
    )
}

/// Maps a result onto the wire shape of the endpoint that produced it.
pub fn assemble(result: ExtractionResult, modality: Modality) -> Response {
    match result {
        ExtractionResult::Success {
            text,
            page_count,
            confidence,
            word_count,
        } => match modality {
            Modality::Pdf => (
                StatusCode::OK,
                Json(PdfExtractionResponse {
                    success: true,
                    text,
                    page_count,
                }),
            )
                .into_response(),
            Modality::Image => (
                StatusCode::OK,
                Json(ImageExtractionResponse {
                    success: true,
                    text,
                    confidence,
                    words: word_count,
                }),
            )
                .into_response(),
        },
        ExtractionResult::Failure {
            kind,
            message,
            details,
        } => {
            let status = StatusCode::from_u16(kind.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(ErrorResponse {
                    success: false,
                    error: message,
                    details,
                }),
            )
                .into_response()
        }
    }
}
