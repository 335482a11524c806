use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::domain::{LANGUAGES, Language};
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub languages: &'static [Language],
    pub ocr_enabled: bool,
    pub ocr_profile: String,
}

pub async fn languages_handler(State(state): State<AppState>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: LANGUAGES,
        ocr_enabled: state.settings.extraction.image.enabled,
        ocr_profile: state.ocr_profile.as_arg(),
    })
}
