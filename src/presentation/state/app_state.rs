use std::sync::Arc;

use crate::application::services::ExtractionService;
use crate::domain::OcrLanguageProfile;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub ocr_profile: OcrLanguageProfile,
    pub settings: Settings,
}

impl AppState {
    pub fn new(extraction_service: ExtractionService, settings: Settings) -> Self {
        let ocr_profile = settings.extraction.image.ocr_profile();
        Self {
            extraction_service: Arc::new(extraction_service),
            ocr_profile,
            settings,
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.extraction_service.loader().max_upload_bytes()
    }
}
