use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;

use crate::application::ports::{ExtractionStrategy, RawExtraction, StrategyError};
use crate::domain::{ErrorKind, ExtractionResult, Modality, UploadedDocument};

pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs the strategy chain for a document's modality, in order, until one
/// produces non-empty text.
pub struct ExtractionSelector {
    chains: HashMap<Modality, Vec<Arc<dyn ExtractionStrategy>>>,
    attempt_timeout: Duration,
}

impl ExtractionSelector {
    pub fn new(attempt_timeout: Duration) -> Self {
        Self {
            chains: HashMap::new(),
            attempt_timeout,
        }
    }

    /// Registers the ordered chain for a modality, replacing any earlier one.
    pub fn with_chain(
        mut self,
        modality: Modality,
        strategies: Vec<Arc<dyn ExtractionStrategy>>,
    ) -> Self {
        self.chains.insert(modality, strategies);
        self
    }

    pub fn chain(&self, modality: Modality) -> &[Arc<dyn ExtractionStrategy>] {
        self.chains.get(&modality).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    #[tracing::instrument(
        skip(self, document),
        fields(
            document_id = %document.id.as_uuid(),
            content_type = %document.content_type,
        )
    )]
    pub async fn extract(&self, document: &UploadedDocument) -> ExtractionResult {
        let modality = document.modality();
        let chain = self.chain(modality);
        let subject = subject(modality);

        if chain.is_empty() {
            tracing::error!(%modality, "No extraction strategies configured");
            return ExtractionResult::failure_with_details(
                ErrorKind::BackendUnavailable,
                format!("Failed to extract text from {subject}"),
                "no extraction strategies are configured",
            );
        }

        let mut all_unavailable = true;
        let mut last_error = String::new();

        for (position, strategy) in chain.iter().enumerate() {
            let name = strategy.name();

            match self.attempt(strategy.as_ref(), document).await {
                Ok(raw) if raw.text.trim().is_empty() => {
                    tracing::warn!(strategy = name, position, "Strategy returned empty text");
                    all_unavailable = false;
                    last_error = format!("{name}: no text returned");
                }
                Ok(raw) => {
                    tracing::info!(
                        strategy = name,
                        kind = %strategy.kind(),
                        position,
                        chars = raw.text.len(),
                        "Extraction strategy succeeded"
                    );
                    return into_success(raw);
                }
                Err(e) => {
                    tracing::warn!(strategy = name, position, error = %e, "Extraction strategy failed");
                    all_unavailable &= e.is_unavailable();
                    last_error = format!("{name}: {e}");
                }
            }
        }

        let kind = if all_unavailable {
            ErrorKind::BackendUnavailable
        } else {
            ErrorKind::ExtractionExhausted
        };

        tracing::error!(
            %kind,
            attempted = chain.len(),
            last_error = %last_error,
            "All extraction strategies failed"
        );

        ExtractionResult::failure_with_details(
            kind,
            format!("Failed to extract text from {subject}"),
            last_error,
        )
    }

    async fn attempt(
        &self,
        strategy: &dyn ExtractionStrategy,
        document: &UploadedDocument,
    ) -> Result<RawExtraction, StrategyError> {
        let guarded = AssertUnwindSafe(strategy.attempt(document)).catch_unwind();

        match tokio::time::timeout(self.attempt_timeout, guarded).await {
            Err(_) => Err(StrategyError::TimedOut(self.attempt_timeout)),
            Ok(Err(panic)) => Err(StrategyError::from_panic(panic.as_ref())),
            Ok(Ok(result)) => result,
        }
    }
}

fn into_success(raw: RawExtraction) -> ExtractionResult {
    ExtractionResult::Success {
        text: raw.text,
        page_count: raw.page_count.filter(|&n| n > 0).unwrap_or(1),
        confidence: raw.confidence,
        word_count: raw.word_count,
    }
}

pub(crate) fn subject(modality: Modality) -> &'static str {
    match modality {
        Modality::Pdf => "PDF",
        Modality::Image => "image",
    }
}
