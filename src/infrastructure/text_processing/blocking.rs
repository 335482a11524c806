use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::application::ports::StrategyError;

/// Runs a blocking parser off the async runtime. A panic inside the parser
/// becomes `StrategyError::Panicked` instead of tearing down the worker.
pub(super) async fn run_isolated<T, F>(label: &'static str, job: F) -> Result<T, StrategyError>
where
    F: FnOnce() -> Result<T, StrategyError> + Send + 'static,
    T: Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(move || catch_unwind(AssertUnwindSafe(job)))
        .await
        .map_err(|e| StrategyError::Failed(format!("{label}: task join error: {e}")))?;

    match outcome {
        Ok(result) => result,
        Err(panic) => {
            tracing::warn!(backend = label, "Extraction backend panicked");
            Err(StrategyError::from_panic(panic.as_ref()))
        }
    }
}
