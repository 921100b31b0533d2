pub mod analytics;
pub mod game_metrics;
pub mod health;
pub mod leaderboards;
pub mod metrics;
pub mod token_transfers;
pub mod transactions;

use std::time::Instant;

use crate::errors::AppError;
use crate::generators::GenerationError;

/// Runs a generator off the async workers. A generator error or panic becomes
/// a 500 for `resource`; nothing partial is ever returned.
pub(crate) async fn run_generator<T, F>(
    endpoint: &'static str,
    resource: &'static str,
    generate: F,
) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, GenerationError> + Send + 'static,
{
    let started = Instant::now();

    let outcome = match tokio::task::spawn_blocking(generate).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(AppError::generation(resource, e)),
        Err(e) => Err(AppError::generation(resource, e)),
    };

    crate::metrics::record_generation(endpoint, started.elapsed().as_secs_f64(), outcome.is_ok());
    outcome
}
