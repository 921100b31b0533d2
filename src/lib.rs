pub mod api;
pub mod config;
pub mod errors;
pub mod generators;
pub mod metrics;
pub mod models;
pub mod services;

use crate::config::AppConfig;
use crate::generators::RngSource;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub rng: RngSource,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let rng = RngSource::from_seed(config.rng_seed);
        Self {
            config,
            rng,
            metrics_handle: crate::metrics::init_metrics(),
        }
    }
}
