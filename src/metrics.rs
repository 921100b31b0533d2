use std::sync::OnceLock;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub const API_REQUESTS: &str = "api_requests_total";
pub const API_VALIDATION_FAILURES: &str = "api_validation_failures_total";
pub const API_GENERATION_FAILURES: &str = "api_generation_failures_total";
pub const GENERATION_LATENCY: &str = "generation_latency_seconds";
pub const POLLER_FETCHES: &str = "poller_fetches_total";

const ENDPOINTS: [&str; 5] = [
    "analytics",
    "game-metrics",
    "leaderboards",
    "token-transfers",
    "transactions",
];

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus exporter and register all application metrics.
///
/// Only one recorder can exist per process; later calls return the handle
/// created by the first.
pub fn init_metrics() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let handle = match PrometheusBuilder::new().install_recorder() {
                Ok(handle) => handle,
                Err(e) => {
                    // Another recorder owns the global slot; render from a detached one.
                    tracing::warn!(error = %e, "Prometheus recorder already installed");
                    PrometheusBuilder::new().build_recorder().handle()
                }
            };

            for endpoint in ENDPOINTS {
                counter!(API_REQUESTS, "endpoint" => endpoint).absolute(0);
                counter!(API_VALIDATION_FAILURES, "endpoint" => endpoint).absolute(0);
                counter!(API_GENERATION_FAILURES, "endpoint" => endpoint).absolute(0);
            }

            handle
        })
        .clone()
}

pub fn record_request(endpoint: &'static str) {
    counter!(API_REQUESTS, "endpoint" => endpoint).increment(1);
}

pub fn record_validation_failure(endpoint: &'static str) {
    counter!(API_VALIDATION_FAILURES, "endpoint" => endpoint).increment(1);
}

pub fn record_generation(endpoint: &'static str, seconds: f64, ok: bool) {
    histogram!(GENERATION_LATENCY, "endpoint" => endpoint).record(seconds);
    if !ok {
        counter!(API_GENERATION_FAILURES, "endpoint" => endpoint).increment(1);
    }
}

pub fn record_poll(endpoint: &'static str, ok: bool) {
    let outcome = if ok { "success" } else { "failure" };
    counter!(POLLER_FETCHES, "endpoint" => endpoint, "outcome" => outcome).increment(1);
}
