use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::metrics;

/// One dashboard view and the endpoint that feeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollTarget {
    GameMetrics,
    Transactions,
    TokenTransfers,
    Leaderboards,
    Analytics,
}

impl PollTarget {
    pub const ALL: [PollTarget; 5] = [
        PollTarget::GameMetrics,
        PollTarget::Transactions,
        PollTarget::TokenTransfers,
        PollTarget::Leaderboards,
        PollTarget::Analytics,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            PollTarget::GameMetrics => "game-metrics",
            PollTarget::Transactions => "transactions",
            PollTarget::TokenTransfers => "token-transfers",
            PollTarget::Leaderboards => "leaderboards",
            PollTarget::Analytics => "analytics",
        }
    }

    /// Refresh period of the matching dashboard view.
    pub fn default_interval(&self) -> Duration {
        match self {
            PollTarget::GameMetrics | PollTarget::Transactions => Duration::from_secs(30),
            PollTarget::TokenTransfers | PollTarget::Leaderboards => Duration::from_secs(45),
            PollTarget::Analytics => Duration::from_secs(60),
        }
    }

    /// Top-level keys every successful response must carry.
    pub fn envelope_keys(&self) -> &'static [&'static str] {
        match self {
            PollTarget::GameMetrics => &["metrics", "contract_address", "filter_address", "generated_at"],
            PollTarget::Transactions => &["transactions", "total", "contract_address", "filter_address"],
            PollTarget::TokenTransfers => &["transfers", "total", "contract_address", "filter_address"],
            PollTarget::Leaderboards => &["leaderboards", "contract_address", "filter_address", "generated_at"],
            PollTarget::Analytics => &["analytics", "contract_address", "filter_address", "generated_at"],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(String),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{target} response missing `{key}`")]
    MissingKey { target: &'static str, key: &'static str },
}

/// What one successful poll saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSummary {
    pub target: PollTarget,
    /// Rows across all lists in the payload.
    pub records: usize,
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub base_url: String,
    pub contract: String,
    pub filter_address: String,
    pub schedule: Vec<(PollTarget, Duration)>,
}

impl PollerConfig {
    pub fn new(
        base_url: impl Into<String>,
        contract: impl Into<String>,
        filter_address: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            contract: contract.into(),
            filter_address: filter_address.into(),
            schedule: PollTarget::ALL
                .iter()
                .map(|t| (*t, t.default_interval()))
                .collect(),
        }
    }

    /// Same period for every target.
    pub fn with_uniform_interval(mut self, period: Duration) -> Self {
        for entry in &mut self.schedule {
            entry.1 = period;
        }
        self
    }
}

#[derive(Debug, Default)]
struct PollCounters {
    successes: AtomicU64,
    failures: AtomicU64,
    /// Unix millis of the last success, 0 if none yet.
    last_success_ms: AtomicI64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollStats {
    pub target: PollTarget,
    pub successes: u64,
    pub failures: u64,
    pub last_success: Option<DateTime<Utc>>,
}

/// Owns the poll tasks. Dropping it without calling `shutdown` still stops
/// them at their next await point.
pub struct PollerHandle {
    shutdown_tx: watch::Sender<bool>,
    paused: Arc<AtomicBool>,
    counters: Vec<(PollTarget, Arc<PollCounters>)>,
    tasks: Vec<JoinHandle<()>>,
}

impl PollerHandle {
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
        tracing::info!("Dashboard poller paused");
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::Relaxed);
        tracing::info!("Dashboard poller resumed");
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn stats(&self) -> Vec<PollStats> {
        self.counters
            .iter()
            .map(|(target, c)| {
                let ms = c.last_success_ms.load(Ordering::Relaxed);
                PollStats {
                    target: *target,
                    successes: c.successes.load(Ordering::Relaxed),
                    failures: c.failures.load(Ordering::Relaxed),
                    last_success: (ms > 0)
                        .then(|| DateTime::from_timestamp_millis(ms))
                        .flatten(),
                }
            })
            .collect()
    }

    /// Cancels every poll task, including requests in flight, and waits for them.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        for task in self.tasks {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Poll task ended abnormally");
            }
        }
        tracing::info!("Dashboard poller stopped");
    }
}

/// Start one task per scheduled target.
///
/// Each task awaits its own request before the next tick, so responses for a
/// target never arrive out of order. Missed ticks are delayed rather than burst.
pub fn spawn_dashboard_poller(client: Client, config: PollerConfig) -> PollerHandle {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let paused = Arc::new(AtomicBool::new(false));
    let config = Arc::new(config);

    let mut counters = Vec::with_capacity(config.schedule.len());
    let mut tasks = Vec::with_capacity(config.schedule.len());

    for &(target, period) in &config.schedule {
        let c = Arc::new(PollCounters::default());
        counters.push((target, c.clone()));

        tasks.push(tokio::spawn(run_target(
            client.clone(),
            config.clone(),
            target,
            period,
            paused.clone(),
            c,
            shutdown_rx.clone(),
        )));
    }

    tracing::info!(
        base_url = %config.base_url,
        targets = config.schedule.len(),
        "Dashboard poller started"
    );

    PollerHandle {
        shutdown_tx,
        paused,
        counters,
        tasks,
    }
}

async fn run_target(
    client: Client,
    config: Arc<PollerConfig>,
    target: PollTarget,
    period: Duration,
    paused: Arc<AtomicBool>,
    counters: Arc<PollCounters>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = shutdown.changed() => break,
        }

        if paused.load(Ordering::Relaxed) {
            tracing::debug!(endpoint = target.path(), "Poll skipped while paused");
            continue;
        }

        let fetch = fetch_once(
            &client,
            &config.base_url,
            target,
            &config.contract,
            &config.filter_address,
        );
        let result = tokio::select! {
            r = fetch => r,
            _ = shutdown.changed() => break,
        };

        match result {
            Ok(summary) => {
                counters.successes.fetch_add(1, Ordering::Relaxed);
                counters
                    .last_success_ms
                    .store(Utc::now().timestamp_millis(), Ordering::Relaxed);
                metrics::record_poll(target.path(), true);
                tracing::info!(
                    endpoint = target.path(),
                    records = summary.records,
                    "Dashboard poll succeeded"
                );
            }
            Err(e) => {
                counters.failures.fetch_add(1, Ordering::Relaxed);
                metrics::record_poll(target.path(), false);
                tracing::warn!(
                    endpoint = target.path(),
                    error = %e,
                    "Dashboard poll failed; retrying next tick"
                );
            }
        }
    }

    tracing::debug!(endpoint = target.path(), "Poll task exiting");
}

/// A single GET against `target`, checked for its envelope.
pub async fn fetch_once(
    client: &Client,
    base_url: &str,
    target: PollTarget,
    contract: &str,
    filter_address: &str,
) -> Result<PollSummary, PollError> {
    let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), target.path());
    let url = Url::parse_with_params(&endpoint, &[("contract", contract), ("from", filter_address)])
        .map_err(|e| PollError::Url(e.to_string()))?;

    let resp = client.get(url).send().await?;
    let status = resp.status();

    if !status.is_success() {
        let body: Value = resp.json().await.unwrap_or_default();
        return Err(PollError::Status {
            status: status.as_u16(),
            message: body["error"].as_str().unwrap_or_default().to_string(),
        });
    }

    let body: Value = resp.json().await?;
    summarize(target, &body)
}

fn summarize(target: PollTarget, body: &Value) -> Result<PollSummary, PollError> {
    for &key in target.envelope_keys() {
        if body.get(key).is_none() {
            return Err(PollError::MissingKey {
                target: target.path(),
                key,
            });
        }
    }

    let len = |v: &Value| v.as_array().map_or(0, |a| a.len());
    let records = match target {
        PollTarget::Transactions => len(&body["transactions"]),
        PollTarget::TokenTransfers => len(&body["transfers"]),
        PollTarget::Analytics => len(&body["analytics"]["dailyTransactions"]),
        PollTarget::GameMetrics => len(&body["metrics"]["topPlayers"]),
        PollTarget::Leaderboards => body["leaderboards"]
            .as_object()
            .map_or(0, |boards| boards.values().map(len).sum()),
    };

    Ok(PollSummary { target, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_intervals() {
        assert_eq!(PollTarget::GameMetrics.default_interval(), Duration::from_secs(30));
        assert_eq!(PollTarget::Transactions.default_interval(), Duration::from_secs(30));
        assert_eq!(PollTarget::TokenTransfers.default_interval(), Duration::from_secs(45));
        assert_eq!(PollTarget::Leaderboards.default_interval(), Duration::from_secs(45));
        assert_eq!(PollTarget::Analytics.default_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_summarize_counts_rows() {
        let body = json!({
            "transactions": [{}, {}, {}],
            "total": 3,
            "contract_address": "sim_abc",
            "filter_address": "0xdead",
        });
        let summary = summarize(PollTarget::Transactions, &body).unwrap();
        assert_eq!(summary.records, 3);
    }

    #[test]
    fn test_summarize_sums_leaderboards() {
        let body = json!({
            "leaderboards": { "topPlayers": [{}, {}], "rising": [{}], "lastUpdated": "x" },
            "contract_address": "sim_abc",
            "filter_address": "0xdead",
            "generated_at": "x",
        });
        let summary = summarize(PollTarget::Leaderboards, &body).unwrap();
        assert_eq!(summary.records, 3);
    }

    #[test]
    fn test_summarize_rejects_missing_key() {
        let body = json!({ "transfers": [], "total": 0, "contract_address": "sim_abc" });
        let err = summarize(PollTarget::TokenTransfers, &body).unwrap_err();
        assert!(matches!(
            err,
            PollError::MissingKey { key: "filter_address", .. }
        ));
    }

    #[test]
    fn test_uniform_interval_applies_to_all_targets() {
        let config = PollerConfig::new("http://localhost", "sim_abc", "0xdead")
            .with_uniform_interval(Duration::from_millis(10));
        assert_eq!(config.schedule.len(), 5);
        assert!(config
            .schedule
            .iter()
            .all(|(_, d)| *d == Duration::from_millis(10)));
    }
}
