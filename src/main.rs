use tweetle_analytics::api::router::create_router;
use tweetle_analytics::config::{AppConfig, LogFormat};
use tweetle_analytics::services::dashboard_poller::{spawn_dashboard_poller, PollerConfig};
use tweetle_analytics::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    let addr = config.bind_addr();
    let state = AppState::new(config.clone());

    match config.rng_seed {
        Some(seed) => tracing::info!(seed, "Mock generators seeded"),
        None => tracing::info!("Mock generators using fresh entropy per request"),
    }

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");

    // --- Dashboard poller: scheduled refresh of every view ---
    let poller = if config.poller_enabled {
        let poller_config = PollerConfig::new(
            config.poller_base_url.clone(),
            config.poller_contract.clone(),
            config.poller_filter_address.clone(),
        );
        Some(spawn_dashboard_poller(reqwest::Client::new(), poller_config))
    } else {
        tracing::info!("Dashboard poller disabled (POLLER_ENABLED=false)");
        None
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(poller) = poller {
        poller.shutdown().await;
    }
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}
