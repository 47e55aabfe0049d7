use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pennant::{
    AppConfig, AppState, CachedFeed, FeedClient, PennantError, PredictionService, Result,
};

#[derive(Parser, Debug)]
#[command(name = "pennant", version, about = "MLB prediction serving API")]
struct Cli {
    /// Configuration directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override the configured server port
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Force JSON formatted logs regardless of config
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config_dir)?;
    init_logging(&config, cli.log_json);

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!("config: {e}");
        }
        return Err(PennantError::Internal(format!(
            "invalid configuration ({} problems)",
            errors.len()
        )));
    }

    let feed = FeedClient::new(
        &config.upstream.base_url,
        Duration::from_secs(config.upstream.request_timeout_secs),
    )?;
    let source = Arc::new(CachedFeed::new(
        feed,
        Duration::from_secs(config.cache.ttl_secs),
    ));
    let service = Arc::new(PredictionService::new(source));
    let state = AppState::new(service);
    let app = pennant::create_router(state);

    let port = cli.port.unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", config.server.host, port)
        .parse()
        .map_err(|e| PennantError::Internal(format!("invalid bind address: {e}")))?;

    info!(upstream = %config.upstream.base_url, "Starting prediction API on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

fn init_logging(config: &AppConfig, force_json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},pennant=debug", config.logging.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if config.logging.json || force_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
