//! playlist-api - Playlist dataset HTTP service
//!
//! Loads the column-oriented playlist document once at startup, normalizes
//! it into an in-memory song table and serves paginated listing, title
//! search, rating updates, statistics and CSV export over HTTP.

use anyhow::{Context, Result};
use clap::Parser;
use playlist_common::config::{ServerConfig, TomlConfig};
use playlist_common::{export, normalize, SongStore};
use playlist_api::cli::{Cli, Command};
use playlist_api::{build_router, cors_layer, AppState};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is read before tracing so its log level can apply
    let toml = TomlConfig::load_optional(cli.config.as_deref())?;
    let config = ServerConfig::resolve(cli.overrides(), toml)?;

    init_tracing(&config.log_level);

    info!("Starting playlist-api v{}", env!("CARGO_PKG_VERSION"));
    match &cli.config {
        Some(path) if path.exists() => info!("Config file: {}", path.display()),
        Some(path) => warn!("Config file {} not found, using defaults", path.display()),
        None => info!("No config file given, using defaults"),
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Export { output } => {
            let table = normalize::load_table(&config.data_path)
                .with_context(|| format!("Failed to load {}", config.data_path.display()))?;
            export::write_csv(&table, &output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            Ok(())
        }
    }
}

/// Load the table, then serve until shutdown
async fn serve(config: ServerConfig) -> Result<()> {
    info!("Data path: {}", config.data_path.display());

    // No traffic is accepted until the table is loaded
    let store = match SongStore::load(&config.data_path) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load playlist data: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(store);
    let app = build_router(state)
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    info!("playlist-api listening on http://{}", address);
    info!("Health check: http://{}/health", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured level applies to this service
fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "playlist_api={level},playlist_common={level},tower_http={level}",
            level = level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
