//! Scheme Finder Server Entry Point

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use sahaj_seva_config::{load_settings_from, Settings};
use sahaj_seva_server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    // Missing files fall back to defaults; a file that fails to parse or
    // validate aborts startup
    let env = std::env::var("SAHAJ_SEVA_ENV").ok();
    let config = build_settings(CONFIG_DIR, env.as_deref())?;
    // Tracing not yet initialized, use eprintln for early logging
    eprintln!(
        "Loaded configuration from {}/ (env: {})",
        CONFIG_DIR,
        env.as_deref().unwrap_or("default")
    );

    init_tracing(&config);

    tracing::info!("Starting Sahaj Seva server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        catalog = %config.catalog.path,
        "Configuration loaded"
    );

    let host = config.server.host.clone();
    let port = config.server.port;

    // A broken catalog aborts startup; nothing is served from partial data
    let state = build_state(config)?;
    tracing::info!(
        schemes = state.scheme_count(),
        regions = state.states.len(),
        "Initialized application state"
    );

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

const CONFIG_DIR: &str = "config";

fn build_settings(config_dir: &str, env: Option<&str>) -> anyhow::Result<Settings> {
    load_settings_from(config_dir, env).with_context(|| {
        format!(
            "Invalid configuration in {}/ (env: {})",
            config_dir,
            env.unwrap_or("default")
        )
    })
}

fn build_state(config: Settings) -> anyhow::Result<AppState> {
    let catalog_path = config.catalog.path.clone();
    AppState::from_settings(config)
        .with_context(|| format!("Failed to initialize from catalog {}", catalog_path))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.observability.log_level.to_lowercase();
        format!("sahaj_seva={level},tower_http=debug").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
