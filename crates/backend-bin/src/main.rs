//! Tokio / Axum entry-point for the password validation server.
use anyhow::Context;
use clap::Parser;
use passgate_lib::{config::Settings, router, AppState};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Password strength validation server
#[derive(Parser, Debug)]
#[command(name = "passgate", version, about)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, default_value = passgate_lib::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Address to listen on, overrides `bind_addr`
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Log level used when RUST_LOG is unset, overrides `log_level`
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load_from(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;
    if let Some(bind) = args.bind {
        settings.bind_addr = bind;
    }
    if let Some(level) = args.log_level {
        settings.log_level = level;
        settings.validate()?;
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level.to_ascii_lowercase())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = settings.bind_addr;
    let state = AppState::with_settings(settings).context("failed to build password rules")?;
    let app = router::create_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received");
}
