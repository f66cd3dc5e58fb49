#![forbid(unsafe_code)]

//! `mensaje-web` — greeting web service binary.
//!
//! Bootstraps configuration from the environment, initializes the
//! database schema, and serves the greeting page over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use mensaje_web::config::AppConfig;
use mensaje_web::display::DbMessageSource;
use mensaje_web::persistence::{db, schema};
use mensaje_web::web;
use mensaje_web::{AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "mensaje-web", about = "Greeting web service backed by MySQL", version, long_about = None)]
struct Cli {
    /// Override the HTTP port from the environment.
    #[arg(long)]
    port: Option<u16>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("mensaje-web server bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let mut config = AppConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    info!(host = %config.db.host, database = %config.db.database, "configuration loaded");

    // ── Initialize database ─────────────────────────────
    // Connector exhaustion here is fatal; a failed schema/seed step
    // only degrades the read path.
    let session = db::open_session(&config.db, config.retry).await?;
    match schema::ensure_ready(session).await {
        Ok(outcome) => info!(?outcome, "database initialized"),
        Err(err) => error!(error = %err, "database initialization failed; serving degraded"),
    }

    // ── Serve HTTP ──────────────────────────────────────
    let source: web::SharedSource = Arc::new(DbMessageSource::new(config.db.clone(), config.retry));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));

    let ct = CancellationToken::new();
    let server_ct = ct.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(err) = web::serve(addr, source, server_ct).await {
            error!(error = %err, "HTTP server failed");
        }
    });

    // ── Wait for shutdown signal ────────────────────────
    shutdown_signal().await;
    info!("shutdown signal received");
    ct.cancel();

    let _ = server_handle.await;
    info!("mensaje-web shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(error = %err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
