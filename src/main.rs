use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

mod api;
mod config;
mod error;
mod model;
mod state;

use config::Config;
use error::StartupError;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // When invoked as a container HEALTHCHECK, hit /healthz and exit immediately.
    // This avoids needing curl/wget in the image.
    if std::env::args().nth(1).as_deref() == Some("--healthcheck") {
        return healthcheck().await;
    }

    init_tracing();

    let config = Config::from_env().context("failed to read configuration")?;
    let addr = config.listen_addr();

    let listener = bind(addr).await?;
    info!(%addr, "lake-level-api listening");

    axum::serve(listener, app(Arc::new(AppState::default())))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("shutdown complete");
    Ok(())
}

/// `RUST_LOG` controls the filter; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lake_level_api=info,tower_http=warn".into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Bind the listener. Failure is fatal: it is logged here and the caller exits.
async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr).await.map_err(|source| {
        error!(%addr, error = %source, "failed to bind listener");
        StartupError::Bind { addr, source }
    })
}

/// Full application: routes plus request-ID and tracing middleware.
fn app(state: Arc<AppState>) -> Router {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http()
        .make_span_with(tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO));

    api::router(state)
        .layer(axum::middleware::from_fn(api::request_id::request_id_middleware))
        .layer(trace_layer)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

/// Lightweight healthcheck: GET /healthz and exit 0 on 2xx, 1 otherwise.
/// Invoked via `lake-level-api --healthcheck`.
async fn healthcheck() -> anyhow::Result<()> {
    let port = Config::from_env().unwrap_or_default().port;

    match probe(port).await {
        Ok(true) => std::process::exit(0),
        _ => std::process::exit(1),
    }
}

/// `Ok(true)` when the local `/healthz` answers with a success status.
async fn probe(port: u16) -> anyhow::Result<bool> {
    let url = format!("http://127.0.0.1:{port}/healthz");
    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("GET {url}"))?;
    Ok(resp.status().is_success())
}
