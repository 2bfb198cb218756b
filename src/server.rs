//! HTTP server initialization and runtime setup.
//!
//! Wires the configured store and host probe into the link service and runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::LinkService;
use crate::config::{Config, DnsCheck, StoreBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::dns::{DnsProbe, HostProbe, NullProbe};
use crate::infrastructure::persistence::{MemoryLinkRepository, RedisLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link store (in-memory, or Redis when configured)
/// - Host resolution probe
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The redis backend is selected and the connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn LinkRepository> = match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Store: in-memory");
            Arc::new(MemoryLinkRepository::new())
        }
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("STORE_BACKEND is 'redis' but no Redis URL is configured")?;
            let op_timeout = Duration::from_millis(config.store_timeout_ms);
            let repository = RedisLinkRepository::connect(redis_url, op_timeout)
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Store: redis");
            Arc::new(repository)
        }
    };

    let host_probe: Arc<dyn HostProbe> = match config.dns_check {
        DnsCheck::Enabled => Arc::new(DnsProbe::new()),
        DnsCheck::Disabled => Arc::new(NullProbe::new()),
    };

    let link_service = Arc::new(LinkService::new(repository, host_probe));
    let state = AppState::new(link_service, config.store_backend);

    let app = app_router(state, &config.public_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Completes when the process receives a shutdown signal.
///
/// On Unix this waits for SIGTERM or SIGINT; elsewhere only for Ctrl+C.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down"),
            _ = sigint.recv() => tracing::info!("Received SIGINT, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to wait for Ctrl+C");
        tracing::info!("Received Ctrl+C, shutting down");
    }
}
