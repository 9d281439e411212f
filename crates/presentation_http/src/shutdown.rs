//! Graceful shutdown
//!
//! The server stops accepting connections on SIGINT/SIGTERM and is given a
//! bounded window to finish in-flight requests. Whatever is still running
//! when the window closes is dropped.

use std::{
    future::IntoFuture,
    io,
    sync::Arc,
    time::Duration,
};

use tokio::{signal, sync::Notify};
use tracing::{info, warn};

/// Wait for SIGINT or SIGTERM, then wake `drain_started`.
///
/// Intended as the future passed to `with_graceful_shutdown`.
pub async fn shutdown_signal(drain_started: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    // notify_one stores a permit, so a late waiter still sees it
    drain_started.notify_one();
}

/// Drive `server` to completion, but once `drain_started` fires allow it
/// at most `timeout` to finish.
///
/// Returns the server's own result when it completes in time, `Ok(())`
/// when the drain window expires.
pub async fn run_until_drained<S>(
    server: S,
    drain_started: Arc<Notify>,
    timeout: Duration,
) -> io::Result<()>
where
    S: IntoFuture<Output = io::Result<()>>,
{
    let server = server.into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        () = drain_started.notified() => {},
    }

    info!("⏳ Waiting up to {:?} for connections to close...", timeout);

    if let Ok(result) = tokio::time::timeout(timeout, server).await {
        result
    } else {
        warn!(
            timeout_secs = timeout.as_secs(),
            "Shutdown timeout elapsed, dropping remaining connections"
        );
        Ok(())
    }
}
