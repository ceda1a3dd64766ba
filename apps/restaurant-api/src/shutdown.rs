use std::time::Duration;

use tokio::signal;

/// Resolves once SIGINT or SIGTERM arrives, letting the server stop
/// accepting connections and drain in-flight requests.
pub async fn shutdown_signal(drain_timeout: Duration) {
    let interrupt = signal::ctrl_c();

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
        result = interrupt => {
            result.expect("failed to install Ctrl+C handler");
            tracing::info!("received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }

    tracing::info!(drain_timeout_secs = drain_timeout.as_secs(), "draining connections");
}
