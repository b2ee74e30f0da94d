//! OS signal handling.

use crate::lifecycle::shutdown::Shutdown;

/// Trigger the shutdown coordinator when Ctrl+C arrives.
pub fn listen_for_ctrl_c(shutdown: Shutdown) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Shutdown signal received");
                shutdown.trigger();
            }
            Err(error) => {
                tracing::error!(error = %error, "Failed to install Ctrl+C handler");
            }
        }
    });
}
