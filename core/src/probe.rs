//! Reachability check against the remote health endpoint.

use tracing::debug;

use crate::client::ApiClient;
use crate::config::FallbackConfig;
use crate::transport::Transport;

/// Probe `GET /health`, bounded by `fallback.probe_timeout`.
///
/// Returns true for any 2xx. Timeouts, connection failures and other
/// statuses all yield false. With fallback disabled the remote is assumed
/// available and no request is sent.
pub async fn check_availability<T>(transport: &T, client: &ApiClient, fallback: &FallbackConfig) -> bool
where
    T: Transport + ?Sized,
{
    if !fallback.enabled {
        return true;
    }

    // Bypasses `execute` so an unhealthy remote only logs at debug.
    let available = match tokio::time::timeout(fallback.probe_timeout, transport.send(client.build_health())).await {
        Ok(Ok(response)) => response.is_success(),
        Ok(Err(_)) | Err(_) => false,
    };
    debug!(base_url = client.base_url(), available, "Probed API availability");
    available
}
