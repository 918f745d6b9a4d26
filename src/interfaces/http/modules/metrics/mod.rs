//! Prometheus metrics endpoint and HTTP metrics middleware

pub mod handlers;
pub mod middleware;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub use handlers::*;
pub use middleware::http_metrics_middleware;

/// Install the process-wide Prometheus recorder, once.
///
/// The global recorder can only be set a single time per process; later
/// calls (or a failed install because another recorder is present) fall
/// back to a detached recorder whose handle renders an empty exposition.
pub fn install_prometheus_recorder() -> PrometheusHandle {
    use std::sync::OnceLock;
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                tracing::info!("📊 Prometheus metrics recorder installed");
                handle
            }
            Err(e) => {
                tracing::warn!("Prometheus recorder not installed: {}", e);
                PrometheusBuilder::new().build_recorder().handle()
            }
        })
        .clone()
}
