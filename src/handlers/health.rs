use crate::metrics::{MetricsError, MetricsSource};
use crate::models::health::{
    DetailedHealthReport, DetailedHealthResponse, HealthErrorReport, HealthResponse, SystemInfo,
};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// # Liveness Report
///
/// Builds the body of the basic health endpoint. Has no failure path.
pub fn liveness() -> HealthResponse {
    HealthResponse::ok()
}

/// # Detailed Health Report
///
/// Samples host metrics from `source` and labels them with `environment`.
///
/// This never fails: an error or panic inside the metrics source becomes a
/// [`HealthErrorReport`] whose `error_message` is the failure's description.
///
/// [`HealthErrorReport`]: crate::models::health::HealthErrorReport
pub fn detailed(source: &dyn MetricsSource, environment: &str) -> DetailedHealthResponse {
    match sample(source) {
        Ok(snapshot) => {
            tracing::debug!(
                cpu = snapshot.cpu_percent,
                memory = snapshot.memory_percent,
                "host metrics sampled"
            );
            DetailedHealthResponse::Healthy(DetailedHealthReport::new(SystemInfo {
                cpu_utilization_percent: snapshot.cpu_percent,
                memory_utilization_percent: snapshot.memory_percent,
                memory_available_bytes: snapshot.memory_available,
                environment: environment.to_string(),
            }))
        }
        Err(e) => {
            tracing::warn!(error = %e, "detailed health check degraded");
            DetailedHealthResponse::Degraded(HealthErrorReport::new(e.to_string()))
        }
    }
}

fn sample(source: &dyn MetricsSource) -> Result<crate::metrics::HostSnapshot, MetricsError> {
    catch_unwind(AssertUnwindSafe(|| source.snapshot())).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(MetricsError::Panicked(message))
    })
}
