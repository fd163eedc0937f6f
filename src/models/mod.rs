/// # Health Report Models
///
/// Response bodies for the liveness and detailed health endpoints.
///
/// - [`HealthResponse`]: static liveness metadata
/// - [`DetailedHealthResponse`]: either a [`DetailedHealthReport`] with host
///   utilization, or a [`HealthErrorReport`] when metrics cannot be read
///
/// [`HealthResponse`]: crate::models::health::HealthResponse
/// [`DetailedHealthResponse`]: crate::models::health::DetailedHealthResponse
/// [`DetailedHealthReport`]: crate::models::health::DetailedHealthReport
/// [`HealthErrorReport`]: crate::models::health::HealthErrorReport
pub mod health;

pub use health::{
    DetailedHealthReport, DetailedHealthResponse, HealthErrorReport, HealthResponse,
    HealthStatus, SystemInfo,
};
