use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier reported in every successful health response.
pub const SERVICE_NAME: &str = "ai-service";

/// Semantic version reported in every successful health response.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Current UTC time as an ISO 8601 string with microsecond precision.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// # Health Status
///
/// Serialized lowercase: `"ok"` or `"error"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// # Liveness Response
///
/// Body of `GET /health`. Carries no host information; it only proves the
/// process is up and answering.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "service": "ai-service",
///   "timestamp": "2024-03-10T15:30:45.123456Z",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub service: String,
    pub timestamp: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: HealthStatus::Ok,
            service: SERVICE_NAME.to_string(),
            timestamp: utc_timestamp(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Host utilization block of the detailed report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SystemInfo {
    pub cpu_utilization_percent: f64,
    pub memory_utilization_percent: f64,
    pub memory_available_bytes: u64,
    pub environment: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    Ready,
    Connected,
}

/// Status labels of the downstream systems the service relies on.
///
/// These are placeholders and are not backed by live probes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Dependencies {
    pub tensorflow: DependencyStatus,
    pub mongodb: DependencyStatus,
    pub redis: DependencyStatus,
}

impl Dependencies {
    // Static labels; nothing is probed.
    pub fn placeholder() -> Self {
        Self {
            tensorflow: DependencyStatus::Ready,
            mongodb: DependencyStatus::Connected,
            redis: DependencyStatus::Connected,
        }
    }
}

/// # Detailed Health Report
///
/// Successful body of `GET /health/detailed`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DetailedHealthReport {
    pub status: HealthStatus,
    pub service: String,
    pub timestamp: String,
    pub version: String,
    pub system: SystemInfo,
    pub dependencies: Dependencies,
}

impl DetailedHealthReport {
    pub fn new(system: SystemInfo) -> Self {
        Self {
            status: HealthStatus::Ok,
            service: SERVICE_NAME.to_string(),
            timestamp: utc_timestamp(),
            version: SERVICE_VERSION.to_string(),
            system,
            dependencies: Dependencies::placeholder(),
        }
    }
}

/// # Degraded Health Report
///
/// Returned by `GET /health/detailed` when host metrics cannot be read.
/// Deliberately narrower than [`DetailedHealthReport`]: only `status`,
/// `error_message` and `timestamp` are present.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthErrorReport {
    pub status: HealthStatus,
    pub error_message: String,
    pub timestamp: String,
}

impl HealthErrorReport {
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Error,
            error_message: error_message.into(),
            timestamp: utc_timestamp(),
        }
    }
}

/// Either shape of the detailed endpoint's body. Serialized without a tag,
/// so clients see exactly one of the two reports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum DetailedHealthResponse {
    Healthy(DetailedHealthReport),
    Degraded(HealthErrorReport),
}

impl DetailedHealthResponse {
    pub fn status(&self) -> HealthStatus {
        match self {
            Self::Healthy(report) => report.status,
            Self::Degraded(report) => report.status,
        }
    }
}
