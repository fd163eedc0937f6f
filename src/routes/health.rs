use crate::config::AppConfig;
use crate::handlers::health as report;
use crate::metrics::MetricsSource;
use crate::models::health::{DetailedHealthResponse, HealthResponse};
use actix_web::{HttpResponse, Responder, get, web};

/// # Liveness Endpoint
///
/// Always answers 200 with static service metadata and a fresh timestamp.
/// Intended for container supervisors polling the process.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "service": "ai-service",
///   "timestamp": "2024-10-05T12:34:56.789012Z",
///   "version": "1.0.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "health"
)]
#[get("")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(report::liveness())
}

/// # Detailed Health Endpoint
///
/// Reports host CPU and memory utilization, the deployment environment and
/// dependency labels.
///
/// ## Response
///
/// - **200 OK** in every case. A failed metrics read is signalled only by
///   `"status": "error"` and an `error_message` in the body.
#[utoipa::path(
    get,
    path = "/health/detailed",
    responses(
        (status = 200, description = "Host utilization report, or an error report when metrics are unavailable", body = DetailedHealthResponse)
    ),
    tag = "health"
)]
#[get("/detailed")]
pub async fn detailed_health(
    metrics: web::Data<dyn MetricsSource>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    HttpResponse::Ok().json(report::detailed(metrics.get_ref(), &config.environment))
}

/// # Route Configuration
///
/// Mounts the health endpoints under `prefix`:
///
/// - `GET {prefix}`: liveness
/// - `GET {prefix}/detailed`: host utilization
pub fn configure_routes(cfg: &mut web::ServiceConfig, prefix: &str) {
    cfg.service(web::scope(prefix).service(health).service(detailed_health));
}
