use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Served as JSON at `/openapi.json` and rendered by Swagger UI at `/docs/`.
///
/// # Endpoints
/// - Liveness: `GET /health`
/// - Detailed health: `GET /health/detailed`
/// - Greeting: `GET /hello`
///
/// Paths are documented at the default `/health` mount; a custom
/// `HEALTH_PREFIX` is not reflected here.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::health::detailed_health,
        crate::routes::hello,
    ),
    components(
        schemas(
            crate::models::health::HealthStatus,
            crate::models::health::HealthResponse,
            crate::models::health::SystemInfo,
            crate::models::health::DependencyStatus,
            crate::models::health::Dependencies,
            crate::models::health::DetailedHealthReport,
            crate::models::health::HealthErrorReport,
            crate::models::health::DetailedHealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health monitoring endpoints"),
        (name = "root", description = "Service greeting")
    ),
    info(
        title = "Warely AI Service",
        description = "AI/ML predictions and analytics for warehouse management",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
