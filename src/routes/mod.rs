use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoints
///
/// Liveness and detailed host health, mounted under a configurable prefix
/// (`/health` by default).
///
/// ## Example Responses
///
/// ```json
/// { "status": "ok", "service": "ai-service", "timestamp": "2024-10-05T12:34:56.789012Z", "version": "1.0.0" }
/// ```
///
/// ```json
/// { "status": "error", "error_message": "host metrics unavailable: ...", "timestamp": "2024-10-05T12:34:56.789012Z" }
/// ```
pub mod health;

#[cfg(test)]
mod health_test;

pub const GREETING: &str = "Hello from Warely AI-Service";

/// # Greeting Endpoint
///
/// Returns a JSON-encoded greeting string.
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Greeting", body = String)
    ),
    tag = "root"
)]
#[get("/hello")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(GREETING)
}

/// # API Route Configuration
///
/// ## Mounted Services
/// - `GET /hello`
/// - Health endpoints under `health_prefix` (see [`health::configure_routes`])
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig, health_prefix: &str) {
    cfg.service(hello);
    health::configure_routes(cfg, health_prefix);
}
