use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use anyhow::Context;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use warely_ai_service::config::AppConfig;
use warely_ai_service::metrics::{MetricsSource, SystemMetrics};
use warely_ai_service::middleware::permissive_cors;
use warely_ai_service::openapi::ApiDoc;
use warely_ai_service::{logging, routes};

/// Warely AI Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Health endpoints under the configured prefix (`/health` by default)
/// - `GET /hello` greeting
/// - Swagger UI at `/docs/` backed by `/openapi.json`
/// - Permissive CORS
///
/// # Configuration
/// Environment variables (optionally from a `.env` file): `HOST`, `PORT`,
/// `NODE_ENV`, `HEALTH_PREFIX`, `RUST_LOG`. See [`AppConfig`].
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    logging::init(config.is_development())?;

    if config.is_development() {
        tracing::info!("development mode: debug logging enabled, use an external watcher for reloads");
    }

    let metrics: Arc<dyn MetricsSource> = Arc::new(SystemMetrics::new());
    let bind = config.bind_address();
    let prefix = config.health_prefix.clone();
    let config = Data::new(config);
    let metrics = Data::from(metrics);

    tracing::info!(
        host = %bind.0,
        port = bind.1,
        environment = %config.environment,
        health_prefix = %prefix,
        "starting ai-service"
    );

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .wrap(permissive_cors())
            .app_data(config.clone())
            .app_data(metrics.clone())
            .configure(|cfg| routes::configure(cfg, &prefix))
            .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", openapi))
    })
    .bind(bind.clone())
    .with_context(|| format!("failed to bind {}:{}", bind.0, bind.1))?
    .run()
    .await?;

    tracing::info!("server shut down");
    Ok(())
}
