#[cfg(test)]
mod health_route_tests {
    use crate::config::AppConfig;
    use crate::metrics::{HostSnapshot, MetricsError, MetricsSource, MockMetricsSource, SystemMetrics};
    use crate::routes::configure;
    use actix_web::{App, test, web};
    use chrono::DateTime;
    use futures::future::join_all;
    use serde_json::Value;
    use std::sync::Arc;

    fn healthy_mock() -> MockMetricsSource {
        let mut source = MockMetricsSource::new();
        source.expect_snapshot().returning(|| {
            Ok(HostSnapshot {
                cpu_percent: 7.5,
                memory_percent: 48.25,
                memory_available: 2_147_483_648,
            })
        });
        source
    }

    fn failing_mock() -> MockMetricsSource {
        let mut source = MockMetricsSource::new();
        source
            .expect_snapshot()
            .returning(|| Err(MetricsError::Unavailable("permission denied".to_string())));
        source
    }

    macro_rules! init_app {
        ($source:expr, $config:expr) => {{
            let config: AppConfig = $config;
            let prefix = config.health_prefix.clone();
            let source: Arc<dyn MetricsSource> = Arc::new($source);
            test::init_service(
                App::new()
                    .app_data(web::Data::from(source))
                    .app_data(web::Data::new(config))
                    .configure(|cfg| configure(cfg, &prefix)),
            )
            .await
        }};
    }

    fn config_with_env(environment: &str) -> AppConfig {
        AppConfig {
            environment: environment.to_string(),
            ..AppConfig::default()
        }
    }

    #[actix_web::test]
    async fn test_detailed_reports_static_dependencies() {
        // Arrange
        let app = init_app!(healthy_mock(), AppConfig::default());

        // Act
        let req = test::TestRequest::get().uri("/health/detailed").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "ai-service");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["dependencies"]["tensorflow"], "ready");
        assert_eq!(body["dependencies"]["mongodb"], "connected");
        assert_eq!(body["dependencies"]["redis"], "connected");
        assert_eq!(body["system"]["environment"], "production");
        assert_eq!(body["system"]["cpu_utilization_percent"], 7.5);
        assert_eq!(body["system"]["memory_utilization_percent"], 48.25);
        assert_eq!(body["system"]["memory_available_bytes"], 2_147_483_648u64);
    }

    #[actix_web::test]
    async fn test_detailed_uses_configured_environment() {
        let config = AppConfig::from_lookup(|key| {
            (key == "NODE_ENV").then(|| "staging".to_string())
        })
        .unwrap();
        let app = init_app!(healthy_mock(), config);

        let req = test::TestRequest::get().uri("/health/detailed").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        // Verify the configured environment is reported, not the default
        assert_eq!(body["system"]["environment"], "staging");
    }

    #[actix_web::test]
    async fn test_detailed_metrics_failure_still_returns_200() {
        // Arrange
        let app = init_app!(failing_mock(), AppConfig::default());

        // Act
        let req = test::TestRequest::get().uri("/health/detailed").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), 200, "failure is reported in the body only");

        let body: Value = test::read_body_json(resp).await;
        let object = body.as_object().expect("body should be a JSON object");

        assert_eq!(body["status"], "error");
        assert_eq!(body["error_message"], "host metrics unavailable: permission denied");
        let timestamp = body["timestamp"].as_str().expect("timestamp should be a string");
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());

        // Verify the error report stays narrower than the success report
        for absent in ["service", "version", "system", "dependencies"] {
            assert!(!object.contains_key(absent), "{absent} should be omitted");
        }
    }

    #[actix_web::test]
    async fn test_detailed_with_host_metrics() {
        let app = init_app!(SystemMetrics::new(), config_with_env("production"));

        for _ in 0..2 {
            let req = test::TestRequest::get().uri("/health/detailed").to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;

            assert_eq!(body["status"], "ok");
            let cpu = body["system"]["cpu_utilization_percent"].as_f64().unwrap();
            let memory = body["system"]["memory_utilization_percent"].as_f64().unwrap();
            assert!((0.0..=100.0).contains(&cpu));
            assert!((0.0..=100.0).contains(&memory));
            assert!(body["system"]["memory_available_bytes"].is_u64());
        }
    }

    #[actix_web::test]
    async fn test_custom_prefix() {
        let config = AppConfig {
            health_prefix: "/status".to_string(),
            ..AppConfig::default()
        };
        let app = init_app!(healthy_mock(), config);

        let req = test::TestRequest::get().uri("/status").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get().uri("/status/detailed").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }

    #[actix_web::test]
    async fn test_health_scope_does_not_shadow_later_services() {
        // Arrange: a root prefix never reaches routing
        let root = AppConfig::from_lookup(|key| (key == "HEALTH_PREFIX").then(|| "/".to_string()));
        assert!(root.is_err());

        let config = AppConfig::from_lookup(|key| {
            (key == "HEALTH_PREFIX").then(|| "health/".to_string())
        })
        .unwrap();
        let prefix = config.health_prefix.clone();
        let source: Arc<dyn MetricsSource> = Arc::new(healthy_mock());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(source))
                .app_data(web::Data::new(config))
                .configure(|cfg| configure(cfg, &prefix))
                .route("/docs/x", web::get().to(|| async { "docs" })),
        )
        .await;

        // Act + Assert: health, greeting and a service registered afterwards all resolve
        for uri in ["/health", "/health/detailed", "/hello", "/docs/x"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200, "{uri} should be reachable");
        }
    }

    #[actix_web::test]
    async fn test_concurrent_liveness_and_detailed() {
        let app = init_app!(healthy_mock(), AppConfig::default());

        let requests = (0..16).map(|i| {
            let uri = if i % 2 == 0 { "/health" } else { "/health/detailed" };
            test::call_service(&app, test::TestRequest::get().uri(uri).to_request())
        });
        let responses = join_all(requests).await;

        // Verify every concurrent call got a well-formed ok report
        assert_eq!(responses.len(), 16);
        for resp in responses {
            assert_eq!(resp.status(), 200);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["status"], "ok");
        }
    }

    #[actix_web::test]
    async fn test_sequential_liveness_timestamps_do_not_decrease() {
        let app = init_app!(healthy_mock(), AppConfig::default());
        let mut previous = None;

        for _ in 0..5 {
            let req = test::TestRequest::get().uri("/health").to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            let ts = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();

            if let Some(prev) = previous {
                assert!(ts >= prev);
            }
            previous = Some(ts);
        }
    }
}
