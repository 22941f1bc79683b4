//! End-to-end tests for the report facade HTTP surface.
//!
//! Exercises the four report endpoints plus the uninitialized-state
//! rejection against a stub engine, both in-process via the router and
//! over a real socket.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tokio::net::TcpListener;
use tower::ServiceExt;

use report_core::types::{EngineError, RenderRequest, ReportReference};
use report_engine::{IntegrationConfig, ReportEngine};
use report_server::config::ServerConfig;
use report_server::routes::build_router;
use report_server::server::Server;

/// Engine double: records render requests, writes a fixed body on `view`.
struct StubEngine {
    config: IntegrationConfig,
    references: Vec<ReportReference>,
    output_body: String,
    seen: Mutex<Vec<RenderRequest>>,
}

impl StubEngine {
    fn new(config: IntegrationConfig) -> Self {
        Self {
            config,
            references: Vec::new(),
            output_body: "<html><body>quarterly overview</body></html>".to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ReportEngine for StubEngine {
    fn integration_config(&self) -> &IntegrationConfig {
        &self.config
    }

    async fn view(&self, request: &RenderRequest) -> Result<String, EngineError> {
        self.seen.lock().unwrap().push(request.clone());
        let output_name = request.output_file_name();
        tokio::fs::write(self.config.output_dir.join(&output_name), &self.output_body).await?;
        Ok(output_name)
    }

    async fn render(&self, request: &RenderRequest) -> Result<String, EngineError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(request.output_file_name())
    }

    fn report_references(&self) -> Result<Vec<ReportReference>, EngineError> {
        Ok(self.references.clone())
    }
}

/// Engine directories under a tempdir plus the matching server config.
fn test_config() -> (tempfile::TempDir, ServerConfig) {
    let dir = tempfile::tempdir().unwrap();
    let report_dir = dir.path().join("reports");
    let output_dir = dir.path().join("output");
    std::fs::create_dir_all(&report_dir).unwrap();
    std::fs::create_dir_all(output_dir.join("images")).unwrap();

    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        report_dir,
        output_dir,
        ..Default::default()
    };
    (dir, config)
}

fn stub_setup() -> (tempfile::TempDir, ServerConfig, Arc<StubEngine>) {
    let (dir, config) = test_config();
    let engine = Arc::new(StubEngine::new(config.integration_config()));
    (dir, config, engine)
}

#[tokio::test]
async fn get_render_returns_report_html() {
    let (_dir, config, engine) = stub_setup();
    let router = build_router(Arc::new(config), Some(engine.clone()));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/report/render/overview.rptdesign")
                .header(header::HOST, "localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(
        &body[..],
        b"<html><body>quarterly overview</body></html>"
    );

    // The descriptor carried the defaults and the request-derived image URL
    let seen = engine.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].report_name, "overview.rptdesign");
    assert_eq!(
        seen[0].image_base_url,
        "http://localhost:8080/report/view/image"
    );
    assert!(seen[0].parameters.is_empty());
}

#[tokio::test]
async fn post_render_passes_parameters_and_returns_empty_200() {
    let (_dir, config, engine) = stub_setup();
    let router = build_router(Arc::new(config), Some(engine.clone()));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/report/render/overview.rptdesign")
                .body(Body::from("region=EMEA;year=2024\nquarter=Q3"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());

    let seen = engine.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].parameters.len(), 3);
    assert_eq!(seen[0].parameters["region"], "EMEA");
    assert_eq!(seen[0].parameters["year"], "2024");
    assert_eq!(seen[0].parameters["quarter"], "Q3");
}

#[tokio::test]
async fn get_image_serves_raw_bytes() {
    let (_dir, config, engine) = stub_setup();
    std::fs::write(
        config.integration_config().image_dir().join("chart.png"),
        b"\x89PNG fake image",
    )
    .unwrap();
    let router = build_router(Arc::new(config), Some(engine));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/report/view/image/chart.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"\x89PNG fake image");
}

#[tokio::test]
async fn get_missing_image_returns_400_fragment() {
    let (_dir, config, engine) = stub_setup();
    let router = build_router(Arc::new(config), Some(engine));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/report/view/image/missing.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = std::str::from_utf8(&body).unwrap();
    assert!(body.contains("<h3>Unable to process report</h3>"));
    assert!(body.contains("doesn't exist"));
}

#[tokio::test]
async fn get_config_returns_reference_array() {
    let (_dir, config, mut engine) = {
        let (dir, config) = test_config();
        let engine = StubEngine::new(config.integration_config());
        (dir, config, engine)
    };
    engine.references = vec![
        ReportReference::new("invoices.rptdesign", "invoices"),
        ReportReference::new("overview.rptdesign", "overview"),
    ];
    let router = build_router(Arc::new(config), Some(Arc::new(engine)));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/report/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let references: Vec<ReportReference> = serde_json::from_slice(&body).unwrap();
    assert_eq!(references.len(), 2);
    assert_eq!(references[0].report_file_name, "invoices.rptdesign");
    assert_eq!(references[1].title, "overview");
}

#[tokio::test]
async fn all_report_endpoints_refuse_when_uninitialized() {
    let (_dir, config) = test_config();
    let router = build_router(Arc::new(config), None);

    let requests = [
        Request::builder()
            .uri("/report/render/overview.rptdesign")
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .method("POST")
            .uri("/report/render/overview.rptdesign")
            .body(Body::from("region=EMEA"))
            .unwrap(),
        Request::builder()
            .uri("/report/view/image/chart.png")
            .body(Body::empty())
            .unwrap(),
        Request::builder()
            .uri("/report/config")
            .body(Body::empty())
            .unwrap(),
    ];

    for request in requests {
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Report server not initialized"));
    }
}

#[tokio::test]
async fn facade_works_over_a_real_socket() {
    let (_dir, config, engine) = stub_setup();
    let server = Server::with_engine(config, Some(engine));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        server.run_with_listener(listener).await.ok();
    });
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/report/render/overview.rptdesign", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("quarterly overview"));

    let response = client
        .get(format!("http://{}/report/config", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let references: Vec<ReportReference> = response.json().await.unwrap();
    assert!(references.is_empty());

    handle.abort();
}
