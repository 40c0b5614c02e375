//! Test helpers for webserver router tests

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use ingest::DatasetOrigin;
use webserver::{DashboardState, RealStaticFileServer, RealWebSocketManager, WebServer, WebSocketManager};

use super::fixtures::TestFixtures;

pub struct TestHelpers;

impl TestHelpers {
    /// Static directory with an index page and one script, plus a file outside it
    pub fn static_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(static_dir.join("index.html"), TestFixtures::index_html()).unwrap();
        std::fs::write(static_dir.join("app.js"), "console.log('ok');").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "secret").unwrap();
        dir
    }

    pub fn server_with<W: WebSocketManager + 'static>(
        websocket_manager: W,
        dir: &TempDir,
    ) -> WebServer<W, RealStaticFileServer> {
        let state = DashboardState::new(TestFixtures::dataset(), DatasetOrigin::Fallback);
        WebServer::new(state, websocket_manager, RealStaticFileServer::new(dir.path().join("static")))
    }

    /// Router backed by real services and the fixture dataset
    pub fn router() -> (TempDir, Router) {
        let dir = Self::static_dir();
        let router = Self::server_with(RealWebSocketManager::new(), &dir).build_router();
        (dir, router)
    }

    pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        Self::send(router, request).await
    }

    pub async fn post(router: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .unwrap();
        Self::send(router, request).await
    }

    pub async fn post_with_headers(router: &Router, uri: &str, body: Value) -> (StatusCode, HeaderMap) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        (response.status(), response.headers().clone())
    }

    pub async fn get_with_headers(router: &Router, uri: &str) -> (StatusCode, HeaderMap) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        (response.status(), response.headers().clone())
    }

    pub async fn get_raw(router: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, bytes.to_vec())
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub fn indices(value: &Value) -> Vec<u64> {
        value
            .as_array()
            .map(|items| items.iter().filter_map(Value::as_u64).collect())
            .unwrap_or_default()
    }
}
