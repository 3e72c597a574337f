//! API Routes
//!
//! Configures the Axum router with all playground endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, home_handler, list_pastes_handler, run_handler, stats_handler,
    view_paste_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Home page
/// - `GET /pastes` - Paste list fragment
/// - `GET /paste/:key` - Paste viewer fragment
/// - `POST /run` - Execute code
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
/// - `GET /static/*` - Files from `static_dir`
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home_handler))
        .route("/pastes", get(list_pastes_handler))
        .route("/paste/:key", get(view_paste_handler))
        .route("/run", post(run_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::cache::PasteCache;
    use crate::error::{AppError, Result};
    use crate::runner::CodeRunner;
    use crate::upstream::{PasteSource, PasteSummary};

    struct DownSource;

    #[async_trait]
    impl PasteSource for DownSource {
        async fn list_pastes(&self, _language: Option<&str>) -> Result<Vec<PasteSummary>> {
            Err(AppError::Upstream("connection refused".to_string()))
        }

        async fn fetch_paste(&self, _key: &str) -> Result<String> {
            Err(AppError::Upstream("connection refused".to_string()))
        }
    }

    fn create_test_app() -> Router {
        let state = AppState::new(
            PasteCache::new(Duration::from_secs(3600)),
            Arc::new(DownSource),
            CodeRunner::default(),
        )
        .unwrap();
        create_router(state, "static")
    }

    async fn status_of(request: Request<Body>) -> StatusCode {
        create_test_app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_home_endpoint() {
        let status = status_of(Request::builder().uri("/").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let status = status_of(Request::builder().uri("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let status = status_of(Request::builder().uri("/stats").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_paste_upstream_down() {
        let status = status_of(
            Request::builder()
                .uri("/paste/abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_run_rejects_malformed_json() {
        let status = status_of(
            Request::builder()
                .method("POST")
                .uri("/run")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let status = status_of(Request::builder().uri("/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
