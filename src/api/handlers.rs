//! API Handlers
//!
//! HTTP request handlers for each playground endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use tracing::warn;

use crate::cache::PasteCache;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    validate_paste_key, HealthResponse, LanguageQuery, RunRequest, RunResponse, StatsResponse,
};
use crate::render::Views;
use crate::runner::{CodeRunner, RunLanguage};
use crate::service::PasteService;
use crate::upstream::{PasteSource, ScrapeClient};

/// Application state shared across all handlers.
///
/// The cache is constructed once at startup and shared by handle; handlers
/// never touch its lock directly.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide paste cache
    pub cache: Arc<PasteCache>,
    /// Cache-backed access to upstream pastes
    pub pastes: PasteService,
    /// Interpreter launcher for /run
    pub runner: Arc<CodeRunner>,
    /// Compiled page and fragment templates
    pub views: Arc<Views>,
}

impl AppState {
    /// Creates a new AppState around an existing cache and paste source.
    ///
    /// Fails only if an embedded template does not compile.
    pub fn new(
        cache: PasteCache,
        source: Arc<dyn PasteSource>,
        runner: CodeRunner,
    ) -> Result<Self> {
        let cache = Arc::new(cache);
        Ok(Self {
            pastes: PasteService::new(Arc::clone(&cache), source),
            cache,
            runner: Arc::new(runner),
            views: Arc::new(Views::new()?),
        })
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache with the configured TTL and an HTTP client for the
    /// configured upstream.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = ScrapeClient::from_config(config)?;
        Self::new(
            PasteCache::new(config.cache_ttl()),
            Arc::new(source),
            CodeRunner::from_config(config),
        )
    }
}

/// Handler for GET /
pub async fn home_handler(State(state): State<AppState>) -> Response {
    state.views.respond(state.views.home())
}

/// Handler for GET /pastes
///
/// Lists recent pastes as an HTML fragment. Listings are not cached.
pub async fn list_pastes_handler(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let rendered = state
        .pastes
        .list(query.language.as_deref())
        .await
        .and_then(|pastes| state.views.paste_list(&pastes));
    state.views.respond(rendered)
}

/// Handler for GET /paste/:key
///
/// Renders one paste body, served from the cache when fresh.
pub async fn view_paste_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let rendered = render_paste(&state, &key, query.language.as_deref()).await;
    state.views.respond(rendered)
}

async fn render_paste(state: &AppState, key: &str, language: Option<&str>) -> Result<String> {
    if let Some(error_msg) = validate_paste_key(key) {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let content = state.pastes.content(key).await?;
    state
        .views
        .paste_view(&content, language.unwrap_or_default())
}

/// Handler for POST /run
///
/// Always answers with a `RunResponse`; failures carry their message in
/// `output` and a non-200 status.
pub async fn run_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RunRequest>, JsonRejection>,
) -> (StatusCode, Json<RunResponse>) {
    let Ok(Json(req)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(RunResponse::new("Invalid request")),
        );
    };

    let result = match req.language.parse::<RunLanguage>() {
        Ok(language) => state.runner.run(language, &req.code).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => (StatusCode::OK, Json(RunResponse::new(output))),
        Err(e) => {
            warn!(language = %req.language, error = %e, "run request failed");
            let message = match &e {
                AppError::Execution(msg) => msg.clone(),
                other => other.to_string(),
            };
            (e.status_code(), Json(RunResponse::new(message)))
        }
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    Json(StatsResponse::new(&stats, state.cache.ttl().as_secs()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::upstream::PasteSummary;

    struct StaticSource;

    #[async_trait]
    impl PasteSource for StaticSource {
        async fn list_pastes(&self, _language: Option<&str>) -> Result<Vec<PasteSummary>> {
            Ok(vec![PasteSummary {
                key: "abc123".to_string(),
                title: "hello".to_string(),
                syntax: "python".to_string(),
                ..Default::default()
            }])
        }

        async fn fetch_paste(&self, key: &str) -> Result<String> {
            match key {
                "missing" => Err(AppError::Upstream("404 Not Found".to_string())),
                _ => Ok("print(1)".to_string()),
            }
        }
    }

    fn test_state() -> AppState {
        AppState::new(
            PasteCache::new(Duration::from_secs(3600)),
            Arc::new(StaticSource),
            CodeRunner::default(),
        )
        .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_home_handler() {
        let response = home_handler(State(test_state())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("Paste Playground"));
        assert!(body.contains(r#"<option value="ruby">Ruby</option>"#));
    }

    #[tokio::test]
    async fn test_view_paste_handler_caches() {
        let state = test_state();
        let query = LanguageQuery {
            language: Some("python".to_string()),
        };

        let response = view_paste_handler(
            State(state.clone()),
            Path("abc123".to_string()),
            Query(query),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("language-python"));
        assert!(body.contains("print(1)"));
        assert_eq!(state.cache.get("abc123").await.as_deref(), Some("print(1)"));
    }

    #[tokio::test]
    async fn test_view_paste_handler_upstream_failure() {
        let state = test_state();

        let response = view_paste_handler(
            State(state.clone()),
            Path("missing".to_string()),
            Query(LanguageQuery::default()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(body_string(response).await.contains("Error fetching from upstream"));
        assert!(state.cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_view_paste_handler_invalid_key() {
        let response = view_paste_handler(
            State(test_state()),
            Path("bad key!".to_string()),
            Query(LanguageQuery::default()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("Invalid request"));
    }

    #[tokio::test]
    async fn test_list_pastes_handler() {
        let response =
            list_pastes_handler(State(test_state()), Query(LanguageQuery::default())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("hello"));
        assert!(body.contains("/paste/abc123?language=python"));
    }
    #[tokio::test]
    async fn test_run_handler_unsupported_language() {
        let req = RunRequest {
            code: "console.log(1)".to_string(),
            language: "javascript".to_string(),
        };
        let (status, Json(response)) = run_handler(State(test_state()), Ok(Json(req))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.output, "Unsupported language: javascript");
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.ttl_seconds, 3600);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
