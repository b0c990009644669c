use axum::{routing::get, Json, Router};
use common::types::Health;
use configs::{PaginationConfig, StepsConfig};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::errors::ApiError;
use crate::observability::render_metrics;

pub mod pagination;
pub mod steps;

/// Shared handler state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub pagination: PaginationConfig,
    pub steps: StepsConfig,
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> Result<String, ApiError> {
    render_metrics()
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/api/page-range", get(pagination::page_range))
        .route("/api/steps", get(steps::step_statuses));

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        build_router(AppState::default(), CorsLayer::very_permissive())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn page_range_middle_window() {
        let (status, body) =
            get_json("/api/page-range?total_items=100&page_size=10&current_page=5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_pages"], 10);
        assert_eq!(body["entries"].as_array().unwrap().len(), 7);
        assert_eq!(body["entries"][1]["type"], "ellipsis");
        assert_eq!(body["entries"][3], serde_json::json!({ "type": "page", "page": 5 }));
    }

    #[tokio::test]
    async fn page_range_uses_configured_default_size() {
        let (status, body) = get_json("/api/page-range?total_items=95").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_pages"], 10);
        assert_eq!(body["current_page"], 1);
        assert_eq!(body["is_first_page"], true);
    }

    #[tokio::test]
    async fn page_range_rejects_zero_page_size() {
        let (status, body) = get_json("/api/page-range?total_items=100&page_size=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("invalid argument"));
    }

    #[tokio::test]
    async fn steps_mark_error() {
        let (status, body) = get_json("/api/steps?total=3&current=1&status=error").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["statuses"], serde_json::json!(["finish", "error", "wait"]));
    }

    #[tokio::test]
    async fn malformed_query_is_a_json_error() {
        let (status, body) = get_json("/api/page-range?total_items=10&page_size=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("expected an integer"));

        let (status, body) = get_json("/api/steps?total=many").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn oversized_current_page_is_clamped() {
        let (status, body) = get_json(
            "/api/page-range?total_items=100&page_size=10&current_page=99999999999999999999",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_page"], 10);
        assert_eq!(body["is_last_page"], true);
    }

    #[tokio::test]
    async fn too_many_steps_are_rejected() {
        let (status, body) = get_json("/api/steps?total=10000000000000&current=1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("exceeds"));
    }

    #[tokio::test]
    async fn metrics_are_exposed() {
        let resp = app()
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("pager_"));
    }
}
