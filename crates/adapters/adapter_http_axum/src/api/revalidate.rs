//! On-demand revalidation webhook.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

use eventify_app::ports::{Clock, EventSource, Revalidator};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RevalidateParams {
    /// Detail path to refresh, e.g. `/events/1`.
    pub path: Option<String>,
}

/// Possible responses from the revalidate endpoint. The bodies are part of
/// the webhook contract and do not use the [`ApiError`](crate::error::ApiError) shape.
pub enum RevalidateResponse {
    Revalidated,
    MissingPath,
    Failed,
}

impl IntoResponse for RevalidateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Revalidated => (StatusCode::OK, Json(json!({ "revalidated": true }))),
            Self::MissingPath => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Missing path" })),
            ),
            Self::Failed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error revalidating" })),
            ),
        }
        .into_response()
    }
}

/// `GET /api/revalidate?path=…` — re-render one cached detail page.
pub async fn handle<S, C>(
    State(state): State<AppState<S, C>>,
    Query(params): Query<RevalidateParams>,
) -> RevalidateResponse
where
    S: EventSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(path) = params.path.filter(|path| !path.is_empty()) else {
        return RevalidateResponse::MissingPath;
    };

    match state.pages.revalidate(&path).await {
        Ok(()) => RevalidateResponse::Revalidated,
        Err(err) => {
            tracing::error!(%path, error = %err, "revalidation failed");
            RevalidateResponse::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router;
    use crate::testing::{event, state_with};
    use axum::body::Body;
    use axum::http::Request;
    use eventify_domain::id::EventId;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn call(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn should_revalidate_known_page() {
        let state = state_with(vec![event(1, "Jazz Night")]);
        let app = router::build(state.clone());

        let (status, body) = call(app, "/api/revalidate?path=%2Fevents%2F1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "revalidated": true }));
        assert!(state.pages.cached(EventId::new(1)).await.is_some());
    }

    #[tokio::test]
    async fn should_reject_missing_path() {
        let app = router::build(state_with(vec![]));

        for uri in ["/api/revalidate", "/api/revalidate?path="] {
            let (status, body) = call(app.clone(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "message": "Missing path" }));
        }
    }

    #[tokio::test]
    async fn should_fail_for_path_that_is_not_an_event_page() {
        let app = router::build(state_with(vec![]));

        let (status, body) = call(app, "/api/revalidate?path=/about").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Error revalidating" }));
    }
}
