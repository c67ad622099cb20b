//! JSON handler for the content freshness check of a detail page.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eventify_app::ports::{Clock, EventSource};
use eventify_domain::event::Event;

use crate::error::ApiError;
use crate::state::AppState;

/// Result of comparing a cached page with the source.
#[derive(Debug, Serialize)]
pub struct Freshness {
    /// Whether the page was revalidated.
    pub changed: bool,
    /// What the page should display now; `null` once the event is gone.
    pub event: Option<Event>,
}

/// Possible responses from the freshness endpoint.
pub enum CheckResponse {
    Ok(Json<Freshness>),
}

impl IntoResponse for CheckResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/events/{id}/freshness` — refetch the event, compare it with
/// the cached page and revalidate that page when they differ.
pub async fn check<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> Result<CheckResponse, ApiError>
where
    S: EventSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = super::parse_id(&id)?;
    let original = state.pages.get(id).await?;
    let path = original.detail_path();
    let update = state.content_updates.check(&path, id, &original).await?;

    Ok(CheckResponse::Ok(Json(Freshness {
        changed: update.changed(),
        event: update.into_event(original),
    })))
}
