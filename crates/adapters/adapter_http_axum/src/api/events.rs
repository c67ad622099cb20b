//! JSON REST handlers for the event listing and detail pages.

use axum::Json;
use axum::extract::{Path, RawQuery, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eventify_app::ports::{Clock, EventSource};
use eventify_app::services::event_service::Listing;
use eventify_domain::countdown::{Countdown, EventWindow};
use eventify_domain::event::Event;
use eventify_domain::filter::FilterState;
use eventify_domain::query::QueryString;

use crate::error::ApiError;
use crate::state::AppState;

/// A detail page: the cached record plus its countdown at request time.
#[derive(Debug, Serialize)]
pub struct EventPage {
    pub event: Event,
    pub countdown: Countdown,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Listing>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<EventPage>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/events` — listing filtered by the page's query parameters.
///
/// The query is read with the same rules as the browser URL, so a shared
/// link and this endpoint always agree. A failing source still answers
/// `200` with an `error` message.
pub async fn list<S, C>(
    State(state): State<AppState<S, C>>,
    RawQuery(raw): RawQuery,
) -> ListResponse
where
    S: EventSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let query = QueryString::parse(raw.as_deref().unwrap_or_default());
    let filter = FilterState::from_query(&query);
    ListResponse::Ok(Json(state.event_service.search(&filter).await))
}

/// `GET /api/events/{id}` — cached detail page.
pub async fn get<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    S: EventSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = super::parse_id(&id)?;
    let event = state.pages.get(id).await?;
    let countdown = EventWindow::from(&event).evaluate(state.clock.now());
    Ok(GetResponse::Ok(Json(EventPage { event, countdown })))
}
