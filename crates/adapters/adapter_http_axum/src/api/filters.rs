//! Option lists for the listing's location and category selectors.

use axum::Json;
use axum::extract::RawQuery;
use axum::response::{IntoResponse, Response};

use eventify_domain::filter::{FilterOptions, FilterState};
use eventify_domain::query::QueryString;

pub enum OptionsResponse {
    Ok(Json<FilterOptions>),
}

impl IntoResponse for OptionsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/filters` — selector choices for the page's current query.
///
/// Takes the same query as `/api/events`; a location or category the URL
/// selects but the lists do not know is appended to its list.
pub async fn options(RawQuery(raw): RawQuery) -> OptionsResponse {
    let query = QueryString::parse(raw.as_deref().unwrap_or_default());
    let state = FilterState::from_query(&query);
    OptionsResponse::Ok(Json(FilterOptions::for_state(&state)))
}
