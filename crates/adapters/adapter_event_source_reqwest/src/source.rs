//! reqwest implementation of [`EventSource`].

use std::future::Future;

use reqwest::StatusCode;
use serde::Serialize;

use eventify_app::ports::EventSource;
use eventify_domain::error::EventifyError;
use eventify_domain::event::Event;
use eventify_domain::filter::EventQuery;
use eventify_domain::id::EventId;

use crate::error::SourceError;

/// Reads events from a REST API exposing `GET /events`.
#[derive(Debug, Clone)]
pub struct HttpEventSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEventSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    #[must_use]
    pub fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    async fn fetch<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<Vec<Event>, SourceError> {
        let response = self
            .client
            .get(self.events_url())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("no event matched, source answered 404");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        match response.json::<serde_json::Value>().await? {
            payload @ serde_json::Value::Array(_) => Ok(serde_json::from_value(payload)?),
            _ => {
                tracing::debug!("source answered with a non-list payload");
                Ok(Vec::new())
            }
        }
    }
}

impl EventSource for HttpEventSource {
    fn list(
        &self,
        query: &EventQuery,
    ) -> impl Future<Output = Result<Vec<Event>, EventifyError>> + Send {
        async move {
            let events = self.fetch(query).await?;
            tracing::debug!(count = events.len(), "listed events");
            Ok(events)
        }
    }

    fn find_by_id(
        &self,
        id: EventId,
    ) -> impl Future<Output = Result<Option<Event>, EventifyError>> + Send {
        async move {
            // the API matches ids by prefix, keep only the exact one
            let events = self.fetch(&[("id", id.to_string())]).await?;
            Ok(events.into_iter().find(|event| event.id == id))
        }
    }
}
