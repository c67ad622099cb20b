//! Server-Sent Events (SSE) stream of countdown snapshots.

use std::convert::Infallible;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::Stream;
use tokio_stream::wrappers::WatchStream;

use eventify_app::countdown_ticker::CountdownTicker;
use eventify_app::ports::{Clock, EventSource};
use eventify_domain::countdown::{Countdown, CountdownPhase, EventWindow};

use crate::error::ApiError;
use crate::state::AppState;

/// Countdown updates for one event. Owns the ticker, so the tick task
/// stops as soon as the client goes away.
pub struct CountdownStream<C> {
    _ticker: CountdownTicker<C>,
    updates: WatchStream<Countdown>,
    finished: bool,
}

impl<C> Stream for CountdownStream<C> {
    type Item = Result<Event, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if self.finished {
                return Poll::Ready(None);
            }
            let Some(countdown) = ready!(Pin::new(&mut self.updates).poll_next(cx)) else {
                return Poll::Ready(None);
            };
            self.finished = countdown.phase == CountdownPhase::Expired;
            match Event::default().event("countdown").json_data(countdown) {
                Ok(event) => return Poll::Ready(Some(Ok(event))),
                Err(err) => {
                    tracing::warn!(%err, "failed to serialize countdown for SSE stream");
                }
            }
        }
    }
}

/// `GET /api/events/{id}/countdown` — SSE stream of countdown snapshots.
///
/// Sends the current countdown immediately, then a new `countdown` frame
/// whenever the per-minute re-evaluation changes it. The stream ends after
/// the `expired` frame.
pub async fn stream<S, C>(
    State(state): State<AppState<S, C>>,
    Path(id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError>
where
    S: EventSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = super::parse_id(&id)?;
    let event = state.pages.get(id).await?;
    let ticker = CountdownTicker::start(Arc::clone(&state.clock), EventWindow::from(&event));
    let updates = WatchStream::new(ticker.subscribe());

    Ok(Sse::new(CountdownStream {
        _ticker: ticker,
        updates,
        finished: false,
    })
    .keep_alive(KeepAlive::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router;
    use crate::testing::{FixedClock, StubSource, event, now};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use chrono::TimeDelta;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn should_send_current_countdown_first() {
        let app = router::build(AppState::new(
            StubSource::with(vec![event(1, "Jazz Night")]),
            FixedClock(now()),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/events/1/countdown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/event-stream"
        );
        let mut body = response.into_body();
        let frame = body.frame().await.unwrap().unwrap().into_data().unwrap();
        let text = String::from_utf8(frame.to_vec()).unwrap();
        assert!(text.starts_with("event: countdown\n"), "{text}");
        assert!(text.contains(r#""phase":"upcoming""#), "{text}");
        assert!(text.contains(r#""hours":2"#), "{text}");
    }

    #[tokio::test]
    async fn should_end_stream_for_expired_event() {
        let app = router::build(AppState::new(
            StubSource::with(vec![event(1, "Jazz Night")]),
            FixedClock(now() + TimeDelta::days(1)),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/events/1/countdown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(text.matches("event: countdown").count(), 1);
        assert!(text.contains(r#""phase":"expired""#));
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_event() {
        let app = router::build(AppState::new(StubSource::default(), FixedClock(now())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/events/5/countdown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
