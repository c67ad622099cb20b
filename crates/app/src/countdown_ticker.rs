//! Countdown ticker — re-evaluates a countdown on a fixed period.
//!
//! The first evaluation happens synchronously in [`CountdownTicker::start`];
//! the next ones run on a spawned task every [`TICK_INTERVAL`]. Observers
//! read the latest value from a watch channel, which only notifies when the
//! displayed value actually changes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use eventify_domain::countdown::{Countdown, CountdownPhase, EventWindow, TICK_INTERVAL};

use crate::ports::Clock;

/// Keeps a [`Countdown`] for one event window up to date.
///
/// At most one tick task is alive per ticker. It stops on [`stop`](Self::stop),
/// on drop, and by itself once the window has expired.
pub struct CountdownTicker<C> {
    clock: Arc<C>,
    period: Duration,
    window: EventWindow,
    sender: Arc<watch::Sender<Countdown>>,
    task: Option<JoinHandle<()>>,
}

impl<C> CountdownTicker<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Evaluate immediately and tick every [`TICK_INTERVAL`].
    pub fn start(clock: C, window: EventWindow) -> Self {
        Self::with_period(clock, window, TICK_INTERVAL)
    }

    pub fn with_period(clock: C, window: EventWindow, period: Duration) -> Self {
        let clock = Arc::new(clock);
        let (sender, _) = watch::channel(window.evaluate(clock.now()));
        let mut ticker = Self {
            clock,
            period,
            window,
            sender: Arc::new(sender),
            task: None,
        };
        ticker.spawn();
        ticker
    }

    /// Latest evaluated value.
    #[must_use]
    pub fn current(&self) -> Countdown {
        *self.sender.borrow()
    }

    #[must_use]
    pub fn window(&self) -> EventWindow {
        self.window
    }

    /// Receiver that is notified whenever the displayed countdown changes.
    /// Stays valid across [`retarget`](Self::retarget).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Countdown> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Track another window. The previous tick is cancelled before the new
    /// window is evaluated, so stale values are never published.
    pub fn retarget(&mut self, window: EventWindow) {
        self.stop();
        self.window = window;
        publish(&self.sender, window.evaluate(self.clock.now()));
        self.spawn();
    }

    /// Cancel the tick task. The last value stays readable.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn spawn(&mut self) {
        if self.current().phase == CountdownPhase::Expired {
            return;
        }
        let clock = Arc::clone(&self.clock);
        let sender = Arc::clone(&self.sender);
        let window = self.window;
        let period = self.period;

        self.task = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let countdown = window.evaluate(clock.now());
                publish(&sender, countdown);
                if countdown.phase == CountdownPhase::Expired {
                    tracing::debug!("countdown expired, ticker stopped");
                    break;
                }
            }
        }));
    }
}

impl<C> Drop for CountdownTicker<C> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn publish(sender: &watch::Sender<Countdown>, next: Countdown) {
    sender.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
}
