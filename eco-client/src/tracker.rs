//! Live-location poller
//!
//! Repeatedly fetches a tracked coordinate on a fixed interval and publishes
//! the latest value through a watch channel. A failed tick keeps the
//! last-known position and keeps polling; one bad fetch never kills the
//! loop. Stopping is idempotent and guarantees no tick starts afterwards.

use std::future::Future;
use std::time::Duration;

use shared::models::Coordinates;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// What the tracking display currently knows
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tracking {
    /// The tracked entity has not reported a position yet. Distinct from a
    /// fetch error, which leaves the previous state in place.
    #[default]
    Awaiting,
    /// Last successfully fetched position
    Located(Coordinates),
}

impl Tracking {
    pub fn coordinates(self) -> Option<Coordinates> {
        match self {
            Tracking::Awaiting => None,
            Tracking::Located(coords) => Some(coords),
        }
    }
}

/// Handle to a running location poll loop
///
/// Created by [`LocationPoller::spawn`]; dropping the handle cancels the
/// loop as well, so a torn-down view cannot leak its timer.
#[derive(Debug)]
pub struct LocationPoller {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
    rx: watch::Receiver<Tracking>,
}

impl LocationPoller {
    /// Start polling `fetch` every `interval`, beginning immediately.
    ///
    /// `fetch` resolves to `Ok(Some(coords))` for a fix, `Ok(None)` when the
    /// tracked entity has no position yet, and `Err` on a transient failure.
    /// Failures are logged and skipped; the last published value stands.
    pub fn spawn<F, Fut>(mut fetch: F, interval: Duration) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = crate::ClientResult<Option<Coordinates>>> + Send,
    {
        let (tx, rx) = watch::channel(Tracking::Awaiting);
        let token = CancellationToken::new();
        let loop_token = token.clone();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = loop_token.cancelled() => break,
                    _ = ticker.tick() => {}
                }

                match fetch().await {
                    Ok(Some(coords)) => {
                        tx.send_replace(Tracking::Located(coords));
                    }
                    Ok(None) => {
                        // No fix yet; the initial Awaiting state stands.
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "location fetch failed, keeping last known position");
                    }
                }
            }
        });

        Self {
            token,
            task: Some(task),
            rx,
        }
    }

    /// The latest known tracking state.
    pub fn current(&self) -> Tracking {
        *self.rx.borrow()
    }

    /// Observe tracking updates.
    pub fn subscribe(&self) -> watch::Receiver<Tracking> {
        self.rx.clone()
    }

    /// Stop polling. Idempotent; once this returns, no further fetch will
    /// be started.
    pub async fn stop(&mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for LocationPoller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
