//! Polling scheduler.
//!
//! `Idle -> Scheduled -> Fetching -> Scheduled -> ...` on a fixed interval
//! after an initial delay; `Stopped` is terminal. No jitter, no backoff: a
//! failed poll is logged and the schedule continues unchanged.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::TaskSync;

/// Scheduler phase, observable for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// Mounted, waiting out the initial delay.
    Idle,
    /// Next tick queued at the fixed interval.
    Scheduled,
    /// Fetch in flight.
    Fetching,
    /// Torn down; no further ticks will fire.
    Stopped,
}

/// Handle to the polling task.
///
/// The timer is a scoped resource: `shutdown()` releases it and waits for
/// the loop to exit; dropping the handle releases it too, so an unmounted
/// view can never be poked by a late tick.
pub struct Poller {
    shutdown_tx: watch::Sender<bool>,
    phase_rx: watch::Receiver<PollPhase>,
    join: Option<JoinHandle<()>>,
}

impl Poller {
    /// Spawn the polling loop.
    pub fn spawn(sync: Arc<TaskSync>, initial_delay: Duration, interval: Duration) -> Self {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let (phase_tx, phase_rx) = watch::channel(PollPhase::Idle);

        let join = tokio::spawn(async move {
            // 初回は initial_delay、以降は interval 固定
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    let _ = phase_tx.send(PollPhase::Stopped);
                    return;
                }
                _ = tokio::time::sleep(initial_delay) => {}
            }

            loop {
                let _ = phase_tx.send(PollPhase::Fetching);
                if let Err(e) = sync.refresh().await {
                    // Next tick is the de facto retry.
                    tracing::warn!(error = %e, "poll failed; schedule unchanged");
                }

                let _ = phase_tx.send(PollPhase::Scheduled);
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = tokio::time::sleep(interval) => {}
                }
            }

            let _ = phase_tx.send(PollPhase::Stopped);
        });

        Self {
            shutdown_tx,
            phase_rx,
            join: Some(join),
        }
    }

    /// Current scheduler phase.
    pub fn phase(&self) -> PollPhase {
        *self.phase_rx.borrow()
    }

    /// Watch the phase, e.g. to await `Stopped`.
    pub fn phase_watch(&self) -> watch::Receiver<PollPhase> {
        self.phase_rx.clone()
    }

    /// Cancel the pending timer and wait for the loop to finish.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        // Deterministic release: the loop exits at its next select without
        // touching disposed state. In-flight requests are not cancelled;
        // their results go nowhere.
        let _ = self.shutdown_tx.send(true);
    }
}
