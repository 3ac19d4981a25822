use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;

use crate::state::CountdownState;

/// Cadence of the countdown.
pub const TICK: Duration = Duration::from_secs(1);

/// Owner of a running countdown.
///
/// The tick task ends on its own at expiry. `stop()` ends it early and
/// dropping the handle aborts it, so a countdown never outlives its consumer.
#[derive(Debug)]
pub struct CountdownHandle {
    state_rx: watch::Receiver<CountdownState>,
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<CountdownState>>,
}

/// Start a countdown of `minutes` minutes on the current tokio runtime.
pub fn start(minutes: u64) -> CountdownHandle {
    start_seconds(minutes.saturating_mul(60))
}

/// Start a countdown of `total_seconds` seconds on the current tokio runtime.
pub fn start_seconds(total_seconds: u64) -> CountdownHandle {
    let initial = CountdownState::from_seconds(total_seconds);
    let (state_tx, state_rx) = watch::channel(initial);
    let (stop_tx, stop_rx) = oneshot::channel();
    let task = tokio::spawn(tick_task(initial, state_tx, stop_rx));

    tracing::debug!(total_seconds, "countdown started");
    CountdownHandle {
        state_rx,
        stop_tx: Some(stop_tx),
        task: Some(task),
    }
}

impl CountdownHandle {
    /// Latest published state.
    pub fn snapshot(&self) -> CountdownState {
        *self.state_rx.borrow()
    }

    pub fn is_expired(&self) -> bool {
        self.state_rx.borrow().is_expired()
    }

    /// A receiver that is notified on every tick.
    ///
    /// `changed()` fails once the tick task has ended (expiry, stop, or drop).
    pub fn subscribe(&self) -> watch::Receiver<CountdownState> {
        self.state_rx.clone()
    }

    /// Resolve once the window has closed.
    ///
    /// If the countdown is stopped first, resolves with the last state seen.
    pub async fn wait_expired(&self) -> CountdownState {
        let mut rx = self.subscribe();
        let outcome = rx.wait_for(CountdownState::is_expired).await.map(|s| *s);
        match outcome {
            Ok(state) => state,
            Err(_) => *rx.borrow(),
        }
    }

    /// Cancel the tick task and return the state it stopped at.
    pub async fn stop(mut self) -> CountdownState {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        let Some(task) = self.task.take() else {
            return self.snapshot();
        };
        match task.await {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(error = %err, "countdown task join error");
                self.snapshot()
            }
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn tick_task(
    mut state: CountdownState,
    state_tx: watch::Sender<CountdownState>,
    mut stop_rx: oneshot::Receiver<()>,
) -> CountdownState {
    if state.is_expired() {
        return state;
    }

    let mut interval = tokio::time::interval(TICK);
    interval.tick().await; // consume the first immediate tick

    loop {
        tokio::select! {
            _ = &mut stop_rx => {
                tracing::debug!(seconds_left = state.seconds_left(), "countdown stopped");
                break;
            }
            _ = interval.tick() => {
                state.tick();
                state_tx.send_replace(state);
                if state.is_expired() {
                    tracing::info!(
                        total_seconds = state.total_seconds(),
                        "registration window closed",
                    );
                    break;
                }
            }
        }
    }

    state
}
