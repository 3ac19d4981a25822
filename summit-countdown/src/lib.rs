//! Registration-window countdown.
//!
//! [`CountdownState`] is the pure value (remaining seconds, expiry, `MM:SS`
//! formatting). [`start`] drives it from a one-second tokio interval and hands
//! back a [`CountdownHandle`] that owns the tick task.

pub mod state;
mod timer;

pub use state::{format_clock, CountdownState};
pub use timer::{start, start_seconds, CountdownHandle, TICK};
