//! Remaining-time value and its `MM:SS` rendering.

use serde::Serialize;

/// Remaining time in the registration window. Serializes as
/// `{seconds_left, total_seconds}` for page templates.
///
/// Expiry is derived from `seconds_left`, so a state can never be expired
/// with time left or running at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownState {
    seconds_left: u64,
    total_seconds: u64,
}

impl CountdownState {
    /// A fresh window of `minutes` minutes.
    pub fn new(minutes: u64) -> Self {
        Self::from_seconds(minutes.saturating_mul(60))
    }

    pub fn from_seconds(total_seconds: u64) -> Self {
        Self {
            seconds_left: total_seconds,
            total_seconds,
        }
    }

    /// Advance by one second. Returns `false` once already expired.
    pub fn tick(&mut self) -> bool {
        if self.seconds_left == 0 {
            return false;
        }
        self.seconds_left -= 1;
        true
    }

    pub fn seconds_left(&self) -> u64 {
        self.seconds_left
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.seconds_left == 0
    }

    /// Remaining time as `MM:SS`.
    pub fn clock(&self) -> String {
        format_clock(self.seconds_left)
    }
}

/// `pad2(seconds / 60) + ":" + pad2(seconds % 60)`.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(125, "02:05")]
    #[case(59, "00:59")]
    #[case(0, "00:00")]
    #[case(300, "05:00")]
    #[case(600, "10:00")]
    #[case(6_000, "100:00")]
    fn clock_is_zero_padded(#[case] seconds: u64, #[case] expected: &str) {
        assert_eq!(format_clock(seconds), expected);
    }

    #[test]
    fn new_window_counts_minutes() {
        let state = CountdownState::new(5);
        assert_eq!(state.seconds_left(), 300);
        assert_eq!(state.clock(), "05:00");
        assert!(!state.is_expired());
    }

    #[test]
    fn tick_stops_at_zero() {
        let mut state = CountdownState::from_seconds(2);
        assert!(state.tick());
        assert!(state.tick());
        assert!(state.is_expired());

        assert!(!state.tick(), "expired state must not tick");
        assert_eq!(state.seconds_left(), 0);
        assert_eq!(state.total_seconds(), 2);
    }

    #[test]
    fn zero_length_window_starts_expired() {
        assert!(CountdownState::new(0).is_expired());
    }
}
