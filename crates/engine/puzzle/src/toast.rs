//! Transient status messages with a single-shot expiry
//!
//! Time is passed in explicitly so callers decide where `now` comes from.

use std::time::{Duration, Instant};

/// A message waiting to be cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text to display
    pub text: String,
    /// Round the message refers to
    pub round_id: u64,
    /// When the message clears
    pub expires_at: Instant,
}

/// Single-shot, cancellable timer that clears one status message
#[derive(Debug, Clone)]
pub struct Toast {
    duration: Duration,
    pending: Option<StatusMessage>,
}

impl Toast {
    /// Create a toast whose messages live for `duration`
    pub fn new(duration: Duration) -> Self {
        Toast {
            duration,
            pending: None,
        }
    }

    /// Show a message, replacing (and disarming) any pending one
    pub fn show(&mut self, text: impl Into<String>, round_id: u64, now: Instant) {
        self.pending = Some(StatusMessage {
            text: text.into(),
            round_id,
            expires_at: now + self.duration,
        });
    }

    /// Current message text, if any
    pub fn message(&self) -> Option<&str> {
        self.pending.as_ref().map(|m| m.text.as_str())
    }

    /// Current message text, only if it belongs to `round_id`
    pub fn message_for(&self, round_id: u64) -> Option<&str> {
        self.pending
            .as_ref()
            .filter(|m| m.round_id == round_id)
            .map(|m| m.text.as_str())
    }

    /// Whether a message is waiting to expire
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending message clears
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|m| m.expires_at.saturating_duration_since(now))
    }

    /// Clear the message if its deadline has passed
    ///
    /// Returns true only on the tick that clears it.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some(message) if now >= message.expires_at => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Disarm without waiting for the deadline
    ///
    /// Returns true if a message was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_clears_after_deadline() {
        let start = Instant::now();
        let mut toast = Toast::new(Duration::from_millis(100));
        toast.show("Correct!", 1, start);

        assert!(!toast.tick(start + Duration::from_millis(99)));
        assert_eq!(toast.message(), Some("Correct!"));
        assert_eq!(
            toast.remaining(start + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );

        assert!(toast.tick(start + Duration::from_millis(100)));
        assert_eq!(toast.message(), None);
        // Single shot
        assert!(!toast.tick(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_cancel_disarms() {
        let start = Instant::now();
        let mut toast = Toast::new(Duration::from_millis(10));
        toast.show("Incorrect", 3, start);

        assert!(toast.cancel());
        assert!(!toast.cancel());
        assert!(!toast.tick(start + Duration::from_secs(1)));
        assert!(!toast.is_armed());
    }

    #[test]
    fn test_show_replaces_pending_deadline() {
        let start = Instant::now();
        let mut toast = Toast::new(Duration::from_millis(50));
        toast.show("first", 1, start);
        toast.show("second", 1, start + Duration::from_millis(40));

        assert!(!toast.tick(start + Duration::from_millis(60)));
        assert_eq!(toast.message(), Some("second"));
    }

    #[test]
    fn test_message_for_filters_stale_round() {
        let mut toast = Toast::new(Duration::from_secs(1));
        toast.show("Correct!", 4, Instant::now());
        assert_eq!(toast.message_for(4), Some("Correct!"));
        assert_eq!(toast.message_for(5), None);
    }
}
