//! Transient notices that revert after a fixed delay.
//!
//! A notice channel holds at most one message. Showing a new message
//! replaces the pending one together with its deadline (last write wins),
//! so there is never a queue of reversions.

use std::time::{Duration, Instant};

/// Single-slot message channel with an expiry deadline.
///
/// Time is passed in explicitly, keeping the channel a pure value.
///
/// # Example
///
/// ```rust
/// use calculon::core::TransientNotice;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut notice = TransientNotice::new(Duration::from_secs(2));
/// notice.show("Memory cleared", start);
///
/// assert_eq!(notice.current(start), Some("Memory cleared"));
/// assert_eq!(notice.current(start + Duration::from_secs(2)), None);
/// ```
#[derive(Clone, Debug)]
pub struct TransientNotice {
    lifetime: Duration,
    message: Option<(String, Instant)>,
}

impl TransientNotice {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            message: None,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Show a message until `now + lifetime`, replacing any pending one.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some((message.into(), now + self.lifetime));
    }

    /// The message, if it has not yet expired at `now`.
    pub fn current(&self, now: Instant) -> Option<&str> {
        match &self.message {
            Some((message, deadline)) if now < *deadline => Some(message),
            _ => None,
        }
    }

    /// Deadline of the pending message, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.message.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Drop the message if it has expired. Returns whether anything changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.message = None;
            return true;
        }
        false
    }

    /// Drop the message immediately.
    pub fn dismiss(&mut self) {
        self.message = None;
    }
}
