//! Single-slot deadline timer.
//!
//! The core never owns a real clock or callback. A `Deadline` is a pending
//! wake-up expressed against caller-supplied time; whoever drives the frame
//! loop polls it with [`Deadline::fire`]. Re-arming overwrites the previous
//! due time, so there is never more than one pending wake-up per slot.

use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deadline {
    due: Option<Duration>,
}

impl Deadline {
    pub const fn idle() -> Self {
        Self { due: None }
    }

    /// Cancel any pending wake-up and schedule a new one `delay` after `now`.
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Duration> {
        self.due
    }

    /// Returns true exactly once when `now` has reached the due time.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_due_time() {
        let mut d = Deadline::idle();
        d.arm(Duration::from_millis(100), Duration::from_millis(50));
        assert!(!d.fire(Duration::from_millis(149)));
        assert!(d.fire(Duration::from_millis(150)));
        assert!(!d.fire(Duration::from_millis(500)));
    }

    #[test]
    fn rearming_replaces_pending_due_time() {
        let mut d = Deadline::idle();
        d.arm(Duration::ZERO, Duration::from_millis(200));
        d.arm(Duration::from_millis(150), Duration::from_millis(200));
        assert!(!d.fire(Duration::from_millis(200)));
        assert!(d.fire(Duration::from_millis(350)));
    }

    #[test]
    fn due_reports_absolute_time_until_fired() {
        let mut d = Deadline::idle();
        assert_eq!(d.due(), None);
        d.arm(Duration::from_millis(40), Duration::from_millis(200));
        assert_eq!(d.due(), Some(Duration::from_millis(240)));
        assert!(d.fire(Duration::from_millis(240)));
        assert_eq!(d.due(), None);
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut d = Deadline::idle();
        d.arm(Duration::ZERO, Duration::from_millis(10));
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire(Duration::from_secs(10)));
    }
}
