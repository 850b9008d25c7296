//! Last-write-wins debouncing with an injected clock.
//!
//! Callers pass `now` explicitly so the coordinator stays synchronous and
//! tests control time without sleeping.

use std::time::{Duration, Instant};

/// Delay between the last search keystroke and applying the query.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Holds at most one pending value until its delay has elapsed.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, discarding any value still pending.
    pub fn push(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            log::debug!("debounce: superseding pending value");
        }
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Take the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, d)| *d)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_held_until_deadline() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.push("ret", start);
        assert_eq!(d.poll(start + Duration::from_millis(299)), None);
        assert!(d.is_pending());
        assert_eq!(d.poll(start + Duration::from_millis(300)), Some("ret"));
        assert!(!d.is_pending());
        assert_eq!(d.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn newer_push_supersedes_and_restarts_delay() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.push("r", start);
        d.push("retry", start + Duration::from_millis(200));
        assert_eq!(d.poll(start + Duration::from_millis(350)), None);
        assert_eq!(d.poll(start + Duration::from_millis(500)), Some("retry"));
    }

    #[test]
    fn flush_and_cancel() {
        let start = Instant::now();
        let mut d = Debouncer::default();
        d.push(1, start);
        assert_eq!(d.deadline(), Some(start + SEARCH_DEBOUNCE));
        assert_eq!(d.flush(), Some(1));
        d.push(2, start);
        d.cancel();
        assert_eq!(d.flush(), None);
    }
}
