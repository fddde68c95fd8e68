//! Stale-result protection for screen loads.
//!
//! A screen that loads data asynchronously (a menu, the cart's restaurant names) starts every
//! load with [`FetchGuard::begin`]. Only the most recent load may publish its result; a slower,
//! older load that finishes later is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    latest: Arc<AtomicU64>,
}

/// Ticket for one load.
#[derive(Debug)]
pub struct FetchToken {
    latest: Arc<AtomicU64>,
    ticket: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load; every earlier token becomes stale.
    pub fn begin(&self) -> FetchToken {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        FetchToken {
            latest: self.latest.clone(),
            ticket,
        }
    }
}

impl FetchToken {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.ticket
    }

    /// `Some(value)` if no newer load has started.
    pub fn accept<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_load_is_accepted() {
        let guard = FetchGuard::new();
        let first = guard.begin();
        let second = guard.begin();

        assert_eq!(first.accept("rest 1 menu"), None);
        assert_eq!(second.accept("rest 2 menu"), Some("rest 2 menu"));

        let clone = guard.clone();
        let third = clone.begin();
        assert!(!second.is_current());
        assert!(third.is_current());
    }
}
