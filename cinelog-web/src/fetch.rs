use std::cell::Cell;
use std::rc::Rc;

/// Staleness guard for page fetches.
///
/// Every navigation effect creates a fresh guard and cancels it on teardown.
/// A fetch that completes after its page was replaced sees the stale flag
/// and discards its result instead of overwriting the new page's state.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard(Rc<Cell<bool>>);

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_stale(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_guard_is_live() {
        let guard = FetchGuard::new();
        assert!(!guard.is_stale());
    }

    #[test]
    fn cancellation_is_visible_through_clones() {
        let guard = FetchGuard::new();
        let held_by_future = guard.clone();
        guard.cancel();
        assert!(held_by_future.is_stale());
    }
}
