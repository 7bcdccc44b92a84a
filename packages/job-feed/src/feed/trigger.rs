//! Infinite-scroll trigger.
//!
//! Fed with the distance between the bottom of the viewport and the
//! sentinel rendered after the last item. Fires at most once per fetch: the
//! gate is the store's in-flight flag, because the sentinel can stay visible
//! for the whole duration of a slow fetch.

use tracing::debug;

use super::store::IncrementalListStore;

/// Default look-ahead margin in pixels.
pub const DEFAULT_LOOK_AHEAD_PX: u32 = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Fetching,
    /// No next cursor. Left only through [`ScrollTrigger::restart`].
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    look_ahead_px: u32,
    state: TriggerState,
    visible: bool,
    // Cleared after a failed fetch; re-set once the sentinel leaves view or
    // a later fetch succeeds.
    armed: bool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_LOOK_AHEAD_PX)
    }
}

impl ScrollTrigger {
    pub fn new(look_ahead_px: u32) -> Self {
        Self {
            look_ahead_px,
            state: TriggerState::Idle,
            visible: false,
            armed: true,
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn look_ahead_px(&self) -> u32 {
        self.look_ahead_px
    }

    /// Whether the last observation had the sentinel within the margin.
    pub fn is_sentinel_visible(&self) -> bool {
        self.visible
    }

    /// Record an observation. `distance_px` is how far the sentinel sits
    /// below the bottom of the viewport (negative once it is on screen).
    ///
    /// Returns `true` when a next-page request should be made now; the
    /// trigger has then moved to `Fetching`.
    pub fn observe(&mut self, distance_px: i64, store: &IncrementalListStore) -> bool {
        self.visible = distance_px <= i64::from(self.look_ahead_px);
        if !self.visible {
            self.armed = true;
            return false;
        }

        if self.state != TriggerState::Idle || !self.armed || store.is_in_flight() {
            return false;
        }
        if store.is_exhausted() {
            self.state = TriggerState::Exhausted;
            return false;
        }
        if !store.has_more() {
            return false;
        }

        self.state = TriggerState::Fetching;
        debug!(distance_px, next_cursor = ?store.next_cursor(), "Sentinel visible, requesting next page");
        true
    }

    /// A fetch has settled (successfully or not) and the store reflects it.
    pub fn fetch_settled(&mut self, store: &IncrementalListStore, succeeded: bool) {
        if self.state == TriggerState::Exhausted {
            return;
        }
        self.state = if store.is_exhausted() {
            TriggerState::Exhausted
        } else {
            TriggerState::Idle
        };
        if succeeded {
            self.armed = true;
        } else if self.visible {
            self.armed = false;
        }
    }

    /// Start over for a new query.
    pub fn restart(&mut self) {
        self.state = TriggerState::Idle;
        self.armed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Job, Page, PageCursor};

    fn store_with_next(next: Option<u32>) -> IncrementalListStore {
        IncrementalListStore::from_page(Page::new(
            vec![Job::new(1, "A")],
            next.and_then(PageCursor::new),
        ))
    }

    #[test]
    fn test_fires_within_margin() {
        let store = store_with_next(Some(2));
        let mut trigger = ScrollTrigger::new(700);

        assert!(!trigger.observe(701, &store));
        assert!(trigger.observe(700, &store));
        assert_eq!(trigger.state(), TriggerState::Fetching);
    }

    #[test]
    fn test_no_refire_while_fetching() {
        let mut store = store_with_next(Some(2));
        let mut trigger = ScrollTrigger::new(700);

        assert!(trigger.observe(0, &store));
        store.begin_fetch().unwrap();

        // Sentinel stays visible, and even leaves and re-enters, during the fetch.
        assert!(!trigger.observe(-50, &store));
        assert!(!trigger.observe(5000, &store));
        assert!(!trigger.observe(0, &store));

        store.merge(Page::new(vec![Job::new(2, "B")], PageCursor::new(3)));
        trigger.fetch_settled(&store, true);
        assert_eq!(trigger.state(), TriggerState::Idle);
        assert!(trigger.observe(0, &store));
    }

    #[test]
    fn test_gates_on_in_flight_from_elsewhere() {
        let mut store = store_with_next(Some(2));
        let mut trigger = ScrollTrigger::new(700);

        store.begin_fetch().unwrap();
        assert!(!trigger.observe(0, &store));
        assert_eq!(trigger.state(), TriggerState::Idle);
    }

    #[test]
    fn test_exhausted_is_terminal_until_restart() {
        let mut store = store_with_next(Some(2));
        let mut trigger = ScrollTrigger::new(700);

        assert!(trigger.observe(0, &store));
        store.merge(Page::new(vec![Job::new(2, "B")], None));
        trigger.fetch_settled(&store, true);
        assert_eq!(trigger.state(), TriggerState::Exhausted);

        assert!(!trigger.observe(0, &store));
        store.reset(Page::new(vec![Job::new(5, "E")], PageCursor::new(2)));
        assert!(!trigger.observe(0, &store));

        trigger.restart();
        assert!(trigger.observe(0, &store));
    }

    #[test]
    fn test_first_page_without_cursor_exhausts() {
        let store = store_with_next(None);
        let mut trigger = ScrollTrigger::new(700);
        assert!(!trigger.observe(0, &store));
        assert_eq!(trigger.state(), TriggerState::Exhausted);
    }

    #[test]
    fn test_failure_waits_for_sentinel_to_leave() {
        let mut store = store_with_next(Some(2));
        let mut trigger = ScrollTrigger::new(700);

        assert!(trigger.observe(0, &store));
        store.begin_fetch().unwrap();
        store.end_fetch();
        trigger.fetch_settled(&store, false);

        assert_eq!(trigger.state(), TriggerState::Idle);
        assert!(!trigger.observe(0, &store));
        assert!(!trigger.observe(900, &store));
        assert!(trigger.observe(100, &store));
    }

    #[test]
    fn test_success_after_failure_rearms() {
        let mut store = store_with_next(Some(2));
        let mut trigger = ScrollTrigger::new(700);

        assert!(trigger.observe(0, &store));
        store.begin_fetch().unwrap();
        store.end_fetch();
        trigger.fetch_settled(&store, false);
        assert!(!trigger.observe(0, &store));

        // Retried from elsewhere while the sentinel stayed visible.
        store.begin_fetch().unwrap();
        store.merge(Page::new(vec![Job::new(2, "B")], PageCursor::new(3)));
        trigger.fetch_settled(&store, true);

        assert!(trigger.observe(0, &store));
    }
}
