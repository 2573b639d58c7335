//! Scroll-triggered reveals and the hero entrance sequence

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Stagger between consecutive revealed items
const REVEAL_STAGGER: Duration = Duration::from_millis(100);
/// Rows trimmed from the bottom of the viewport before an item counts as seen
const REVEAL_BOTTOM_MARGIN: u16 = 2;
/// Stagger between hero elements
const HERO_STAGGER: Duration = Duration::from_millis(200);

/// Hero elements, in entrance order
pub const HERO_ELEMENTS: usize = 6;

/// Items that fade in the first time they scroll into view.
///
/// Items are keyed by a stable id, so re-rendering the page in a different
/// order never carries a reveal over to another item. The item at position
/// `i` of the page becomes visible `i * 100ms` after it is first seen.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    seen_at: HashMap<String, Instant>,
}

impl RevealTracker {
    /// Observe `(id, page row)` items against the current viewport
    pub fn observe(
        &mut self,
        items: &[(String, u16)],
        viewport_top: u16,
        viewport_height: u16,
        now: Instant,
    ) {
        let viewport_end = viewport_top
            .saturating_add(viewport_height)
            .saturating_sub(REVEAL_BOTTOM_MARGIN);
        for (index, (id, row)) in items.iter().enumerate() {
            if *row >= viewport_top && *row < viewport_end && !self.seen_at.contains_key(id) {
                self.seen_at
                    .insert(id.clone(), now + REVEAL_STAGGER * index as u32);
            }
        }
    }

    pub fn is_visible(&self, id: &str, now: Instant) -> bool {
        self.seen_at.get(id).is_some_and(|shown_at| now >= *shown_at)
    }

    /// Some item has been seen but is still waiting out its stagger
    pub fn is_animating(&self, now: Instant) -> bool {
        self.seen_at.values().any(|shown_at| now < *shown_at)
    }
}

/// Staggered entrance of the hero elements after the loader finishes
#[derive(Debug, Clone, Default)]
pub struct HeroEntrance {
    started_at: Option<Instant>,
}

impl HeroEntrance {
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Number of hero elements shown so far
    pub fn visible_count(&self, now: Instant) -> usize {
        let Some(started) = self.started_at else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(started);
        let steps = (elapsed.as_millis() / HERO_STAGGER.as_millis()) as usize + 1;
        steps.min(HERO_ELEMENTS)
    }

    pub fn is_visible(&self, element: usize, now: Instant) -> bool {
        element < self.visible_count(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    mod reveal_tracker {
        use super::*;

        fn items(rows: &[(&str, u16)]) -> Vec<(String, u16)> {
            rows.iter().map(|(id, row)| (id.to_string(), *row)).collect()
        }

        #[test]
        fn test_unseen_items_are_hidden() {
            let tracker = RevealTracker::default();
            assert!(!tracker.is_visible("about", Instant::now()));
        }

        #[test]
        fn test_item_in_view_reveals_after_stagger() {
            let t0 = Instant::now();
            let mut tracker = RevealTracker::default();
            tracker.observe(&items(&[("a", 5), ("b", 6), ("c", 40)]), 0, 20, t0);

            assert!(tracker.is_visible("a", t0));
            assert!(!tracker.is_visible("b", t0 + 99 * MS));
            assert!(tracker.is_visible("b", t0 + 100 * MS));
            assert!(!tracker.is_visible("c", t0 + Duration::from_secs(10)));
            assert!(tracker.is_animating(t0));
            assert!(!tracker.is_animating(t0 + 100 * MS));
        }

        #[test]
        fn test_bottom_margin_delays_reveal() {
            let t0 = Instant::now();
            let mut tracker = RevealTracker::default();
            tracker.observe(&items(&[("a", 18)]), 0, 20, t0);
            assert!(!tracker.is_visible("a", t0 + Duration::from_secs(1)));
            tracker.observe(&items(&[("a", 18)]), 1, 20, t0);
            assert!(tracker.is_visible("a", t0));
        }

        #[test]
        fn test_reveal_is_permanent() {
            let t0 = Instant::now();
            let mut tracker = RevealTracker::default();
            tracker.observe(&items(&[("a", 2)]), 0, 20, t0);
            tracker.observe(&items(&[("a", 2)]), 50, 20, t0 + MS);
            assert!(tracker.is_visible("a", t0 + MS));
        }

        #[test]
        fn test_reordered_page_does_not_inherit_reveals() {
            let t0 = Instant::now();
            let mut tracker = RevealTracker::default();
            tracker.observe(&items(&[("skill:Apex", 4), ("skill:SOQL", 5)]), 0, 20, t0);

            // Another tab puts different items at the same positions, out of view
            let swapped = items(&[("experience:Dev", 40), ("experience:Admin", 43)]);
            tracker.observe(&swapped, 0, 20, t0 + MS);
            let later = t0 + Duration::from_secs(5);
            assert!(!tracker.is_visible("experience:Dev", later));
            assert!(!tracker.is_visible("experience:Admin", later));

            tracker.observe(&swapped, 30, 20, later);
            assert!(tracker.is_visible("experience:Dev", later));
        }
    }

    mod hero_entrance {
        use super::*;

        #[test]
        fn test_nothing_before_start() {
            let hero = HeroEntrance::default();
            assert_eq!(hero.visible_count(Instant::now()), 0);
        }

        #[test]
        fn test_elements_appear_every_200ms() {
            let t0 = Instant::now();
            let mut hero = HeroEntrance::default();
            hero.start(t0);
            assert_eq!(hero.visible_count(t0), 1);
            assert_eq!(hero.visible_count(t0 + 199 * MS), 1);
            assert_eq!(hero.visible_count(t0 + 200 * MS), 2);
            assert!(hero.is_visible(2, t0 + 400 * MS));
            assert_eq!(hero.visible_count(t0 + Duration::from_secs(5)), HERO_ELEMENTS);
        }

        #[test]
        fn test_restart_keeps_first_start() {
            let t0 = Instant::now();
            let mut hero = HeroEntrance::default();
            hero.start(t0);
            hero.start(t0 + Duration::from_secs(1));
            assert_eq!(hero.visible_count(t0 + Duration::from_secs(1)), HERO_ELEMENTS);
        }
    }
}
