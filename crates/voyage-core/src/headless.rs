//! Geometry-driven watcher for hosts without `IntersectionObserver`
//!
//! Evaluates the configured threshold and root margin against a region
//! layout and a scrollable viewport. Like the browser observer it reports
//! each region's state once when it starts being watched and afterwards
//! only when that state flips.

use std::collections::HashMap;

use crate::config::RevealConfig;
use crate::geometry::{intersection_ratio, Rect};
use crate::region::RegionId;
use crate::tracker::VisibilityEvent;
use crate::watcher::VisibilityWatcher;

pub struct GeometryWatcher {
    config: RevealConfig,
    viewport: Rect,
    layout: HashMap<RegionId, Rect>,
    watched: Vec<(RegionId, bool)>,
    queue: Vec<VisibilityEvent>,
    connected: bool,
}

impl GeometryWatcher {
    pub fn new(config: RevealConfig, viewport: Rect) -> Self {
        Self {
            config,
            viewport,
            layout: HashMap::new(),
            watched: Vec::new(),
            queue: Vec::new(),
            connected: true,
        }
    }

    /// Places a rendered element for `region`
    pub fn with_region(mut self, region: impl Into<RegionId>, bounds: Rect) -> Self {
        self.layout.insert(region.into(), bounds);
        self
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_intersecting(&self, bounds: &Rect) -> bool {
        intersection_ratio(bounds, &self.viewport, self.config.root_margin_f64())
            .map(|ratio| ratio >= self.config.threshold)
            .unwrap_or(false)
    }

    /// Moves the viewport to vertical offset `y` and returns the crossings it caused
    pub fn scroll_to(&mut self, y: f64) -> Vec<VisibilityEvent> {
        self.viewport.y = y;
        if self.connected {
            let viewport = self.viewport;
            let margin = self.config.root_margin_f64();
            let threshold = self.config.threshold;
            for (region, last) in self.watched.iter_mut() {
                let Some(bounds) = self.layout.get(&*region) else {
                    continue;
                };
                let now = intersection_ratio(bounds, &viewport, margin)
                    .map(|ratio| ratio >= threshold)
                    .unwrap_or(false);
                if now != *last {
                    *last = now;
                    self.queue.push(VisibilityEvent::new(region.clone(), now));
                }
            }
        }
        self.take_events()
    }

    /// Drains events produced since the last call
    pub fn take_events(&mut self) -> Vec<VisibilityEvent> {
        std::mem::take(&mut self.queue)
    }
}

impl VisibilityWatcher for GeometryWatcher {
    fn observe(&mut self, region: &RegionId) -> bool {
        if !self.connected {
            return false;
        }
        let Some(bounds) = self.layout.get(region).copied() else {
            return false;
        };
        if self.watched.iter().any(|(watched, _)| watched == region) {
            return true;
        }
        let now = self.is_intersecting(&bounds);
        self.watched.push((region.clone(), now));
        self.queue.push(VisibilityEvent::new(region.clone(), now));
        true
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.watched.clear();
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::PageSection;
    use crate::tracker::{IgnoreReason, RevealTracker, Transition};
    use crate::watcher::WatchGuard;

    /// Six stacked 600px sections under an 800px viewport
    fn landing_layout() -> GeometryWatcher {
        let viewport = Rect::new(0.0, 0.0, 1200.0, 800.0);
        PageSection::ALL.iter().enumerate().fold(
            GeometryWatcher::new(RevealConfig::default(), viewport),
            |watcher, (index, section)| {
                watcher.with_region(*section, Rect::new(0.0, 600.0 * index as f64, 1200.0, 600.0))
            },
        )
    }

    fn deliver(tracker: &mut RevealTracker, events: Vec<VisibilityEvent>) {
        for event in events {
            tracker.apply(&event);
        }
    }

    #[test]
    fn test_initial_observation_reports_state() {
        let mut watcher = landing_layout();
        assert!(watcher.observe(&PageSection::Hero.region()));
        assert!(watcher.observe(&PageSection::Cta.region()));
        let events = watcher.take_events();
        assert_eq!(
            events,
            vec![
                VisibilityEvent::entered(PageSection::Hero),
                VisibilityEvent::left(PageSection::Cta),
            ]
        );
    }

    #[test]
    fn test_margin_anticipates_reveal() {
        // Section starts 30px below the viewport, inside the 50px margin
        let viewport = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let section = Rect::new(0.0, 830.0, 1200.0, 200.0);
        let watcher = GeometryWatcher::new(RevealConfig::default(), viewport);
        assert!(viewport.intersection(&section).is_none());
        // 20px of 200px inside the margin is exactly the 10% threshold
        assert!(watcher.is_intersecting(&section));
        assert!(!watcher.is_intersecting(&section.translate(0.0, 1.0)));
    }

    #[test]
    fn test_scroll_only_reports_crossings() {
        let mut watcher = landing_layout();
        watcher.observe(&PageSection::Features.region());
        watcher.take_events();

        assert!(watcher.scroll_to(10.0).is_empty());
        let events = watcher.scroll_to(900.0);
        assert_eq!(events, vec![VisibilityEvent::entered(PageSection::Features)]);
        assert!(watcher.scroll_to(950.0).is_empty());
        assert_eq!(
            watcher.scroll_to(0.0),
            vec![VisibilityEvent::left(PageSection::Features)]
        );
    }

    #[test]
    fn test_scroll_through_page_reveals_everything_once() {
        let mut tracker = RevealTracker::new(PageSection::ALL);
        let regions: Vec<RegionId> = PageSection::ALL.iter().map(PageSection::region).collect();
        let mut guard = WatchGuard::acquire(landing_layout(), &regions);
        deliver(&mut tracker, guard.watcher_mut().take_events());
        assert!(tracker.is_revealed("hero"));
        assert!(tracker.is_revealed("trust"));
        assert!(!tracker.is_revealed("features"));

        let mut y = 0.0;
        while y <= 3600.0 {
            let events = guard.watcher_mut().scroll_to(y);
            deliver(&mut tracker, events);
            y += 100.0;
        }
        assert!(tracker.is_complete());

        // Scrolling back up hides nothing
        let events = guard.watcher_mut().scroll_to(1800.0);
        deliver(&mut tracker, events);
        let events = guard.watcher_mut().scroll_to(0.0);
        assert!(events.iter().any(|event| !event.is_intersecting));
        deliver(&mut tracker, events);
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_unrendered_region_stays_hidden() {
        let viewport = Rect::new(0.0, 0.0, 1200.0, 800.0);
        let watcher = GeometryWatcher::new(RevealConfig::default(), viewport)
            .with_region("hero", Rect::new(0.0, 0.0, 1200.0, 600.0));
        let mut tracker = RevealTracker::new(["hero", "testimonials"]);
        let regions = [RegionId::from("hero"), RegionId::from("testimonials")];
        let mut guard = WatchGuard::acquire(watcher, &regions);
        assert_eq!(guard.observed(), &[RegionId::from("hero")]);

        for y in [0.0, 2000.0, 5000.0] {
            let events = guard.watcher_mut().scroll_to(y);
            deliver(&mut tracker, events);
        }
        assert!(!tracker.is_revealed("testimonials"));
    }

    #[test]
    fn test_no_events_after_release() {
        let mut tracker = RevealTracker::new(PageSection::ALL);
        let regions: Vec<RegionId> = PageSection::ALL.iter().map(PageSection::region).collect();
        let mut guard = WatchGuard::acquire(landing_layout(), &regions);
        guard.release();
        tracker.teardown();

        assert!(guard.watcher_mut().scroll_to(1800.0).is_empty());
        assert!(!guard.watcher().is_connected());

        // A stale delivery that raced the teardown changes nothing
        assert_eq!(
            tracker.apply(&VisibilityEvent::entered(PageSection::Cta)),
            Transition::Ignored(IgnoreReason::TornDown)
        );
        assert_eq!(tracker.revealed_count(), 0);
    }
}
