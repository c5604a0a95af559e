//! Scroll-reveal tracker
//!
//! Receives visibility crossings from a host watcher and turns them into
//! one-way reveal flags. A region becomes revealed the first time it is
//! reported as intersecting and stays revealed for the rest of the session.
//! Once torn down the tracker ignores every further delivery, so a stale
//! host callback cannot change what the page shows.

use serde::{Deserialize, Serialize};

use crate::region::RegionId;
use crate::visibility::VisibilityState;

/// A visibility crossing reported by the host for one region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityEvent {
    pub region: RegionId,
    pub is_intersecting: bool,
}

impl VisibilityEvent {
    pub fn new(region: impl Into<RegionId>, is_intersecting: bool) -> Self {
        Self {
            region: region.into(),
            is_intersecting,
        }
    }

    pub fn entered(region: impl Into<RegionId>) -> Self {
        Self::new(region, true)
    }

    pub fn left(region: impl Into<RegionId>) -> Self {
        Self::new(region, false)
    }
}

/// Outcome of delivering an event to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The region flipped from hidden to revealed
    Revealed,
    /// Already revealed, or left the viewport
    Unchanged,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownRegion,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Active,
    TornDown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealTracker {
    state: VisibilityState,
    order: Vec<RegionId>,
    phase: Phase,
}

impl RevealTracker {
    pub fn new<I, R>(regions: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RegionId>,
    {
        let mut tracker = Self::default();
        for region in regions {
            tracker.register(region.into());
        }
        tracker
    }

    /// Adds a region discovered after construction. Known regions keep their flag.
    pub fn register(&mut self, region: RegionId) -> bool {
        if self.phase == Phase::TornDown {
            return false;
        }
        if !self.state.register(region.clone()) {
            return false;
        }
        self.order.push(region);
        true
    }

    /// What [`apply`](Self::apply) would do with `event`, without changing anything
    pub fn classify(&self, event: &VisibilityEvent) -> Transition {
        if self.phase == Phase::TornDown {
            return Transition::Ignored(IgnoreReason::TornDown);
        }
        let id = event.region.as_str();
        if !self.state.contains(id) {
            return Transition::Ignored(IgnoreReason::UnknownRegion);
        }
        if event.is_intersecting && !self.state.is_revealed(id) {
            Transition::Revealed
        } else {
            Transition::Unchanged
        }
    }

    pub fn apply(&mut self, event: &VisibilityEvent) -> Transition {
        let transition = self.classify(event);
        match transition {
            Transition::Revealed => {
                self.state.reveal(event.region.as_str());
                tracing::debug!("Region revealed: {}", event.region);
            }
            Transition::Unchanged => {}
            Transition::Ignored(reason) => {
                tracing::trace!("Ignoring visibility event for {}: {:?}", event.region, reason);
            }
        }
        transition
    }

    pub fn on_intersection(&mut self, region: &str, is_intersecting: bool) -> Transition {
        self.apply(&VisibilityEvent::new(region, is_intersecting))
    }

    /// Stops accepting events. Returns `false` if already torn down.
    pub fn teardown(&mut self) -> bool {
        if self.phase == Phase::TornDown {
            return false;
        }
        self.phase = Phase::TornDown;
        true
    }

    pub fn is_torn_down(&self) -> bool {
        self.phase == Phase::TornDown
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.state.is_revealed(id)
    }

    pub fn revealed_count(&self) -> usize {
        self.state.revealed_count()
    }

    /// Registered regions still hidden, in registration order
    pub fn pending(&self) -> Vec<&RegionId> {
        self.order
            .iter()
            .filter(|region| !self.state.is_revealed(region.as_str()))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        !self.state.is_empty() && self.state.revealed_count() == self.state.len()
    }

    pub fn snapshot(&self) -> VisibilityState {
        self.state.clone()
    }
}
