//! Per-region reveal flags

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::region::RegionId;

/// Mapping from registered region to its one-way `revealed` flag.
///
/// A region that was never registered reads as not revealed and cannot be
/// revealed. Flags only ever move from `false` to `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityState {
    revealed: HashMap<RegionId, bool>,
}

impl VisibilityState {
    pub fn new<I, R>(regions: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RegionId>,
    {
        let mut state = Self::default();
        for region in regions {
            state.register(region.into());
        }
        state
    }

    /// Adds `region` as hidden. Returns `false` if it was already known, in
    /// which case its flag is left as is.
    pub fn register(&mut self, region: RegionId) -> bool {
        if self.revealed.contains_key(&region) {
            return false;
        }
        self.revealed.insert(region, false);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.revealed.contains_key(id)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }

    /// Sets the flag for a registered region. Returns whether anything changed.
    pub fn reveal(&mut self, id: &str) -> bool {
        match self.revealed.get_mut(id) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Reducer form of [`reveal`](Self::reveal)
    pub fn with_revealed(mut self, id: &str) -> Self {
        self.reveal(id);
        self
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.values().filter(|flag| **flag).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_hidden() {
        let state = VisibilityState::new(["hero", "trust", "features"]);
        assert_eq!(state.len(), 3);
        assert_eq!(state.revealed_count(), 0);
        assert!(!state.is_revealed("hero"));
        assert!(!state.is_revealed("missing"));
    }

    #[test]
    fn test_with_revealed_is_pure_transition() {
        let before = VisibilityState::new(["hero", "trust"]);
        let after = before.clone().with_revealed("hero");
        assert!(!before.is_revealed("hero"));
        assert!(after.is_revealed("hero"));
        assert!(!after.is_revealed("trust"));
    }

    #[test]
    fn test_reveal_reports_change_once() {
        let mut state = VisibilityState::new(["hero"]);
        assert!(state.reveal("hero"));
        assert!(!state.reveal("hero"));
        assert!(state.is_revealed("hero"));
    }

    #[test]
    fn test_unregistered_region_cannot_be_revealed() {
        let mut state = VisibilityState::new(["hero"]);
        assert!(!state.reveal("pricing"));
        assert!(!state.contains("pricing"));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_register_keeps_existing_flag() {
        let mut state = VisibilityState::new(["hero"]).with_revealed("hero");
        assert!(!state.register(RegionId::from("hero")));
        assert!(state.is_revealed("hero"));
        assert!(state.register(RegionId::from("cta")));
        assert!(!state.is_revealed("cta"));
    }
}
