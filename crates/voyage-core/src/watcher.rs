//! Host visibility watcher seam and its scoped lifecycle

use crate::region::RegionId;

/// A host mechanism that reports when watched regions cross the visibility
/// threshold. Events are delivered through whatever callback the
/// implementation was built with.
pub trait VisibilityWatcher {
    /// Starts watching the rendered element for `region`. Returns `false`
    /// when the region has no element, which leaves it hidden.
    fn observe(&mut self, region: &RegionId) -> bool;

    /// Stops all watching. No events may be delivered afterwards.
    fn disconnect(&mut self);
}

/// Owns a watcher for the lifetime of one page mount.
///
/// The watcher is disconnected exactly once, either by [`release`](Self::release)
/// or when the guard is dropped.
pub struct WatchGuard<W: VisibilityWatcher> {
    watcher: W,
    observed: Vec<RegionId>,
    released: bool,
}

impl<W: VisibilityWatcher> WatchGuard<W> {
    pub fn acquire<'a, I>(mut watcher: W, regions: I) -> Self
    where
        I: IntoIterator<Item = &'a RegionId>,
    {
        let mut observed: Vec<RegionId> = Vec::new();
        for region in regions {
            if observed.contains(region) {
                continue;
            }
            if watcher.observe(region) {
                observed.push(region.clone());
            } else {
                tracing::debug!("No rendered element for region {}, leaving it hidden", region);
            }
        }
        tracing::info!("Watching {} regions for reveal", observed.len());

        Self {
            watcher,
            observed,
            released: false,
        }
    }

    pub fn observed(&self) -> &[RegionId] {
        &self.observed
    }

    pub fn watcher(&self) -> &W {
        &self.watcher
    }

    pub fn watcher_mut(&mut self) -> &mut W {
        &mut self.watcher
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Disconnects the watcher. Returns `false` if it was already released.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.watcher.disconnect();
        self.released = true;
        tracing::info!("Released reveal watcher ({} regions)", self.observed.len());
        true
    }
}

impl<W: VisibilityWatcher> Drop for WatchGuard<W> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingWatcher {
        rendered: Vec<&'static str>,
        observed: Vec<RegionId>,
        disconnects: Rc<Cell<usize>>,
    }

    impl VisibilityWatcher for CountingWatcher {
        fn observe(&mut self, region: &RegionId) -> bool {
            if !self.rendered.contains(&region.as_str()) {
                return false;
            }
            self.observed.push(region.clone());
            true
        }

        fn disconnect(&mut self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    fn watcher(disconnects: &Rc<Cell<usize>>) -> CountingWatcher {
        CountingWatcher {
            rendered: vec!["hero", "trust"],
            observed: Vec::new(),
            disconnects: Rc::clone(disconnects),
        }
    }

    #[test]
    fn test_only_rendered_regions_observed() {
        let disconnects = Rc::new(Cell::new(0));
        let regions = vec![
            RegionId::from("hero"),
            RegionId::from("trust"),
            RegionId::from("cta"),
            RegionId::from("hero"),
        ];
        let guard = WatchGuard::acquire(watcher(&disconnects), &regions);
        assert_eq!(guard.observed(), &[RegionId::from("hero"), RegionId::from("trust")]);
        assert_eq!(guard.watcher().observed.len(), 2);
    }

    #[test]
    fn test_release_once() {
        let disconnects = Rc::new(Cell::new(0));
        let mut guard = WatchGuard::acquire(watcher(&disconnects), &[RegionId::from("hero")]);
        assert!(guard.release());
        assert!(!guard.release());
        assert!(guard.is_released());
        drop(guard);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_drop_releases() {
        let disconnects = Rc::new(Cell::new(0));
        {
            let _guard = WatchGuard::acquire(watcher(&disconnects), &[RegionId::from("trust")]);
        }
        assert_eq!(disconnects.get(), 1);
    }
}
