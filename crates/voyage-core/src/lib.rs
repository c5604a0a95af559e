//! VoyageAI Landing Core
//!
//! Host-independent state for the landing page: the scroll-reveal tracker,
//! its configuration, the watcher lifecycle and the mobile menu state.
//! The browser binding lives in `voyage-marketing`.

pub mod config;
pub mod geometry;
pub mod headless;
pub mod menu;
pub mod region;
pub mod tracker;
pub mod visibility;
pub mod watcher;

use thiserror::Error;

pub use config::RevealConfig;
pub use geometry::{intersection_ratio, Rect};
pub use headless::GeometryWatcher;
pub use menu::MenuState;
pub use region::{PageSection, RegionId};
pub use tracker::{IgnoreReason, RevealTracker, Transition, VisibilityEvent};
pub use visibility::VisibilityState;
pub use watcher::{VisibilityWatcher, WatchGuard};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Host error: {0}")]
    Host(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
