//! Reveal watcher configuration

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Settings handed to the visibility watcher on mount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of a region's area that must be inside the root to count as visible
    pub threshold: f64,
    /// Pixels added to every edge of the viewport before testing intersection
    pub root_margin_px: u32,
    /// Attribute that marks a section as trackable
    pub marker_attribute: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_px: 50,
            marker_attribute: "data-animate".to_string(),
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(CoreError::Config(format!(
                "threshold must be within 0.0..=1.0, got {}",
                self.threshold
            )));
        }
        if self.marker_attribute.trim().is_empty() {
            return Err(CoreError::Config("marker attribute is empty".to_string()));
        }
        Ok(())
    }

    /// CSS margin string understood by `IntersectionObserver`
    pub fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }

    pub fn root_margin_f64(&self) -> f64 {
        f64::from(self.root_margin_px)
    }

    pub fn marker_selector(&self) -> String {
        format!("[{}]", self.marker_attribute)
    }
}
