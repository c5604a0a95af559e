//! Trackable page regions

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a page region, equal to its element's `id` attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RegionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<PageSection> for RegionId {
    fn from(section: PageSection) -> Self {
        section.region()
    }
}

/// Sections of the landing page that animate in on first view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSection {
    Hero,
    Trust,
    Features,
    HowItWorks,
    Testimonials,
    Cta,
}

impl PageSection {
    /// Document order
    pub const ALL: [PageSection; 6] = [
        PageSection::Hero,
        PageSection::Trust,
        PageSection::Features,
        PageSection::HowItWorks,
        PageSection::Testimonials,
        PageSection::Cta,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PageSection::Hero => "hero",
            PageSection::Trust => "trust",
            PageSection::Features => "features",
            PageSection::HowItWorks => "how-it-works",
            PageSection::Testimonials => "testimonials",
            PageSection::Cta => "cta",
        }
    }

    pub fn region(&self) -> RegionId {
        RegionId::new(self.id())
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for PageSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for section in PageSection::ALL {
            assert_eq!(PageSection::from_id(section.id()), Some(section));
        }
        assert_eq!(PageSection::from_id("footer"), None);
    }

    #[test]
    fn test_section_serde_matches_id() {
        let json = serde_json::to_string(&PageSection::HowItWorks).unwrap();
        assert_eq!(json, "\"how-it-works\"");
    }

    #[test]
    fn test_region_id_borrows_as_str() {
        let mut set = std::collections::HashSet::new();
        set.insert(RegionId::from("hero"));
        assert!(set.contains("hero"));
        assert_eq!(PageSection::Cta.region().to_string(), "cta");
    }
}
