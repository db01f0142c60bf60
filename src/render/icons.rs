//! School icon lookup with a default-marker fallback.

use hashbrown::HashMap;
use serde::Serialize;

use crate::config::IconEntry;
use crate::models::SchoolRecord;

/// Colors of the built-in marker style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    Green,
    Red,
}

/// How a marker is drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MarkerIcon {
    /// Image at `url`, drawn as a `size`×`size` square
    Custom { url: String, size: u32 },
    /// Built-in pin
    Standard {
        color: MarkerColor,
        #[serde(skip_serializing_if = "Option::is_none")]
        glyph: Option<&'static str>,
    },
}

impl MarkerIcon {
    /// Style for schools without an icon entry
    pub fn default_school() -> Self {
        MarkerIcon::Standard {
            color: MarkerColor::Blue,
            glyph: Some("info-sign"),
        }
    }

    pub fn plain(color: MarkerColor) -> Self {
        MarkerIcon::Standard { color, glyph: None }
    }
}

/// Exact-match mapping from school address to icon locator
#[derive(Debug, Clone, Default)]
pub struct IconMap {
    by_address: HashMap<String, String>,
    size: u32,
}

impl IconMap {
    pub fn new(entries: &[IconEntry], size: u32) -> Self {
        Self {
            by_address: entries
                .iter()
                .map(|e| (e.address.clone(), e.url.clone()))
                .collect(),
            size,
        }
    }

    pub fn lookup(&self, address: &str) -> Option<&str> {
        self.by_address.get(address).map(String::as_str)
    }

    /// Record's own icon first, then the address mapping, else the default pin
    pub fn icon_for(&self, school: &SchoolRecord) -> MarkerIcon {
        school
            .icon
            .as_deref()
            .or_else(|| self.lookup(&school.address))
            .map(|url| MarkerIcon::Custom {
                url: url.to_string(),
                size: self.size,
            })
            .unwrap_or_else(MarkerIcon::default_school)
    }

    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }
}
