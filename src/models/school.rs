//! School entries (configured) and school records (geocoded).

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A configured school before geocoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolEntry {
    pub name: String,
    pub address: String,
}

impl SchoolEntry {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// A geocoded school, as written by the batch run and read by the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRecord {
    pub name: String,
    pub address: String,
    pub location: Coordinate,
    /// Icon locator, if one was known at generation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SchoolRecord {
    pub fn from_entry(entry: &SchoolEntry, location: Coordinate, icon: Option<String>) -> Self {
        Self {
            name: entry.name.clone(),
            address: entry.address.clone(),
            location,
            icon,
        }
    }
}
