use hashbrown::HashMap;

use super::{Geocoder, NotFoundReason, Resolution};
use crate::models::Coordinate;

/// Resolves addresses from a fixed, exact-match table
#[derive(Debug, Clone, Default)]
pub struct TableGeocoder {
    entries: HashMap<String, Coordinate>,
}

impl TableGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Coordinate)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, address: impl Into<String>, location: Coordinate) {
        self.entries.insert(address.into(), location);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for TableGeocoder {
    async fn resolve(&self, address: &str) -> Resolution {
        match self.entries.get(address.trim()) {
            Some(c) => Resolution::Found(*c),
            None => Resolution::NotFound(NotFoundReason::NoMatch),
        }
    }
}
