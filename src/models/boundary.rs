//! The persisted district boundary.

use chrono::{DateTime, Utc};

use super::Ring;

/// A named boundary polygon (a single outer ring)
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryRecord {
    pub name: String,
    pub ring: Ring,
    /// Set by the batch run; absent in hand-written boundary files
    pub generated_at: Option<DateTime<Utc>>,
}

impl BoundaryRecord {
    pub fn new(name: impl Into<String>, ring: Ring) -> Self {
        Self {
            name: name.into(),
            ring,
            generated_at: None,
        }
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }
}
