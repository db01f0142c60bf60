use std::sync::Mutex;

use super::DatasetStore;
use crate::error::StoreError;
use crate::models::{BoundaryRecord, SchoolRecord};

/// Keeps both datasets in memory; for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    boundary: Mutex<Option<BoundaryRecord>>,
    schools: Mutex<Option<Vec<SchoolRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(boundary: BoundaryRecord, schools: Vec<SchoolRecord>) -> Self {
        Self {
            boundary: Mutex::new(Some(boundary)),
            schools: Mutex::new(Some(schools)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.lock().map(|b| b.is_none()).unwrap_or(true)
            && self.schools.lock().map(|s| s.is_none()).unwrap_or(true)
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Malformed("memory store lock poisoned".to_string())
}

impl DatasetStore for MemoryStore {
    fn load_boundary(&self) -> Result<BoundaryRecord, StoreError> {
        self.boundary
            .lock()
            .map_err(poisoned)?
            .clone()
            .ok_or(StoreError::Missing)
    }

    fn save_boundary(&self, boundary: &BoundaryRecord) -> Result<(), StoreError> {
        *self.boundary.lock().map_err(poisoned)? = Some(boundary.clone());
        Ok(())
    }

    fn load_schools(&self) -> Result<Vec<SchoolRecord>, StoreError> {
        self.schools
            .lock()
            .map_err(poisoned)?
            .clone()
            .ok_or(StoreError::Missing)
    }

    fn save_schools(&self, schools: &[SchoolRecord]) -> Result<(), StoreError> {
        *self.schools.lock().map_err(poisoned)? = Some(schools.to_vec());
        Ok(())
    }
}
