//! Storage for the boundary and school datasets.
//!
//! The batch run is the only writer; the viewer loads both datasets once
//! and never writes back.

pub mod features;
mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::models::{BoundaryRecord, SchoolRecord};

/// Load/save interface for the two datasets
pub trait DatasetStore {
    fn load_boundary(&self) -> Result<BoundaryRecord, StoreError>;
    fn save_boundary(&self, boundary: &BoundaryRecord) -> Result<(), StoreError>;
    fn load_schools(&self) -> Result<Vec<SchoolRecord>, StoreError>;
    fn save_schools(&self, schools: &[SchoolRecord]) -> Result<(), StoreError>;
}
