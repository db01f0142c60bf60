//! Core data models for the boundary viewer and the batch generator.

pub mod boundary;
pub mod check;
pub mod coordinate;
pub mod school;

pub use boundary::BoundaryRecord;
pub use check::{BoundaryCheckResult, CheckOutcome, Styling};
pub use coordinate::{Coordinate, Ring};
pub use school::{SchoolEntry, SchoolRecord};
