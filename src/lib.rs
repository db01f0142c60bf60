//! Schoolzone - school district boundary map and address checker
//!
//! This library provides shared types and modules for the generate and viewer binaries.

pub mod batch;
pub mod check;
pub mod config;
pub mod error;
pub mod geocode;
pub mod geometry;
pub mod models;
pub mod render;
pub mod store;
pub mod web;

pub use check::BoundaryChecker;
pub use error::{BatchError, GeometryError, StoreError};
pub use models::{BoundaryCheckResult, BoundaryRecord, CheckOutcome, Coordinate, Ring, SchoolRecord};
