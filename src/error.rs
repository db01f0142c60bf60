//! Error types shared by the library modules.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the geometry core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// A bounding rectangle was requested for zero points
    #[error("cannot compute a bounding rectangle from an empty point set")]
    EmptyInput,

    /// A ring that is too short or not closed
    #[error("malformed ring: {points} points, closed = {closed} (need >= 4 points, first == last)")]
    MalformedRing { points: usize, closed: bool },
}

/// Errors raised while loading or saving the GeoJSON datasets
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GeoJSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed dataset: {0}")]
    Malformed(String),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("dataset has not been saved yet")]
    Missing,
}

/// Errors that abort a batch generation run
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no school address could be geocoded: {0}")]
    NoResolvedSchools(#[source] GeometryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
