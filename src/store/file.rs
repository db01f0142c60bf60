use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::features::{
    boundary_from_collection, boundary_to_collection, schools_from_collection,
    schools_to_collection,
};
use super::DatasetStore;
use crate::error::StoreError;
use crate::models::{BoundaryRecord, SchoolRecord};

/// Stores the two datasets as GeoJSON files
#[derive(Debug, Clone)]
pub struct FileStore {
    boundary_path: PathBuf,
    schools_path: PathBuf,
}

impl FileStore {
    pub fn new(boundary_path: impl Into<PathBuf>, schools_path: impl Into<PathBuf>) -> Self {
        Self {
            boundary_path: boundary_path.into(),
            schools_path: schools_path.into(),
        }
    }

    pub fn boundary_path(&self) -> &Path {
        &self.boundary_path
    }

    pub fn schools_path(&self) -> &Path {
        &self.schools_path
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print to a temp file next to `path`, then rename over it
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir).map_err(io_err)?;

    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, value).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        writer.write_all(b"\n").map_err(io_err)?;
        writer.flush().map_err(io_err)?;
    }

    tmp.persist(path).map_err(|e| io_err(e.error))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

impl DatasetStore for FileStore {
    fn load_boundary(&self) -> Result<BoundaryRecord, StoreError> {
        let record = boundary_from_collection(read_json(&self.boundary_path)?)?;
        info!(
            "Loaded boundary '{}' ({} points) from {}",
            record.name,
            record.ring.len(),
            self.boundary_path.display()
        );
        Ok(record)
    }

    fn save_boundary(&self, boundary: &BoundaryRecord) -> Result<(), StoreError> {
        write_json(&self.boundary_path, &boundary_to_collection(boundary))
    }

    fn load_schools(&self) -> Result<Vec<SchoolRecord>, StoreError> {
        let schools = schools_from_collection(read_json(&self.schools_path)?)?;
        info!(
            "Loaded {} schools from {}",
            schools.len(),
            self.schools_path.display()
        );
        Ok(schools)
    }

    fn save_schools(&self, schools: &[SchoolRecord]) -> Result<(), StoreError> {
        write_json(&self.schools_path, &schools_to_collection(schools))
    }
}
