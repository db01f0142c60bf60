//! One-shot generation of the school and boundary datasets.
//!
//! Schools are geocoded one at a time through a [`Paced`] geocoder, so the
//! provider's rate limit holds for the whole run. Unresolvable addresses
//! are skipped; a run where nothing resolves writes nothing.

use chrono::Utc;
use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::error::BatchError;
use crate::geocode::{Geocoder, Paced, Resolution};
use crate::geometry::{rectangle_boundary, BoundingRectangle};
use crate::models::{BoundaryRecord, SchoolEntry, SchoolRecord};
use crate::render::IconMap;
use crate::store::DatasetStore;

/// What a batch run produced
#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub schools: Vec<SchoolRecord>,
    /// Addresses that did not resolve
    pub skipped: Vec<String>,
    pub rectangle: BoundingRectangle,
    pub boundary: BoundaryRecord,
}

pub struct BatchGenerator<'a, G, S> {
    geocoder: &'a Paced<G>,
    store: &'a S,
    icons: &'a IconMap,
    boundary_name: String,
}

impl<'a, G: Geocoder, S: DatasetStore> BatchGenerator<'a, G, S> {
    pub fn new(geocoder: &'a Paced<G>, store: &'a S, icons: &'a IconMap) -> Self {
        Self {
            geocoder,
            store,
            icons,
            boundary_name: "School Boundary".to_string(),
        }
    }

    pub fn boundary_name(mut self, name: impl Into<String>) -> Self {
        self.boundary_name = name.into();
        self
    }

    /// Geocode `entries` in order, then persist boundary and schools
    pub async fn run(
        &self,
        entries: &[SchoolEntry],
        progress: &ProgressBar,
    ) -> Result<BatchSummary, BatchError> {
        info!(
            "Geocoding {} schools (min interval {:?})",
            entries.len(),
            self.geocoder.min_interval()
        );

        let mut schools = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for entry in entries {
            progress.set_message(entry.name.clone());

            match self.geocoder.resolve(&entry.address).await {
                Resolution::Found(location) => {
                    let icon = self.icons.lookup(&entry.address).map(str::to_string);
                    schools.push(SchoolRecord::from_entry(entry, location, icon));
                }
                Resolution::NotFound(reason) => {
                    warn!("Skipping {} ({}): {}", entry.name, entry.address, reason);
                    skipped.push(entry.address.clone());
                }
            }

            progress.inc(1);
        }

        let (rectangle, boundary) = rectangle_boundary(
            &self.boundary_name,
            schools.iter().map(|s| s.location),
            Utc::now(),
        )
        .map_err(BatchError::NoResolvedSchools)?;

        // Boundary first: a failed write leaves the old pair untouched
        self.store.save_boundary(&boundary)?;
        self.store.save_schools(&schools)?;

        info!(
            "Resolved {}/{} schools; boundary lon [{}, {}] lat [{}, {}]",
            schools.len(),
            entries.len(),
            rectangle.min_lon,
            rectangle.max_lon,
            rectangle.min_lat,
            rectangle.max_lat
        );

        Ok(BatchSummary {
            schools,
            skipped,
            rectangle,
            boundary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconEntry;
    use crate::error::{GeometryError, StoreError};
    use crate::geocode::TableGeocoder;
    use crate::models::Coordinate;
    use crate::store::MemoryStore;
    use std::time::Duration;

    fn entries() -> Vec<SchoolEntry> {
        vec![
            SchoolEntry::new("Bologna Elementary", "1625 E. Frye Rd., Chandler, AZ"),
            SchoolEntry::new("School 2", "5990 S. Val Vista Drive, Chandler, AZ 85249"),
            SchoolEntry::new("School 3", "1205 E. Frye Rd, Chandler, AZ"),
            SchoolEntry::new("School 4", "24901 S. Power Rd. Queen Creek, AZ 85142"),
        ]
    }

    fn geocoder() -> Paced<TableGeocoder> {
        let mut table = TableGeocoder::new();
        table.insert("1625 E. Frye Rd., Chandler, AZ", Coordinate::new(-111.84, 33.30));
        table.insert(
            "5990 S. Val Vista Drive, Chandler, AZ 85249",
            Coordinate::new(-111.80, 33.32),
        );
        table.insert("1205 E. Frye Rd, Chandler, AZ", Coordinate::new(-111.82, 33.28));
        Paced::new(table, Duration::from_secs(1))
    }

    fn icons() -> IconMap {
        IconMap::new(
            &[IconEntry {
                address: "1625 E. Frye Rd., Chandler, AZ".to_string(),
                url: "https://example.com/bologna.png".to_string(),
            }],
            50,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_generates_rectangle_from_resolved_schools() {
        let geocoder = geocoder();
        let store = MemoryStore::new();
        let icons = icons();

        let summary = BatchGenerator::new(&geocoder, &store, &icons)
            .run(&entries(), &ProgressBar::hidden())
            .await
            .unwrap();

        assert_eq!(summary.schools.len(), 3);
        assert_eq!(summary.skipped, vec!["24901 S. Power Rd. Queen Creek, AZ 85142"]);
        assert_eq!(summary.rectangle.min_lon, -111.84);
        assert_eq!(summary.rectangle.max_lon, -111.80);
        assert_eq!(summary.rectangle.min_lat, 33.28);
        assert_eq!(summary.rectangle.max_lat, 33.32);

        let saved = store.load_boundary().unwrap();
        assert_eq!(saved.name, "School Boundary");
        assert_eq!(saved.ring.len(), 5);
        assert!(saved.generated_at.is_some());
        assert_eq!(store.load_schools().unwrap(), summary.schools);
    }

    #[tokio::test(start_paused = true)]
    async fn test_icons_are_attached_to_records() {
        let geocoder = geocoder();
        let store = MemoryStore::new();
        let icons = icons();

        let summary = BatchGenerator::new(&geocoder, &store, &icons)
            .run(&entries(), &ProgressBar::hidden())
            .await
            .unwrap();

        assert_eq!(
            summary.schools[0].icon.as_deref(),
            Some("https://example.com/bologna.png")
        );
        assert!(summary.schools[1].icon.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_respects_pacing() {
        let geocoder = geocoder();
        let store = MemoryStore::new();
        let icons = icons();
        let start = tokio::time::Instant::now();

        BatchGenerator::new(&geocoder, &store, &icons)
            .run(&entries(), &ProgressBar::hidden())
            .await
            .unwrap();

        // Four calls, at least one second between consecutive starts
        assert!(tokio::time::Instant::now() - start >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_resolved_writes_nothing() {
        let geocoder = Paced::new(TableGeocoder::new(), Duration::from_secs(1));
        let store = MemoryStore::new();
        let icons = icons();

        let err = BatchGenerator::new(&geocoder, &store, &icons)
            .boundary_name("Empty")
            .run(&entries(), &ProgressBar::hidden())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            BatchError::NoResolvedSchools(GeometryError::EmptyInput)
        ));
        assert!(store.is_empty());
    }

    /// Memory store whose boundary writes always fail
    struct ReadOnlyBoundary(MemoryStore);

    impl DatasetStore for ReadOnlyBoundary {
        fn load_boundary(&self) -> Result<BoundaryRecord, StoreError> {
            self.0.load_boundary()
        }
        fn save_boundary(&self, _: &BoundaryRecord) -> Result<(), StoreError> {
            Err(StoreError::Malformed("boundary is read-only".to_string()))
        }
        fn load_schools(&self) -> Result<Vec<SchoolRecord>, StoreError> {
            self.0.load_schools()
        }
        fn save_schools(&self, schools: &[SchoolRecord]) -> Result<(), StoreError> {
            self.0.save_schools(schools)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_boundary_write_keeps_schools() {
        let geocoder = geocoder();
        let store = ReadOnlyBoundary(MemoryStore::new());
        let icons = icons();

        let err = BatchGenerator::new(&geocoder, &store, &icons)
            .run(&entries(), &ProgressBar::hidden())
            .await
            .unwrap_err();

        assert!(matches!(err, BatchError::Store(StoreError::Malformed(_))));
        assert!(store.0.is_empty());
    }
}
