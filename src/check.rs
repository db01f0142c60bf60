//! Checking an address against the loaded boundary.

use tracing::{debug, info};

use crate::geocode::{Geocoder, Resolution};
use crate::geometry::ring_contains;
use crate::models::{BoundaryCheckResult, BoundaryRecord, Coordinate};

/// Point-in-boundary lookups over a read-only boundary
#[derive(Debug, Clone)]
pub struct BoundaryChecker {
    boundary: BoundaryRecord,
}

impl BoundaryChecker {
    pub fn new(boundary: BoundaryRecord) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> &BoundaryRecord {
        &self.boundary
    }

    /// Strictly inside the boundary ring; points on an edge are outside
    pub fn contains(&self, point: Coordinate) -> bool {
        ring_contains(&self.boundary.ring, point)
    }

    /// Geocode `address` and test the result. Never fails: an unresolvable
    /// address yields a `NotFound` outcome.
    pub async fn check<G: Geocoder>(&self, geocoder: &G, address: &str) -> BoundaryCheckResult {
        let address = address.trim();

        let result = match geocoder.resolve(address).await {
            Resolution::Found(location) => {
                let inside = self.contains(location);
                debug!("{} resolved to {} (inside = {})", address, location, inside);
                BoundaryCheckResult::resolved(address, location, inside)
            }
            Resolution::NotFound(reason) => {
                debug!("{} not resolved: {}", address, reason);
                BoundaryCheckResult::not_found(address)
            }
        };

        info!("Boundary check for '{}': {:?}", address, result.outcome);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::TableGeocoder;
    use crate::models::{CheckOutcome, Ring};

    fn checker() -> BoundaryChecker {
        BoundaryChecker::new(BoundaryRecord::new(
            "Unit square",
            Ring::new(vec![
                Coordinate::new(-1.0, -1.0),
                Coordinate::new(-1.0, 1.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(1.0, -1.0),
                Coordinate::new(-1.0, -1.0),
            ])
            .unwrap(),
        ))
    }

    fn geocoder() -> TableGeocoder {
        let mut g = TableGeocoder::new();
        g.insert("center", Coordinate::new(0.0, 0.0));
        g.insert("corner", Coordinate::new(2.0, 2.0));
        g.insert("right edge", Coordinate::new(1.0, 0.0));
        g
    }

    #[tokio::test]
    async fn test_inside_address() {
        let result = checker().check(&geocoder(), "center").await;
        assert_eq!(result.outcome, CheckOutcome::Inside);
        assert_eq!(result.location, Some(Coordinate::new(0.0, 0.0)));
    }

    #[tokio::test]
    async fn test_outside_address() {
        let result = checker().check(&geocoder(), "corner").await;
        assert_eq!(result.outcome, CheckOutcome::Outside);
    }

    #[tokio::test]
    async fn test_edge_address_is_outside() {
        let checker = checker();
        let geocoder = geocoder();
        for _ in 0..3 {
            let result = checker.check(&geocoder, "right edge").await;
            assert_eq!(result.outcome, CheckOutcome::Outside);
        }
    }

    #[tokio::test]
    async fn test_unknown_address_is_not_found() {
        let result = checker().check(&geocoder(), "  somewhere else ").await;
        assert_eq!(result.outcome, CheckOutcome::NotFound);
        assert_eq!(result.address, "somewhere else");
        assert!(result.location.is_none());
    }
}
