//! Coordinates and polygon rings.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A WGS84 position. Serialized as a GeoJSON `[lon, lat]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Finite and within the WGS84 degree ranges
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lon, c.lat]
    }
}

#[cfg(test)]
impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord { x: c.lon, y: c.lat }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// A closed ring: at least 4 points, first point equal to the last.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Coordinate>,
}

impl Ring {
    /// Validate and wrap a sequence of points
    pub fn new(points: Vec<Coordinate>) -> Result<Self, GeometryError> {
        let closed = points.len() > 1 && points.first() == points.last();
        if points.len() < 4 || !closed {
            return Err(GeometryError::MalformedRing {
                points: points.len(),
                closed,
            });
        }
        Ok(Self { points })
    }

    /// Wrap points already known to be closed and long enough
    pub(crate) fn from_closed(points: Vec<Coordinate>) -> Self {
        debug_assert!(points.len() >= 4 && points.first() == points.last());
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Number of points including the closing one
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Convert to a `geo` polygon without holes
    #[cfg(test)]
    pub fn to_polygon(&self) -> geo::Polygon<f64> {
        let exterior: Vec<geo::Coord<f64>> = self.points.iter().copied().map(Into::into).collect();
        geo::Polygon::new(geo::LineString::new(exterior), vec![])
    }
}
