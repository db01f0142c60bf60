//! Axis-aligned bounding rectangle over a point set.

use serde::Serialize;

use crate::error::GeometryError;
use crate::models::{Coordinate, Ring};

/// Minimum and maximum longitude/latitude of a point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingRectangle {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingRectangle {
    /// Degenerate rectangle covering a single point
    pub fn from_point(c: Coordinate) -> Self {
        Self {
            min_lon: c.lon,
            min_lat: c.lat,
            max_lon: c.lon,
            max_lat: c.lat,
        }
    }

    /// Fold a point set into its bounding rectangle.
    ///
    /// Fails with [`GeometryError::EmptyInput`] when the set is empty.
    pub fn from_points<I>(points: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        points
            .into_iter()
            .fold(None, |acc: Option<Self>, c| {
                Some(match acc {
                    None => Self::from_point(c),
                    Some(rect) => rect.extend(c),
                })
            })
            .ok_or(GeometryError::EmptyInput)
    }

    /// Grow the rectangle to include `c`
    pub fn extend(self, c: Coordinate) -> Self {
        Self {
            min_lon: self.min_lon.min(c.lon),
            min_lat: self.min_lat.min(c.lat),
            max_lon: self.max_lon.max(c.lon),
            max_lat: self.max_lat.max(c.lat),
        }
    }

    pub fn bottom_left(&self) -> Coordinate {
        Coordinate::new(self.min_lon, self.min_lat)
    }

    pub fn top_left(&self) -> Coordinate {
        Coordinate::new(self.min_lon, self.max_lat)
    }

    pub fn top_right(&self) -> Coordinate {
        Coordinate::new(self.max_lon, self.max_lat)
    }

    pub fn bottom_right(&self) -> Coordinate {
        Coordinate::new(self.max_lon, self.min_lat)
    }

    /// Zero width or zero height
    pub fn is_degenerate(&self) -> bool {
        self.min_lon == self.max_lon || self.min_lat == self.max_lat
    }

    /// Closed 5-point ring: bottom-left, top-left, top-right, bottom-right, bottom-left
    pub fn to_ring(&self) -> Ring {
        Ring::from_closed(vec![
            self.bottom_left(),
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ])
    }
}
