//! Building the district boundary record from geocoded school locations.

use chrono::{DateTime, Utc};

use super::BoundingRectangle;
use crate::error::GeometryError;
use crate::models::{BoundaryRecord, Coordinate};

/// Bounding rectangle of `points` as a named boundary record
pub fn rectangle_boundary<I>(
    name: &str,
    points: I,
    generated_at: DateTime<Utc>,
) -> Result<(BoundingRectangle, BoundaryRecord), GeometryError>
where
    I: IntoIterator<Item = Coordinate>,
{
    let rect = BoundingRectangle::from_points(points)?;
    let record = BoundaryRecord::new(name, rect.to_ring()).with_timestamp(generated_at);
    Ok((rect, record))
}
