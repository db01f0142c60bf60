//! GeoJSON wire types for the two datasets, and their conversion to models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{BoundaryRecord, Coordinate, Ring, SchoolRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionType {
    FeatureCollection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    Feature,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection<P> {
    #[serde(rename = "type")]
    pub geo_type: CollectionType,
    pub features: Vec<Feature<P>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature<P> {
    #[serde(rename = "type")]
    pub geo_type: FeatureType,
    pub geometry: Geometry,
    pub properties: P,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Coordinate),
    Polygon(Vec<Vec<Coordinate>>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryProperties {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolProperties {
    #[serde(default = "default_school_name")]
    pub name: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

fn default_school_name() -> String {
    "Unnamed School".to_string()
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self {
            geo_type: CollectionType::FeatureCollection,
            features,
        }
    }
}

impl<P> Feature<P> {
    pub fn new(geometry: Geometry, properties: P) -> Self {
        Self {
            geo_type: FeatureType::Feature,
            geometry,
            properties,
        }
    }
}

pub fn boundary_to_collection(boundary: &BoundaryRecord) -> FeatureCollection<BoundaryProperties> {
    FeatureCollection::new(vec![Feature::new(
        Geometry::Polygon(vec![boundary.ring.points().to_vec()]),
        BoundaryProperties {
            name: boundary.name.clone(),
            generated_at: boundary.generated_at,
        },
    )])
}

/// Exactly one polygon feature with a single valid ring
pub fn boundary_from_collection(
    collection: FeatureCollection<BoundaryProperties>,
) -> Result<BoundaryRecord, StoreError> {
    let mut features = collection.features.into_iter();
    let feature = match (features.next(), features.next()) {
        (Some(f), None) => f,
        (None, _) => return Err(StoreError::Malformed("boundary has no features".to_string())),
        (Some(_), Some(_)) => {
            return Err(StoreError::Malformed(
                "boundary must hold exactly one feature".to_string(),
            ))
        }
    };

    let mut rings = match feature.geometry {
        Geometry::Polygon(rings) => rings,
        Geometry::Point(_) => {
            return Err(StoreError::Malformed(
                "boundary geometry is a Point, expected a Polygon".to_string(),
            ))
        }
    };

    if rings.len() != 1 {
        return Err(StoreError::Malformed(format!(
            "boundary polygon has {} rings, expected exactly one",
            rings.len()
        )));
    }

    let ring = Ring::new(rings.remove(0))?;
    Ok(BoundaryRecord {
        name: feature.properties.name,
        ring,
        generated_at: feature.properties.generated_at,
    })
}

pub fn schools_to_collection(schools: &[SchoolRecord]) -> FeatureCollection<SchoolProperties> {
    FeatureCollection::new(
        schools
            .iter()
            .map(|s| {
                Feature::new(
                    Geometry::Point(s.location),
                    SchoolProperties {
                        name: s.name.clone(),
                        address: s.address.clone(),
                        icon: s.icon.clone(),
                    },
                )
            })
            .collect(),
    )
}

pub fn schools_from_collection(
    collection: FeatureCollection<SchoolProperties>,
) -> Result<Vec<SchoolRecord>, StoreError> {
    collection
        .features
        .into_iter()
        .map(|feature| match feature.geometry {
            Geometry::Point(location) => Ok(SchoolRecord {
                name: feature.properties.name,
                address: feature.properties.address,
                location,
                icon: feature.properties.icon,
            }),
            Geometry::Polygon(_) => Err(StoreError::Malformed(format!(
                "school '{}' has a Polygon geometry, expected a Point",
                feature.properties.address
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boundary_wire_format() {
        let ring = Ring::new(vec![
            Coordinate::new(-111.84, 33.28),
            Coordinate::new(-111.84, 33.32),
            Coordinate::new(-111.80, 33.32),
            Coordinate::new(-111.80, 33.28),
            Coordinate::new(-111.84, 33.28),
        ])
        .unwrap();
        let record = BoundaryRecord::new("School Boundary", ring);

        let value = serde_json::to_value(boundary_to_collection(&record)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [-111.84, 33.28],
                            [-111.84, 33.32],
                            [-111.80, 33.32],
                            [-111.80, 33.28],
                            [-111.84, 33.28]
                        ]]
                    },
                    "properties": { "name": "School Boundary" }
                }]
            })
        );
    }

    #[test]
    fn test_school_wire_format() {
        let schools = vec![SchoolRecord {
            name: "Bologna Elementary".to_string(),
            address: "1625 E. Frye Rd., Chandler, AZ".to_string(),
            location: Coordinate::new(-111.8165, 33.2889),
            icon: None,
        }];
        let value = serde_json::to_value(schools_to_collection(&schools)).unwrap();
        assert_eq!(value["features"][0]["geometry"]["type"], "Point");
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"],
            json!([-111.8165, 33.2889])
        );
        assert_eq!(value["features"][0]["properties"]["name"], "Bologna Elementary");
        assert!(value["features"][0]["properties"].get("icon").is_none());
    }

    #[test]
    fn test_schools_without_name_get_placeholder() {
        let collection: FeatureCollection<SchoolProperties> = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-111.8, 33.3] },
                "properties": { "address": "1 Main St" }
            }]
        }))
        .unwrap();
        let schools = schools_from_collection(collection).unwrap();
        assert_eq!(schools[0].name, "Unnamed School");
    }

    #[test]
    fn test_open_boundary_ring_is_rejected() {
        let collection: FeatureCollection<BoundaryProperties> = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]]
                },
                "properties": { "name": "open" }
            }]
        }))
        .unwrap();
        assert!(matches!(
            boundary_from_collection(collection),
            Err(StoreError::Geometry(_))
        ));
    }

    #[test]
    fn test_boundary_with_hole_is_rejected() {
        let square = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 4.0),
            Coordinate::new(4.0, 4.0),
            Coordinate::new(0.0, 0.0),
        ];
        let collection = FeatureCollection::new(vec![Feature::new(
            Geometry::Polygon(vec![square.clone(), square]),
            BoundaryProperties {
                name: "holey".to_string(),
                generated_at: None,
            },
        )]);
        assert!(matches!(
            boundary_from_collection(collection),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_point_boundary_is_rejected() {
        let collection = FeatureCollection::new(vec![Feature::new(
            Geometry::Point(Coordinate::new(0.0, 0.0)),
            BoundaryProperties {
                name: "dot".to_string(),
                generated_at: None,
            },
        )]);
        assert!(matches!(
            boundary_from_collection(collection),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_boundary_collection_is_rejected() {
        let collection: FeatureCollection<BoundaryProperties> = FeatureCollection::new(vec![]);
        assert!(boundary_from_collection(collection).is_err());
    }
}
