//! Assembling the full map: boundary, schools and the queried address.

use super::icons::{IconMap, MarkerColor, MarkerIcon};
use super::map::{escape_html, MapView};
use crate::config::MapConfig;
use crate::models::{BoundaryCheckResult, BoundaryRecord, CheckOutcome, Coordinate, SchoolRecord};

/// Build the map for one page view. A not-found query gets a banner but no marker.
pub fn build_map(
    config: &MapConfig,
    boundary: &BoundaryRecord,
    schools: &[SchoolRecord],
    icons: &IconMap,
    result: Option<&BoundaryCheckResult>,
) -> Result<MapView, serde_json::Error> {
    let mut view = MapView::new(
        config.title.clone(),
        Coordinate::new(config.center_lon, config.center_lat),
        config.zoom,
    );
    view.add_boundary_layer(boundary)?;

    for school in schools {
        let popup = format!(
            "<b>{}</b><br>{}",
            escape_html(&school.name),
            escape_html(&school.address)
        );
        view.add_marker_html(school.location, popup, icons.icon_for(school));
    }

    if let Some(result) = result {
        view.set_query(result.address.clone());
        view.set_banner(result.outcome.styling(), result.message());

        let color = match result.outcome {
            CheckOutcome::Inside => Some(MarkerColor::Green),
            CheckOutcome::Outside => Some(MarkerColor::Red),
            CheckOutcome::NotFound => None,
        };
        if let (Some(color), Some(location)) = (color, result.location) {
            view.add_marker(location, &result.address, MarkerIcon::plain(color));
        }
    }

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconEntry;
    use crate::models::{Ring, Styling};

    fn boundary() -> BoundaryRecord {
        BoundaryRecord::new(
            "School Boundary",
            Ring::new(vec![
                Coordinate::new(-111.84, 33.28),
                Coordinate::new(-111.84, 33.32),
                Coordinate::new(-111.80, 33.32),
                Coordinate::new(-111.80, 33.28),
                Coordinate::new(-111.84, 33.28),
            ])
            .unwrap(),
        )
    }

    fn schools() -> Vec<SchoolRecord> {
        vec![
            SchoolRecord {
                name: "Bologna Elementary".to_string(),
                address: "1625 E. Frye Rd., Chandler, AZ".to_string(),
                location: Coordinate::new(-111.84, 33.30),
                icon: None,
            },
            SchoolRecord {
                name: "School 5".to_string(),
                address: "2626 E. Pecos Road, Chandler, AZ 85225".to_string(),
                location: Coordinate::new(-111.80, 33.32),
                icon: None,
            },
        ]
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

    #[test]
    fn test_schools_get_icons_or_default() {
        let view = build_map(&MapConfig::default(), &boundary(), &schools(), &icons(), None).unwrap();
        assert_eq!(view.layers().len(), 1);
        assert_eq!(view.markers().len(), 2);
        assert!(matches!(view.markers()[0].icon, MarkerIcon::Custom { .. }));
        assert_eq!(view.markers()[1].icon, MarkerIcon::default_school());
        assert_eq!(
            view.markers()[0].popup,
            "<b>Bologna Elementary</b><br>1625 E. Frye Rd., Chandler, AZ"
        );
        assert!(view.banner().is_none());
    }

    #[test]
    fn test_inside_query_adds_green_marker() {
        let result = BoundaryCheckResult::resolved("home", Coordinate::new(-111.82, 33.30), true);
        let view = build_map(&MapConfig::default(), &boundary(), &schools(), &icons(), Some(&result)).unwrap();

        assert_eq!(view.markers().len(), 3);
        assert_eq!(view.markers()[2].icon, MarkerIcon::plain(MarkerColor::Green));
        assert_eq!(view.banner().unwrap().styling, Styling::Success);
    }

    #[test]
    fn test_outside_query_adds_red_marker() {
        let result = BoundaryCheckResult::resolved("far", Coordinate::new(-110.0, 33.30), false);
        let view = build_map(&MapConfig::default(), &boundary(), &schools(), &icons(), Some(&result)).unwrap();

        assert_eq!(view.markers()[2].icon, MarkerIcon::plain(MarkerColor::Red));
        assert_eq!(view.banner().unwrap().styling, Styling::Warning);
    }

    #[test]
    fn test_not_found_query_adds_no_marker() {
        let result = BoundaryCheckResult::not_found("nowhere");
        let view = build_map(&MapConfig::default(), &boundary(), &schools(), &icons(), Some(&result)).unwrap();

        assert_eq!(view.markers().len(), 2);
        let banner = view.banner().unwrap();
        assert_eq!(banner.styling, Styling::Error);
        assert_eq!(banner.message, "Address not found. Please try again.");
    }
}
