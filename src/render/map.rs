//! Leaflet map page.
//!
//! `MapView` collects layers and markers, then renders a self-contained
//! HTML page that pulls Leaflet and OpenStreetMap tiles from their CDNs.

use serde::Serialize;

use super::icons::MarkerIcon;
use crate::models::{BoundaryRecord, Coordinate, Styling};
use crate::store::features::boundary_to_collection;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

#[derive(Debug, Clone, Serialize)]
pub struct Layer {
    /// Tooltip HTML, already escaped
    pub name: String,
    pub geojson: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    /// Popup HTML, already escaped
    pub popup: String,
    pub icon: MarkerIcon,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub styling: Styling,
    pub message: String,
}

#[derive(Serialize)]
struct MapData<'a> {
    center: [f64; 2],
    zoom: u8,
    tiles: &'a str,
    layers: &'a [Layer],
    markers: &'a [Marker],
}

/// A map under construction
#[derive(Debug, Clone)]
pub struct MapView {
    title: String,
    center: Coordinate,
    zoom: u8,
    layers: Vec<Layer>,
    markers: Vec<Marker>,
    banner: Option<Banner>,
    query: String,
}

impl MapView {
    pub fn new(title: impl Into<String>, center: Coordinate, zoom: u8) -> Self {
        Self {
            title: title.into(),
            center,
            zoom,
            layers: Vec::new(),
            markers: Vec::new(),
            banner: None,
            query: String::new(),
        }
    }

    pub fn add_boundary_layer(&mut self, boundary: &BoundaryRecord) -> Result<(), serde_json::Error> {
        self.layers.push(Layer {
            name: escape_html(&boundary.name),
            geojson: serde_json::to_value(boundary_to_collection(boundary))?,
        });
        Ok(())
    }

    /// `label` is plain text; it is escaped into the popup
    pub fn add_marker(&mut self, at: Coordinate, label: &str, icon: MarkerIcon) {
        self.add_marker_html(at, escape_html(label), icon);
    }

    /// Marker whose popup is trusted, pre-escaped HTML
    pub fn add_marker_html(&mut self, at: Coordinate, popup: String, icon: MarkerIcon) {
        self.markers.push(Marker {
            lat: at.lat,
            lon: at.lon,
            popup,
            icon,
        });
    }

    pub fn set_banner(&mut self, styling: Styling, message: impl Into<String>) {
        self.banner = Some(Banner {
            styling,
            message: message.into(),
        });
    }

    /// Prefill for the address input
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn render(&self) -> Result<String, serde_json::Error> {
        let data = MapData {
            center: [self.center.lat, self.center.lon],
            zoom: self.zoom,
            tiles: TILE_URL,
            layers: &self.layers,
            markers: &self.markers,
        };
        // Keep "</script>" out of the inline script
        let data_json = serde_json::to_string(&data)?.replace('<', "\\u003c");

        let banner = self
            .banner
            .as_ref()
            .map(|b| {
                format!(
                    r#"<div class="banner {}">{}</div>"#,
                    b.styling.css_class(),
                    escape_html(&b.message)
                )
            })
            .unwrap_or_default();

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
<style>
  body {{ font-family: sans-serif; margin: 1.5rem; }}
  #map {{ width: 700px; max-width: 100%; height: 500px; }}
  form {{ margin: 1rem 0; }}
  input[name=address] {{ width: 28rem; max-width: 100%; padding: .4rem; }}
  .banner {{ padding: .75rem 1rem; margin: 1rem 0; border-radius: .3rem; }}
  .banner.success {{ background: #d4edda; color: #155724; }}
  .banner.warning {{ background: #fff3cd; color: #856404; }}
  .banner.error {{ background: #f8d7da; color: #721c24; }}
  .pin {{ width: 18px; height: 18px; border-radius: 50% 50% 50% 0; transform: rotate(-45deg);
          border: 2px solid #fff; box-shadow: 0 0 2px #333; }}
  .pin-blue {{ background: #38aadd; }}
  .pin-green {{ background: #72b026; }}
  .pin-red {{ background: #d63e2a; }}
</style>
</head>
<body>
<h1>{title}</h1>
<form method="get" action="/">
  <label>Enter your address: <input name="address" value="{query}" autocomplete="street-address"></label>
  <button type="submit">Check</button>
</form>
{banner}
<div id="map"></div>
<script src="{js}"></script>
<script>
const data = {data};
const map = L.map('map').setView(data.center, data.zoom);
L.tileLayer(data.tiles, {{ maxZoom: 19, attribution: '&copy; OpenStreetMap contributors' }}).addTo(map);
for (const layer of data.layers) {{
  L.geoJSON(layer.geojson).bindTooltip(layer.name).addTo(map);
}}
for (const m of data.markers) {{
  let icon;
  if (m.icon.kind === 'custom') {{
    icon = L.icon({{ iconUrl: m.icon.url, iconSize: [m.icon.size, m.icon.size] }});
  }} else {{
    icon = L.divIcon({{ className: '', html: '<div class="pin pin-' + m.icon.color + '"></div>', iconSize: [22, 22], iconAnchor: [11, 22] }});
  }}
  L.marker([m.lat, m.lon], {{ icon }}).bindPopup(m.popup).addTo(map);
}}
</script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            css = LEAFLET_CSS,
            js = LEAFLET_JS,
            query = escape_html(&self.query),
            banner = banner,
            data = data_json,
        ))
    }
}

/// Minimal HTML escaping for text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
