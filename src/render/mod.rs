//! Map rendering: icon lookup, the Leaflet page and scene assembly.

mod icons;
mod map;
mod scene;

pub use icons::{IconMap, MarkerColor, MarkerIcon};
pub use map::{escape_html, Banner, Layer, MapView, Marker};
pub use scene::build_map;
