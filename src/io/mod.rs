//! Conversions between GeoJSON objects and other representations: generic JSON values, display
//! text, encoded polylines and, with the `geo` feature, [`geo`](https://docs.rs/geo) geometries.

mod display;
#[cfg(feature = "geo")]
pub mod geo;
pub mod geojson;
pub mod polyline;
