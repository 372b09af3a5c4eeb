//! A [GeoJSON](https://datatracker.ietf.org/doc/html/rfc7946) data model and codec.
//!
//! Geometries, features and feature collections are held in a typed, validated object graph
//! ([`GeoJson`], [`Geometry`], [`Feature`], [`FeatureCollection`]). The [`io::geojson`] module
//! rebuilds that graph from an untyped [`serde_json::Value`] by dispatching on the `"type"` member,
//! and turns it back into a value. The [`io::polyline`] module decodes the encoded polyline route
//! format into a [`LineString`](geometry::LineString).
//!
//! ```
//! use geojson_codec::GeoJson;
//!
//! let text = r#"{"type": "Point", "coordinates": [13.4, 52.5]}"#;
//! let object: GeoJson = text.parse().unwrap();
//! assert_eq!(object.type_name(), "Point");
//! assert_eq!(object.to_string().parse::<GeoJson>().unwrap(), object);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use datatypes::GeoJsonType;
pub use error::{GeoJsonError, Result};
pub use feature::{Feature, FeatureCollection, FeatureId, Properties};
pub use geometry::Geometry;
pub use object::GeoJson;

pub mod datatypes;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod io;
mod object;
#[cfg(test)]
pub(crate) mod test;
