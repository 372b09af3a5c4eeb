//! Convert [GeoJSON](https://geojson.org/) objects to and from generic JSON values
//! ([`serde_json::Value`]).
//!
//! [`deserialize`] dispatches on the `"type"` member, validates the members each type requires
//! and rebuilds the full object graph. [`serialize`] is its inverse and never fails.
//!
//! The object types also implement [`serde::Serialize`] and [`serde::Deserialize`] through these
//! functions, so they can be embedded in any serde data structure.

pub use reader::{deserialize, deserialize_str};
pub use writer::{feature_collection_to_value, feature_to_value, geometry_to_value, serialize};

pub(crate) use reader::deserialize_value;

mod reader;
mod writer;

use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{json_kind, GeoJsonError};
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::Geometry;
use crate::object::GeoJson;

fn absent(got: &'static str) -> GeoJsonError {
    GeoJsonError::InvalidValue {
        got,
        expected: "array or object",
    }
}

/// Parse JSON text into an object. Absent input is an error here.
impl FromStr for GeoJson {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(absent("string"));
        }
        let value: Value = serde_json::from_str(s)?;
        from_json_value(&value)
    }
}

fn from_json_value(value: &Value) -> Result<GeoJson, GeoJsonError> {
    deserialize_value(value)?.ok_or_else(|| absent(json_kind(value)))
}

macro_rules! impl_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    self.to_value().serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let value = Value::deserialize(deserializer)?;
                    from_json_value(&value)
                        .and_then(<$ty>::try_from)
                        .map_err(D::Error::custom)
                }
            }
        )*
    };
}

impl_serde!(Geometry, Feature, FeatureCollection);

impl Serialize for GeoJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeoJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_json_value(&value).map_err(D::Error::custom)
    }
}
