//! The top-level GeoJSON object.

use serde_json::Value;

use crate::datatypes::GeoJsonType;
use crate::error::{GeoJsonError, Result};
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::Geometry;
use crate::io::geojson;

/// Any GeoJSON object: a geometry, a feature or a feature collection.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    /// Reconstruct an object from a parsed JSON value.
    ///
    /// Returns `Ok(None)` for absent input: `null`, an empty string or an empty array. A string
    /// value is parsed as JSON text first.
    pub fn from_value(value: &Value) -> Result<Option<Self>> {
        geojson::deserialize(value)
    }

    /// Reconstruct an object from JSON text.
    pub fn from_json_str(text: &str) -> Result<Option<Self>> {
        geojson::deserialize_str(text)
    }

    /// Convert to a generic JSON value.
    pub fn to_value(&self) -> Value {
        geojson::serialize(self)
    }

    pub fn geojson_type(&self) -> GeoJsonType {
        match self {
            GeoJson::Geometry(geometry) => geometry.geojson_type(),
            GeoJson::Feature(_) => GeoJsonType::Feature,
            GeoJson::FeatureCollection(_) => GeoJsonType::FeatureCollection,
        }
    }

    /// The `"type"` member of this object.
    pub fn type_name(&self) -> &'static str {
        self.geojson_type().as_str()
    }
}

impl From<Geometry> for GeoJson {
    fn from(value: Geometry) -> Self {
        GeoJson::Geometry(value)
    }
}

impl From<Feature> for GeoJson {
    fn from(value: Feature) -> Self {
        GeoJson::Feature(value)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(value: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(value)
    }
}

fn wrong_kind(expected: &str, object: &GeoJson) -> GeoJsonError {
    GeoJsonError::InvalidArgument(format!(
        "expected {expected}, {} given",
        object.type_name()
    ))
}

impl TryFrom<GeoJson> for Geometry {
    type Error = GeoJsonError;

    fn try_from(value: GeoJson) -> Result<Self> {
        match value {
            GeoJson::Geometry(geometry) => Ok(geometry),
            other => Err(wrong_kind("a Geometry", &other)),
        }
    }
}

impl TryFrom<GeoJson> for Feature {
    type Error = GeoJsonError;

    fn try_from(value: GeoJson) -> Result<Self> {
        match value {
            GeoJson::Feature(feature) => Ok(feature),
            other => Err(wrong_kind("a Feature", &other)),
        }
    }
}

impl TryFrom<GeoJson> for FeatureCollection {
    type Error = GeoJsonError;

    fn try_from(value: GeoJson) -> Result<Self> {
        match value {
            GeoJson::FeatureCollection(fc) => Ok(fc),
            other => Err(wrong_kind("a FeatureCollection", &other)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::feature::{f0, fc};
    use crate::test::point::p0;

    #[test]
    fn type_name_of_each_kind() {
        assert_eq!(GeoJson::from(Geometry::from(p0())).type_name(), "Point");
        assert_eq!(GeoJson::from(f0()).type_name(), "Feature");
        assert_eq!(GeoJson::from(fc()).type_name(), "FeatureCollection");
    }

    #[test]
    fn narrowing() {
        let object = GeoJson::from(f0());
        assert_eq!(Feature::try_from(object.clone()).unwrap(), f0());

        let err = Geometry::try_from(object).unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidArgument("expected a Geometry, Feature given".to_string())
        );
    }
}
