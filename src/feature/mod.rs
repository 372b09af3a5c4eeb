//! Features and feature collections.

mod collection;

pub use collection::FeatureCollection;
pub(crate) use collection::non_feature_member;

use std::fmt::Display;

use serde_json::{Map, Number, Value};

use crate::datatypes::GeoJsonType;
use crate::geometry::Geometry;

/// Properties of a [`Feature`]: a JSON object.
pub type Properties = Map<String, Value>;

/// The identifier of a [`Feature`]: a string or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureId {
    String(String),
    Number(Number),
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        FeatureId::String(value)
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId::String(value.to_string())
    }
}

impl From<Number> for FeatureId {
    fn from(value: Number) -> Self {
        FeatureId::Number(value)
    }
}

impl From<i64> for FeatureId {
    fn from(value: i64) -> Self {
        FeatureId::Number(value.into())
    }
}

impl From<u64> for FeatureId {
    fn from(value: u64) -> Self {
        FeatureId::Number(value.into())
    }
}

impl From<FeatureId> for Value {
    fn from(value: FeatureId) -> Self {
        match value {
            FeatureId::String(s) => Value::String(s),
            FeatureId::Number(n) => Value::Number(n),
        }
    }
}

impl Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureId::String(s) => f.write_str(s),
            FeatureId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A Feature: an optional geometry paired with properties and an optional identifier.
///
/// The feature exclusively owns its geometry and properties. To change either, build a new
/// feature.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.2>.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    geometry: Option<Geometry>,
    properties: Option<Properties>,
    id: Option<FeatureId>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry>, properties: Properties, id: Option<FeatureId>) -> Self {
        Self {
            geometry,
            properties: Some(properties),
            id,
        }
    }

    /// Like [`Feature::new`], but `properties` may be absent and then serializes as `null`.
    pub fn from_parts(
        geometry: Option<Geometry>,
        properties: Option<Properties>,
        id: Option<FeatureId>,
    ) -> Self {
        Self {
            geometry,
            properties,
            id,
        }
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    /// Look up a single property.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|props| props.get(key))
    }

    pub fn id(&self) -> Option<&FeatureId> {
        self.id.as_ref()
    }

    pub fn type_name(&self) -> &'static str {
        GeoJsonType::Feature.as_str()
    }

    pub fn into_parts(self) -> (Option<Geometry>, Option<Properties>, Option<FeatureId>) {
        (self.geometry, self.properties, self.id)
    }
}

/// A feature with the given geometry, empty properties and no identifier.
impl From<Geometry> for Feature {
    fn from(value: Geometry) -> Self {
        Self::new(Some(value), Properties::new(), None)
    }
}
