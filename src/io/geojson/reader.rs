use log::{debug, trace};
use serde_json::{Map, Value};

use crate::datatypes::GeoJsonType;
use crate::error::{json_kind, GeoJsonError, Result};
use crate::feature::{non_feature_member, Feature, FeatureCollection, FeatureId, Properties};
use crate::geometry::{
    non_geometry_member, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::object::GeoJson;

const ARRAY: &str = "array";
const ARRAY_OR_OBJECT: &str = "array or object";

/// Reconstruct a GeoJSON object from a generic JSON value.
///
/// A string value is treated as JSON text and parsed first. Absent input (`null`, an empty
/// string or an empty array) yields `Ok(None)`; anything else either yields the fully built
/// object or fails on the first violated rule. Falsy scalars such as `false`, `0` or the text
/// `"0"` are not absent: they fail with [`GeoJsonError::InvalidValue`].
///
/// ```
/// use geojson_codec::io::geojson::deserialize;
/// use serde_json::json;
///
/// let object = deserialize(&json!({"type": "Point", "coordinates": [1.0, 2.0]}))
///     .unwrap()
///     .unwrap();
/// assert_eq!(object.type_name(), "Point");
///
/// assert!(deserialize(&json!(null)).unwrap().is_none());
/// assert!(deserialize(&json!({"type": "Circle"})).is_err());
/// ```
pub fn deserialize(value: &Value) -> Result<Option<GeoJson>> {
    match value {
        Value::String(text) => deserialize_str(text),
        other => deserialize_value(other),
    }
}

/// Parse JSON text and reconstruct the GeoJSON object it holds.
pub fn deserialize_str(text: &str) -> Result<Option<GeoJson>> {
    if text.trim().is_empty() {
        debug!("Empty GeoJSON text, nothing to deserialize");
        return Ok(None);
    }
    let value: Value = serde_json::from_str(text)?;
    deserialize_value(&value)
}

/// Like [`deserialize`], except that strings are never parsed as JSON text.
///
/// Used for every nested member.
pub(crate) fn deserialize_value(value: &Value) -> Result<Option<GeoJson>> {
    if is_absent(value) {
        debug!("Absent GeoJSON value ({}), nothing to deserialize", json_kind(value));
        return Ok(None);
    }

    let object = match value {
        Value::Object(object) => object,
        // An array is accepted as a container but can never carry a "type" member.
        Value::Array(_) => return Err(missing_property("GeoJson", "type", "string")),
        other => {
            return Err(GeoJsonError::InvalidValue {
                got: json_kind(other),
                expected: ARRAY_OR_OBJECT,
            })
        }
    };

    let tag = match object.get("type") {
        None => return Err(missing_property("GeoJson", "type", "string")),
        Some(Value::String(tag)) => tag,
        Some(other) => return Err(invalid_property("GeoJson", "type", other, "string")),
    };
    let ty: GeoJsonType = tag.parse()?;
    trace!("Deserializing {ty}");

    construct(ty, object).map(Some)
}

/// Extract the arguments `ty` is built from, and build it.
fn construct(ty: GeoJsonType, object: &Map<String, Value>) -> Result<GeoJson> {
    let geometry: Geometry = match ty {
        GeoJsonType::Point => Point::try_from(coordinates(ty, object)?)?.into(),
        GeoJsonType::MultiPoint => MultiPoint::try_new(coordinates(ty, object)?)?.into(),
        GeoJsonType::LineString => LineString::try_new(coordinates(ty, object)?)?.into(),
        GeoJsonType::MultiLineString => {
            MultiLineString::try_new(coordinates(ty, object)?)?.into()
        }
        GeoJsonType::Polygon => Polygon::try_new(coordinates(ty, object)?)?.into(),
        GeoJsonType::MultiPolygon => MultiPolygon::try_new(coordinates(ty, object)?)?.into(),
        GeoJsonType::GeometryCollection => {
            let members = members(ty, object, "geometries", non_geometry_member)?;
            GeometryCollection::try_from_objects(members)?.into()
        }
        GeoJsonType::Feature => return Ok(feature(object)?.into()),
        GeoJsonType::FeatureCollection => {
            let members = members(ty, object, "features", non_feature_member)?;
            return Ok(FeatureCollection::try_from_objects(members)?.into());
        }
    };
    Ok(geometry.into())
}

fn coordinates<'a>(ty: GeoJsonType, object: &'a Map<String, Value>) -> Result<&'a [Value]> {
    match object.get("coordinates") {
        None => Err(missing_property(ty.as_str(), "coordinates", ARRAY)),
        Some(Value::Array(values)) => Ok(values),
        Some(other) => Err(invalid_property(ty.as_str(), "coordinates", other, ARRAY)),
    }
}

/// Deserialize every element of the array member `property`.
///
/// Stops at the first element that fails; an element that deserializes to nothing fails with
/// `on_absent`.
fn members(
    ty: GeoJsonType,
    object: &Map<String, Value>,
    property: &'static str,
    on_absent: fn() -> GeoJsonError,
) -> Result<Vec<GeoJson>> {
    let values = match object.get(property) {
        None => return Err(missing_property(ty.as_str(), property, ARRAY)),
        Some(Value::Array(values)) => values,
        Some(other) => return Err(invalid_property(ty.as_str(), property, other, ARRAY)),
    };

    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            trace!("Deserializing {ty} member {idx}");
            deserialize_value(value)?.ok_or_else(on_absent)
        })
        .collect()
}

fn feature(object: &Map<String, Value>) -> Result<Feature> {
    let type_name = GeoJsonType::Feature.as_str();

    let geometry = match present(object, "geometry") {
        None => None,
        Some(value) if value.is_object() || value.is_array() => match deserialize_value(value)? {
            None => None,
            Some(GeoJson::Geometry(geometry)) => Some(geometry),
            Some(other) => {
                return Err(GeoJsonError::InvalidProperty {
                    type_name: type_name.to_string(),
                    property: "geometry",
                    got: other.type_name(),
                    expected: "Geometry",
                })
            }
        },
        Some(other) => return Err(invalid_property(type_name, "geometry", other, ARRAY_OR_OBJECT)),
    };

    let properties = match present(object, "properties") {
        None => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(Value::Array(values)) => Some(index_keyed(values)),
        Some(other) => {
            return Err(invalid_property(type_name, "properties", other, ARRAY_OR_OBJECT))
        }
    };

    let id = match present(object, "id") {
        None => None,
        Some(Value::String(id)) => Some(FeatureId::String(id.clone())),
        Some(Value::Number(id)) => Some(FeatureId::Number(id.clone())),
        Some(other) => return Err(invalid_property(type_name, "id", other, "string or number")),
    };

    Ok(Feature::from_parts(geometry, properties, id))
}

/// The member `property`, treating an explicit `null` as absent.
fn present<'a>(object: &'a Map<String, Value>, property: &str) -> Option<&'a Value> {
    object.get(property).filter(|value| !value.is_null())
}

/// Properties given as a JSON array are keyed by element index.
fn index_keyed(values: &[Value]) -> Properties {
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| (idx.to_string(), value.clone()))
        .collect()
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(values) => values.is_empty(),
        _ => false,
    }
}

fn missing_property(type_name: &str, property: &'static str, expected: &'static str) -> GeoJsonError {
    GeoJsonError::MissingProperty {
        type_name: type_name.to_string(),
        property,
        expected,
    }
}

fn invalid_property(
    type_name: &str,
    property: &'static str,
    got: &Value,
    expected: &'static str,
) -> GeoJsonError {
    GeoJsonError::InvalidProperty {
        type_name: type_name.to_string(),
        property,
        got: json_kind(got),
        expected,
    }
}
