//! Defines [`GeoJsonError`], representing all errors returned by this crate.

use std::convert::Infallible;
use std::fmt::Debug;

use serde_json::Value;
use thiserror::Error;

/// Enum with all errors in this crate.
///
/// Deserialization failures and construction-time validation failures share this one enum, so
/// an invalid position nested deep inside a document surfaces exactly as it would when building
/// the [`Point`](crate::geometry::Point) by hand.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeoJsonError {
    /// The top-level input is not an object or array.
    #[error("GeoJson expected value of type {expected}, {got} given")]
    InvalidValue {
        got: &'static str,
        expected: &'static str,
    },

    /// A required property for the given type is absent.
    #[error("{type_name} expected \"{property}\" property of type {expected}, none given")]
    MissingProperty {
        type_name: String,
        property: &'static str,
        expected: &'static str,
    },

    /// A property is present but has the wrong shape.
    ///
    /// `got` is the JSON kind of the value, except for a Feature `geometry` that holds a
    /// non-geometry GeoJSON object, where it is that object's tag (e.g. `"Feature"`).
    #[error("{type_name} expected \"{property}\" property of type {expected}, {got} given")]
    InvalidProperty {
        type_name: String,
        property: &'static str,
        got: &'static str,
        expected: &'static str,
    },

    /// The `type` member names a tag outside the recognized set.
    #[error("Invalid GeoJson type \"{0}\"")]
    UnsupportedType(String),

    /// A collection was handed a member of the wrong kind.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A position has too few elements or non-numeric elements.
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// A geometry violates an arity rule, e.g. a LineString with a single position.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Malformed encoded polyline.
    #[error("Invalid polyline at byte {offset}: {reason}")]
    InvalidPolyline { offset: usize, reason: &'static str },

    /// JSON text could not be parsed.
    ///
    /// [serde_json::Error] is neither `Clone` nor `PartialEq`, so only its message is kept.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoJsonError>;

impl From<serde_json::Error> for GeoJsonError {
    fn from(err: serde_json::Error) -> Self {
        GeoJsonError::Json(err.to_string())
    }
}

/// Lets values that are already of the target type pass through `TryInto` bounds.
impl From<Infallible> for GeoJsonError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

/// The name of the JSON kind of `value`, used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn messages_name_type_and_property() {
        let err = GeoJsonError::MissingProperty {
            type_name: "Point".to_string(),
            property: "coordinates",
            expected: "array",
        };
        assert_eq!(
            err.to_string(),
            "Point expected \"coordinates\" property of type array, none given"
        );

        let err = GeoJsonError::InvalidProperty {
            type_name: "Feature".to_string(),
            property: "geometry",
            got: json_kind(&json!(3)),
            expected: "array or object",
        };
        assert_eq!(
            err.to_string(),
            "Feature expected \"geometry\" property of type array or object, number given"
        );
    }

    #[test]
    fn serde_json_errors_convert() {
        let err: GeoJsonError = serde_json::from_str::<Value>("{").unwrap_err().into();
        assert!(matches!(err, GeoJsonError::Json(_)));
    }
}
