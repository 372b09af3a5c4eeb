use serde_json::Value;

use crate::error::{json_kind, GeoJsonError, Result};

/// An ordered tuple of at least two coordinates: longitude, latitude and optionally elevation
/// (or any further values).
///
/// A `Position` is only ever observable in a valid state: every constructor checks the arity and
/// that each element is a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(Vec<f64>);

impl Position {
    /// Validate `values` as a position.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.len() < 2 {
            return Err(GeoJsonError::InvalidPosition(
                "Position requires at least two elements".to_string(),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GeoJsonError::InvalidPosition(
                "Position elements must be finite".to_string(),
            ));
        }
        Ok(Self(values))
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// The third element, usually elevation.
    pub fn z(&self) -> Option<f64> {
        self.0.get(2).copied()
    }

    /// The number of elements, always at least two.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = GeoJsonError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&[f64]> for Position {
    type Error = GeoJsonError;

    fn try_from(value: &[f64]) -> Result<Self> {
        Self::new(value.to_vec())
    }
}

impl<const N: usize> TryFrom<[f64; N]> for Position {
    type Error = GeoJsonError;

    fn try_from(value: [f64; N]) -> Result<Self> {
        Self::new(value.to_vec())
    }
}

impl TryFrom<&[Value]> for Position {
    type Error = GeoJsonError;

    fn try_from(value: &[Value]) -> Result<Self> {
        if value.len() < 2 {
            return Err(GeoJsonError::InvalidPosition(
                "Position requires at least two elements".to_string(),
            ));
        }
        let values = value
            .iter()
            .map(|v| {
                v.as_f64().ok_or_else(|| {
                    GeoJsonError::InvalidPosition("Position elements must be numeric".to_string())
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(values)
    }
}

impl TryFrom<&Value> for Position {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Array(values) => values.as_slice().try_into(),
            other => Err(GeoJsonError::InvalidPosition(format!(
                "Position must be an array, {} given",
                json_kind(other)
            ))),
        }
    }
}

impl TryFrom<Value> for Position {
    type Error = GeoJsonError;

    fn try_from(value: Value) -> Result<Self> {
        (&value).try_into()
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn requires_two_elements() {
        let err = Position::new(vec![1.0]).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidPosition(_)));
        assert!(err.to_string().contains("at least two elements"));
    }

    #[test]
    fn elements_must_be_numeric() {
        let err = Position::try_from(&json!([1.0, "x"])).unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidPosition("Position elements must be numeric".to_string())
        );
    }

    #[test]
    fn arity_checked_before_element_kind() {
        let err = Position::try_from(&json!(["x"])).unwrap_err();
        assert!(err.to_string().contains("at least two elements"));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Position::new(vec![f64::NAN, 0.0]).is_err());
        assert!(Position::new(vec![0.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn keeps_extra_dimensions() {
        let pos = Position::try_from(&json!([1, 2.5, 30])).unwrap();
        assert_eq!(pos.as_slice(), &[1.0, 2.5, 30.0]);
        assert_eq!(pos.z(), Some(30.0));
        assert_eq!(pos.dim(), 3);
    }

    #[test]
    fn rejects_non_array() {
        let err = Position::try_from(&json!(5)).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidPosition(_)));
    }
}
