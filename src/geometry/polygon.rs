use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{array_elements, LinearRing};

/// A Polygon geometry. Coordinates consist of an array of linear rings: the exterior ring first,
/// then any holes.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.6>.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(Vec<LinearRing>);

impl Polygon {
    /// Build from rings, each either a [`LinearRing`] or raw data validated into one.
    pub fn try_new<I, R>(rings: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: TryInto<LinearRing>,
        GeoJsonError: From<R::Error>,
    {
        let rings = rings
            .into_iter()
            .map(|ring| {
                let ring: LinearRing = ring.try_into()?;
                Ok(ring)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(rings))
    }

    pub fn rings(&self) -> &[LinearRing] {
        &self.0
    }

    pub fn exterior(&self) -> Option<&LinearRing> {
        self.0.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn into_inner(self) -> Vec<LinearRing> {
        self.0
    }
}

impl From<Vec<LinearRing>> for Polygon {
    fn from(value: Vec<LinearRing>) -> Self {
        Self(value)
    }
}

impl TryFrom<&Value> for Polygon {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::try_new(array_elements(value, "Polygon")?)
    }
}

impl TryFrom<Value> for Polygon {
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
    fn exterior_and_holes() {
        let polygon = Polygon::try_from(json!([
            [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
            [[2, 2], [3, 2], [3, 3], [2, 2]]
        ]))
        .unwrap();
        assert_eq!(polygon.exterior().unwrap().num_positions(), 5);
        assert_eq!(polygon.interiors().len(), 1);
    }

    #[test]
    fn no_rings() {
        let polygon = Polygon::try_from(json!([])).unwrap();
        assert!(polygon.exterior().is_none());
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn short_ring_fails() {
        let err = Polygon::try_from(json!([[[0, 0], [1, 1]]])).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidGeometry(_)));
    }

    #[test]
    fn non_array_fails() {
        let err = Polygon::try_from(json!({"a": 1})).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidGeometry(_)));
    }
}
