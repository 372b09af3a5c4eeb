use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{array_elements, Polygon};

/// A MultiPolygon geometry. Coordinates consist of an array of Polygon coordinate arrays.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.7>.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    /// Build from polygons, each either a [`Polygon`] or raw data validated into one.
    pub fn try_new<I, P>(polygons: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: TryInto<Polygon>,
        GeoJsonError: From<P::Error>,
    {
        let polygons = polygons
            .into_iter()
            .map(|polygon| {
                let polygon: Polygon = polygon.try_into()?;
                Ok(polygon)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(polygons))
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn num_polygons(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.0
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}

impl TryFrom<&Value> for MultiPolygon {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::try_new(array_elements(value, "MultiPolygon")?)
    }
}
