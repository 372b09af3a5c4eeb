use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::linestring::check_positions;
use crate::geometry::multipoint::collect_positions;
use crate::geometry::{array_elements, LineString, Point, Position};

/// A linear ring: the boundary of a [`Polygon`](crate::geometry::Polygon).
///
/// Requires at least four positions. Rings are conventionally closed (first position equals the
/// last) but closure is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing(Vec<Position>);

impl LinearRing {
    pub fn try_new<I, P>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: TryInto<Point>,
        GeoJsonError: From<P::Error>,
    {
        let positions: Vec<P> = positions.into_iter().collect();
        check_positions("LinearRing", positions.len(), 4, "four")?;
        Ok(Self(collect_positions(positions)?))
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn num_positions(&self) -> usize {
        self.0.len()
    }

    /// Whether the first and last positions coincide.
    pub fn is_closed(&self) -> bool {
        self.0.first() == self.0.last()
    }

    pub fn into_inner(self) -> Vec<Position> {
        self.0
    }
}

impl TryFrom<LineString> for LinearRing {
    type Error = GeoJsonError;

    fn try_from(value: LineString) -> Result<Self> {
        let positions = value.into_inner();
        check_positions("LinearRing", positions.len(), 4, "four")?;
        Ok(Self(positions))
    }
}

impl TryFrom<&Value> for LinearRing {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::try_new(array_elements(value, "LinearRing")?)
    }
}

impl TryFrom<Value> for LinearRing {
    type Error = GeoJsonError;

    fn try_from(value: Value) -> Result<Self> {
        (&value).try_into()
    }
}
