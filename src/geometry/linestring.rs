use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::multipoint::collect_positions;
use crate::geometry::{array_elements, MultiPoint, Point, Position};

/// A LineString geometry. Coordinates consist of an array of at least two positions.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.4>.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString(Vec<Position>);

impl LineString {
    /// Build from points or raw positions, the same way as [`MultiPoint::try_new`], then require
    /// at least two of them.
    ///
    /// The arity is checked before any element is validated.
    pub fn try_new<I, P>(positions: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: TryInto<Point>,
        GeoJsonError: From<P::Error>,
    {
        let positions: Vec<P> = positions.into_iter().collect();
        check_positions("LineString", positions.len(), 2, "two")?;
        Ok(Self(collect_positions(positions)?))
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn num_positions(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<Position> {
        self.0
    }
}

pub(crate) fn check_positions(
    type_name: &str,
    len: usize,
    min: usize,
    min_text: &str,
) -> Result<()> {
    if len < min {
        return Err(GeoJsonError::InvalidGeometry(format!(
            "{type_name} requires at least {min_text} positions"
        )));
    }
    Ok(())
}

impl TryFrom<MultiPoint> for LineString {
    type Error = GeoJsonError;

    fn try_from(value: MultiPoint) -> Result<Self> {
        let positions = value.into_inner();
        check_positions("LineString", positions.len(), 2, "two")?;
        Ok(Self(positions))
    }
}

impl TryFrom<Vec<Point>> for LineString {
    type Error = GeoJsonError;

    fn try_from(value: Vec<Point>) -> Result<Self> {
        Self::try_new(value)
    }
}

impl TryFrom<&Value> for LineString {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::try_new(array_elements(value, "LineString")?)
    }
}

impl TryFrom<Value> for LineString {
    type Error = GeoJsonError;

    fn try_from(value: Value) -> Result<Self> {
        (&value).try_into()
    }
}
