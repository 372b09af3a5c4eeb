use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::Position;

/// A Point geometry. Coordinates consist of a single position.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.2>.
#[derive(Debug, Clone, PartialEq)]
pub struct Point(Position);

impl Point {
    pub fn new(position: Position) -> Self {
        Self(position)
    }

    /// Construct from latitude first, as commonly written by humans.
    ///
    /// The stored position is still `[lng, lat]`.
    pub fn lat_lng(lat: f64, lng: f64) -> Result<Self> {
        Ok(Self(Position::new(vec![lng, lat])?))
    }

    /// Construct from longitude first, the GeoJSON axis order.
    pub fn lng_lat(lng: f64, lat: f64) -> Result<Self> {
        Ok(Self(Position::new(vec![lng, lat])?))
    }

    pub fn position(&self) -> &Position {
        &self.0
    }

    pub fn x(&self) -> f64 {
        self.0.x()
    }

    pub fn y(&self) -> f64 {
        self.0.y()
    }

    pub fn into_inner(self) -> Position {
        self.0
    }
}

impl From<Position> for Point {
    fn from(value: Position) -> Self {
        Self(value)
    }
}

impl From<Point> for Position {
    fn from(value: Point) -> Self {
        value.0
    }
}

impl TryFrom<Vec<f64>> for Point {
    type Error = GeoJsonError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Ok(Self(value.try_into()?))
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = GeoJsonError;

    fn try_from(value: &[f64]) -> Result<Self> {
        Ok(Self(value.try_into()?))
    }
}

impl<const N: usize> TryFrom<[f64; N]> for Point {
    type Error = GeoJsonError;

    fn try_from(value: [f64; N]) -> Result<Self> {
        Ok(Self(value.try_into()?))
    }
}

impl TryFrom<&[Value]> for Point {
    type Error = GeoJsonError;

    fn try_from(value: &[Value]) -> Result<Self> {
        Ok(Self(value.try_into()?))
    }
}

impl TryFrom<&Value> for Point {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(Self(value.try_into()?))
    }
}

impl TryFrom<Value> for Point {
    type Error = GeoJsonError;

    fn try_from(value: Value) -> Result<Self> {
        (&value).try_into()
    }
}
