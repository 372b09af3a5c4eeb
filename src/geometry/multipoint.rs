use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{array_elements, LineString, Point, Position};

/// A MultiPoint geometry. Coordinates consist of an array of positions.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.3>.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint(Vec<Position>);

impl MultiPoint {
    /// Build from anything that converts into a [`Point`]: already validated points, or raw
    /// position data that is validated on the way in.
    ///
    /// ```
    /// use geojson_codec::geometry::{MultiPoint, Point};
    ///
    /// let mp = MultiPoint::try_new(vec![vec![0.0, 1.0], vec![2.0, 3.0]]).unwrap();
    /// assert_eq!(mp.num_points(), 2);
    ///
    /// let mp = MultiPoint::try_new([Point::lng_lat(0.0, 1.0).unwrap()]).unwrap();
    /// assert_eq!(mp.num_points(), 1);
    /// ```
    pub fn try_new<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: TryInto<Point>,
        GeoJsonError: From<P::Error>,
    {
        Ok(Self(collect_positions(points)?))
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// The number of points in this MultiPoint
    pub fn num_points(&self) -> usize {
        self.0.len()
    }

    /// Access to a specified point in this MultiPoint
    /// Will return None if the provided index is out of bounds
    pub fn point(&self, i: usize) -> Option<Point> {
        self.0.get(i).cloned().map(Point::new)
    }

    pub fn into_inner(self) -> Vec<Position> {
        self.0
    }
}

/// Coerce each item into a [`Point`] and keep its position.
///
/// Validation errors from the items propagate unchanged.
pub(crate) fn collect_positions<I, P>(points: I) -> Result<Vec<Position>>
where
    I: IntoIterator<Item = P>,
    P: TryInto<Point>,
    GeoJsonError: From<P::Error>,
{
    points
        .into_iter()
        .map(|item| {
            let point: Point = item.try_into()?;
            Ok(point.into_inner())
        })
        .collect()
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value.into_iter().map(Point::into_inner).collect())
    }
}

impl From<LineString> for MultiPoint {
    fn from(value: LineString) -> Self {
        Self(value.into_inner())
    }
}

impl TryFrom<&Value> for MultiPoint {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::try_new(array_elements(value, "MultiPoint")?)
    }
}
