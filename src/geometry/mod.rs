//! Geometry value types.
//!
//! Every type validates its input on construction and is immutable afterwards. Constructors that
//! take several members accept, per member, either an already built value or raw data to build
//! it from, so `MultiPoint::try_new` takes [`Point`]s, `Vec<f64>`s or JSON arrays alike.

mod geometrycollection;
mod linearring;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
mod position;

pub use geometrycollection::GeometryCollection;
pub(crate) use geometrycollection::non_geometry_member;
pub use linearring::LinearRing;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use position::Position;

use serde_json::Value;

use crate::datatypes::GeoJsonType;
use crate::error::{json_kind, GeoJsonError, Result};

/// A closed enum over all geometry kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geojson_type(&self) -> GeoJsonType {
        match self {
            Geometry::Point(_) => GeoJsonType::Point,
            Geometry::MultiPoint(_) => GeoJsonType::MultiPoint,
            Geometry::LineString(_) => GeoJsonType::LineString,
            Geometry::MultiLineString(_) => GeoJsonType::MultiLineString,
            Geometry::Polygon(_) => GeoJsonType::Polygon,
            Geometry::MultiPolygon(_) => GeoJsonType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeoJsonType::GeometryCollection,
        }
    }

    /// The `"type"` member this geometry serializes with.
    pub fn type_name(&self) -> &'static str {
        self.geojson_type().as_str()
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

macro_rules! impl_type_name {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// The `"type"` member this geometry serializes with.
                pub fn type_name(&self) -> &'static str {
                    GeoJsonType::$ty.as_str()
                }
            }
        )*
    };
}

impl_type_name!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
);

/// The elements of a JSON array holding the coordinates of a `type_name` geometry.
pub(crate) fn array_elements<'a>(value: &'a Value, type_name: &str) -> Result<&'a [Value]> {
    match value {
        Value::Array(values) => Ok(values),
        other => Err(GeoJsonError::InvalidGeometry(format!(
            "{type_name} coordinates must be an array, {} given",
            json_kind(other)
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::p0;

    #[test]
    fn type_names() {
        assert_eq!(p0().type_name(), "Point");
        let geom = Geometry::from(p0());
        assert_eq!(geom.type_name(), "Point");
        assert_eq!(
            Geometry::from(GeometryCollection::default()).geojson_type(),
            GeoJsonType::GeometryCollection
        );
    }
}
