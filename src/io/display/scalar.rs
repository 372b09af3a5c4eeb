use std::fmt;

use crate::feature::{Feature, FeatureCollection};
use crate::geometry::*;
use crate::object::GeoJson;

macro_rules! impl_fmt {
    ($($struct_name:ty),* $(,)?) => {
        $(
            impl fmt::Display for $struct_name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.to_value())
                }
            }
        )*
    };
}

impl_fmt!(
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Geometry,
    Feature,
    FeatureCollection,
    GeoJson,
);
