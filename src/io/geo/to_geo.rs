use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Position,
};

/// Convert a position to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn position_to_geo(position: &Position) -> geo::Coord {
    geo::Coord {
        x: position.x(),
        y: position.y(),
    }
}

fn positions_to_geo(positions: &[Position]) -> geo::LineString {
    geo::LineString::new(positions.iter().map(position_to_geo).collect())
}

/// Convert a Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> geo::Point {
    geo::Point(position_to_geo(point.position()))
}

/// Convert a LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    positions_to_geo(line_string.positions())
}

/// Convert a LinearRing to a [`geo::LineString`].
pub fn linear_ring_to_geo(ring: &LinearRing) -> geo::LineString {
    positions_to_geo(ring.positions())
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// A polygon without rings becomes a polygon with an empty exterior. `geo` closes any ring that
/// is not already closed.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(linear_ring_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(linear_ring_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(
        multi_point
            .positions()
            .iter()
            .map(|position| geo::Point(position_to_geo(position)))
            .collect(),
    )
}

pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(geom) => geo::Geometry::Point(point_to_geo(geom)),
        Geometry::MultiPoint(geom) => geo::Geometry::MultiPoint(multi_point_to_geo(geom)),
        Geometry::LineString(geom) => geo::Geometry::LineString(line_string_to_geo(geom)),
        Geometry::MultiLineString(geom) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(geom))
        }
        Geometry::Polygon(geom) => geo::Geometry::Polygon(polygon_to_geo(geom)),
        Geometry::MultiPolygon(geom) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(geom)),
        Geometry::GeometryCollection(geom) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(geom))
        }
    }
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`], recursively.
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(geometry_collection.iter().map(geometry_to_geo).collect())
}

macro_rules! impl_into_geo {
    ($($ty:ty => $geo:ty, $convert:ident;)*) => {
        $(
            impl From<&$ty> for $geo {
                fn from(value: &$ty) -> Self {
                    $convert(value)
                }
            }

            impl From<$ty> for $geo {
                fn from(value: $ty) -> Self {
                    $convert(&value)
                }
            }
        )*
    };
}

impl_into_geo! {
    Point => geo::Point, point_to_geo;
    LineString => geo::LineString, line_string_to_geo;
    Polygon => geo::Polygon, polygon_to_geo;
    MultiPoint => geo::MultiPoint, multi_point_to_geo;
    MultiLineString => geo::MultiLineString, multi_line_string_to_geo;
    MultiPolygon => geo::MultiPolygon, multi_polygon_to_geo;
    GeometryCollection => geo::GeometryCollection, geometry_collection_to_geo;
    Geometry => geo::Geometry, geometry_to_geo;
}

#[cfg(test)]
mod test {
    use geo::{Area, EuclideanLength};

    use super::*;
    use crate::test::linestring::ls1;
    use crate::test::point::p0;
    use crate::test::polygon::{mpoly0, poly0, poly1};

    #[test]
    fn point_keeps_two_dimensions() {
        assert_eq!(point_to_geo(&p0()), geo::Point::new(0.0, 1.0));
        let z = Point::try_from([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(geo::Point::from(z), geo::Point::new(1.0, 2.0));
    }

    #[test]
    fn line_string_drops_z() {
        let line = line_string_to_geo(&ls1());
        assert_eq!(line.0.len(), 3);
        assert_eq!(line.0[2], geo::coord! { x: 7.0, y: 8.0 });
        assert!(line.euclidean_length() > 0.0);
    }

    #[test]
    fn polygon_areas() {
        assert_eq!(polygon_to_geo(&poly0()).unsigned_area(), 16.0);
        assert_eq!(polygon_to_geo(&poly1()).unsigned_area(), 98.0);
        assert_eq!(multi_polygon_to_geo(&mpoly0()).unsigned_area(), 114.0);
    }

    #[test]
    fn polygon_without_rings() {
        let polygon = polygon_to_geo(&Polygon::from(Vec::<LinearRing>::new()));
        assert!(polygon.exterior().0.is_empty());
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn nested_collection() {
        let gc = GeometryCollection::new(vec![
            p0().into(),
            GeometryCollection::new(vec![poly0().into()]).into(),
        ]);
        let geo::Geometry::GeometryCollection(converted) = geometry_to_geo(&gc.into()) else {
            panic!("expected a geometry collection");
        };
        assert_eq!(converted.0.len(), 2);
        assert!(matches!(converted.0[1], geo::Geometry::GeometryCollection(_)));
    }
}
