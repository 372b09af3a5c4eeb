use crate::error::{GeoJsonError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Position,
};

impl TryFrom<geo::Coord> for Position {
    type Error = GeoJsonError;

    fn try_from(value: geo::Coord) -> Result<Self> {
        Position::new(vec![value.x, value.y])
    }
}

impl TryFrom<geo::Point> for Point {
    type Error = GeoJsonError;

    fn try_from(value: geo::Point) -> Result<Self> {
        Ok(Point::new(value.0.try_into()?))
    }
}

impl TryFrom<geo::Coord> for Point {
    type Error = GeoJsonError;

    fn try_from(value: geo::Coord) -> Result<Self> {
        Ok(Point::new(value.try_into()?))
    }
}

impl TryFrom<geo::LineString> for LineString {
    type Error = GeoJsonError;

    fn try_from(value: geo::LineString) -> Result<Self> {
        LineString::try_new(value.0)
    }
}

impl TryFrom<geo::LineString> for LinearRing {
    type Error = GeoJsonError;

    fn try_from(value: geo::LineString) -> Result<Self> {
        LinearRing::try_new(value.0)
    }
}

/// An empty exterior with no interiors becomes a polygon without rings.
impl TryFrom<geo::Polygon> for Polygon {
    type Error = GeoJsonError;

    fn try_from(value: geo::Polygon) -> Result<Self> {
        let (exterior, interiors) = value.into_inner();
        if exterior.0.is_empty() && interiors.is_empty() {
            return Ok(Polygon::from(Vec::<LinearRing>::new()));
        }
        Polygon::try_new(std::iter::once(exterior).chain(interiors))
    }
}

impl TryFrom<geo::MultiPoint> for MultiPoint {
    type Error = GeoJsonError;

    fn try_from(value: geo::MultiPoint) -> Result<Self> {
        MultiPoint::try_new(value.0)
    }
}

impl TryFrom<geo::MultiLineString> for MultiLineString {
    type Error = GeoJsonError;

    fn try_from(value: geo::MultiLineString) -> Result<Self> {
        MultiLineString::try_new(value.0)
    }
}

impl TryFrom<geo::MultiPolygon> for MultiPolygon {
    type Error = GeoJsonError;

    fn try_from(value: geo::MultiPolygon) -> Result<Self> {
        MultiPolygon::try_new(value.0)
    }
}

impl TryFrom<geo::GeometryCollection> for GeometryCollection {
    type Error = GeoJsonError;

    fn try_from(value: geo::GeometryCollection) -> Result<Self> {
        value
            .0
            .into_iter()
            .map(Geometry::try_from)
            .collect::<Result<Vec<_>>>()
            .map(GeometryCollection::new)
    }
}

/// `Line`, `Rect` and `Triangle` have no GeoJSON counterpart and are converted to a LineString
/// or Polygon.
impl TryFrom<geo::Geometry> for Geometry {
    type Error = GeoJsonError;

    fn try_from(value: geo::Geometry) -> Result<Self> {
        let geometry = match value {
            geo::Geometry::Point(geom) => Point::try_from(geom)?.into(),
            geo::Geometry::Line(geom) => LineString::try_new([geom.start, geom.end])?.into(),
            geo::Geometry::LineString(geom) => LineString::try_from(geom)?.into(),
            geo::Geometry::Polygon(geom) => Polygon::try_from(geom)?.into(),
            geo::Geometry::MultiPoint(geom) => MultiPoint::try_from(geom)?.into(),
            geo::Geometry::MultiLineString(geom) => MultiLineString::try_from(geom)?.into(),
            geo::Geometry::MultiPolygon(geom) => MultiPolygon::try_from(geom)?.into(),
            geo::Geometry::GeometryCollection(geom) => GeometryCollection::try_from(geom)?.into(),
            geo::Geometry::Rect(geom) => Polygon::try_from(geom.to_polygon())?.into(),
            geo::Geometry::Triangle(geom) => Polygon::try_from(geom.to_polygon())?.into(),
        };
        Ok(geometry)
    }
}

#[cfg(test)]
mod test {
    use geo::{line_string, point, polygon, Rect};

    use super::*;
    use crate::io::geo::{geometry_to_geo, polygon_to_geo};
    use crate::test::polygon::{mpoly0, poly0, poly1};

    #[test]
    fn point_from_geo() {
        let point = Point::try_from(point!(x: 13.4, y: 52.5)).unwrap();
        assert_eq!(point, Point::lng_lat(13.4, 52.5).unwrap());
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let err = Point::try_from(point!(x: f64::NAN, y: 0.0)).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidPosition(_)));
    }

    #[test]
    fn short_line_string_is_rejected() {
        let err = LineString::try_from(line_string![(x: 0.0, y: 0.0)]).unwrap_err();
        assert_eq!(
            err,
            GeoJsonError::InvalidGeometry("LineString requires at least two positions".to_string())
        );
    }

    #[test]
    fn polygons_survive_a_round_trip() {
        for polygon in [poly0(), poly1()] {
            assert_eq!(Polygon::try_from(polygon_to_geo(&polygon)).unwrap(), polygon);
        }
        let multi = Geometry::from(mpoly0());
        assert_eq!(Geometry::try_from(geometry_to_geo(&multi)).unwrap(), multi);
    }

    #[test]
    fn geo_closes_rings() {
        let open = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
        let polygon = Polygon::try_from(open).unwrap();
        let exterior = polygon.exterior().unwrap();
        assert_eq!(exterior.num_positions(), 4);
        assert!(exterior.is_closed());
    }

    #[test]
    fn rect_becomes_polygon() {
        let rect = Rect::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 2.0, y: 3.0 });
        let geometry = Geometry::try_from(geo::Geometry::Rect(rect)).unwrap();
        let Geometry::Polygon(polygon) = geometry else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.rings().len(), 1);
        assert_eq!(polygon.exterior().unwrap().num_positions(), 5);
    }

    #[test]
    fn line_becomes_line_string() {
        let line = geo::Line::new(geo::coord! { x: 0.0, y: 0.0 }, geo::coord! { x: 1.0, y: 1.0 });
        let geometry = Geometry::try_from(geo::Geometry::Line(line)).unwrap();
        assert_eq!(geometry.type_name(), "LineString");
    }
}
