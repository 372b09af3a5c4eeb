//! The closed set of GeoJSON type tags.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::GeoJsonError;

/// Every value the `"type"` member of a GeoJSON object may take.
///
/// Parsing a tag outside this set fails with [`GeoJsonError::UnsupportedType`]:
///
/// ```
/// use geojson_codec::datatypes::GeoJsonType;
///
/// assert_eq!("Polygon".parse::<GeoJsonType>().unwrap(), GeoJsonType::Polygon);
/// assert!("Circle".parse::<GeoJsonType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoJsonType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    Feature,
    FeatureCollection,
}

impl GeoJsonType {
    pub const ALL: [GeoJsonType; 9] = [
        GeoJsonType::Point,
        GeoJsonType::MultiPoint,
        GeoJsonType::LineString,
        GeoJsonType::MultiLineString,
        GeoJsonType::Polygon,
        GeoJsonType::MultiPolygon,
        GeoJsonType::GeometryCollection,
        GeoJsonType::Feature,
        GeoJsonType::FeatureCollection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeoJsonType::Point => "Point",
            GeoJsonType::MultiPoint => "MultiPoint",
            GeoJsonType::LineString => "LineString",
            GeoJsonType::MultiLineString => "MultiLineString",
            GeoJsonType::Polygon => "Polygon",
            GeoJsonType::MultiPolygon => "MultiPolygon",
            GeoJsonType::GeometryCollection => "GeometryCollection",
            GeoJsonType::Feature => "Feature",
            GeoJsonType::FeatureCollection => "FeatureCollection",
        }
    }

    /// Whether this tag names a geometry, including GeometryCollection.
    pub fn is_geometry(&self) -> bool {
        !matches!(self, GeoJsonType::Feature | GeoJsonType::FeatureCollection)
    }

    /// Whether this tag names a geometry carrying a `"coordinates"` member.
    pub fn has_coordinates(&self) -> bool {
        self.is_geometry() && *self != GeoJsonType::GeometryCollection
    }
}

impl FromStr for GeoJsonType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ty = match s {
            "Point" => GeoJsonType::Point,
            "MultiPoint" => GeoJsonType::MultiPoint,
            "LineString" => GeoJsonType::LineString,
            "MultiLineString" => GeoJsonType::MultiLineString,
            "Polygon" => GeoJsonType::Polygon,
            "MultiPolygon" => GeoJsonType::MultiPolygon,
            "GeometryCollection" => GeoJsonType::GeometryCollection,
            "Feature" => GeoJsonType::Feature,
            "FeatureCollection" => GeoJsonType::FeatureCollection,
            _ => return Err(GeoJsonError::UnsupportedType(s.to_string())),
        };
        Ok(ty)
    }
}

impl Display for GeoJsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips_every_tag() {
        for ty in GeoJsonType::ALL {
            assert_eq!(ty.as_str().parse::<GeoJsonType>().unwrap(), ty);
        }
    }

    #[test]
    fn tags_are_case_sensitive() {
        let err = "point".parse::<GeoJsonType>().unwrap_err();
        assert_eq!(err, GeoJsonError::UnsupportedType("point".to_string()));
    }

    #[test]
    fn coordinates_only_on_simple_geometries() {
        let with_coords: Vec<_> = GeoJsonType::ALL
            .into_iter()
            .filter(GeoJsonType::has_coordinates)
            .collect();
        assert_eq!(with_coords.len(), 6);
        assert!(!GeoJsonType::GeometryCollection.has_coordinates());
        assert!(GeoJsonType::GeometryCollection.is_geometry());
        assert!(!GeoJsonType::Feature.is_geometry());
    }
}
