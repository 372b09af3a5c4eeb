use serde_json::{Map, Value};

use crate::feature::{Feature, FeatureCollection};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Position,
};
use crate::object::GeoJson;

/// Convert any GeoJSON object to a generic JSON value.
///
/// This never fails: every object is valid by construction.
pub fn serialize(object: &GeoJson) -> Value {
    match object {
        GeoJson::Geometry(geometry) => geometry_to_value(geometry),
        GeoJson::Feature(feature) => feature_to_value(feature),
        GeoJson::FeatureCollection(fc) => feature_collection_to_value(fc),
    }
}

/// Encode a geometry including its `"type"` member.
pub fn geometry_to_value(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Point(g) => g.to_value(),
        Geometry::MultiPoint(g) => g.to_value(),
        Geometry::LineString(g) => g.to_value(),
        Geometry::MultiLineString(g) => g.to_value(),
        Geometry::Polygon(g) => g.to_value(),
        Geometry::MultiPolygon(g) => g.to_value(),
        Geometry::GeometryCollection(g) => g.to_value(),
    }
}

pub fn feature_to_value(feature: &Feature) -> Value {
    let mut object = tagged("Feature");
    object.insert(
        "geometry".to_string(),
        feature.geometry().map(geometry_to_value).unwrap_or(Value::Null),
    );
    // An empty map stays an object; it never degrades to `[]`.
    object.insert(
        "properties".to_string(),
        feature
            .properties()
            .map(|props| Value::Object(props.clone()))
            .unwrap_or(Value::Null),
    );
    if let Some(id) = feature.id() {
        object.insert("id".to_string(), id.clone().into());
    }
    Value::Object(object)
}

pub fn feature_collection_to_value(fc: &FeatureCollection) -> Value {
    let mut object = tagged("FeatureCollection");
    object.insert(
        "features".to_string(),
        Value::Array(fc.iter().map(feature_to_value).collect()),
    );
    Value::Object(object)
}

fn tagged(type_name: &str) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::String(type_name.to_string()));
    object
}

fn encode_position(position: &Position) -> Value {
    Value::Array(position.as_slice().iter().map(|v| Value::from(*v)).collect())
}

fn encode_positions(positions: &[Position]) -> Value {
    Value::Array(positions.iter().map(encode_position).collect())
}

fn encode_ring(ring: &LinearRing) -> Value {
    encode_positions(ring.positions())
}

fn encode_polygon(polygon: &Polygon) -> Value {
    Value::Array(polygon.rings().iter().map(encode_ring).collect())
}

fn encode_multi_line_string(mls: &MultiLineString) -> Value {
    Value::Array(
        mls.line_strings()
            .iter()
            .map(|line| encode_positions(line.positions()))
            .collect(),
    )
}

fn encode_multi_polygon(mp: &MultiPolygon) -> Value {
    Value::Array(mp.polygons().iter().map(encode_polygon).collect())
}

impl Geometry {
    /// Convert to a generic JSON value.
    pub fn to_value(&self) -> Value {
        geometry_to_value(self)
    }
}

impl Feature {
    /// Convert to a generic JSON value.
    pub fn to_value(&self) -> Value {
        feature_to_value(self)
    }
}

impl FeatureCollection {
    /// Convert to a generic JSON value.
    pub fn to_value(&self) -> Value {
        feature_collection_to_value(self)
    }
}

macro_rules! impl_to_value {
    ($($ty:ident => $encode:expr),* $(,)?) => {
        $(
            impl $ty {
                /// Convert to a generic JSON value, including the `"type"` member.
                pub fn to_value(&self) -> Value {
                    let mut object = tagged(stringify!($ty));
                    object.insert("coordinates".to_string(), ($encode)(self));
                    Value::Object(object)
                }
            }
        )*
    };
}

impl_to_value!(
    Point => |g: &Point| encode_position(g.position()),
    MultiPoint => |g: &MultiPoint| encode_positions(g.positions()),
    LineString => |g: &LineString| encode_positions(g.positions()),
    MultiLineString => encode_multi_line_string,
    Polygon => encode_polygon,
    MultiPolygon => encode_multi_polygon,
);

impl GeometryCollection {
    /// Convert to a generic JSON value, members included.
    pub fn to_value(&self) -> Value {
        let mut object = tagged("GeometryCollection");
        object.insert(
            "geometries".to_string(),
            Value::Array(self.iter().map(geometry_to_value).collect()),
        );
        Value::Object(object)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::feature::Properties;
    use crate::test::feature::{f0, fc};
    use crate::test::point::p0;
    use crate::test::polygon::poly0;

    #[test]
    fn point() {
        assert_eq!(
            p0().to_value(),
            json!({"type": "Point", "coordinates": [0.0, 1.0]})
        );
    }

    #[test]
    fn polygon() {
        assert_eq!(
            poly0().to_value(),
            json!({
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]]]
            })
        );
    }

    #[test]
    fn geometry_collection() {
        let gc = GeometryCollection::new(vec![p0().into(), GeometryCollection::default().into()]);
        assert_eq!(
            gc.to_value(),
            json!({
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Point", "coordinates": [0.0, 1.0]},
                    {"type": "GeometryCollection", "geometries": []}
                ]
            })
        );
    }

    #[test]
    fn empty_properties_stay_an_object() {
        let feature = Feature::new(None, Properties::new(), None);
        let value = feature.to_value();
        assert_eq!(
            value,
            json!({"type": "Feature", "geometry": null, "properties": {}})
        );
        assert!(serde_json::to_string(&value)
            .unwrap()
            .contains(r#""properties":{}"#));
    }

    #[test]
    fn absent_properties_are_null_and_id_is_omitted() {
        let feature = Feature::from_parts(Some(p0().into()), None, None);
        let value = feature.to_value();
        assert_eq!(value["properties"], Value::Null);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn feature_with_id() {
        assert_eq!(
            f0().to_value(),
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [0.0, 1.0]},
                "properties": {},
                "id": "a"
            })
        );
    }

    #[test]
    fn feature_collection_is_idempotent() {
        let first = fc().to_value();
        let second = fc().to_value();
        assert_eq!(first, second);
        assert_eq!(first["features"].as_array().unwrap().len(), 2);
    }
}
