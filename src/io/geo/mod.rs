//! Convert to and from [`geo`] geometries.
//!
//! Conversion to `geo` is infallible but lossy: only the first two dimensions of each position
//! are kept. Conversion from `geo` validates the result the same way deserialization does, so
//! for example a `geo::LineString` with a single coordinate is rejected.

mod from_geo;
mod to_geo;

pub use to_geo::{
    geometry_collection_to_geo, geometry_to_geo, line_string_to_geo, linear_ring_to_geo,
    multi_line_string_to_geo, multi_point_to_geo, multi_polygon_to_geo, point_to_geo,
    polygon_to_geo, position_to_geo,
};
