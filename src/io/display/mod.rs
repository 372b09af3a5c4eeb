//! [`Display`](std::fmt::Display) for every GeoJSON object, rendering compact JSON text.

mod scalar;
