use crate::error::{GeoJsonError, Result};
use crate::geometry::Geometry;
use crate::object::GeoJson;

/// A GeometryCollection: an ordered sequence of geometries of any kind, including nested
/// collections.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.8>.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    /// Build from arbitrary GeoJSON objects, failing on the first one that is not a geometry.
    pub fn try_from_objects<I>(objects: I) -> Result<Self>
    where
        I: IntoIterator<Item = GeoJson>,
    {
        let geometries = objects
            .into_iter()
            .map(|object| match object {
                GeoJson::Geometry(geometry) => Ok(geometry),
                _ => Err(non_geometry_member()),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(geometries))
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Geometry> {
        self.0
    }
}

pub(crate) fn non_geometry_member() -> GeoJsonError {
    GeoJsonError::InvalidArgument("GeometryCollection may only contain Geometry values".to_string())
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(value: Vec<Geometry>) -> Self {
        Self(value)
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Vec<GeoJson>> for GeometryCollection {
    type Error = GeoJsonError;

    fn try_from(value: Vec<GeoJson>) -> Result<Self> {
        Self::try_from_objects(value)
    }
}

impl IntoIterator for GeometryCollection {
    type Item = Geometry;
    type IntoIter = std::vec::IntoIter<Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GeometryCollection {
    type Item = &'a Geometry;
    type IntoIter = std::slice::Iter<'a, Geometry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
