use crate::datatypes::GeoJsonType;
use crate::error::{GeoJsonError, Result};
use crate::feature::Feature;
use crate::object::GeoJson;

/// A FeatureCollection: an ordered sequence of features.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.3>.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection(Vec<Feature>);

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self(features)
    }

    /// Build from arbitrary GeoJSON objects, failing on the first one that is not a feature.
    pub fn try_from_objects<I>(objects: I) -> Result<Self>
    where
        I: IntoIterator<Item = GeoJson>,
    {
        let features = objects
            .into_iter()
            .map(|object| match object {
                GeoJson::Feature(feature) => Ok(feature),
                _ => Err(non_feature_member()),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(features))
    }

    pub fn features(&self) -> &[Feature] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.0.iter()
    }

    pub fn type_name(&self) -> &'static str {
        GeoJsonType::FeatureCollection.as_str()
    }

    pub fn into_inner(self) -> Vec<Feature> {
        self.0
    }
}

pub(crate) fn non_feature_member() -> GeoJsonError {
    GeoJsonError::InvalidArgument("FeatureCollection may only contain Feature values".to_string())
}

impl From<Vec<Feature>> for FeatureCollection {
    fn from(value: Vec<Feature>) -> Self {
        Self(value)
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<Vec<GeoJson>> for FeatureCollection {
    type Error = GeoJsonError;

    fn try_from(value: Vec<GeoJson>) -> Result<Self> {
        Self::try_from_objects(value)
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureCollection {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
