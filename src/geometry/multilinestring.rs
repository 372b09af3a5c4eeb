use serde_json::Value;

use crate::error::{GeoJsonError, Result};
use crate::geometry::{array_elements, LineString};

/// A MultiLineString geometry. Coordinates consist of an array of LineString coordinate arrays.
///
/// See <https://datatracker.ietf.org/doc/html/rfc7946#section-3.1.5>.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    pub fn try_new<I, L>(line_strings: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: TryInto<LineString>,
        GeoJsonError: From<L::Error>,
    {
        let line_strings = line_strings
            .into_iter()
            .map(|line| {
                let line: LineString = line.try_into()?;
                Ok(line)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(line_strings))
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.0
    }

    pub fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<LineString> {
        self.0
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self(value)
    }
}

impl TryFrom<&Value> for MultiLineString {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Self::try_new(array_elements(value, "MultiLineString")?)
    }
}
