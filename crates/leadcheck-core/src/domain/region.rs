use crate::error::CoreError;
use crate::phone::metadata;
use serde::{Serialize, Serializer};
use std::fmt;

/// ISO 3166 alpha-2 region known to the numbering table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region(&'static str);

impl Region {
    pub const US: Region = Region("US");

    pub fn from_code(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        metadata::find_region(trimmed)
            .map(|meta| Region(meta.region))
            .ok_or_else(|| CoreError::UnknownRegion(trimmed.to_string()))
    }

    pub(crate) const fn from_static(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}
