//! Body names and the catalog identifiers they resolve to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A celestial body as named in configuration (e.g. `"Earth"`).
///
/// Names compare case-insensitively against provider display names
/// through [`BodyName::matches`]; the original spelling is what ends up
/// in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyName(String);

impl BodyName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `display_name` is exactly this name, ignoring case.
    ///
    /// No trimming, no prefix matching: `"Earth-Moon Barycenter"` does not
    /// match `"Earth"`.
    pub fn matches(&self, display_name: &str) -> bool {
        self.0.to_lowercase() == display_name.to_lowercase()
    }
}

impl fmt::Display for BodyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A provider-assigned catalog identifier (the Horizons SPK-ID, e.g. `"399"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogIdentifier(String);

impl CatalogIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatalogIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A configured body paired with the identifier it resolved to.
///
/// Lives only for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBody {
    pub name: BodyName,
    pub id: CatalogIdentifier,
}
