//! Report field extraction: free-text ephemeris report in, typed fields out.
//!
//! Each field has its own [`FieldPattern`] that owns a regex with named
//! capture groups and knows how to turn the captures into a value. The
//! patterns run independently over the whole report, in no particular
//! spatial order, and a report yields [`ReportFields`] only if all of them
//! succeed.
//!
//! Patterns can be replaced from configuration when the upstream report
//! format drifts; a replacement must define the same named groups.

mod fields;
mod pattern;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use fields::{MassPattern, RadiusPattern, StateVectorPattern};
pub use pattern::{FieldPattern, PatternError};

use crate::model::{BodyName, EphemerisRecord, StateVector};

/// The fields pulled out of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Mass,
    Radius,
    StateVector,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Radius => "radius",
            Self::StateVector => "state_vector",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A report that did not yield every field.
///
/// Pattern absent and pattern present but unparseable are the same failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("report has no usable {0} field")]
    MissingField(Field),
}

/// Everything a report has to provide for a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportFields {
    /// Kilograms.
    pub mass: f64,

    /// Kilometers.
    pub radius: f64,

    pub state: StateVector,
}

impl ReportFields {
    pub fn into_record(self, name: BodyName) -> EphemerisRecord {
        EphemerisRecord {
            name,
            mass: self.mass,
            radius: self.radius,
            state: self.state,
        }
    }
}

/// Replacement regexes, keyed by field. Unset fields keep the built-in pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PatternOverrides {
    pub mass: Option<String>,
    pub radius: Option<String>,
    pub state_vector: Option<String>,
}

/// Runs the three field patterns over a report.
#[derive(Debug, Clone, Default)]
pub struct ReportFieldExtractor {
    mass: MassPattern,
    radius: RadiusPattern,
    state: StateVectorPattern,
}

impl ReportFieldExtractor {
    /// Built-in patterns, with any configured replacements swapped in.
    pub fn with_overrides(overrides: &PatternOverrides) -> Result<Self, PatternError> {
        let mut extractor = Self::default();
        if let Some(source) = &overrides.mass {
            extractor.mass = MassPattern::from_source(source)?;
        }
        if let Some(source) = &overrides.radius {
            extractor.radius = RadiusPattern::from_source(source)?;
        }
        if let Some(source) = &overrides.state_vector {
            extractor.state = StateVectorPattern::from_source(source)?;
        }
        Ok(extractor)
    }

    /// Extract every field from `report`.
    ///
    /// All patterns are evaluated; the first missing field (in mass, radius,
    /// state vector order) is the one reported.
    pub fn extract(&self, report: &str) -> Result<ReportFields, ExtractionError> {
        let mass = self.mass.extract(report);
        let radius = self.radius.extract(report);
        let state = self.state.extract(report);

        Ok(ReportFields {
            mass: mass?,
            radius: radius?,
            state: state?,
        })
    }
}
