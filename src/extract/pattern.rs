//! The per-field pattern contract.

use regex::{Captures, Regex};

use super::{ExtractionError, Field};

/// A replacement regex that cannot stand in for a built-in pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid {field} pattern: {source}")]
    Invalid {
        field: Field,
        #[source]
        source: regex::Error,
    },

    #[error("{field} pattern has no `{group}` capture group")]
    MissingGroup { field: Field, group: &'static str },
}

/// One field's parsing contract: a regex with named groups, and the
/// interpretation of those groups as a value.
pub trait FieldPattern: Sized {
    type Value;

    /// The field this pattern produces.
    const FIELD: Field;

    /// Named capture groups the regex must define.
    const GROUPS: &'static [&'static str];

    fn regex(&self) -> &Regex;

    /// Wrap an already-validated regex.
    fn from_regex(regex: Regex) -> Self;

    /// Turn a match into a value. `None` when the captured text does not parse.
    fn interpret(captures: &Captures<'_>) -> Option<Self::Value>;

    /// Compile `source` as a replacement for the built-in regex.
    fn from_source(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(source).map_err(|source| PatternError::Invalid {
            field: Self::FIELD,
            source,
        })?;

        let names: Vec<&str> = regex.capture_names().flatten().collect();
        if let Some(group) = Self::GROUPS.iter().copied().find(|g| !names.contains(g)) {
            return Err(PatternError::MissingGroup {
                field: Self::FIELD,
                group,
            });
        }

        Ok(Self::from_regex(regex))
    }

    /// Find the first match in `report` and interpret it.
    fn extract(&self, report: &str) -> Result<Self::Value, ExtractionError> {
        self.regex()
            .captures(report)
            .and_then(|captures| Self::interpret(&captures))
            .ok_or(ExtractionError::MissingField(Self::FIELD))
    }
}

/// Parse a captured group as a finite float.
pub(super) fn finite(captures: &Captures<'_>, group: &str) -> Option<f64> {
    parse_finite(captures.name(group)?.as_str())
}

pub(super) fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
