//! Ephemeris API request parameters and reply shape.

use jiff::civil::Date;
use serde::Deserialize;

use crate::model::CatalogIdentifier;

/// The fixed observation settings shared by every body in a run.
///
/// Window is `[start, stop]` at `step_size`; with the defaults that is two
/// consecutive days at one-day steps, so the report carries the state at
/// `start` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemerisQuery {
    /// `VECTORS` for a state-vector table.
    pub ephem_type: String,

    /// Coordinate center, `500@0` being the solar-system barycenter.
    pub center: String,

    /// `2` selects position and velocity.
    pub vec_table: String,

    pub step_size: String,
    pub start: Date,
    pub stop: Date,
}

impl EphemerisQuery {
    /// Query-string parameters for `id`, in the order Horizons documents them.
    pub fn params(&self, id: &CatalogIdentifier) -> Vec<(&'static str, String)> {
        vec![
            ("format", "json".to_string()),
            ("COMMAND", id.as_str().to_string()),
            ("EPHEM_TYPE", self.ephem_type.clone()),
            ("CENTER", self.center.clone()),
            ("VEC_TABLE", self.vec_table.clone()),
            ("STEP_SIZE", self.step_size.clone()),
            ("START_TIME", self.start.to_string()),
            ("STOP_TIME", self.stop.to_string()),
        ]
    }
}

/// JSON shape returned by the Horizons API.
///
/// A successful call carries the report in `result`; a rejected one carries
/// a message in `error`.
#[derive(Debug, Deserialize)]
pub(super) struct EphemerisReply {
    #[serde(default)]
    pub result: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    fn query() -> EphemerisQuery {
        EphemerisQuery {
            ephem_type: "VECTORS".into(),
            center: "500@0".into(),
            vec_table: "2".into(),
            step_size: "1d".into(),
            start: date(2020, 1, 1),
            stop: date(2020, 1, 2),
        }
    }

    #[test]
    fn params_carry_identifier_and_window() {
        let params = query().params(&CatalogIdentifier::new("399"));
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("COMMAND"), Some("399"));
        assert_eq!(get("CENTER"), Some("500@0"));
        assert_eq!(get("START_TIME"), Some("2020-01-01"));
        assert_eq!(get("STOP_TIME"), Some("2020-01-02"));
        assert_eq!(get("format"), Some("json"));
    }

    #[test]
    fn reply_with_error_field() {
        let reply: EphemerisReply =
            serde_json::from_str(r#"{"error": "No matches found."}"#).unwrap();
        assert!(reply.result.is_none());
        assert_eq!(reply.error.as_deref(), Some("No matches found."));
    }
}
