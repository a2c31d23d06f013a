//! Lookup API reply shapes.

use serde::{Deserialize, Deserializer, de};

/// JSON shape returned by the Horizons lookup API.
///
/// `count` arrives as either a number or a numeric string depending on the
/// API version; `result` is omitted entirely when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupReply {
    #[serde(deserialize_with = "number_or_string")]
    pub count: usize,

    #[serde(default, rename = "result")]
    pub results: Vec<LookupCandidate>,
}

/// One catalog entry the lookup considered a match.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupCandidate {
    /// Display name, e.g. `"Earth-Moon Barycenter"`.
    pub name: String,

    #[serde(deserialize_with = "string_or_number")]
    pub spkid: String,

    /// Entry type, e.g. `"major body"`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl LookupCandidate {
    #[cfg(test)]
    pub fn new(name: &str, spkid: &str) -> Self {
        Self {
            name: name.to_string(),
            spkid: spkid.to_string(),
            kind: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Number(u64),
    Text(String),
}

fn number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    match Scalar::deserialize(deserializer)? {
        Scalar::Number(n) => usize::try_from(n).map_err(de::Error::custom),
        Scalar::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Number(n) => n.to_string(),
        Scalar::Text(s) => s,
    })
}
