//! Identifier resolution: configured body names to catalog identifiers.
//!
//! A lookup may return several candidates for one search string (searching
//! "Earth" also finds the Earth-Moon barycenter). Only a candidate whose
//! display name is exactly the configured name, ignoring case, is accepted.

use tracing::debug;

use crate::horizons::{LookupService, TransportError};
use crate::model::{BodyName, CatalogIdentifier, ResolvedBody};

/// A configured body that could not be resolved. Always fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("no catalog entry named '{name}'{}", describe_candidates(.candidates))]
    NotFound {
        name: BodyName,
        /// Display names the lookup offered instead.
        candidates: Vec<String>,
    },

    #[error("lookup for '{name}' failed: {source}")]
    Transport {
        name: BodyName,
        #[source]
        source: TransportError,
    },
}

fn describe_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!(" (lookup offered: {})", candidates.join(", "))
    }
}

/// Resolves names through a lookup service, within one category filter.
pub struct IdentifierResolver<'a, L> {
    lookup: &'a L,
    group: &'a str,
}

impl<'a, L: LookupService> IdentifierResolver<'a, L> {
    pub fn new(lookup: &'a L, group: &'a str) -> Self {
        Self { lookup, group }
    }

    /// Resolve one name.
    ///
    /// Fails with `NotFound` when the lookup has no results or none of them
    /// is named exactly `name`, and with `Transport` when the lookup call
    /// itself fails. If several candidates match, the first wins.
    pub fn resolve(&self, name: &BodyName) -> Result<CatalogIdentifier, ResolutionError> {
        let reply = self
            .lookup
            .lookup(name.as_str(), self.group)
            .map_err(|source| ResolutionError::Transport {
                name: name.clone(),
                source,
            })?;

        if reply.count == 0 {
            return Err(ResolutionError::NotFound {
                name: name.clone(),
                candidates: Vec::new(),
            });
        }

        for candidate in &reply.results {
            debug!(
                body = %name,
                candidate = %candidate.name,
                spkid = %candidate.spkid,
                kind = candidate.kind.as_deref().unwrap_or("-"),
                "lookup candidate"
            );
        }

        reply
            .results
            .iter()
            .find(|candidate| name.matches(&candidate.name))
            .map(|candidate| CatalogIdentifier::new(candidate.spkid.clone()))
            .ok_or_else(|| ResolutionError::NotFound {
                name: name.clone(),
                candidates: reply.results.iter().map(|c| c.name.clone()).collect(),
            })
    }

    /// Resolve every name, in order, stopping at the first failure.
    pub fn resolve_all(&self, names: &[BodyName]) -> Result<Vec<ResolvedBody>, ResolutionError> {
        names
            .iter()
            .map(|name| {
                self.resolve(name).map(|id| ResolvedBody {
                    name: name.clone(),
                    id,
                })
            })
            .collect()
    }
}
