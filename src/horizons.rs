//! JPL Horizons: the two services the pipeline talks to.
//!
//! The lookup service turns a search string into catalog candidates; the
//! ephemeris service returns a free-text report for one catalog identifier.
//! Both sit behind traits so the pipeline can run against in-memory fakes.

mod client;
mod ephemeris;
#[cfg(test)]
pub mod fake;
mod lookup;

pub use client::HorizonsClient;
pub use ephemeris::EphemerisQuery;
pub use lookup::{LookupCandidate, LookupReply};

use crate::model::CatalogIdentifier;

/// Errors talking to a provider.
///
/// A non-success status is kept apart from an empty-but-successful reply:
/// zero lookup results is not a transport error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider error: {0}")]
    Provider(String),
}

/// Searches the catalog for bodies matching a string.
pub trait LookupService {
    /// Query `search` within the lookup `group` (category filter).
    fn lookup(&self, search: &str, group: &str) -> Result<LookupReply, TransportError>;
}

/// Produces ephemeris reports.
pub trait EphemerisService {
    /// Fetch the report text for `id` over the window described by `query`.
    fn ephemeris(
        &self,
        id: &CatalogIdentifier,
        query: &EphemerisQuery,
    ) -> Result<String, TransportError>;
}
