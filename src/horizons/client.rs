//! Blocking HTTP client for the Horizons lookup and ephemeris APIs.

use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::model::CatalogIdentifier;

use super::{
    EphemerisQuery, EphemerisService, LookupReply, LookupService, TransportError,
    ephemeris::EphemerisReply,
};

/// Talks to both Horizons endpoints over one connection pool.
///
/// Calls block until the response arrives; timeouts are reqwest's defaults.
pub struct HorizonsClient {
    client: Client,
    lookup_url: String,
    ephemeris_url: String,
}

impl HorizonsClient {
    /// Creates a client for the given endpoint URLs.
    pub fn new(
        lookup_url: impl Into<String>,
        ephemeris_url: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("orrery/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            lookup_url: lookup_url.into(),
            ephemeris_url: ephemeris_url.into(),
        })
    }

    /// Send a GET and hand back the response only if the status is a success.
    fn get(&self, url: &str, params: &[(&str, String)]) -> Result<Response, TransportError> {
        debug!(url, ?params, "GET");
        let response = self.client.get(url).query(params).send()?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().unwrap_or_default();
            Err(TransportError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            })
        }
    }
}

impl LookupService for HorizonsClient {
    fn lookup(&self, search: &str, group: &str) -> Result<LookupReply, TransportError> {
        let params = [("sstr", search.to_string()), ("group", group.to_string())];
        let reply = self.get(&self.lookup_url, &params)?.json::<LookupReply>()?;
        Ok(reply)
    }
}

impl EphemerisService for HorizonsClient {
    fn ephemeris(
        &self,
        id: &CatalogIdentifier,
        query: &EphemerisQuery,
    ) -> Result<String, TransportError> {
        let reply = self
            .get(&self.ephemeris_url, &query.params(id))?
            .json::<EphemerisReply>()?;

        if let Some(error) = reply.error {
            return Err(TransportError::Provider(error.trim().to_string()));
        }
        reply
            .result
            .ok_or_else(|| TransportError::Provider("reply carried no report".to_string()))
    }
}
