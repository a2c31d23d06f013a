//! In-memory providers for tests.
//!
//! Each fake answers from a table and records every call it receives.
//! Unknown lookups reply with zero results; unknown ephemeris identifiers
//! fail with a 404.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::model::CatalogIdentifier;

use super::{
    EphemerisQuery, EphemerisService, LookupCandidate, LookupReply, LookupService, TransportError,
};

#[derive(Default)]
pub struct FakeLookup {
    replies: HashMap<String, Result<Vec<LookupCandidate>, u16>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `search` with the given `(display name, spkid)` candidates.
    pub fn with(mut self, search: &str, candidates: &[(&str, &str)]) -> Self {
        let candidates = candidates
            .iter()
            .map(|(name, spkid)| LookupCandidate::new(name, spkid))
            .collect();
        self.replies.insert(search.to_string(), Ok(candidates));
        self
    }

    /// Fail `search` with an HTTP status.
    pub fn failing(mut self, search: &str, status: u16) -> Self {
        self.replies.insert(search.to_string(), Err(status));
        self
    }
}

impl LookupService for FakeLookup {
    fn lookup(&self, search: &str, _group: &str) -> Result<LookupReply, TransportError> {
        self.calls.borrow_mut().push(search.to_string());
        match self.replies.get(search) {
            Some(Ok(results)) => Ok(LookupReply {
                count: results.len(),
                results: results.clone(),
            }),
            Some(Err(status)) => Err(TransportError::Status {
                status: *status,
                body: "lookup unavailable".to_string(),
            }),
            None => Ok(LookupReply::default()),
        }
    }
}

#[derive(Default)]
pub struct FakeEphemeris {
    reports: HashMap<String, Result<String, u16>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `id` with `report`.
    pub fn with(mut self, id: &str, report: &str) -> Self {
        self.reports.insert(id.to_string(), Ok(report.to_string()));
        self
    }

    /// Fail `id` with an HTTP status.
    pub fn failing(mut self, id: &str, status: u16) -> Self {
        self.reports.insert(id.to_string(), Err(status));
        self
    }
}

impl EphemerisService for FakeEphemeris {
    fn ephemeris(
        &self,
        id: &CatalogIdentifier,
        _query: &EphemerisQuery,
    ) -> Result<String, TransportError> {
        self.calls.borrow_mut().push(id.to_string());
        match self.reports.get(id.as_str()) {
            Some(Ok(report)) => Ok(report.clone()),
            Some(Err(status)) => Err(TransportError::Status {
                status: *status,
                body: "ephemeris unavailable".to_string(),
            }),
            None => Err(TransportError::Status {
                status: 404,
                body: format!("no report for {id}"),
            }),
        }
    }
}

/// A report in the shape Horizons emits, with the given values.
pub fn report(mass: &str, radius: &str, position: [&str; 3], velocity: [&str; 3]) -> String {
    format!(
        "*******************************************************************************\n \
         GEOPHYSICAL PROPERTIES:\n \
         Vol. Mean Radius (km)    = {radius}+-0.02   Mass x10^24 (kg)= {mass}+-0.0006\n \
         Equ. radius, km          = 6378.137         Mass layers:\n\
         *******************************************************************************\n\
         $$SOE\n\
         2458849.500000000 = A.D. 2020-Jan-01 00:00:00.0000 TDB \n \
         X ={} Y ={} Z ={}\n \
         VX={} VY={} VZ={}\n\
         $$EOE\n",
        position[0], position[1], position[2], velocity[0], velocity[1], velocity[2],
    )
}
