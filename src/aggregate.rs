//! Dataset aggregation: resolve every body, fetch and extract each report,
//! and collect the records.
//!
//! Failures come in two severities. A body that cannot be resolved aborts
//! the run before any report is fetched. A body whose report cannot be
//! fetched or extracted is skipped and the run carries on; it is simply
//! absent from the dataset.

use tracing::{debug, info, warn};

use crate::extract::{ExtractionError, ReportFieldExtractor};
use crate::horizons::{EphemerisQuery, EphemerisService, LookupService, TransportError};
use crate::model::{BodyName, Dataset, EphemerisRecord, ResolvedBody};
use crate::resolve::{IdentifierResolver, ResolutionError};

/// Why one body was left out of the dataset.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    #[error("fetch failed: {0}")]
    Fetch(#[source] TransportError),

    #[error(transparent)]
    Extract(#[from] ExtractionError),
}

/// A body that was resolved but produced no record.
#[derive(Debug)]
pub struct SkippedBody {
    pub name: BodyName,
    pub error: BodyError,
}

/// The result of a run: the dataset plus whatever was skipped along the way.
#[derive(Debug)]
pub struct Harvest {
    pub dataset: Dataset,
    pub skipped: Vec<SkippedBody>,
}

/// Drives a run against a lookup service and an ephemeris service.
///
/// Calls are strictly sequential, one body at a time in configured order.
pub struct DatasetAggregator<'a, L, E> {
    resolver: IdentifierResolver<'a, L>,
    ephemeris: &'a E,
    query: EphemerisQuery,
    extractor: ReportFieldExtractor,
}

impl<'a, L: LookupService, E: EphemerisService> DatasetAggregator<'a, L, E> {
    pub fn new(
        resolver: IdentifierResolver<'a, L>,
        ephemeris: &'a E,
        query: EphemerisQuery,
        extractor: ReportFieldExtractor,
    ) -> Self {
        Self {
            resolver,
            ephemeris,
            query,
            extractor,
        }
    }

    /// Build the dataset for `names`.
    ///
    /// Every name is resolved first; any resolution failure is returned
    /// and nothing is fetched. Records then appear in the order of `names`,
    /// with skipped bodies omitted.
    pub fn build(&self, names: &[BodyName]) -> Result<Harvest, ResolutionError> {
        let resolved = self.resolver.resolve_all(names)?;

        let mut dataset = Dataset::new();
        let mut skipped = Vec::new();

        for body in resolved {
            info!(body = %body.name, id = %body.id, "fetching ephemeris");
            match self.collect(&body) {
                Ok(record) => {
                    dataset.push(record);
                    info!(body = %body.name, count = dataset.count(), "record added");
                }
                Err(error) => {
                    let skip = SkippedBody {
                        name: body.name,
                        error,
                    };
                    warn!(body = %skip.name, error = %skip.error, "skipping body");
                    skipped.push(skip);
                }
            }
        }

        Ok(Harvest { dataset, skipped })
    }

    /// Fetch and extract one resolved body.
    fn collect(&self, body: &ResolvedBody) -> Result<EphemerisRecord, BodyError> {
        let report = self
            .ephemeris
            .ephemeris(&body.id, &self.query)
            .map_err(BodyError::Fetch)?;
        debug!(body = %body.name, %report, "ephemeris report");

        let fields = self.extractor.extract(&report)?;
        Ok(fields.into_record(body.name.clone()))
    }
}
