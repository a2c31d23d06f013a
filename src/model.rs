//! Core data model for orrery.
//!
//! Bodies as the operator names them, identifiers as the lookup service
//! assigns them, and the records and dataset the pipeline produces.

mod body;
mod dataset;
mod record;

pub use body::{BodyName, CatalogIdentifier, ResolvedBody};
pub use dataset::Dataset;
pub use record::{EphemerisRecord, StateVector};
