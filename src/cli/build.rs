//! Build command: run the full pipeline and write the dataset.

use std::path::PathBuf;

use crate::aggregate::DatasetAggregator;
use crate::config::Config;
use crate::horizons::HorizonsClient;
use crate::model::BodyName;
use crate::resolve::IdentifierResolver;
use crate::storage::DatasetWriter;

pub(super) fn cmd_build(
    config: &Config,
    bodies: &[String],
    out: Option<PathBuf>,
) -> Result<(), String> {
    let names = if bodies.is_empty() {
        config.body_names()?
    } else {
        bodies.iter().map(|b| BodyName::new(b.as_str())).collect()
    };
    let query = config.ephemeris_query()?;
    let extractor = config.extractor()?;
    let writer = DatasetWriter::new(out.unwrap_or_else(|| config.output.clone()));

    let client = HorizonsClient::new(&config.lookup_url, &config.ephemeris_url)
        .map_err(|e| format!("failed to create HTTP client: {e}"))?;
    let resolver = IdentifierResolver::new(&client, &config.group);

    let harvest = DatasetAggregator::new(resolver, &client, query, extractor)
        .build(&names)
        .map_err(|e| format!("{e}\nNothing was written."))?;

    writer
        .write(&harvest.dataset)
        .map_err(|e| format!("failed to write dataset: {e}"))?;

    eprintln!(
        "Wrote {} of {} object(s) → {} ({} skipped)",
        harvest.dataset.count(),
        names.len(),
        writer.path().display(),
        harvest.skipped.len()
    );
    Ok(())
}
