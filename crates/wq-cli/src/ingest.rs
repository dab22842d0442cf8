//! Samples file ingest.
//!
//! The samples file is a small CSV sheet: one row per parameter, a `parameter`
//! column with the exact guideline name, then up to three sample columns.
//! Blank cells are allowed anywhere and mean "no reading".

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use wq_assess::RawSamples;
use wq_standards::GuidelineRegistry;

/// Maximum replicate readings per parameter.
pub const MAX_READINGS: usize = 3;

/// Read and validate a samples CSV file.
pub fn read_samples(path: &Path, registry: &GuidelineRegistry) -> Result<RawSamples> {
    let file =
        File::open(path).with_context(|| format!("open samples file {}", path.display()))?;
    parse_samples(file, registry).with_context(|| format!("read samples file {}", path.display()))
}

/// Parse samples CSV content from any reader.
///
/// Row names must match the guideline table exactly; an unknown or duplicate
/// parameter name is an input error naming the offending row. Sample tokens
/// are passed through raw: numeric validation is the comparator's job.
pub fn parse_samples<R: Read>(reader: R, registry: &GuidelineRegistry) -> Result<RawSamples> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut raw = RawSamples::new();
    for (index, record) in csv_reader.records().enumerate() {
        // Header is row 1.
        let row = index + 2;
        let record = record.with_context(|| format!("row {row}: malformed CSV record"))?;
        let Some(name) = record.get(0) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        if !registry.contains(name) {
            bail!("row {row}: unknown parameter {name:?}");
        }
        if raw.contains_key(name) {
            bail!("row {row}: duplicate parameter {name:?}");
        }

        let tokens: Vec<String> = record.iter().skip(1).map(ToString::to_string).collect();
        if tokens.iter().filter(|token| !token.is_empty()).count() > MAX_READINGS {
            bail!("row {row}: more than {MAX_READINGS} readings for {name:?}");
        }
        debug!(parameter = name, slots = tokens.len(), "collected row");
        raw.insert(name.to_string(), tokens);
    }
    Ok(raw)
}
