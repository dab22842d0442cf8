//! The guideline comparator.
//!
//! Turns raw per-parameter sample tokens into an ordered comparison report:
//! blank tokens are dropped, remaining tokens must parse as numbers, valid
//! readings are averaged and the mean is classified against both the WHO and
//! ECR limits. The first non-numeric token, walking the guideline table in
//! order, aborts the whole analysis.

use std::collections::BTreeMap;

use tracing::debug;

use wq_model::{ComparisonReport, ComparisonRow, ParameterSamples, Result, WqError};
use wq_standards::GuidelineRegistry;

/// Raw text tokens per parameter name, as collected by the form provider.
/// Up to three tokens per parameter; blanks are allowed and dropped.
pub type RawSamples = BTreeMap<String, Vec<String>>;

/// Collected readings plus the derived comparison report for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Valid readings per parameter, in guideline table order. Forwarded
    /// verbatim into the advisory prompt.
    pub samples: Vec<ParameterSamples>,
    pub report: ComparisonReport,
}

/// Parse one parameter's raw tokens into numeric readings.
///
/// Blank and whitespace-only tokens are dropped, not coerced to zero. Any
/// remaining token that does not parse as a number fails the whole request.
pub fn parse_readings(parameter: &str, tokens: &[String]) -> Result<Vec<f64>> {
    let mut readings = Vec::with_capacity(tokens.len());
    for token in tokens {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| WqError::InvalidNumericInput {
                parameter: parameter.to_string(),
                value: trimmed.to_string(),
            })?;
        readings.push(value);
    }
    Ok(readings)
}

/// Gather valid readings for every parameter that has data, walking the
/// guideline table in order. Parameters with zero valid readings are omitted;
/// that is not an error. Raw entries whose names are not in the table are
/// ignored (the form provider validates names before calling in).
pub fn collect_samples(
    registry: &GuidelineRegistry,
    raw: &RawSamples,
) -> Result<Vec<ParameterSamples>> {
    let mut collected = Vec::new();
    for entry in registry.iter() {
        let Some(tokens) = raw.get(entry.name) else {
            continue;
        };
        let readings = parse_readings(entry.name, tokens)?;
        if readings.is_empty() {
            debug!(parameter = entry.name, "no valid readings, omitting");
            continue;
        }
        collected.push(ParameterSamples {
            parameter: entry.name.to_string(),
            readings,
        });
    }
    Ok(collected)
}

/// Classify already-collected readings against both guidelines.
///
/// Pure over its inputs; row order follows the order of `samples`, which
/// `collect_samples` keeps aligned with the guideline table.
pub fn compare_samples(registry: &GuidelineRegistry, samples: &[ParameterSamples]) -> ComparisonReport {
    let mut rows = Vec::with_capacity(samples.len());
    for sample in samples {
        let Some(entry) = registry.get(&sample.parameter) else {
            continue;
        };
        let Some(mean) = sample.mean() else {
            continue;
        };
        rows.push(ComparisonRow {
            parameter: sample.parameter.clone(),
            mean,
            who_limit: entry.who,
            who_status: entry.who.check(mean),
            ecr_limit: entry.ecr,
            ecr_status: entry.ecr.check(mean),
        });
    }
    ComparisonReport { rows }
}

/// Run the full comparator for one request: parse, aggregate, classify.
pub fn assess(registry: &GuidelineRegistry, raw: &RawSamples) -> Result<Assessment> {
    let samples = collect_samples(registry, raw)?;
    let report = compare_samples(registry, &samples);
    debug!(
        parameters = samples.len(),
        exceedances = report.exceedance_count(),
        "assessment complete"
    );
    Ok(Assessment { samples, report })
}
