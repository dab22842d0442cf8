//! Comparison report produced by the guideline comparator.

use serde::{Deserialize, Serialize};

use crate::limit::{ComplianceStatus, Limit};

/// One parameter's comparison outcome. Computed fresh per analysis and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Parameter display name, including its unit.
    pub parameter: String,
    /// Arithmetic mean of the valid readings.
    pub mean: f64,
    pub who_limit: Limit,
    pub who_status: ComplianceStatus,
    pub ecr_limit: Limit,
    pub ecr_status: ComplianceStatus,
}

impl ComparisonRow {
    /// True when the mean stays within both guidelines.
    pub fn is_compliant(&self) -> bool {
        self.who_status.is_ok() && self.ecr_status.is_ok()
    }
}

/// Ordered comparison rows for one analysis request, restricted to parameters
/// that had at least one valid reading. Row order follows the guideline table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn exceedance_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_compliant()).count()
    }

    pub fn has_exceedances(&self) -> bool {
        self.exceedance_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(parameter: &str, mean: f64, limit: Limit) -> ComparisonRow {
        ComparisonRow {
            parameter: parameter.to_string(),
            mean,
            who_limit: limit,
            who_status: limit.check(mean),
            ecr_limit: limit,
            ecr_status: limit.check(mean),
        }
    }

    #[test]
    fn report_counts_exceedances() {
        let report = ComparisonReport {
            rows: vec![
                row("Turbidity (NTU)", 3.5, Limit::scalar(5.0)),
                row("pH (-)", 6.1, Limit::range(6.5, 8.5)),
            ],
        };
        assert_eq!(report.exceedance_count(), 1);
        assert!(report.has_exceedances());
    }

    #[test]
    fn report_serializes() {
        let report = ComparisonReport {
            rows: vec![row("BOD5 (mg/L)", 6.0, Limit::scalar(6.0))],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: ComparisonReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }
}
