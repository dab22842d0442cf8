//! Regulatory limits and compliance classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A regulatory limit for one parameter under one guideline.
///
/// Most parameters carry a plain upper bound; pH carries an inclusive
/// acceptable interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Limit {
    /// Single upper bound; compliant while the measurement stays at or below it.
    Scalar { max: f64 },
    /// Inclusive two-sided acceptable interval.
    Range { min: f64, max: f64 },
}

impl Limit {
    pub fn scalar(max: f64) -> Self {
        Self::Scalar { max }
    }

    pub fn range(min: f64, max: f64) -> Self {
        Self::Range { min, max }
    }

    /// Whether `value` lies within the limit. Inclusive on every bound.
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Self::Scalar { max } => value <= max,
            Self::Range { min, max } => min <= value && value <= max,
        }
    }

    /// Classify a measurement against this limit.
    pub fn check(&self, value: f64) -> ComplianceStatus {
        if self.contains(value) {
            ComplianceStatus::Ok
        } else {
            ComplianceStatus::Exceeds
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Scalar { max } => write!(f, "{max}"),
            Self::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}

/// Outcome of comparing a mean measurement to a limit.
///
/// Exactly one of the two holds for every (measurement, limit) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceStatus {
    Ok,
    Exceeds,
}

impl ComplianceStatus {
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::Exceeds => f.write_str("Exceeds"),
        }
    }
}
