//! Collected sample readings forwarded to the advisory prompt.

use serde::{Deserialize, Serialize};

/// Valid numeric readings gathered for one parameter. Parameters whose slots
/// were all blank never produce one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSamples {
    pub parameter: String,
    pub readings: Vec<f64>,
}

impl ParameterSamples {
    /// Arithmetic mean of the readings. None when no reading was collected.
    pub fn mean(&self) -> Option<f64> {
        if self.readings.is_empty() {
            return None;
        }
        Some(self.readings.iter().sum::<f64>() / self.readings.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_readings() {
        let samples = ParameterSamples {
            parameter: "BOD5 (mg/L)".to_string(),
            readings: vec![5.0, 7.0, 6.0],
        };
        assert_eq!(samples.mean(), Some(6.0));
    }

    #[test]
    fn mean_requires_readings() {
        let samples = ParameterSamples {
            parameter: "pH (-)".to_string(),
            readings: vec![],
        };
        assert_eq!(samples.mean(), None);
    }
}
