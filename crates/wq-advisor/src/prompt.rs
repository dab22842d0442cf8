//! Prompt construction for the narrative analysis request.
//!
//! The prompt embeds the water source category, the optional sampling
//! location, and the raw collected dataset. The returned narrative is
//! displayed verbatim; nothing here parses it.

use std::fmt::Write as _;

use wq_model::{ParameterSamples, WaterSource};

/// System message framing the assistant.
pub const SYSTEM_PROMPT: &str = "You are a water quality expert.";

/// One advisory request: everything the narrative service needs to see.
#[derive(Debug, Clone)]
pub struct AdvisoryRequest<'a> {
    pub source: WaterSource,
    /// Free-text sample source and location, passed through untouched.
    pub location: Option<&'a str>,
    /// Valid readings per parameter, in guideline table order.
    pub samples: &'a [ParameterSamples],
}

/// Build the user prompt asking for an analysis and a treatment
/// recommendation referencing the WHO and ECR 2023 guidelines.
pub fn build_prompt(request: &AdvisoryRequest<'_>) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "You are an expert environmental engineer. Based on the following water test results \
         from a {}, write a concise report with:",
        request.source
    );
    prompt.push_str(
        "1. An analysis of the water condition (suitability for drinking, irrigation, \
         health/environment risks).\n",
    );
    prompt.push_str(
        "2. Recommend a simple treatment process suitable for this water to become potable \
         or recreational.\n\n",
    );

    let location = match request.location {
        Some(text) if !text.trim().is_empty() => text.trim(),
        _ => "Not provided",
    };
    let _ = writeln!(prompt, "Location: {location}");

    prompt.push_str("Test results:\n");
    for sample in request.samples {
        let readings = sample
            .readings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(prompt, "- {}: {readings}", sample.parameter);
    }

    prompt.push_str("\nCompare the results with WHO and ECR 2023 guidelines.\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<ParameterSamples> {
        vec![
            ParameterSamples {
                parameter: "BOD5 (mg/L)".to_string(),
                readings: vec![5.0, 7.0, 6.0],
            },
            ParameterSamples {
                parameter: "pH (-)".to_string(),
                readings: vec![7.2],
            },
        ]
    }

    #[test]
    fn prompt_embeds_source_location_and_dataset() {
        let samples = samples();
        let prompt = build_prompt(&AdvisoryRequest {
            source: WaterSource::River,
            location: Some("Buriganga, Dhaka"),
            samples: &samples,
        });
        assert!(prompt.contains("River Water"));
        assert!(prompt.contains("Location: Buriganga, Dhaka"));
        assert!(prompt.contains("- BOD5 (mg/L): 5, 7, 6"));
        assert!(prompt.contains("- pH (-): 7.2"));
        assert!(prompt.contains("WHO and ECR 2023"));
    }

    #[test]
    fn missing_location_falls_back_to_not_provided() {
        let samples = samples();
        for location in [None, Some(""), Some("   ")] {
            let prompt = build_prompt(&AdvisoryRequest {
                source: WaterSource::Unspecified,
                location,
                samples: &samples,
            });
            assert!(prompt.contains("Location: Not provided"));
        }
    }
}
