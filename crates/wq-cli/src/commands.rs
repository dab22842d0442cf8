use anyhow::{Context, Result};
use tracing::{info, warn};

use wq_advisor::{AdvisorConfig, AdvisoryRequest, request_advisory};
use wq_assess::assess;
use wq_cli::{ingest, summary};
use wq_standards::guidelines;

use crate::cli::AnalyzeArgs;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let registry = guidelines();
    let raw = ingest::read_samples(&args.samples_file, registry)?;
    let assessment = assess(registry, &raw)?;
    info!(
        parameters = assessment.samples.len(),
        exceedances = assessment.report.exceedance_count(),
        "comparison complete"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&assessment.report)
            .context("serialize comparison report")?;
        println!("{json}");
    } else {
        summary::print_report(&assessment.report);
    }

    // The report above is the standalone deliverable; the advisory below is
    // best-effort and must never take it down.
    if args.no_advisory {
        return Ok(());
    }
    let mut config = AdvisorConfig::from_env();
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    if !config.is_configured() {
        warn!("OPENAI_API_KEY not set, skipping advisory");
        return Ok(());
    }
    if assessment.samples.is_empty() {
        info!("no readings collected, skipping advisory");
        return Ok(());
    }

    let request = AdvisoryRequest {
        source: args.source.into(),
        location: args.location.as_deref(),
        samples: &assessment.samples,
    };
    match request_advisory(&config, &request) {
        Ok(narrative) => {
            println!();
            println!("Advisory ({}):", config.model);
            println!("{narrative}");
        }
        Err(error) => {
            warn!(%error, "advisory request failed");
            eprintln!("warning: advisory unavailable: {error}");
        }
    }
    Ok(())
}

pub fn run_parameters() -> Result<()> {
    summary::print_parameters(guidelines());
    Ok(())
}
