//! Report generation for scenario runs.
//!
//! Generates both JSON and human-readable text reports.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};

use crate::contracts::BountyContract;
use crate::scenario::{ScenarioReport, StepOutcome};

/// Render the report as pretty-printed JSON
pub fn render_json(report: &ScenarioReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}

/// Render the report as a human-readable text table
pub fn render_text(report: &ScenarioReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(72));
    lines.push("                       BOUNTY CONTRACT SCENARIO".to_string());
    lines.push("=".repeat(72));
    lines.push(format!("Generated: {}", report.generated_at.to_rfc3339()));
    lines.push(format!(
        "Steps: {}  Created: {}  Removed: {}",
        report.steps.len(),
        report.created_count(),
        report.removed_count()
    ));
    lines.push(String::new());

    for record in &report.steps {
        let detail = match &record.outcome {
            StepOutcome::RoundStarted => "round started".to_string(),
            StepOutcome::RoundEnded => "round ended".to_string(),
            StepOutcome::Created { contract } => format!("created {}", contract),
            StepOutcome::CreateFailed => "not created".to_string(),
            StepOutcome::Removed { contract_id } => format!("removed #{}", contract_id),
            StepOutcome::NotRemoved { contract_id } => format!("#{} not removed", contract_id),
            StepOutcome::Listed { contracts } => format!("{} contracts listed", contracts.len()),
        };
        lines.push(format!("{:>4}  {:<12} {}", record.index, record.action, detail));
    }

    lines.push(String::new());
    lines.push("-".repeat(72));
    lines.push("Remaining contracts".to_string());
    lines.push("-".repeat(72));
    if report.final_contracts.is_empty() {
        lines.push("(none)".to_string());
    } else {
        lines.push(format!(
            "{:>6}  {:<20} {:<16} {:>8}  {}",
            "ID", "NAME", "VESSEL", "REWARD", "DNA"
        ));
        for contract in &report.final_contracts {
            lines.push(contract_row(contract));
        }
    }

    lines.join("\n")
}

fn contract_row(contract: &BountyContract) -> String {
    format!(
        "{:>6}  {:<20} {:<16} {:>8}  {}",
        contract.contract_id(),
        contract.name(),
        contract.vessel(),
        contract.reward(),
        contract.dna().unwrap_or("-")
    )
}

/// Write rendered report content to a file
pub fn write_report(content: &str, output_path: &Path) -> Result<()> {
    fs::write(output_path, content)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    log::info!("Report written to {}", output_path.display());
    Ok(())
}
