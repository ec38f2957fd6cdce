//! Output formatting for CLI commands.
//!
//! The run loop produces structured outcome records; this module is the only
//! place they are rendered, either as the human per-case report lines or as
//! JSON.

use serde::Serialize;

use crate::classifier::HammingNetwork;
use crate::cli::args::{HamnetArgs, OutputFormat};
use crate::error::Result;

/// Outcome of one case row.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CaseOutcome {
    /// The row was classified.
    Classified {
        id: String,
        line: u64,
        label: String,
        distance: usize,
    },
    /// The row was fully blank and skipped.
    Skipped { line: u64 },
    /// The row had non-binary feature values and was reported as
    /// indeterminate.
    Invalid {
        id: String,
        line: u64,
        label: String,
        errors: Vec<String>,
    },
}

/// Counts over a finished run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub classified: usize,
    pub skipped: usize,
    pub invalid: usize,
}

/// Result structure for a classification run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Prototype labels, in source order.
    pub prototypes: Vec<String>,
    /// The feature set shared by prototypes and cases.
    pub features: Vec<String>,
    /// Per-case outcomes, in case-file order.
    pub cases: Vec<CaseOutcome>,
    pub summary: RunSummary,
}

impl RunReport {
    /// Assemble a report from the network and the collected outcomes.
    pub fn new(network: &HammingNetwork, cases: Vec<CaseOutcome>) -> RunReport {
        let summary = RunSummary {
            total: cases.len(),
            classified: cases
                .iter()
                .filter(|c| matches!(c, CaseOutcome::Classified { .. }))
                .count(),
            skipped: cases
                .iter()
                .filter(|c| matches!(c, CaseOutcome::Skipped { .. }))
                .count(),
            invalid: cases
                .iter()
                .filter(|c| matches!(c, CaseOutcome::Invalid { .. }))
                .count(),
        };
        RunReport {
            prototypes: network
                .prototypes()
                .iter()
                .map(|p| p.label.clone())
                .collect(),
            features: network.features().to_vec(),
            cases,
            summary,
        }
    }
}

/// Result structure for table validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub prototypes: usize,
    pub labels: Vec<String>,
    pub features: Vec<String>,
    pub metadata_entries: Option<usize>,
}

/// Render a classification run in the selected format.
pub fn render_run(report: &RunReport, args: &HamnetArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            render_run_human(report);
            Ok(())
        }
        OutputFormat::Json => render_json(report, args),
    }
}

/// One line per case, in case-file order.
fn render_run_human(report: &RunReport) {
    for case in &report.cases {
        match case {
            CaseOutcome::Classified {
                id,
                label,
                distance,
                ..
            } => {
                println!("Caso '{id}': Clasificado como '{label}' (Hamming={distance})");
            }
            CaseOutcome::Skipped { line } => {
                println!("Fila vacía (línea {line}), ignorada");
            }
            CaseOutcome::Invalid {
                id, label, errors, ..
            } => {
                let detail = errors.join(", ");
                println!("Caso '{id}': Clasificado como '{label}' (valores inválidos -> {detail})");
            }
        }
    }
}

/// Render a validation result in the selected format.
pub fn render_validation(report: &ValidationReport, args: &HamnetArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Prototype table is valid");
            }
            println!("Prototypes: {} -> {:?}", report.prototypes, report.labels);
            println!(
                "Features: {} -> {:?}",
                report.features.len(),
                report.features
            );
            if let Some(entries) = report.metadata_entries {
                println!("Metadata entries: {entries}");
            }
            Ok(())
        }
        OutputFormat::Json => render_json(report, args),
    }
}

/// Output in JSON format.
fn render_json<T: Serialize>(result: &T, args: &HamnetArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
