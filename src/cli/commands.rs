//! Command implementations for the hamnet CLI.

use log::{info, warn};

use crate::classifier::INDETERMINADO;
use crate::cli::args::{ClassifyArgs, Command, HamnetArgs, ValidateArgs};
use crate::cli::output::{self, CaseOutcome, RunReport, ValidationReport};
use crate::error::{HamnetError, Result};
use crate::loader::{self, CaseTable};
use crate::runlog::RunLog;

/// Execute a CLI command.
pub fn execute_command(args: HamnetArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Validate(validate_args) => validate(validate_args.clone(), &args),
    }
}

/// Run the full classification pipeline: load, validate, classify row by
/// row, render the report.
fn classify(args: ClassifyArgs, cli_args: &HamnetArgs) -> Result<()> {
    let run_log = match &args.log {
        Some(path) => RunLog::to_file(path),
        None => RunLog::disabled(),
    };

    let metadata = match &args.metadata {
        Some(path) => match loader::load_metadata(path) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                run_log.write(&e.to_string());
                return Err(e);
            }
        },
        None => None,
    };

    let network = match loader::load_prototypes(&args.prototypes, metadata.as_ref()) {
        Ok(network) => network,
        Err(e) => {
            run_log.write(&e.to_string());
            return Err(e);
        }
    };

    let labels: Vec<&str> = network.prototypes().iter().map(|p| p.label.as_str()).collect();
    info!("prototypes: {labels:?}");
    info!(
        "features: {} -> {:?}",
        network.features().len(),
        network.features()
    );

    let cases = match CaseTable::open(&args.cases, args.id_column.as_deref(), network.features()) {
        Ok(cases) => cases,
        Err(e) => {
            run_log.write(&e.to_string());
            return Err(e);
        }
    };

    let mut outcomes = Vec::new();
    for case_row in cases.rows() {
        if case_row.is_blank() {
            warn!("blank row in case table (line {}), ignored", case_row.line());
            run_log.write(&format!("Fila vacía (línea {}), ignorada", case_row.line()));
            outcomes.push(CaseOutcome::Skipped {
                line: case_row.line(),
            });
            continue;
        }

        let id = case_row.id();
        match case_row.bits() {
            Ok(bits) => {
                let classification = network.classify(&bits);
                run_log.write(&format!(
                    "Caso '{}': Clasificado como '{}' (Hamming={})",
                    id, classification.label, classification.distance
                ));
                outcomes.push(CaseOutcome::Classified {
                    id,
                    line: case_row.line(),
                    label: classification.label,
                    distance: classification.distance,
                });
            }
            Err(cell_errors) => {
                let errors: Vec<String> = cell_errors.iter().map(|c| c.to_string()).collect();
                let detail = errors.join(", ");
                run_log.write(&format!(
                    "Caso '{}' (línea {}): valores inválidos -> {}",
                    id,
                    case_row.line(),
                    detail
                ));
                if args.abort_on_error {
                    return Err(HamnetError::CaseAborted {
                        id,
                        line: case_row.line(),
                        detail,
                    });
                }
                outcomes.push(CaseOutcome::Invalid {
                    id,
                    line: case_row.line(),
                    label: INDETERMINADO.to_string(),
                    errors,
                });
            }
        }
    }

    let report = RunReport::new(&network, outcomes);
    info!(
        "run complete: {} cases, {} classified, {} skipped, {} invalid",
        report.summary.total,
        report.summary.classified,
        report.summary.skipped,
        report.summary.invalid
    );
    output::render_run(&report, cli_args)
}

/// Load and validate the input tables without classifying anything.
fn validate(args: ValidateArgs, cli_args: &HamnetArgs) -> Result<()> {
    let metadata = match &args.metadata {
        Some(path) => Some(loader::load_metadata(path)?),
        None => None,
    };
    let network = loader::load_prototypes(&args.prototypes, metadata.as_ref())?;

    let report = ValidationReport {
        prototypes: network.prototypes().len(),
        labels: network
            .prototypes()
            .iter()
            .map(|p| p.label.clone())
            .collect(),
        features: network.features().to_vec(),
        metadata_entries: metadata.as_ref().map(|m| m.len()),
    };
    output::render_validation(&report, cli_args)
}
