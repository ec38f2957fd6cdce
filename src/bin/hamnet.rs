//! Hamnet CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use hamnet::cli::args::HamnetArgs;
use hamnet::cli::commands::execute_command;
use hamnet::error::HamnetError;

fn main() {
    // Parse command line arguments using clap
    let args = HamnetArgs::parse();

    // Set up logging/verbosity based on args
    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(exit_code(&e));
    }
}

/// 2 for fatal load/validation errors, 3 for a row mapping error under the
/// abort-on-error policy.
fn exit_code(error: &HamnetError) -> i32 {
    match error {
        HamnetError::CaseAborted { .. } => 3,
        _ => 2,
    }
}
