//! AlumNext - Campus Networking Mockup
//!
//! Entry point for the AlumNext CLI application.

use alumnext::{
    cli::Cli,
    error::{ExitCode, StructuredError},
};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    let code = match alumnext::run_app(cli) {
        Ok(code) => code,
        Err(err) => report_error(&err, json_errors),
    };
    std::process::exit(code.as_i32());
}

/// Print a fatal error to stderr, as JSON when `--json-errors` is set.
fn report_error(err: &anyhow::Error, json_errors: bool) -> ExitCode {
    let exit_code = ExitCode::GeneralError;

    let fallback = || eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
    if json_errors {
        match serde_json::to_string_pretty(&StructuredError::new(err, exit_code)) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => fallback(),
        }
    } else {
        fallback();
    }

    exit_code
}
