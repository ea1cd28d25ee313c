//! chronodupe - Checksum-based duplicate file finder
//!
//! Entry point for the chronodupe CLI application.

use chronodupe::{
    cli::Cli,
    error::{ExitCode, StructuredError},
    logging::init_logging,
};
use clap::Parser;

fn main() {
    // Parse command-line arguments; usage errors exit here
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    init_logging(cli.verbose, cli.quiet, cli.no_color);

    match chronodupe::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = ExitCode::GeneralError;

            if json_errors {
                let structured = StructuredError::new(&err, exit_code);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    eprintln!("{}", json);
                } else {
                    eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
                }
            } else {
                eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
