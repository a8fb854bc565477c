/*!
# License Swap CLI

Command-line interface for replacing license headers in bulk.
*/

use anyhow::{Context, Result};
use clap::Parser;
use license_swap::cli_common::{self, CliArgs, ConsoleReporter};
use license_swap::core::{EXIT_FAILURE, EXIT_OK};
use license_swap::{relicense_directory, LicenseSwapError, RunSummary};

fn main() {
    let args = CliArgs::parse();

    cli_common::configure_colors();
    if let Err(e) = cli_common::init_logging(args.verbose) {
        cli_common::print_error(&format!("{:#}", e));
    }

    let code = match run(&args) {
        Ok(summary) => {
            cli_common::print_summary(&summary);
            EXIT_OK
        }
        Err(e) => {
            cli_common::print_error(&format!("{:#}", e));
            exit_code(&e)
        }
    };

    std::process::exit(code);
}

fn run(args: &CliArgs) -> Result<RunSummary> {
    let config = args.to_config()?;
    let mut reporter = ConsoleReporter::new();

    let summary = relicense_directory(
        &args.dir,
        &args.source_exemplar,
        &args.target_exemplar,
        config,
        &mut reporter,
    )
    .with_context(|| format!("Relicensing {} failed", args.dir.display()))?;

    Ok(summary)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<LicenseSwapError>()
        .map(LicenseSwapError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}
