#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use pmi_cli::args::CliArgs;
use pmi_cli::driver::{self, OutputMode};
use pmi_cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS: i32 = 1;
const EXIT_CHECK_FAILED: i32 = 2;

fn main() -> Result<()> {
    // PMI_LOG / RUST_LOG enable tracing; PMI_LOG_FORMAT=tree|json|text.
    pmi_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::run(&args, &cwd)?;

    if OutputMode::from_args(&args) == OutputMode::Stdout {
        for file in &result.files {
            print!("{}", file.expanded);
        }
    }

    if !result.diagnostics.is_empty() {
        if args.json {
            eprintln!("{}", Reporter::render_json(&result.diagnostics)?);
        } else {
            let pretty = args.pretty.unwrap_or_else(|| std::io::stderr().is_terminal());
            let mut reporter = Reporter::new(pretty);
            for file in &result.files {
                reporter.add_source(file.file_name.clone(), file.original.clone());
            }
            eprint!("{}", reporter.render(&result.diagnostics));
        }
    }

    for path in &result.check_failures {
        eprintln!("would expand {}", path.display());
    }

    let code = if result.has_errors() {
        EXIT_DIAGNOSTICS
    } else if !result.check_failures.is_empty() {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    };
    std::process::exit(code);
}
