//! cvelint - linter for CVE JSON 5.x records
//!
//! Checks a directory or file of CVE records against the rule catalogue.
//! Without a target, a cached clone of the public cvelistV5 repository is used.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cvelint_analysis::engine::lint;
use cvelint_analysis::reporters::{create_reporter, OutputFormat, ReportOptions};
use cvelint_analysis::rules::RuleCatalogue;
use cvelint_core::config::{CliOverrides, LintConfig, RulesConfig};
use cvelint_core::tracing::init_tracing;
use cvelint_core::{LintError, LintErrorCode};

/// Exit status when the report is clean.
const EXIT_CLEAN: u8 = 0;
/// Exit status when there are findings or file errors.
const EXIT_PROBLEMS: u8 = 1;
/// Exit status for configuration and startup failures.
const EXIT_FATAL: u8 = 2;

/// cvelint - lint CVE JSON 5.x records
#[derive(Parser, Debug)]
#[command(name = "cvelint")]
#[command(version, about, long_about = None)]
#[command(after_help = "If no directory or file is specified, a clone of the cvelistV5 repo is \
stored in the location pointed to by CVELINT_CACHE_DIR, or a standard OS cache location.")]
struct Cli {
    /// Directory or file to check
    #[arg(value_name = "DIRECTORY|FILE")]
    target: Option<PathBuf>,

    /// Output format: text, json or csv
    #[arg(long)]
    format: Option<String>,

    /// Only check records assigned by this CNA
    #[arg(long, value_name = "ORG")]
    cna: Option<String>,

    /// Comma-separated rule codes to run (default: all)
    #[arg(long, value_name = "CODES")]
    select: Option<String>,

    /// Comma-separated rule codes to skip
    #[arg(long, value_name = "CODES")]
    ignore: Option<String>,

    /// Print the available rules and exit
    #[arg(long)]
    show_rules: bool,

    /// Print error counts per CNA instead of individual findings
    #[arg(long)]
    summary: bool,

    /// Worker threads (0 = one per core)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            threads: self.threads,
            format: self.format.clone(),
            summary: self.summary.then_some(true),
            color: self.no_color.then_some(false),
            select: self.select.as_deref().map(RulesConfig::parse_codes),
            ignore: self.ignore.as_deref().map(RulesConfig::parse_codes),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(true) => ExitCode::from(EXIT_PROBLEMS),
        Ok(false) => ExitCode::from(EXIT_CLEAN),
        Err(e) => {
            eprintln!("ERROR: {}", fatal_message(&e));
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Lint failures carry their stable code: `[CODE] message`.
fn fatal_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<LintError>() {
        Some(lint_error) => lint_error.coded_string(),
        None => format!("{err:#}"),
    }
}

/// Returns whether the report has any problems.
fn run(cli: &Cli) -> Result<bool> {
    let catalogue = RuleCatalogue::standard();
    if cli.show_rules {
        let mut stdout = std::io::stdout().lock();
        for rule in catalogue.rules() {
            writeln!(stdout, "{}: {}", rule.code, rule.description)?;
        }
        return Ok(false);
    }

    let cwd = std::env::current_dir().context("unable to determine working directory")?;
    let config = LintConfig::load(&cwd, Some(&cli.overrides())).map_err(LintError::from)?;
    let format = config
        .output
        .effective_format()
        .parse::<OutputFormat>()
        .map_err(LintError::from)?;

    let report = lint(cli.target.as_deref(), &catalogue, &config, cli.cna.as_deref())?;

    let color = config.output.effective_color() && std::io::stdout().is_terminal();
    let reporter = create_reporter(format, &ReportOptions::new(color));
    let output = if config.output.effective_summary() {
        reporter.generate_summary(&report.summary())
    } else {
        reporter.generate(&report)
    }
    .map_err(LintError::from)?;
    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("unable to write report")?;

    Ok(report.has_problems())
}
