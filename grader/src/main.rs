//! Command-line adapter for the grader.
//!
//! Checks an HTML file or url for the selectors listed in a checks file and
//! prints a JSON object mapping each selector to its presence.

use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use grader::check::check_html_file;
use grader::core::report::emit;
use grader::exit_codes;
use grader::io::acquire::HttpFetcher;
use grader::io::config::{CONFIG_FILE_DEFAULT, load_config};
use grader::io::inputs::{CHECKS_FILE_DEFAULT, InvocationInputs};
use grader::logging;

#[derive(Parser, Debug)]
#[command(
    name = "grader",
    version,
    about = "Check an HTML document for the presence of CSS selectors"
)]
struct Cli {
    /// Path to checks.json
    #[arg(short, long, value_name = "check_file", default_value = CHECKS_FILE_DEFAULT)]
    checks: PathBuf,

    /// Path to index.html [default: index.html]
    #[arg(short, long, value_name = "html_file")]
    file: Option<PathBuf>,

    /// URL to index.html; takes precedence over --file
    #[arg(short, long, value_name = "file_url")]
    url: Option<String>,

    /// Remote fetch timeout in seconds (overrides the config file)
    #[arg(short, long, value_name = "secs")]
    timeout: Option<u64>,

    /// Path to grader.toml
    #[arg(long, value_name = "config_file", default_value = CONFIG_FILE_DEFAULT)]
    config: PathBuf,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::for_error(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let inputs = InvocationInputs::resolve(cli.checks, cli.file, cli.url)?;

    let mut config = load_config(&cli.config)?;
    if let Some(timeout) = cli.timeout {
        config.fetch_timeout_secs = timeout;
        config.validate()?;
    }

    let fetcher = HttpFetcher::new(&config)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mapping = runtime.block_on(check_html_file(&inputs, &fetcher))?;
    emit(&mapping, stdout().lock())
}
