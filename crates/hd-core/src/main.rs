//! heredity: exact Bayesian gene/trait posteriors over a family pedigree.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hd_common::{OutputFormat, Result};
use hd_config::ModelParams;
use hd_core::exit_codes::exit_code_for;
use hd_core::inference::infer_posteriors;
use hd_core::pedigree::loader::load_pedigree;
use hd_core::report;

/// Exact Bayesian inference of gene and trait posteriors over a pedigree.
#[derive(Debug, Parser)]
#[command(name = "heredity", version, about)]
struct Cli {
    /// CSV pedigree file with columns name,mother,father,trait
    data: PathBuf,

    /// JSON file overriding the built-in model parameters
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("heredity: {err}");
        process::exit(exit_code_for(&err).as_i32());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let model = match &cli.params {
        Some(path) => ModelParams::load(path)?,
        None => ModelParams::default(),
    };
    let population = load_pedigree(&cli.data)?;
    let result = infer_posteriors(&population, &model)?;
    print!("{}", report::render(&population, &result, cli.format)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
