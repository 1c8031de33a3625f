use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "polygen - Generates input scripts for permutationally invariant polynomial fits of molecular potential-energy surfaces.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a polynomial generator input script for a molecule composition.
    Generate(GenerateArgs),
    /// Show the fragment letters, atom labels and variable counts for a molecule composition.
    Inspect(InspectArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Molecule composition, fragments separated by '_' (e.g., 'A1B2_A1B2').
    #[arg(short, long, required = true, value_name = "COMPOSITION")]
    pub molecule: String,

    /// Path for the generated input script, or '-' to write to standard output.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a settings file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override `poly_generation.accepted_terms` ('all', 'partly-inter' or 'purely-inter').
    #[arg(short, long, value_name = "FILTER")]
    pub accepted_terms: Option<String>,

    /// Set a specific configuration value, overriding the settings file.
    /// Can be used multiple times. Example: -S poly_generation.accepted_terms=all
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Molecule composition, fragments separated by '_' (e.g., 'A1B2_A1B2').
    #[arg(short, long, required = true, value_name = "COMPOSITION")]
    pub molecule: String,
}
