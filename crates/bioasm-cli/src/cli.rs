use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "bioasm CLI - Resolve macromolecular structure identifiers and inspect biological-assembly retrieval plans.",
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
    /// Parse a structure identifier and print its retrieval plan.
    Inspect(InspectArgs),
    /// Guess the format of a structure file from its filename.
    Filetype(FiletypeArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The identifier to inspect (e.g. 4hhb, 4HHB.C, 4GCR.A_1-83,
    /// d2bq6a1, BIOL:1fah:2, PDP:4HHBAa, or a URL).
    #[arg(value_name = "IDENTIFIER")]
    pub name: String,

    /// Path to a retrieval configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `filetype` subcommand.
#[derive(Args, Debug)]
pub struct FiletypeArgs {
    /// The filename to classify (e.g. pdb4hhb.ent.gz).
    #[arg(value_name = "FILENAME")]
    pub filename: String,
}
