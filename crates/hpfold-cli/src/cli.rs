use clap::{Args, Parser, Subcommand};
use hpfold::core::render::conformation::OverflowColoring;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hpfold - Charts for HP-model protein folding runs: the energy trajectory and the final 3D conformation.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Pipeline to run. Runs both when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

impl Cli {
    /// The selected subcommand; no subcommand means `all`.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::All(AllArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Plot the energy trajectory from energia.txt (SVG and PNG).
    Energy,
    /// Plot the final conformation from koncowa_konformacja.txt (PNG).
    Conformation,
    /// Run both pipelines.
    All(AllArgs),
}

/// Arguments for the `all` subcommand.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AllArgs {
    /// Run the pipelines one after the other instead of concurrently.
    #[arg(long)]
    pub sequential: bool,
}

/// Overrides shared by every pipeline. Each one takes precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory searched for inputs and used for outputs, in order of preference.
    /// Can be used multiple times. Defaults to ../Out, then the current directory.
    #[arg(long = "results-dir", global = true, value_name = "PATH")]
    pub results_dirs: Vec<PathBuf>,

    /// Resolution of the raster (PNG) charts.
    #[arg(long, global = true, value_name = "DPI")]
    pub dpi: Option<u32>,

    /// Coloring of residues beyond the end of the HP sequence.
    #[arg(long, global = true, value_name = "neutral|repeat-last|reject")]
    pub overflow_coloring: Option<OverflowColoring>,
}
