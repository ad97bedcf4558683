mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use hpfold::engine::progress::PipelineKind;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("🚀 hpfold v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let partial_config = PartialConfig::load(cli.settings.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&cli.settings)?;

    let outcomes = match cli.command() {
        Commands::Energy => {
            info!("Dispatching to 'energy' command.");
            vec![(
                PipelineKind::Energy,
                commands::energy::run_standalone(&config.energy),
            )]
        }
        Commands::Conformation => {
            info!("Dispatching to 'conformation' command.");
            vec![(
                PipelineKind::Conformation,
                commands::conformation::run_standalone(&config.conformation),
            )]
        }
        Commands::All(args) => {
            info!("Dispatching to 'all' command.");
            commands::all::run(&args, &config)
        }
    };

    let result = commands::summarize(&outcomes);
    match &result {
        Ok(_) => info!("✅ All pipelines completed successfully."),
        Err(e) => error!("❌ {}", e),
    }
    result
}
