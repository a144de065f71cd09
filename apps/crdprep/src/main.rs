//! crdprep - Prepare cached CRD manifests for control-plane bootstrap
//!
//! Thin CLI over the prepare-crds pipeline: resolves configuration, runs one
//! command, renders its result.

mod cli;
mod display;
mod error;
mod logging;

use crate::cli::{Cli, Commands, SourceArgs};
use crate::display::OutputRenderer;
use crate::error::CliError;
use clap::Parser;
use crdprep_config::Config;
use crdprep_crds::{CrdCache, PrepareCrds, PrepareCrdsInput};
use crdprep_net::{NetClient, NetConfig};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    logging::init_tracing(json_mode, cli.global.verbose, cli.global.debug);

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli) -> Result<(), CliError> {
    info!("Starting crdprep v{}", env!("CARGO_PKG_VERSION"));

    // Precedence: defaults < file < environment < CLI flags
    let mut config = Config::load_or_default(cli.global.config.as_deref()).await?;
    config.merge_env()?;
    apply_cli_config(&mut config, &cli.command);

    let renderer = OutputRenderer::new(cli.global.output_format());

    match cli.command {
        Commands::Prepare { .. } => {
            let input = PrepareCrdsInput::new(config.remote_url()?, config.data_dir())
                .with_policy(config.crds.download_policy);
            let client = NetClient::new(&NetConfig::from(&config.network))?;

            let report = PrepareCrds::new(client).run(&input).await?;
            logging::log_report(&report);
            renderer.render_report(&report)?;
        }
        Commands::Path { .. } => {
            let cache = resolve_cache(&config)?;
            renderer.render_path(cache.dir())?;
        }
        Commands::Status { .. } => {
            let status = resolve_cache(&config)?.inspect().await?;
            renderer.render_status(&status)?;
        }
        Commands::Clean { .. } => {
            let cache = resolve_cache(&config)?;
            let removed = cache.remove().await?;
            info!(cache_dir = %cache.dir().display(), removed, "cleaned CRD cache entry");
            renderer.render_clean(cache.dir(), removed)?;
        }
    }

    Ok(())
}

fn resolve_cache(config: &Config) -> Result<CrdCache, CliError> {
    Ok(CrdCache::resolve(&config.data_dir(), config.remote_url()?))
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, command: &Commands) {
    let SourceArgs { url, data_dir } = command.source();
    if let Some(url) = url {
        config.crds.remote_url = Some(url.clone());
    }
    if let Some(dir) = data_dir {
        config.paths.data_dir = Some(dir.clone());
    }

    if let Commands::Prepare {
        policy: Some(policy),
        ..
    } = command
    {
        config.crds.download_policy = *policy;
    }
}
