//! Command line interface definition

use clap::{Args, Parser, Subcommand};
use crdprep_types::{DownloadPolicy, OutputFormat};
use std::path::PathBuf;

/// crdprep - Prepare cached CRD manifests for control-plane bootstrap
#[derive(Parser)]
#[command(name = "crdprep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prepare cached CRD manifests for control-plane bootstrap")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }
}

/// Source and location of a cache entry
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Remote URL of the CRD package
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Base data directory holding cache/
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Download and unpack CRDs unless already cached
    Prepare {
        #[command(flatten)]
        source: SourceArgs,

        /// Download policy
        #[arg(long, value_enum)]
        policy: Option<DownloadPolicy>,
    },

    /// Print the cache entry directory for a URL
    Path {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show what is cached for a URL
    Status {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Remove the cache entry for a URL
    Clean {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Commands {
    pub fn source(&self) -> &SourceArgs {
        match self {
            Commands::Prepare { source, .. }
            | Commands::Path { source }
            | Commands::Status { source }
            | Commands::Clean { source } => source,
        }
    }
}
