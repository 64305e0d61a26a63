//! spring-scan CLI tool.
//!
//! Usage:
//! ```bash
//! spring-scan scan [OPTIONS] [PATH]
//! spring-scan extract [OPTIONS] <ORIGINAL_PATH>
//! spring-scan init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use spring_scan_core::Role;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Structural extractor for Spring-style Java projects
#[derive(Parser)]
#[command(name = "spring-scan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source tree and extract every recognized file
    Scan {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Force one role for every file instead of resolving by filename
        #[arg(short, long)]
        role: Option<Role>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Extract one staged file by its original relative path
    Extract {
        /// Original relative path as uploaded (e.g. `src/FooService.java`)
        original_path: PathBuf,

        /// Role to analyze the file as
        #[arg(short, long)]
        role: Role,

        /// Root of the upload staging directory
        #[arg(short, long, default_value = "uploads")]
        uploads_root: PathBuf,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for scan results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-method compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Scan {
            path,
            role,
            format,
            exclude,
        } => commands::scan::run(&path, role, format, exclude, cli.config.as_deref()),
        Commands::Extract {
            original_path,
            role,
            uploads_root,
        } => commands::extract::run(&original_path, role, &uploads_root),
        Commands::Init { force } => commands::init::run(force),
    }
}
