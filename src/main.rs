//! Density Metrics CLI
//!
//! Computes dashboard views (activities, communities, performances)
//! from a density dataset and writes them as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use density_metrics::commands::{
    display_schema, display_version, execute_render, validate_args, validate_dataset_file,
    RenderArgs,
};
use density_metrics::dashboard::Tab;

/// Density Metrics - dashboard views for open-source organizations
#[derive(Parser, Debug)]
#[command(name = "density")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute one dashboard tab for a selection
    Render {
        /// Dataset JSON file
        #[arg(short, long, default_value = "dataset.json")]
        data: PathBuf,

        /// Tab to compute
        #[arg(short, long, value_enum, default_value = "activities")]
        tab: Tab,

        /// Selected organization (defaults to the configured one)
        #[arg(long)]
        org: Option<String>,

        /// Chart click payload as JSON, e.g. '{"points":[{"text":"kubectl"}]}'
        #[arg(long)]
        click: Option<String>,

        /// Issue pie click payload as JSON (performances tab)
        #[arg(long)]
        issue_click: Option<String>,

        /// Dashboard configuration TOML
        #[arg(short, long, env = "DENSITY_CONFIG")]
        config: Option<PathBuf>,

        /// Output path for the view JSON
        #[arg(short, long, default_value = "view.json")]
        output: PathBuf,

        /// Print the view JSON to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a dataset JSON file
    Validate {
        /// Path to dataset JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Render {
            data,
            tab,
            org,
            click,
            issue_click,
            config,
            output,
            stdout,
            summary,
        } => {
            let args = RenderArgs {
                data,
                tab,
                organization: org,
                click,
                issue_click,
                config,
                output,
                stdout,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_render(args)?;
        }

        Commands::Validate { file } => {
            validate_dataset_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
