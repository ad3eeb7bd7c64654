//! pagewright CLI tool

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pagewright::PagewrightConfig;
use pagewright_cli::{observability, CheckCommand, ListCommand, RenderCommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagewright")]
#[command(version)]
#[command(about = "Render HTML pages from a root shell, partials, layouts and page templates", long_about = None)]
struct Cli {
    /// Template directory (overrides `templates.base_dir` from the config)
    #[arg(long, short, global = true)]
    base: Option<PathBuf>,

    /// Configuration file (TOML, or JSON with a `.json` extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page through a layout
    Render {
        /// Page key (e.g., `home/index.html`)
        page: String,
        /// Layout to render (defaults to `render.default_layout`)
        #[arg(long, short)]
        layout: Option<String>,
        /// JSON file used as template data
        #[arg(long, short)]
        data: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List compiled pages
    List {
        /// Show the fragments available to each page
        #[arg(long)]
        fragments: bool,
    },
    /// Load every template and report problems
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    let mut config =
        PagewrightConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(base) = cli.base {
        config = config.with_base_dir(base);
    }
    tracing::debug!(?config, "configuration loaded");

    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Render {
            page,
            layout,
            data,
            output,
        } => {
            let cmd = RenderCommand {
                page,
                layout,
                data,
                output,
            };
            cmd.execute(&config, &mut out)?;
        }
        Commands::List { fragments } => {
            ListCommand { fragments }.execute(&config, &mut out)?;
        }
        Commands::Check => {
            CheckCommand.execute(&config, &mut out)?;
        }
    }

    Ok(())
}
