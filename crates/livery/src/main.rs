//! `livery` - inspect brands, their tokens, and their page sections.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use livery::tokens::TokenCategory;
use livery::{logging, AppConfig, Livery};

/// Multi-brand design-token theming
#[derive(Parser)]
#[command(name = "livery")]
#[command(version)]
#[command(about = "Validate brand design tokens and render them as CSS custom properties")]
struct Cli {
    /// Config file (default: ./livery.toml, then the user config file)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding one subdirectory per brand
    #[arg(long, global = true, value_name = "DIR")]
    brands_dir: Option<PathBuf>,

    /// Shared section baseline document
    #[arg(long, global = true, value_name = "PATH")]
    shared_sections: Option<PathBuf>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available brands as JSON
    Brands {
        /// Ignore cached discovery
        #[arg(long)]
        refresh: bool,
    },

    /// Print a brand's tokens as a :root stylesheet
    Css(CssArgs),

    /// Check a brand's tokens; exits with status 1 when any is invalid
    Validate {
        brand: String,
    },

    /// Print one token's live value
    Token {
        /// Token name, e.g. color-primary
        name: String,

        /// Apply this brand first (default tokens otherwise)
        #[arg(long)]
        brand: Option<String>,
    },

    /// Print a brand's resolved page sections as JSON
    Sections {
        brand: String,
    },
}

#[derive(Args)]
struct CssArgs {
    brand: String,

    /// Only one category (colors, typography, spacing, borderRadius, shadows)
    #[arg(long)]
    category: Option<TokenCategory>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref())?
        .with_paths(cli.brands_dir, cli.shared_sections);
    logging::init(&config.log_level, cli.verbose);
    tracing::debug!("Using brands directory {}", config.paths.brands_dir.display());

    let mut livery = Livery::new(&config);

    match cli.command {
        Commands::Brands { refresh } => {
            let response = livery.brands(refresh);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Css(args) => {
            print!("{}", livery.css(&args.brand, args.category)?);
        }
        Commands::Validate { brand } => {
            let report = livery.validate(&brand)?;
            if report.is_valid() {
                println!("{} {}", style("valid").green().bold(), brand);
            } else {
                println!(
                    "{} {} ({} invalid)",
                    style("invalid").red().bold(),
                    brand,
                    report.errors().len()
                );
                for error in report.errors() {
                    println!("  {}", error);
                }
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Token { name, brand } => {
            let value = livery
                .token(&name, brand.as_deref())?
                .with_context(|| format!("unknown token \"{}\"", name))?;
            println!("{}", value);
        }
        Commands::Sections { brand } => {
            let resolution = livery.sections(&brand);
            if let livery::sections::SectionResolution::Failed { reason } = &resolution {
                tracing::warn!("Sections for \"{}\" unavailable: {}", brand, reason);
            }
            println!("{}", serde_json::to_string_pretty(resolution.sections())?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
