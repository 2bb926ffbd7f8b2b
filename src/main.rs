use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use sxi::manifest::{builtin_manifest, load_manifest};
use sxi::output;
use sxi::ranking::RankTable;
use sxi::registry::stats::show_stats;
use sxi::registry::{IndexableRegistry, ManifestEntry};
use sxi::utils::{AppConfig, init_tracing};

#[derive(Parser)]
#[command(name = "sxi")]
#[command(about = "Catalog of search-indexable settings screens")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read the manifest from a JSON file instead of the built-in one
    #[arg(short, long, global = true)]
    manifest: Option<PathBuf>,

    /// Config file (defaults to the app data directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List every registered entry
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one entry by identifier
    Get {
        /// Entry identifier
        identifier: String,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Show registry statistics
    Stats,
    /// Print the effective manifest as JSON
    Manifest,
    /// Write the current config (defaults if none) to --config or the app data directory
    InitConfig,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let color = config.color && !cli.no_color;
    let manifest = read_manifest(cli.manifest.as_deref())?;

    match cli.command {
        Commands::List { json } => {
            let registry = build_registry(&manifest, &config)?;
            let records = registry.records_by_rank();
            if json {
                output::print_json(&records)?;
            } else {
                output::print_records(&records, color)?;
            }
        }
        Commands::Get { identifier, json } => {
            let registry = build_registry(&manifest, &config)?;
            match registry.get(&identifier) {
                Some(record) if json => output::print_json(record)?,
                Some(record) => output::print_record_detail(record, color)?,
                None => {
                    eprintln!("sxi: no entry named {}", identifier);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Stats => {
            let registry = build_registry(&manifest, &config)?;
            show_stats(&registry);
        }
        Commands::Manifest => {
            println!("{}", output::manifest_to_json(&manifest)?);
        }
        Commands::InitConfig => {
            let path = match &cli.config {
                Some(path) => {
                    config.save_to(path)?;
                    path.clone()
                }
                None => config.save()?,
            };
            println!("Wrote config: {}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn build_registry(manifest: &[ManifestEntry], config: &AppConfig) -> Result<IndexableRegistry> {
    IndexableRegistry::initialize_with(
        manifest,
        &RankTable::new(&config.ranking),
        config.registry_options(),
    )
    .context("Failed to initialize indexable registry")
}

fn read_manifest(path: Option<&Path>) -> Result<Vec<ManifestEntry>> {
    match path {
        Some(path) => load_manifest(path),
        None => Ok(builtin_manifest()),
    }
}
