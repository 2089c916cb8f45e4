//! geotext: CLI tool for writing plaintext CIDR lists from entry data.

use clap::{Parser, Subcommand};
use geotext::{ConverterRegistry, EntryMap, LogSink, PipelineConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "geotext")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Write plaintext CIDR lists from entry data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the output steps of a pipeline config
    Convert {
        /// Pipeline config (JSON)
        #[arg(short, long, default_value = "config.json")]
        config: PathBuf,

        /// Entries file: JSON object of name -> CIDR list
        #[arg(short, long)]
        entries: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List registered output converters
    List,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let registry = ConverterRegistry::with_builtin();

    match cli.command {
        Commands::Convert {
            config,
            entries,
            verbose,
        } => {
            if let Err(e) = convert(&registry, &config, &entries, verbose) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::List => list(&registry),
    }
}

fn convert(
    registry: &ConverterRegistry,
    config_path: &PathBuf,
    entries_path: &PathBuf,
    verbose: bool,
) -> geotext::Result<()> {
    if verbose {
        println!("Reading config file: {:?}", config_path);
    }
    let config = PipelineConfig::from_file(config_path)?;

    if verbose {
        println!("Reading entries file: {:?}", entries_path);
    }
    let entries = EntryMap::from_file(entries_path)?;

    if verbose {
        println!(
            "Loaded {} entries, {} output steps",
            geotext::Container::len(&entries),
            config.output.len()
        );
    }

    config.run(registry, &entries, &LogSink)?;

    println!("Done: {:?} -> {} output steps", entries_path, config.output.len());
    Ok(())
}

fn list(registry: &ConverterRegistry) {
    println!("Output converters:");
    for (name, description) in registry.types() {
        println!("  {:<10} {}", name, description);
    }
}
