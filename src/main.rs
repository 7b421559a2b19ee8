//! Command-line interface for mockachu
//!
//! # Usage Examples
//!
//! ## Generate a dataset
//! ```bash
//! # 100 rows of JSON from a request file
//! mockachu generate --request request.yaml
//!
//! # Reproducible CSV written to a file
//! mockachu generate --request request.yaml \
//!   --format CSV --seed 42 --output people.csv
//!
//! # Override the row count, pretty-print the JSON
//! mockachu generate --request request.yaml --rows 10 --pretty
//! ```
//!
//! ## Discover the vocabulary
//! ```bash
//! # Human-readable listing of generators, actions and parameters
//! mockachu generators
//!
//! # Same listing as JSON, e.g. for a frontend
//! mockachu generators --json
//! ```
//!
//! Logging goes through `RUST_LOG`, e.g. `RUST_LOG=mockachu=debug`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use mockachu::{GenerationRequest, OutputFormat};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mockachu")]
#[command(about = "Generate synthetic structured data as JSON, CSV, XML, SQL or HTML")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset from a declarative request file
    Generate {
        /// Request file (YAML, or JSON with a .json extension)
        #[arg(long, value_name = "PATH")]
        request: PathBuf,

        /// Override the request's row count
        #[arg(long)]
        rows: Option<u64>,

        /// Override the request's output format (JSON, CSV, XML, SQL, HTML)
        #[arg(long)]
        format: Option<String>,

        /// Seed the generator for reproducible output
        #[arg(long, env = "MOCKACHU_SEED")]
        seed: Option<u64>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Write the dataset to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List the available generators, actions and output formats
    Generators {
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            request,
            rows,
            format,
            seed,
            pretty,
            output,
        } => {
            let mut generation_request = GenerationRequest::from_file(&request)
                .with_context(|| format!("Failed to load request from {request:?}"))?;

            if let Some(rows) = rows {
                generation_request.rows = rows;
            }
            if let Some(format) = format {
                generation_request.format = format.parse::<OutputFormat>()?;
            }

            let bytes = if pretty && generation_request.format == OutputFormat::Json {
                let mut rng = new_rng(seed);
                let rows = mockachu::generate_rows(&generation_request, &mut rng)?;
                mockachu_formats::json::to_json_pretty(&rows)?
            } else {
                mockachu::generate(&generation_request, seed)?
            };

            match output {
                Some(path) => std::fs::write(&path, &bytes)
                    .with_context(|| format!("Failed to write output to {path:?}"))?,
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&bytes)?;
                    if !bytes.ends_with(b"\n") {
                        stdout.write_all(b"\n")?;
                    }
                }
            }
        }

        Commands::Generators { json } => {
            let listing = mockachu::list_all();
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print_listing(&listing);
            }
        }
    }

    Ok(())
}

fn new_rng(seed: Option<u64>) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    match seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_os_rng(),
    }
}

fn print_listing(listing: &mockachu::RegistryListing) {
    println!("Output formats: {}", listing.formats.join(", "));
    println!();
    for generator in &listing.generators {
        println!("{} ({})", generator.display_name, generator.name);
        for action in &generator.actions {
            if action.parameters.is_empty() {
                println!("  {}", action.name);
            } else {
                println!("  {} [{}]", action.name, action.parameters.join(", "));
            }
        }
        println!();
    }
}
