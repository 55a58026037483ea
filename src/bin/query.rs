use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use celestial_names::{
    completion, find_catalog_number, load_names, ConstellationTable, GreekTable, NameDatabase,
    INVALID_CATALOG_NUMBER,
};

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "names-query")]
#[command(about = "Query star name files (catalog-number/name resolution)")]
struct Cli {
    /// Path to the names file (`<number> <name>[:<name>...]` per line)
    #[arg(long)]
    names: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print name file statistics
    Info,
    /// Resolve a name or designation to a catalog number
    Lookup {
        /// Free-form query, e.g. "Alpha Centauri", "ALF2 Cen", "61 Cyg"
        query: String,
        /// Print query timing
        #[arg(long)]
        timing: bool,
    },
    /// List registered names containing a fragment
    Complete {
        /// Substring to search for (case-insensitive)
        fragment: String,
        /// Also search Greek-letter synonym spellings of the fragment
        #[arg(long)]
        greek: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut db = NameDatabase::new(
        Arc::new(GreekTable::new()),
        Arc::new(ConstellationTable::new()),
    );
    let file = File::open(&cli.names)
        .with_context(|| format!("Failed to open names file: {:?}", cli.names))?;
    load_names(&mut db, BufReader::new(file))
        .with_context(|| format!("Failed to load names file: {:?}", cli.names))?;

    match cli.command {
        Commands::Info => {
            println!("Name associations: {}", db.name_count());
        }
        Commands::Lookup { query, timing } => {
            let start = timing.then(Instant::now);
            let number = find_catalog_number(&db, &query);
            if let Some(start_time) = start {
                let elapsed = start_time.elapsed();
                eprintln!(
                    "Query completed in {:.3} ms",
                    elapsed.as_secs_f64() * 1000.0
                );
            }

            if number == INVALID_CATALOG_NUMBER {
                println!("No object matches '{}'", query);
                std::process::exit(1);
            }
            println!("Catalog number: {}", number);
            for (i, name) in db.names_for(number).enumerate() {
                if i == 0 {
                    println!("Proper name:    {}", name);
                } else {
                    println!("Also known as:  {}", name);
                }
            }
        }
        Commands::Complete {
            fragment,
            greek,
            format,
        } => {
            let matches = completion(&db, &fragment, greek);
            match format {
                OutputFormat::Table => {
                    for (i, name) in matches.iter().enumerate() {
                        println!("{:4}: {}", i + 1, name);
                    }
                    if matches.is_empty() {
                        println!("No names contain '{}'", fragment);
                    } else {
                        println!("\nTotal matches: {}", matches.len());
                    }
                }
                OutputFormat::Json => print_json(&db, &matches),
            }
        }
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct JsonMatch<'a> {
    name: &'a str,
    catalog_number: u32,
}

fn print_json(db: &NameDatabase, matches: &[String]) {
    let entries: Vec<JsonMatch<'_>> = matches
        .iter()
        .map(|name| JsonMatch {
            name,
            catalog_number: db.catalog_number_by_name(name),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries).unwrap());
}
