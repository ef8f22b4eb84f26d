// ===== oppgauge/src/main.rs =====
use clap::{Parser, Subcommand};
use oppgauge::dataset::Dataset;
use oppgauge::table::Table;
use std::path::Path;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Opportunities table (.csv or .json). First column = opportunity
    /// names, remaining columns = differentiators.
    #[arg(global = true, short, long, default_value = "data/opportunities.csv")]
    file: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive ratings, apply overrides, and print the ranked totals.
    Rank(cmd::rank::RankArgs),
    /// Show what the loader found: columns, opportunities, diagnostics.
    Inspect(cmd::inspect::InspectArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("📂 Loading table: {}", cli.file);
    let table = Table::load(Path::new(&cli.file)).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let dataset = match Dataset::from_table(table) {
        Ok(d) => d,
        Err(e) => {
            error!("❌ Dataset Error: {}", e);
            process::exit(1);
        }
    };

    info!(
        "Found {} opportunities and {} differentiators.",
        dataset.opportunities().len(),
        dataset.differentiators().len()
    );

    let result = match cli.command {
        Commands::Rank(args) => cmd::rank::run(args, &dataset),
        Commands::Inspect(args) => cmd::inspect::run(args, &dataset),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
