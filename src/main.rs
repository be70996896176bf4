mod dashboard;
mod dataset;
mod stats;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::dataset::Dataset;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding links.csv, movies.csv, ratings.csv and tags.csv
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// Print the computed statistics as JSON instead of rendering the dashboard
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("MovieLens dashboard starting");
    info!("Data dir: {:?}", args.data_dir);

    let dataset = Dataset::load(&args.data_dir)?;
    let stats = stats::compute_all(&dataset)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        dashboard::render(&stats);
    }

    info!("Dashboard rendered");
    Ok(())
}
