use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use breakvault_builder::{ingest, xlsx};
use breakvault_odds::ChecklistDataset;

#[derive(Debug, Parser)]
#[command(name = "breakvault-builder", version)]
#[command(about = "Convert a checklist workbook into the dataset JSON served to the calculators")]
struct Args {
    /// Input checklist workbook (.xlsx)
    #[arg(long, default_value = "checklist.xlsx")]
    input: PathBuf,

    /// Where to write the dataset JSON
    #[arg(long, default_value = "breakvault-web/static/assets/data/checklist.json")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let workbook = xlsx::load_workbook(&args.input)?;
    let dataset = ingest::ingest(&workbook)?;
    write_dataset(&args.output, &dataset)?;

    println!("{} {}", "Created".green().bold(), args.output.display());
    println!(
        "Players: {}  Rows: {}",
        dataset.players.len(),
        dataset.rows.len()
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn write_dataset(path: &Path, dataset: &ChecklistDataset) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(dataset).context("serializing dataset")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
