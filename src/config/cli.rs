use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "tabular-etl")]
#[command(about = "Batch ETL jobs for car listings and country GDP figures")]
pub struct CliArgs {
    #[command(subcommand)]
    pub job: Job,

    /// Optional TOML file overriding the built-in paths and source URL
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit operational logs as JSON")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Job {
    /// Merge *.csv, *.json and *.xml car files and round prices
    Cars,
    /// Scrape GDP by country, convert to billions, load CSV and SQLite
    Gdp,
}
