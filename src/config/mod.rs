#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use toml_config::EtlConfig;

pub const GDP_SOURCE_URL: &str = "https://web.archive.org/web/20230902185326/https://en.wikipedia.org/wiki/List_of_countries_by_GDP_%28nominal%29";

/// Settings of the car-file merge job. Every file name is resolved against `work_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarEtlConfig {
    pub work_dir: PathBuf,
    pub target_file: String,
    pub log_file: String,
    pub price_decimals: u32,
}

impl Default for CarEtlConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            target_file: "transformed_data.csv".to_string(),
            log_file: "log_file.txt".to_string(),
            price_decimals: 2,
        }
    }
}

impl CarEtlConfig {
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.work_dir.join(&self.log_file)
    }
}

/// How the GDP table is found in the scraped page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum TableLocator {
    /// The n-th `tbody` in document order, zero-based.
    Position { index: usize },
    /// The first `tbody` after a heading whose text contains `text`.
    AfterHeading { text: String },
}

impl Default for TableLocator {
    fn default() -> Self {
        TableLocator::Position { index: 2 }
    }
}

/// Settings of the GDP scrape job. Every file name is resolved against `work_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GdpEtlConfig {
    pub url: String,
    pub table: TableLocator,
    pub work_dir: PathBuf,
    pub csv_file: String,
    pub db_file: String,
    pub table_name: String,
    pub min_gdp_billions: f64,
    pub log_file: String,
}

impl Default for GdpEtlConfig {
    fn default() -> Self {
        Self {
            url: GDP_SOURCE_URL.to_string(),
            table: TableLocator::default(),
            work_dir: PathBuf::from("."),
            csv_file: "Countries_by_GDP.csv".to_string(),
            db_file: "World_Economies.db".to_string(),
            table_name: "Countries_by_GDP".to_string(),
            min_gdp_billions: 100.0,
            log_file: "etl_project_log.txt".to_string(),
        }
    }
}

impl GdpEtlConfig {
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.work_dir.join(&self.log_file)
    }

    pub fn db_path(&self) -> PathBuf {
        self.work_dir.join(&self.db_file)
    }

    pub fn query_statement(&self) -> String {
        format!(
            "SELECT * from {} WHERE GDP_USD_billions >= {}",
            self.table_name, self.min_gdp_billions
        )
    }
}
