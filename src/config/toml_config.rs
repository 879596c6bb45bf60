use crate::config::{CarEtlConfig, GdpEtlConfig, TableLocator};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of both jobs. Every section and field is optional; an empty
/// file yields the fixed defaults the jobs have always used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EtlConfig {
    pub cars: CarEtlConfig,
    pub gdp: GdpEtlConfig,
}

impl EtlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

fn validate_work_dir(field_name: &str, work_dir: &Path) -> Result<()> {
    let as_str = work_dir.to_str().ok_or_else(|| EtlError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: work_dir.display().to_string(),
        reason: "Path is not valid UTF-8".to_string(),
    })?;
    validation::validate_path(field_name, as_str)
}

impl Validate for CarEtlConfig {
    fn validate(&self) -> Result<()> {
        validate_work_dir("cars.work_dir", &self.work_dir)?;
        validation::validate_path("cars.target_file", &self.target_file)?;
        validation::validate_path("cars.log_file", &self.log_file)?;
        validation::validate_range("cars.price_decimals", self.price_decimals, 0, 10)?;
        Ok(())
    }
}

impl Validate for GdpEtlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("gdp.url", &self.url)?;
        if let TableLocator::AfterHeading { text } = &self.table {
            validation::validate_non_empty_string("gdp.table.text", text)?;
        }
        validate_work_dir("gdp.work_dir", &self.work_dir)?;
        validation::validate_path("gdp.csv_file", &self.csv_file)?;
        validation::validate_path("gdp.db_file", &self.db_file)?;
        validation::validate_path("gdp.log_file", &self.log_file)?;
        validation::validate_sql_identifier("gdp.table_name", &self.table_name)?;
        if !self.min_gdp_billions.is_finite() {
            return Err(EtlError::InvalidConfigValueError {
                field: "gdp.min_gdp_billions".to_string(),
                value: self.min_gdp_billions.to_string(),
                reason: "Threshold must be a finite number".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for EtlConfig {
    fn validate(&self) -> Result<()> {
        self.cars.validate()?;
        self.gdp.validate()
    }
}
