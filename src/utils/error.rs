use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XML error: {0}")]
    XmlError(#[from] roxmltree::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Failed to parse {source_name}: {message}")]
    ParseError { source_name: String, message: String },

    #[error("Scrape error: {message}")]
    ScrapeError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        EtlError::ParseError {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn scrape(message: impl Into<String>) -> Self {
        EtlError::ScrapeError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::ScrapeError { .. } => ErrorCategory::Network,
            EtlError::CsvError(_) | EtlError::XmlError(_) | EtlError::ParseError { .. } => {
                ErrorCategory::Input
            }
            EtlError::IoError(_) | EtlError::DatabaseError(_) => ErrorCategory::Output,
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::ApiError(_) => "Check network connectivity and that the source URL is reachable",
            EtlError::ScrapeError { .. } => {
                "The page layout may have changed; check the table locator in the config"
            }
            EtlError::CsvError(_) | EtlError::XmlError(_) => {
                "Fix or remove the malformed input file in the working directory"
            }
            EtlError::ParseError { .. } => "Make sure every record carries all required fields",
            EtlError::IoError(_) => "Check file permissions and free disk space",
            EtlError::DatabaseError(_) => "Check that the database file is writable and not locked",
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the TOML configuration file"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch source data: {}", self),
            ErrorCategory::Input => format!("Could not read input data: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
