use crate::utils::error::Result;
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// strftime pattern of the checkpoint timestamps. `%D` expands to `%m/%d/%y`,
/// so a line reads e.g. `2024-03-03/14/24-09:05:01`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%D-%H:%M:%S";

/// Append-only checkpoint log shared by the engine and the pipelines.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self, message: &str) -> Result<()> {
        self.log_at(Local::now(), message)
    }

    pub fn log_at(&self, at: DateTime<Local>, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_entry(at, message).as_bytes())?;

        tracing::info!("{}", message);
        Ok(())
    }
}

pub fn format_entry(at: DateTime<Local>, message: &str) -> String {
    format!("{}, {} \n", at.format(TIMESTAMP_FORMAT), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_entry_keeps_literal_day_token() {
        let at = Local.with_ymd_and_hms(2024, 3, 14, 9, 5, 1).unwrap();
        assert_eq!(
            format_entry(at, "ETL Job Started"),
            "2024-03-03/14/24-09:05:01, ETL Job Started \n"
        );
    }

    #[test]
    fn test_log_appends_without_truncating() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log_file.txt");
        std::fs::write(&path, "earlier run\n").unwrap();

        let log = ProgressLog::new(&path);
        log.log("first").unwrap();
        log.log("second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "earlier run");
        assert!(lines[1].ends_with(", first "));
        assert!(lines[2].ends_with(", second "));
    }
}
