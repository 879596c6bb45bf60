use crate::adapters::csv_sink::to_indexed_csv;
use crate::adapters::html::extract_gdp_rows;
use crate::adapters::sqlite::GdpDatabase;
use crate::config::GdpEtlConfig;
use crate::core::transform::millions_to_billions;
use crate::core::{Checkpoints, GdpRecord, Pipeline, RawGdpRecord, Storage};
use crate::domain::model::GdpLoadReport;
use crate::utils::error::Result;
use crate::utils::progress::ProgressLog;
use crate::utils::table::render_table;
use reqwest::Client;

/// Scrapes GDP by country, converts it to billions, and loads it into CSV and SQLite.
pub struct GdpPipeline<S: Storage> {
    storage: S,
    config: GdpEtlConfig,
    client: Client,
    progress: ProgressLog,
    checkpoints: Checkpoints,
}

impl<S: Storage> GdpPipeline<S> {
    pub fn new(storage: S, config: GdpEtlConfig) -> Self {
        let progress = ProgressLog::new(config.log_path());
        Self {
            storage,
            config,
            client: Client::new(),
            progress,
            checkpoints: Checkpoints {
                job_start: Some("Preliminaries complete"),
                extract_start: Some("Initiating ETL process..."),
                extract_end: Some("Data extraction complete"),
                transform_start: Some("Initiating Transformation process..."),
                transform_end: Some("Data transformation complete"),
                load_start: Some("Initiating loading process..."),
                load_end: None,
                job_end: Some("Process Complete."),
            },
        }
    }

    fn load_to_db(&self, data: &[GdpRecord]) -> Result<(usize, Vec<GdpRecord>)> {
        self.progress.log("SQL Connection initiated")?;
        let mut db = GdpDatabase::open(self.config.db_path())?;

        let rows_loaded = db.replace_table(&self.config.table_name, data)?;
        self.progress.log("Data loaded to Database as table")?;

        self.progress.log("Running the query...")?;
        let query = self.config.query_statement();
        println!("{}", query);
        let query_rows = db.query_gdp(&query)?;
        println!("{}", render_table(&query_rows));

        db.close()?;
        Ok((rows_loaded, query_rows))
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for GdpPipeline<S> {
    type Raw = RawGdpRecord;
    type Output = GdpRecord;
    type Loaded = GdpLoadReport;

    fn name(&self) -> &str {
        "gdp"
    }

    fn checkpoints(&self) -> &Checkpoints {
        &self.checkpoints
    }

    fn progress(&self) -> &ProgressLog {
        &self.progress
    }

    async fn extract(&self) -> Result<Vec<RawGdpRecord>> {
        tracing::debug!("Making request to: {}", self.config.url);
        let response = self.client.get(&self.config.url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        let page = response.error_for_status()?.text().await?;
        extract_gdp_rows(&page, &self.config.table)
    }

    async fn transform(&self, data: Vec<RawGdpRecord>) -> Result<Vec<GdpRecord>> {
        data.iter().map(millions_to_billions).collect()
    }

    async fn load(&self, data: Vec<GdpRecord>) -> Result<GdpLoadReport> {
        let bytes = to_indexed_csv(&data)?;
        self.storage.write_file(&self.config.csv_file, &bytes).await?;
        self.progress.log("Data saved to CSV file")?;

        let (rows_loaded, query_rows) = self.load_to_db(&data)?;

        Ok(GdpLoadReport {
            csv_path: self.config.work_dir.join(&self.config.csv_file).display().to_string(),
            db_path: self.config.db_path().display().to_string(),
            rows_loaded,
            query: self.config.query_statement(),
            query_rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::LocalStorage;
    use crate::utils::error::EtlError;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    const PAGE: &str = r#"<html><body>
<table><tbody><tr><td>a</td></tr></tbody></table>
<table><tbody><tr><td>b</td></tr></tbody></table>
<table><tbody>
<tr><th>Country</th><th>Region</th><th>IMF</th></tr>
<tr><td><a href="/wiki/United_States">United States</a></td><td>Americas</td><td>26,854,599</td></tr>
<tr><td><a href="/wiki/Kenya">Kenya</a></td><td>Africa</td><td>112,749</td></tr>
<tr><td><a href="/wiki/Tuvalu">Tuvalu</a></td><td>Oceania</td><td>63</td></tr>
<tr><td><a href="/wiki/Russia">Russia</a></td><td>Europe</td><td>—</td></tr>
</tbody></table>
</body></html>"#;

    fn config_for(dir: &TempDir, url: String) -> GdpEtlConfig {
        GdpEtlConfig {
            url,
            ..GdpEtlConfig::with_work_dir(dir.path())
        }
    }

    #[tokio::test]
    async fn test_extract_scrapes_third_table() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/wiki/gdp");
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body(PAGE);
        });

        let dir = TempDir::new().unwrap();
        let pipeline = GdpPipeline::new(
            LocalStorage::new(dir.path()),
            config_for(&dir, server.url("/wiki/gdp")),
        );

        let rows = pipeline.extract().await.unwrap();

        page_mock.assert();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].country, "Kenya");
        assert_eq!(rows[1].gdp_usd_millions, "112,749");
    }

    #[tokio::test]
    async fn test_extract_http_error_fails() {
        let server = MockServer::start();
        let page_mock = server.mock(|when, then| {
            when.method(GET).path("/wiki/gdp");
            then.status(404);
        });

        let dir = TempDir::new().unwrap();
        let pipeline = GdpPipeline::new(
            LocalStorage::new(dir.path()),
            config_for(&dir, server.url("/wiki/gdp")),
        );

        let result = pipeline.extract().await;

        page_mock.assert();
        assert!(matches!(result, Err(EtlError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_transform_converts_and_renames() {
        let dir = TempDir::new().unwrap();
        let pipeline = GdpPipeline::new(
            LocalStorage::new(dir.path()),
            GdpEtlConfig::with_work_dir(dir.path()),
        );
        let raw = vec![
            RawGdpRecord {
                country: "Testland".to_string(),
                gdp_usd_millions: "1,234,567".to_string(),
            },
            RawGdpRecord {
                country: "Tuvalu".to_string(),
                gdp_usd_millions: "63".to_string(),
            },
        ];

        let out = pipeline.transform(raw).await.unwrap();

        assert_eq!(out[0].gdp_usd_billions, 1234.57);
        assert_eq!(out[1].gdp_usd_billions, 0.06);
    }

    #[tokio::test]
    async fn test_load_writes_csv_db_and_sub_step_checkpoints() {
        let dir = TempDir::new().unwrap();
        let config = GdpEtlConfig::with_work_dir(dir.path());
        let pipeline = GdpPipeline::new(LocalStorage::new(dir.path()), config);
        let data = vec![
            GdpRecord {
                country: "United States".to_string(),
                gdp_usd_billions: 26854.6,
            },
            GdpRecord {
                country: "Tuvalu".to_string(),
                gdp_usd_billions: 0.06,
            },
        ];

        let report = pipeline.load(data).await.unwrap();

        assert_eq!(report.rows_loaded, 2);
        assert_eq!(report.query_rows.len(), 1);
        assert_eq!(report.query_rows[0].country, "United States");

        let csv = std::fs::read_to_string(dir.path().join("Countries_by_GDP.csv")).unwrap();
        assert_eq!(
            csv,
            ",Country,GDP_USD_billions\n0,United States,26854.6\n1,Tuvalu,0.06\n"
        );
        assert!(dir.path().join("World_Economies.db").exists());

        let log = std::fs::read_to_string(dir.path().join("etl_project_log.txt")).unwrap();
        let messages: Vec<&str> = log
            .lines()
            .map(|line| line.split_once(", ").unwrap().1.trim_end())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Data saved to CSV file",
                "SQL Connection initiated",
                "Data loaded to Database as table",
                "Running the query...",
            ]
        );
    }
}
