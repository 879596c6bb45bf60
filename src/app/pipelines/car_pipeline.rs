use crate::adapters::csv_sink::to_indexed_csv;
use crate::adapters::file_sources::{parse_fragment, CAR_SOURCE_EXTENSIONS};
use crate::config::CarEtlConfig;
use crate::core::transform::round_prices;
use crate::core::{CarRecord, Checkpoints, Pipeline, Storage};
use crate::utils::error::Result;
use crate::utils::progress::ProgressLog;
use crate::utils::table::render_table;

/// Merges every car listing file in the working directory and rounds prices.
pub struct CarPipeline<S: Storage> {
    storage: S,
    config: CarEtlConfig,
    progress: ProgressLog,
    checkpoints: Checkpoints,
}

impl<S: Storage> CarPipeline<S> {
    pub fn new(storage: S, config: CarEtlConfig) -> Self {
        let progress = ProgressLog::new(config.log_path());
        Self {
            storage,
            config,
            progress,
            checkpoints: Checkpoints {
                job_start: Some("ETL Job Started"),
                extract_start: Some("Extract phase Started"),
                extract_end: None,
                transform_start: Some("Transform phase Started"),
                transform_end: Some("Transform phase Ended"),
                load_start: Some("Load phase Started"),
                load_end: Some("Load phase Ended"),
                job_end: Some("ETL Job Ended"),
            },
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for CarPipeline<S> {
    type Raw = CarRecord;
    type Output = CarRecord;
    type Loaded = String;

    fn name(&self) -> &str {
        "cars"
    }

    fn checkpoints(&self) -> &Checkpoints {
        &self.checkpoints
    }

    fn progress(&self) -> &ProgressLog {
        &self.progress
    }

    async fn extract(&self) -> Result<Vec<CarRecord>> {
        let mut records = Vec::new();

        for extension in CAR_SOURCE_EXTENSIONS {
            for file in self.storage.list_files(extension).await? {
                let data = self.storage.read_file(&file).await?;
                let fragment = parse_fragment(extension, &file, &data)?;
                tracing::debug!("Read {} records from {}", fragment.len(), file);
                records.extend(fragment);
            }
        }

        Ok(records)
    }

    async fn transform(&self, mut data: Vec<CarRecord>) -> Result<Vec<CarRecord>> {
        round_prices(&mut data, self.config.price_decimals);

        println!("Transformed Data");
        println!("{}", render_table(&data));

        Ok(data)
    }

    async fn load(&self, data: Vec<CarRecord>) -> Result<String> {
        let bytes = to_indexed_csv(&data)?;
        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            data.len(),
            bytes.len(),
            self.config.target_file
        );
        self.storage.write_file(&self.config.target_file, &bytes).await?;

        Ok(self
            .config
            .work_dir
            .join(&self.config.target_file)
            .display()
            .to_string())
    }
}
