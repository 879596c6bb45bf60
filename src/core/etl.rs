use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    fn checkpoint(&self, message: Option<&str>) -> Result<()> {
        match message {
            Some(message) => self.pipeline.progress().log(message),
            None => Ok(()),
        }
    }

    /// Runs extract, transform and load once, in order. The first error aborts the
    /// run, leaving only the checkpoints reached so far in the progress log.
    pub async fn run(&self) -> Result<P::Loaded> {
        let checkpoints = self.pipeline.checkpoints();
        tracing::info!("Starting {} ETL job", self.pipeline.name());
        self.checkpoint(checkpoints.job_start)?;

        self.checkpoint(checkpoints.extract_start)?;
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());
        self.checkpoint(checkpoints.extract_end)?;

        self.checkpoint(checkpoints.transform_start)?;
        let transformed = self.pipeline.transform(raw_data).await?;
        tracing::info!("Transformed {} records", transformed.len());
        self.checkpoint(checkpoints.transform_end)?;

        self.checkpoint(checkpoints.load_start)?;
        let loaded = self.pipeline.load(transformed).await?;
        self.checkpoint(checkpoints.load_end)?;

        self.checkpoint(checkpoints.job_end)?;
        tracing::info!("{} ETL job finished", self.pipeline.name());
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Checkpoints;
    use crate::utils::error::EtlError;
    use crate::utils::progress::ProgressLog;
    use tempfile::TempDir;

    struct MockPipeline {
        checkpoints: Checkpoints,
        progress: ProgressLog,
        fail_transform: bool,
    }

    impl MockPipeline {
        fn new(progress: ProgressLog) -> Self {
            Self {
                checkpoints: Checkpoints {
                    job_start: Some("start"),
                    extract_start: Some("extract"),
                    transform_start: Some("transform"),
                    transform_end: Some("transformed"),
                    load_start: Some("load"),
                    job_end: Some("end"),
                    ..Default::default()
                },
                progress,
                fail_transform: false,
            }
        }

        fn failing_transform(mut self) -> Self {
            self.fail_transform = true;
            self
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for MockPipeline {
        type Raw = i64;
        type Output = i64;
        type Loaded = usize;

        fn name(&self) -> &str {
            "mock"
        }

        fn checkpoints(&self) -> &Checkpoints {
            &self.checkpoints
        }

        fn progress(&self) -> &ProgressLog {
            &self.progress
        }

        async fn extract(&self) -> Result<Vec<i64>> {
            Ok(vec![1, 2, 3])
        }

        async fn transform(&self, data: Vec<i64>) -> Result<Vec<i64>> {
            if self.fail_transform {
                return Err(EtlError::parse("mock", "boom"));
            }
            Ok(data.into_iter().map(|v| v * 10).collect())
        }

        async fn load(&self, data: Vec<i64>) -> Result<usize> {
            Ok(data.iter().sum::<i64>() as usize)
        }
    }

    fn log_messages(progress: &ProgressLog) -> Vec<String> {
        std::fs::read_to_string(progress.path())
            .unwrap()
            .lines()
            .map(|line| line.split_once(", ").unwrap().1.trim_end().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_run_writes_configured_checkpoints_in_order() {
        let dir = TempDir::new().unwrap();
        let progress = ProgressLog::new(dir.path().join("log.txt"));
        let engine = EtlEngine::new(MockPipeline::new(progress.clone()));

        let loaded = engine.run().await.unwrap();

        assert_eq!(loaded, 60);
        assert_eq!(
            log_messages(&progress),
            vec!["start", "extract", "transform", "transformed", "load", "end"]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_logging_at_failed_stage() {
        let dir = TempDir::new().unwrap();
        let progress = ProgressLog::new(dir.path().join("log.txt"));
        let engine = EtlEngine::new(MockPipeline::new(progress.clone()).failing_transform());

        let result = engine.run().await;

        assert!(matches!(result, Err(EtlError::ParseError { .. })));
        assert_eq!(log_messages(&progress), vec!["start", "extract", "transform"]);
    }
}
