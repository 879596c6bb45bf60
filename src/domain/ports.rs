use crate::utils::error::Result;
use crate::utils::progress::ProgressLog;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    /// File names directly under the storage root with the given extension,
    /// sorted by name.
    fn list_files(
        &self,
        extension: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Progress messages the engine writes around each stage. `None` skips the checkpoint.
#[derive(Debug, Clone, Default)]
pub struct Checkpoints {
    pub job_start: Option<&'static str>,
    pub extract_start: Option<&'static str>,
    pub extract_end: Option<&'static str>,
    pub transform_start: Option<&'static str>,
    pub transform_end: Option<&'static str>,
    pub load_start: Option<&'static str>,
    pub load_end: Option<&'static str>,
    pub job_end: Option<&'static str>,
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Raw: Send + 'static;
    type Output: Send + 'static;
    type Loaded: Send;

    fn name(&self) -> &str;
    fn checkpoints(&self) -> &Checkpoints;
    fn progress(&self) -> &ProgressLog;

    async fn extract(&self) -> Result<Vec<Self::Raw>>;
    async fn transform(&self, data: Vec<Self::Raw>) -> Result<Vec<Self::Output>>;
    async fn load(&self, data: Vec<Self::Output>) -> Result<Self::Loaded>;
}
