use crate::domain::model::{Age, OutputFormat, ReferenceData, Report};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// CSV with demographic records; `None` selects the built-in dataset.
    fn demographics_file(&self) -> Option<&str>;
    /// CSV with leadership percentages; `None` selects the built-in dataset.
    fn leadership_file(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
    /// Report destination; `None` writes to stdout.
    fn output_path(&self) -> Option<&str>;
    fn show_yearly(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ReferenceData>;
    fn transform(&self, data: &ReferenceData, age: Age) -> Result<Report>;
    /// Renders a report in the configured format without writing it anywhere.
    fn present(&self, report: &Report) -> Result<String>;
    async fn load(&self, report: Report) -> Result<String>;
}
