use crate::core::calculator::DebtCalculator;
use crate::core::{datasets, report};
use crate::domain::model::{Age, ReferenceData, Report};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub const STDOUT_DESTINATION: &str = "stdout";

pub struct DebtPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DebtPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DebtPipeline<S, C> {
    async fn extract(&self) -> Result<ReferenceData> {
        let demographics = match self.config.demographics_file() {
            Some(path) => {
                tracing::debug!("Reading demographics from: {}", path);
                let bytes = self.storage.read_file(path).await?;
                datasets::parse_demographics_csv(&bytes)?
            }
            None => {
                tracing::debug!("Using built-in demographics dataset");
                datasets::REFERENCE_DEMOGRAPHICS.to_vec()
            }
        };

        let leadership = match self.config.leadership_file() {
            Some(path) => {
                tracing::debug!("Reading leadership percentages from: {}", path);
                let bytes = self.storage.read_file(path).await?;
                datasets::parse_leadership_csv(&bytes)?
            }
            None => {
                tracing::debug!("Using built-in leadership dataset");
                datasets::REFERENCE_LEADERSHIP.to_vec()
            }
        };

        let data = ReferenceData::new(demographics, leadership);
        data.validate()?;
        Ok(data)
    }

    fn transform(&self, data: &ReferenceData, age: Age) -> Result<Report> {
        let calculator = DebtCalculator::new(data.clone())?;
        let values = calculator.compute_display_values(age)?;

        tracing::debug!(
            "Age {} -> gap {}%, debt {} days",
            values.age,
            values.gap_percent,
            values.debt_days
        );

        Ok(Report::new(values, self.config.show_yearly()))
    }

    fn present(&self, report: &Report) -> Result<String> {
        report::render(report, self.config.output_format())
    }

    async fn load(&self, report: Report) -> Result<String> {
        let rendered = self.present(&report)?;

        match self.config.output_path() {
            Some(path) => {
                tracing::debug!(
                    "Writing {} report ({} bytes) to storage",
                    self.config.output_format(),
                    rendered.len()
                );
                self.storage.write_file(path, rendered.as_bytes()).await?;
                Ok(path.to_string())
            }
            None => {
                print!("{}", rendered);
                Ok(STDOUT_DESTINATION.to_string())
            }
        }
    }
}
