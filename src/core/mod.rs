pub mod calculator;
pub mod constants;
pub mod datasets;
pub mod debt;
pub mod duration;
pub mod engine;
pub mod gap;
pub mod pipeline;
pub mod report;
pub mod statistics;

pub use crate::domain::model::{
    Age, DemographicRecord, DisplayValues, DurationTriple, OutputFormat, ReferenceData, Report,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
