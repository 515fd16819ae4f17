pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{
    calculator::DebtCalculator, engine::ReportEngine, engine::SessionSummary,
    pipeline::DebtPipeline,
};
pub use domain::model::{Age, DisplayValues, DurationTriple, OutputFormat, ReferenceData, Report};
pub use utils::error::{DebtError, Result};
