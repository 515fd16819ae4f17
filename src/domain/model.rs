use crate::utils::error::{DebtError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One census observation for a population subgroup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemographicRecord {
    pub year: i32,
    #[serde(alias = "total")]
    pub total_population: i64,
    #[serde(alias = "aa")]
    pub subgroup_population: i64,
}

impl DemographicRecord {
    pub const fn new(year: i32, total_population: i64, subgroup_population: i64) -> Self {
        Self {
            year,
            total_population,
            subgroup_population,
        }
    }
}

/// Ordered per-observation statistic, e.g. yearly share of CEOs.
pub type PercentageSeries = Vec<f64>;

/// Immutable datasets the calculator is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub demographics: Vec<DemographicRecord>,
    pub leadership: PercentageSeries,
}

/// A validated, non-negative, finite age in years.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Age(f64);

impl Age {
    pub fn new(years: f64) -> Result<Self> {
        if !years.is_finite() {
            return Err(DebtError::invalid_input(
                "age",
                years.to_string(),
                "age must be a finite number",
            ));
        }
        if years < 0.0 {
            return Err(DebtError::invalid_input(
                "age",
                years.to_string(),
                "age must not be negative",
            ));
        }
        // -0.0 becomes 0.0
        Ok(Self(years + 0.0))
    }

    /// Parses raw user input. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DebtError::invalid_input("age", raw, "age is missing"));
        }
        let years: f64 = trimmed
            .parse()
            .map_err(|_| DebtError::invalid_input("age", raw, "age must be numeric"))?;
        Self::new(years).map_err(|_| {
            DebtError::invalid_input("age", raw, "age must be a non-negative finite number")
        })
    }

    pub fn years(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Age {
    type Err = DebtError;

    fn from_str(s: &str) -> Result<Self> {
        Age::parse(s)
    }
}

impl TryFrom<f64> for Age {
    type Error = DebtError;

    fn try_from(value: f64) -> Result<Self> {
        Age::new(value)
    }
}

/// Anything the presentation layer may hand over as an age.
pub trait AgeInput {
    fn into_age(self) -> Result<Age>;
}

impl AgeInput for Age {
    fn into_age(self) -> Result<Age> {
        Ok(self)
    }
}

impl AgeInput for f64 {
    fn into_age(self) -> Result<Age> {
        Age::new(self)
    }
}

impl AgeInput for &str {
    fn into_age(self) -> Result<Age> {
        Age::parse(self)
    }
}

impl AgeInput for &String {
    fn into_age(self) -> Result<Age> {
        Age::parse(self)
    }
}

impl AgeInput for String {
    fn into_age(self) -> Result<Age> {
        Age::parse(&self)
    }
}

/// Years/months/days breakdown built from average-length constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationTriple {
    pub years: u64,
    pub months: u32,
    pub days: f64,
}

impl DurationTriple {
    pub const ZERO: DurationTriple = DurationTriple {
        years: 0,
        months: 0,
        days: 0.0,
    };
}

impl fmt::Display for DurationTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years, {} months, {:.2} days",
            self.years, self.months, self.days
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyPercentage {
    pub year: i32,
    pub percent: f64,
}

/// Everything the presentation layer shows for one age.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayValues {
    pub age: Age,
    pub mean_population_percent: f64,
    pub mean_leadership_percent: f64,
    pub gap_percent: f64,
    pub debt_days: f64,
    pub debt_duration: DurationTriple,
    pub yearly_percentages: Vec<YearlyPercentage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub values: DisplayValues,
    #[serde(skip)]
    pub show_yearly: bool,
}

impl Report {
    pub fn new(values: DisplayValues, show_yearly: bool) -> Self {
        Self {
            generated_at: Utc::now(),
            values,
            show_yearly,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}
