//! Reductions over the reference datasets.

use crate::domain::model::{DemographicRecord, YearlyPercentage};
use crate::utils::error::{PreconditionViolation, Result};

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean. `series` names the input in the error when it is empty.
pub fn mean(series: &str, values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(PreconditionViolation::EmptySeries {
            series: series.to_string(),
        }
        .into());
    }
    Ok(sum(values) / values.len() as f64)
}

/// Subgroup share of the total population, rounded to a whole percent
/// (half away from zero).
pub fn percentage_of(record: &DemographicRecord) -> Result<f64> {
    if record.total_population == 0 {
        return Err(PreconditionViolation::ZeroTotalPopulation { year: record.year }.into());
    }
    let share = record.subgroup_population as f64 / record.total_population as f64;
    Ok((share * 100.0).round())
}

fn check_record(record: &DemographicRecord) -> Result<()> {
    if record.subgroup_population < 0 {
        return Err(PreconditionViolation::NegativeSubgroup {
            year: record.year,
            subgroup: record.subgroup_population,
        }
        .into());
    }
    if record.total_population <= 0 {
        return Err(PreconditionViolation::ZeroTotalPopulation { year: record.year }.into());
    }
    if record.subgroup_population > record.total_population {
        return Err(PreconditionViolation::SubgroupExceedsTotal {
            year: record.year,
            subgroup: record.subgroup_population,
            total: record.total_population,
        }
        .into());
    }
    Ok(())
}

pub fn subgroup_percentages(records: &[DemographicRecord]) -> Result<Vec<f64>> {
    records
        .iter()
        .map(|record| {
            check_record(record)?;
            percentage_of(record)
        })
        .collect()
}

pub fn yearly_percentages(records: &[DemographicRecord]) -> Result<Vec<YearlyPercentage>> {
    let percents = subgroup_percentages(records)?;
    Ok(records
        .iter()
        .zip(percents)
        .map(|(record, percent)| YearlyPercentage {
            year: record.year,
            percent,
        })
        .collect())
}

pub fn mean_population_percent(records: &[DemographicRecord]) -> Result<f64> {
    mean("demographics", &subgroup_percentages(records)?)
}

pub fn mean_leadership_percent(percentages: &[f64]) -> Result<f64> {
    mean("leadership", percentages)
}
