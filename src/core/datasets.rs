use crate::core::statistics;
use crate::domain::model::{DemographicRecord, PercentageSeries, ReferenceData};
use crate::utils::error::{PreconditionViolation, Result};
use serde::Deserialize;

/// US census counts for the African American population, 1970-2010.
pub const REFERENCE_DEMOGRAPHICS: [DemographicRecord; 5] = [
    DemographicRecord::new(1970, 203_210_158, 22_539_362),
    DemographicRecord::new(1980, 226_545_805, 26_495_025),
    DemographicRecord::new(1990, 248_709_873, 29_986_060),
    DemographicRecord::new(2000, 281_421_906, 34_658_190),
    DemographicRecord::new(2010, 308_745_538, 38_929_319),
];

/// Yearly share of African American CEOs, in percent.
pub const REFERENCE_LEADERSHIP: [f64; 16] = [
    6.0, 4.0, 5.0, 6.0, 6.0, 6.0, 5.0, 6.0, 6.0, 7.0, 6.0, 6.0, 7.0, 6.0, 5.0, 5.0,
];

impl ReferenceData {
    pub fn new(demographics: Vec<DemographicRecord>, leadership: PercentageSeries) -> Self {
        Self {
            demographics,
            leadership,
        }
    }

    pub fn builtin() -> Self {
        Self::new(REFERENCE_DEMOGRAPHICS.to_vec(), REFERENCE_LEADERSHIP.to_vec())
    }

    /// Checks every precondition the statistics rely on.
    pub fn validate(&self) -> Result<()> {
        if self.demographics.is_empty() {
            return Err(PreconditionViolation::EmptySeries {
                series: "demographics".to_string(),
            }
            .into());
        }
        if self.leadership.is_empty() {
            return Err(PreconditionViolation::EmptySeries {
                series: "leadership".to_string(),
            }
            .into());
        }
        if let Some(&value) = self.leadership.iter().find(|v| !v.is_finite()) {
            return Err(PreconditionViolation::NonFiniteValue {
                quantity: "leadership percentage".to_string(),
                value,
            }
            .into());
        }
        statistics::subgroup_percentages(&self.demographics)?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct LeadershipRow {
    percent: f64,
}

/// Parses `year,total_population,subgroup_population` rows
/// (`total` and `aa` are accepted as header aliases).
pub fn parse_demographics_csv(data: &[u8]) -> Result<Vec<DemographicRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: DemographicRecord = row?;
        records.push(record);
    }
    tracing::debug!("Parsed {} demographic records", records.len());
    Ok(records)
}

/// Parses a CSV with a `percent` column. Other columns are ignored.
pub fn parse_leadership_csv(data: &[u8]) -> Result<PercentageSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut series = Vec::new();
    for row in reader.deserialize() {
        let row: LeadershipRow = row?;
        series.push(row.percent);
    }
    tracing::debug!("Parsed {} leadership percentages", series.len());
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DebtError;

    #[test]
    fn test_builtin_dataset_is_valid() {
        let data = ReferenceData::builtin();
        assert_eq!(data.demographics.len(), 5);
        assert_eq!(data.leadership.len(), 16);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_builtin_yearly_percentages() {
        let percents = statistics::subgroup_percentages(&REFERENCE_DEMOGRAPHICS).unwrap();
        assert_eq!(percents, vec![11.0, 12.0, 12.0, 12.0, 13.0]);
    }

    #[test]
    fn test_validate_rejects_empty_leadership() {
        let data = ReferenceData::new(REFERENCE_DEMOGRAPHICS.to_vec(), vec![]);
        assert!(matches!(
            data.validate(),
            Err(DebtError::PreconditionViolation(PreconditionViolation::EmptySeries { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_total() {
        let data = ReferenceData::new(vec![DemographicRecord::new(1990, 0, 0)], vec![5.0]);
        assert!(data.validate().is_err());
    }

    #[test]
    fn test_parse_demographics_csv() {
        let csv = "year,total_population,subgroup_population\n1970,200,100\n1980, 50 ,5\n";
        let records = parse_demographics_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![
                DemographicRecord::new(1970, 200, 100),
                DemographicRecord::new(1980, 50, 5),
            ]
        );
    }

    #[test]
    fn test_parse_demographics_csv_short_headers() {
        let csv = "year,total,aa\n2010,308745538,38929319\n";
        let records = parse_demographics_csv(csv.as_bytes()).unwrap();
        assert_eq!(records[0].subgroup_population, 38_929_319);
    }

    #[test]
    fn test_parse_demographics_csv_rejects_non_numeric() {
        let csv = "year,total,aa\n2010,lots,some\n";
        assert!(matches!(
            parse_demographics_csv(csv.as_bytes()),
            Err(DebtError::CsvError(_))
        ));
    }

    #[test]
    fn test_parse_leadership_csv_ignores_extra_columns() {
        let csv = "year,percent\n2001,6\n2002,4.5\n";
        assert_eq!(parse_leadership_csv(csv.as_bytes()).unwrap(), vec![6.0, 4.5]);
    }
}
