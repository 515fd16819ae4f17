use crate::core::{debt, duration, gap, statistics};
use crate::domain::model::{AgeInput, DisplayValues, ReferenceData, YearlyPercentage};
use crate::utils::error::{DebtError, Result};

/// Turns an age into the full set of display values.
///
/// The age-independent statistics are computed once in [`DebtCalculator::new`];
/// every later call only does the age-dependent arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct DebtCalculator {
    reference: ReferenceData,
    yearly_percentages: Vec<YearlyPercentage>,
    mean_population_percent: f64,
    mean_leadership_percent: f64,
    gap_percent: f64,
}

impl DebtCalculator {
    pub fn new(reference: ReferenceData) -> Result<Self> {
        reference.validate()?;

        let yearly_percentages = statistics::yearly_percentages(&reference.demographics)?;
        let mean_population_percent = statistics::mean_population_percent(&reference.demographics)?;
        let mean_leadership_percent = statistics::mean_leadership_percent(&reference.leadership)?;
        let gap_percent =
            gap::underrepresentation_gap(mean_population_percent, mean_leadership_percent)?;

        Ok(Self {
            reference,
            yearly_percentages,
            mean_population_percent,
            mean_leadership_percent,
            gap_percent,
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(ReferenceData::builtin())
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn gap_percent(&self) -> f64 {
        self.gap_percent
    }

    /// Accepts an [`Age`](crate::domain::model::Age), an `f64` or raw text.
    /// Invalid ages are rejected before any arithmetic runs.
    pub fn compute_display_values(&self, age: impl AgeInput) -> Result<DisplayValues> {
        let age = age.into_age()?;
        let debt_days = debt::compute_debt_days(age.years(), self.gap_percent);
        if !debt_days.is_finite() || debt_days.abs() >= duration::MAX_DECOMPOSABLE_DAYS {
            return Err(DebtError::invalid_input(
                "age",
                age.to_string(),
                "age is too large to express the debt in years",
            ));
        }
        let debt_duration = if debt_days < 0.0 {
            // Over-represented leadership: show the magnitude.
            duration::decompose(-debt_days)?
        } else {
            duration::decompose(debt_days)?
        };

        Ok(DisplayValues {
            age,
            mean_population_percent: self.mean_population_percent,
            mean_leadership_percent: self.mean_leadership_percent,
            gap_percent: self.gap_percent,
            debt_days,
            debt_duration,
            yearly_percentages: self.yearly_percentages.clone(),
        })
    }
}
