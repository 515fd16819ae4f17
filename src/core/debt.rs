use crate::core::constants::DAYS_PER_YEAR;

/// Scales a lifetime in days by the gap percentage.
///
/// Raw arithmetic: NaN in gives NaN out. Callers holding user input go
/// through [`crate::domain::model::Age`] first.
pub fn compute_debt_days(age: f64, gap_percent: f64) -> f64 {
    age * DAYS_PER_YEAR * (gap_percent / 100.0)
}
