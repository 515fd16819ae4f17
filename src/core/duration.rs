//! Years/months/days breakdown of a fractional day count.
//!
//! Uses average lengths ([`DAYS_PER_YEAR`], [`DAYS_PER_MONTH`]), not calendar
//! arithmetic. Each unit is the floor of the running quotient and the
//! fractional part is carried into the next smaller unit.

use crate::core::constants::{DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR};
use crate::domain::model::DurationTriple;
use crate::utils::error::{PreconditionViolation, Result};

/// Day counts at or beyond this have more whole years than a `u64` holds.
pub const MAX_DECOMPOSABLE_DAYS: f64 = u64::MAX as f64 * DAYS_PER_YEAR;

pub fn years_from_days(days: f64) -> f64 {
    days / DAYS_PER_YEAR
}

/// Fractional part of [`years_from_days`], in `[0, 1)`.
pub fn years_from_days_remainder(days: f64) -> f64 {
    let years = years_from_days(days);
    years - years.floor()
}

pub fn months_from_years(years: f64) -> f64 {
    years * MONTHS_PER_YEAR
}

pub fn months_from_years_remainder(years: f64) -> f64 {
    let months = months_from_years(years);
    months - months.floor()
}

pub fn days_from_months(months: f64) -> f64 {
    months * DAYS_PER_MONTH
}

pub fn days_from_months_remainder(months: f64) -> f64 {
    let days = days_from_months(months);
    days - days.floor()
}

/// Splits `days` into whole years, whole months and leftover days.
///
/// Fails for negative, non-finite or out-of-range input. Keeps `months < 12` and
/// `days < DAYS_PER_MONTH` even when float rounding lands exactly on a
/// boundary.
pub fn decompose(days: f64) -> Result<DurationTriple> {
    if !days.is_finite() {
        return Err(PreconditionViolation::NonFiniteValue {
            quantity: "day count".to_string(),
            value: days,
        }
        .into());
    }
    if days < 0.0 {
        return Err(PreconditionViolation::NegativeDayCount { days }.into());
    }

    let whole_years = years_from_days(days).floor();
    if days >= MAX_DECOMPOSABLE_DAYS || whole_years >= u64::MAX as f64 {
        return Err(PreconditionViolation::DayCountOutOfRange { days }.into());
    }
    let year_fraction = years_from_days_remainder(days);
    let whole_months = months_from_years(year_fraction).floor();
    let month_fraction = months_from_years_remainder(year_fraction);
    let leftover_days = days_from_months(month_fraction);

    let mut triple = DurationTriple {
        years: whole_years as u64,
        months: whole_months as u32,
        days: leftover_days,
    };

    if triple.days >= DAYS_PER_MONTH {
        triple.months += 1;
        triple.days = 0.0;
    }
    if f64::from(triple.months) >= MONTHS_PER_YEAR {
        triple.years += 1;
        triple.months = 0;
        triple.days = 0.0;
    }

    Ok(triple)
}

/// Inverse of [`decompose`], up to float rounding.
pub fn to_days(triple: &DurationTriple) -> f64 {
    triple.years as f64 * DAYS_PER_YEAR + f64::from(triple.months) * DAYS_PER_MONTH + triple.days
}
