/// Average year length, leap years included.
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Average month length (30.4375 days).
pub const DAYS_PER_MONTH: f64 = DAYS_PER_YEAR / MONTHS_PER_YEAR;
