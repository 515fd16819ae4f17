use crate::utils::error::{PreconditionViolation, Result};

/// Percentage points by which leadership lags the population share.
/// Negative when leadership is over-represented; that is not an error.
pub fn underrepresentation_gap(
    mean_population_percent: f64,
    mean_leadership_percent: f64,
) -> Result<f64> {
    for (quantity, value) in [
        ("mean population percent", mean_population_percent),
        ("mean leadership percent", mean_leadership_percent),
    ] {
        if !value.is_finite() {
            return Err(PreconditionViolation::NonFiniteValue {
                quantity: quantity.to_string(),
                value,
            }
            .into());
        }
    }
    Ok(mean_population_percent - mean_leadership_percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_is_difference() {
        assert_eq!(underrepresentation_gap(12.0, 5.75).unwrap(), 6.25);
    }

    #[test]
    fn test_gap_may_be_negative() {
        assert_eq!(underrepresentation_gap(5.0, 8.0).unwrap(), -3.0);
    }

    #[test]
    fn test_gap_rejects_nan() {
        assert!(underrepresentation_gap(f64::NAN, 5.0).is_err());
    }
}
