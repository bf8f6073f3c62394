//! Percentage formatting.
//!
//! Values are truncated toward zero, never rounded, so `99.99` at one decimal
//! place is `99.9%` rather than `100.0%`.

use rust_decimal::Decimal;

use crate::number::{ToDecimal, check_decimal_places, quotient, render_fixed, truncate};
use crate::options::DEFAULT_DECIMAL_PLACES;
use crate::{Error, Result};

const DEFAULT_PERCENT_UNIT: &str = "%";

/// Formats percentages with a fixed number of digits and a unit suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct PercentFormatter {
    decimal_places: u32,
    unit: String,
}

impl Default for PercentFormatter {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            unit: DEFAULT_PERCENT_UNIT.to_string(),
        }
    }
}

impl PercentFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the suffix (default: `%`).
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Formats an already-scaled percentage: `45.67` -> `"45.6%"`.
    pub fn format(&self, value: impl ToDecimal) -> Result<String> {
        self.render(value.to_decimal()?)
    }

    /// Formats `current` as a percentage of `total`: `(1, 4)` -> `"25.0%"`.
    pub fn format_of_total(&self, current: impl ToDecimal, total: impl ToDecimal) -> Result<String> {
        let current = current.to_decimal()?;
        let total = total.to_decimal()?;
        if total.is_zero() {
            return Err(Error::DivisionByZero);
        }
        check_decimal_places(self.decimal_places)?;
        let hundredfold = current
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| Error::Overflow(format!("{current} * 100")))?;
        self.render(quotient(hundredfold, total, self.decimal_places)?)
    }

    fn render(&self, value: Decimal) -> Result<String> {
        let truncated = truncate(value, self.decimal_places)?;
        Ok(format!(
            "{}{}",
            render_fixed(truncated, self.decimal_places),
            self.unit
        ))
    }
}

/// Formats an already-scaled percentage with the `%` suffix.
pub fn format_percent(value: impl ToDecimal, decimal_places: u32) -> Result<String> {
    PercentFormatter::new()
        .decimal_places(decimal_places)
        .format(value)
}

/// Formats `current / total` as a percentage with the `%` suffix.
///
/// ```rust
/// use readout::format_percent_of_total;
///
/// assert_eq!(format_percent_of_total(1, 4, 1).unwrap(), "25.0%");
/// assert!(format_percent_of_total(1, 0, 1).is_err());
/// ```
pub fn format_percent_of_total(
    current: impl ToDecimal,
    total: impl ToDecimal,
    decimal_places: u32,
) -> Result<String> {
    PercentFormatter::new()
        .decimal_places(decimal_places)
        .format_of_total(current, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_truncates() {
        assert_eq!(format_percent("45.67", 1).unwrap(), "45.6%");
        assert_eq!(format_percent("99.99", 1).unwrap(), "99.9%");
        assert_eq!(format_percent("99.99", 0).unwrap(), "99%");
        assert_eq!(format_percent("-12.38", 1).unwrap(), "-12.3%");
    }

    #[test]
    fn test_format_percent_no_scaling() {
        assert_eq!(format_percent("0.4567", 2).unwrap(), "0.45%");
        assert_eq!(format_percent(50, 1).unwrap(), "50.0%");
        assert_eq!(format_percent(50, 0).unwrap(), "50%");
    }

    #[test]
    fn test_format_of_total() {
        assert_eq!(format_percent_of_total(1, 4, 1).unwrap(), "25.0%");
        assert_eq!(format_percent_of_total(2, 3, 2).unwrap(), "66.66%");
        assert_eq!(format_percent_of_total(5, 4, 0).unwrap(), "125%");
        assert_eq!(format_percent_of_total(0, 7, 1).unwrap(), "0.0%");
        assert_eq!(format_percent_of_total(-1, 3, 1).unwrap(), "-33.3%");
    }

    #[test]
    fn test_format_of_total_zero() {
        let err = format_percent_of_total(1, 0, 1).unwrap_err();
        assert!(matches!(err, Error::DivisionByZero));
        assert!(err.kind().is_invalid_argument());
        assert!(format_percent_of_total(0, "0.0", 1).is_err());
    }

    #[test]
    fn test_exact_digits_at_high_precision() {
        assert_eq!(
            format_percent(12_345, 28).unwrap(),
            format!("12345.{}%", "0".repeat(28))
        );
        assert_eq!(
            format_percent_of_total(1, 4, 28).unwrap(),
            format!("25.{}%", "0".repeat(28))
        );
        assert_eq!(
            format_percent_of_total(1, 3, 20).unwrap(),
            format!("33.{}%", "3".repeat(20))
        );
    }

    #[test]
    fn test_non_terminating_ratio_past_precision() {
        let err = format_percent_of_total(1, 3, 28).unwrap_err();
        assert!(matches!(err, Error::DecimalPlaces { got: 28, .. }));
        assert!(err.kind().is_precondition_violation());
    }

    #[test]
    fn test_custom_unit() {
        let f = PercentFormatter::new().unit(" pct").decimal_places(2);
        assert_eq!(f.format("12.345").unwrap(), "12.34 pct");
        assert_eq!(f.format_of_total(1, 8).unwrap(), "12.50 pct");
    }

    #[test]
    fn test_float_inputs() {
        assert_eq!(format_percent(12.5f64, 1).unwrap(), "12.5%");
        assert_eq!(format_percent_of_total(1.0f32, 3.0f32, 1).unwrap(), "33.3%");
    }
}
