//! Magnitude-scaled ("compact") number formatting: `1.5K`, `-2.3M`, `1.0B`.
//!
//! The formatter scans a [`UnitTable`] from the largest threshold down, picks
//! the first threshold not exceeding the value's magnitude, divides, and
//! **truncates** the result toward zero. Truncation means `999_999` renders as
//! `999.9K`, never `1000.0K` or `1.0M`.
//!
//! Values below the smallest threshold are rendered without a label and are
//! **rounded** with the configured [`RoundingMode`] instead.
//!
//! # Examples
//!
//! ```rust
//! use readout::{CompactFormatter, LabelCase, format_compact};
//!
//! assert_eq!(format_compact(1_500, 1).unwrap(), "1.5K");
//! assert_eq!(format_compact(-2_345_678, 2).unwrap(), "-2.34M");
//!
//! let lower = CompactFormatter::new().label_case(LabelCase::Lower);
//! assert_eq!(lower.format(1_000_000_000u64).unwrap(), "1.0b");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::number::{ToDecimal, check_decimal_places, quotient, render_fixed, round, truncate};
use crate::options::{FormatOptions, LabelCase, RoundingMode};
use crate::tracing::trace;
use crate::{Error, Result};

/// A single `(threshold, label)` row of a [`UnitTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Smallest magnitude expressed in this unit.
    pub threshold: Decimal,
    /// Suffix appended to the scaled value.
    pub label: String,
}

/// Threshold/label pairs sorted strictly descending by threshold.
///
/// Tables are validated when built: at least one row, every threshold
/// positive, no duplicates, and strictly descending order. The formatter
/// relies on that order (first match wins) and never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Unit>", into = "Vec<Unit>")]
pub struct UnitTable {
    units: Vec<Unit>,
}

impl UnitTable {
    /// Builds a table from `(threshold, label)` pairs, largest threshold first.
    ///
    /// ```rust
    /// use readout::UnitTable;
    ///
    /// let table = UnitTable::new([(1_000_000, "Million"), (1_000, "Thousand")]).unwrap();
    /// assert_eq!(table.units().len(), 2);
    ///
    /// assert!(UnitTable::new([(1_000, "K"), (1_000_000, "M")]).is_err());
    /// ```
    pub fn new<I, V, L>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, L)>,
        V: ToDecimal,
        L: Into<String>,
    {
        let units = entries
            .into_iter()
            .map(|(threshold, label)| {
                Ok(Unit {
                    threshold: threshold.to_decimal()?,
                    label: label.into(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_from(units)
    }

    /// The default K/M/B/T/Q table over powers of 1000.
    pub fn short_scale() -> Self {
        let units = [
            (1_000_000_000_000_000u64, "Q"),
            (1_000_000_000_000, "T"),
            (1_000_000_000, "B"),
            (1_000_000, "M"),
            (1_000, "K"),
        ]
        .into_iter()
        .map(|(threshold, label)| Unit {
            threshold: Decimal::from(threshold),
            label: label.to_string(),
        })
        .collect();
        Self { units }
    }

    /// Rows in scan order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the first row whose threshold does not exceed `magnitude`.
    pub fn find(&self, magnitude: Decimal) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.threshold <= magnitude)
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::short_scale()
    }
}

impl TryFrom<Vec<Unit>> for UnitTable {
    type Error = Error;

    fn try_from(units: Vec<Unit>) -> Result<Self> {
        if units.is_empty() {
            return Err(Error::InvalidUnitTable("table has no units".into()));
        }
        if let Some(unit) = units.iter().find(|u| u.threshold <= Decimal::ZERO) {
            return Err(Error::InvalidUnitTable(format!(
                "threshold for {:?} must be positive, got {}",
                unit.label, unit.threshold
            )));
        }
        for pair in units.windows(2) {
            if pair[1].threshold >= pair[0].threshold {
                return Err(Error::InvalidUnitTable(format!(
                    "thresholds must be strictly descending: {} ({:?}) follows {} ({:?})",
                    pair[1].threshold, pair[1].label, pair[0].threshold, pair[0].label
                )));
            }
        }
        Ok(Self { units })
    }
}

impl From<UnitTable> for Vec<Unit> {
    fn from(table: UnitTable) -> Self {
        table.units
    }
}

/// Formats numbers as a truncated multiple of the largest fitting unit.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct CompactFormatter {
    options: FormatOptions,
    table: UnitTable,
}

impl CompactFormatter {
    /// Creates a formatter with one decimal place, uppercase labels, and the
    /// default unit table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter from a full set of options.
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Sets the number of fractional digits kept.
    pub fn decimal_places(mut self, decimal_places: u32) -> Self {
        self.options.decimal_places = decimal_places;
        self
    }

    /// Sets the casing applied to unit labels.
    pub fn label_case(mut self, label_case: LabelCase) -> Self {
        self.options.label_case = label_case;
        self
    }

    /// Sets the rounding used for values below the smallest threshold.
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.options.rounding = rounding;
        self
    }

    /// Replaces the unit table entirely.
    pub fn table(mut self, table: UnitTable) -> Self {
        self.table = table;
        self
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn unit_table(&self) -> &UnitTable {
        &self.table
    }

    /// Formats `value`, e.g. `1_500` -> `"1.5K"`.
    pub fn format(&self, value: impl ToDecimal) -> Result<String> {
        let value = value.to_decimal()?;
        let dp = self.options.decimal_places;
        check_decimal_places(dp)?;

        let Some(unit) = self.table.find(value.abs()) else {
            trace!("compact: {value} below smallest unit, rounding");
            let rounded = round(value, dp, self.options.rounding)?;
            return Ok(render_fixed(rounded, dp));
        };

        // Divide the signed value so the sign comes out of the division itself.
        let scaled = quotient(value, unit.threshold, dp)?;
        let truncated = truncate(scaled, dp)?;
        trace!("compact: {value} -> {truncated} {}", unit.label);
        Ok(format!(
            "{}{}",
            render_fixed(truncated, dp),
            self.options.label_case.apply(&unit.label)
        ))
    }
}

/// Formats `value` with the default unit table and uppercase labels.
pub fn format_compact(value: impl ToDecimal, decimal_places: u32) -> Result<String> {
    CompactFormatter::new()
        .decimal_places(decimal_places)
        .format(value)
}
