//! Byte-size formatting with binary (1024) prefixes.
//!
//! Unlike the compact formatter, the byte-size formatter **rounds** the final
//! value half away from zero rather than truncating it: `1_048_575` bytes is
//! `"1024.0KB"` here, while the compact formatter would never round up. The
//! two behaviors are deliberately kept separate.
//!
//! # Examples
//!
//! ```rust
//! use readout::{ByteSizeFormatter, ByteUnit, LabelCase, format_bytes};
//!
//! assert_eq!(format_bytes(1_536).unwrap(), "1.5KB");
//! assert_eq!(format_bytes(0).unwrap(), "0B");
//!
//! let f = ByteSizeFormatter::new().decimal_places(2).label_case(LabelCase::Lower);
//! assert_eq!(f.format_in(5_242_880, ByteUnit::Megabytes).unwrap(), "5.00mb");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::grouping::Grouping;
use crate::number::{ToDecimal, check_decimal_places, quotient, render_fixed, round};
use crate::options::{DEFAULT_DECIMAL_PLACES, LabelCase, RoundingMode};
use crate::tracing::trace;
use crate::{Error, Result};

/// Returned for zero and negative sizes, cased per the formatter.
const ZERO_BYTES: &str = "0B";

const KIBI: u64 = 1024;

/// Labels for successive powers of 1024, smallest first.
///
/// The formatter never scales past the last label, so a short table keeps large
/// values in its largest unit (`5000GB` with the default table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ByteUnits {
    labels: Vec<String>,
}

impl ByteUnits {
    /// Builds a table from labels for 1024^0, 1024^1, ...
    pub fn new<I, L>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::try_from(labels.into_iter().map(Into::into).collect::<Vec<_>>())
    }

    /// `B`, `KB`, `MB`, `GB`.
    pub fn binary() -> Self {
        Self::from_static(&["B", "KB", "MB", "GB"])
    }

    /// `B` through `PB`.
    pub fn extended() -> Self {
        Self::from_static(&["B", "KB", "MB", "GB", "TB", "PB"])
    }

    fn from_static(labels: &[&str]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for ByteUnits {
    fn default() -> Self {
        Self::binary()
    }
}

impl TryFrom<Vec<String>> for ByteUnits {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::InvalidUnitTable("byte unit table has no labels".into()));
        }
        Ok(Self { labels })
    }
}

impl From<ByteUnits> for Vec<String> {
    fn from(units: ByteUnits) -> Self {
        units.labels
    }
}

/// A fixed unit for [`ByteSizeFormatter::format_in`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ByteUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
    Terabytes,
}

impl ByteUnit {
    /// Suffix written after the value.
    pub fn label(&self) -> &'static str {
        match self {
            ByteUnit::Bytes => "B",
            ByteUnit::Kilobytes => "KB",
            ByteUnit::Megabytes => "MB",
            ByteUnit::Gigabytes => "GB",
            ByteUnit::Terabytes => "TB",
        }
    }

    /// Number of bytes in one of this unit.
    pub fn divisor(&self) -> u64 {
        let exponent = match self {
            ByteUnit::Bytes => 0,
            ByteUnit::Kilobytes => 1,
            ByteUnit::Megabytes => 2,
            ByteUnit::Gigabytes => 3,
            ByteUnit::Terabytes => 4,
        };
        KIBI.pow(exponent)
    }
}

/// Formats byte counts with 1024-based units.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct ByteSizeFormatter {
    decimal_places: u32,
    label_case: LabelCase,
    units: ByteUnits,
    grouping: Grouping,
}

impl Default for ByteSizeFormatter {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            label_case: LabelCase::Upper,
            units: ByteUnits::default(),
            grouping: Grouping::invariant(),
        }
    }
}

impl ByteSizeFormatter {
    /// Creates a formatter with one decimal place, uppercase labels, and
    /// `B`/`KB`/`MB`/`GB` units.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of fractional digits shown.
    pub fn decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the casing applied to unit labels (and to the `0B` literal).
    pub fn label_case(mut self, label_case: LabelCase) -> Self {
        self.label_case = label_case;
        self
    }

    /// Replaces the unit labels entirely.
    pub fn units(mut self, units: ByteUnits) -> Self {
        self.units = units;
        self
    }

    /// Sets the separators used for the exact count in [`Self::format_detailed`].
    pub fn grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Formats `bytes` in the largest unit that keeps the value at or above 1.
    ///
    /// Zero and negative sizes render as the literal `0B` (`0b` in lowercase).
    pub fn format(&self, bytes: impl ToDecimal) -> Result<String> {
        let size = bytes.to_decimal()?;
        check_decimal_places(self.decimal_places)?;
        if size <= Decimal::ZERO {
            return Ok(self.label_case.apply(ZERO_BYTES));
        }

        let kibi = Decimal::from(KIBI);
        let last = self.units.labels.len() - 1;
        let mut divisor = Decimal::ONE;
        let mut index = 0;
        while index < last {
            match divisor.checked_mul(kibi) {
                Some(next) if size >= next => divisor = next,
                _ => break,
            }
            index += 1;
        }
        let scaled = quotient(size, divisor, self.decimal_places)?;
        trace!("bytes: scaled to {scaled} {}", self.units.labels[index]);
        self.render(scaled, &self.units.labels[index])
    }

    /// Formats `bytes` in a fixed unit, e.g. always megabytes.
    pub fn format_in(&self, bytes: impl ToDecimal, unit: ByteUnit) -> Result<String> {
        let size = bytes.to_decimal()?;
        check_decimal_places(self.decimal_places)?;
        let scaled = quotient(size, Decimal::from(unit.divisor()), self.decimal_places)?;
        self.render(scaled, unit.label())
    }

    /// Formats `bytes` with the exact count alongside: `1.5MB (1,572,864 bytes)`.
    ///
    /// Zero and negative sizes render as `0B (0 bytes)`, with the `0B` part
    /// following [`Self::label_case`] (`0b (0 bytes)` in lowercase).
    pub fn format_detailed(&self, bytes: impl ToDecimal) -> Result<String> {
        let size = bytes.to_decimal()?;
        if size <= Decimal::ZERO {
            check_decimal_places(self.decimal_places)?;
            return Ok(format!("{} (0 bytes)", self.label_case.apply(ZERO_BYTES)));
        }
        let scaled = self.format(size)?;
        let exact = self.grouping.format(size)?;
        Ok(format!("{scaled} ({exact} bytes)"))
    }

    fn render(&self, value: Decimal, label: &str) -> Result<String> {
        let rounded = round(value, self.decimal_places, RoundingMode::HalfAwayFromZero)?;
        Ok(format!(
            "{}{}",
            render_fixed(rounded, self.decimal_places),
            self.label_case.apply(label)
        ))
    }
}

/// Formats `bytes` with the default units, one decimal place, uppercase labels.
pub fn format_bytes(bytes: impl ToDecimal) -> Result<String> {
    ByteSizeFormatter::new().format(bytes)
}

/// Formats `bytes` in a fixed `unit` with `decimal_places` digits.
pub fn format_bytes_in(bytes: impl ToDecimal, unit: ByteUnit, decimal_places: u32) -> Result<String> {
    ByteSizeFormatter::new()
        .decimal_places(decimal_places)
        .format_in(bytes, unit)
}

/// Formats `bytes` scaled, followed by the exact grouped byte count.
///
/// ```rust
/// use readout::format_bytes_detailed;
///
/// assert_eq!(format_bytes_detailed(1_572_864).unwrap(), "1.5MB (1,572,864 bytes)");
/// assert_eq!(format_bytes_detailed(0).unwrap(), "0B (0 bytes)");
/// ```
pub fn format_bytes_detailed(bytes: impl ToDecimal) -> Result<String> {
    ByteSizeFormatter::new().format_detailed(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_format_bytes_zero_and_negative() {
        assert_eq!(format_bytes(0).unwrap(), "0B");
        assert_eq!(format_bytes(-10).unwrap(), "0B");
        let lower = ByteSizeFormatter::new().label_case(LabelCase::Lower);
        assert_eq!(lower.format(0).unwrap(), "0b");
        // fixed literal, not a decimal-formatted zero
        let precise = ByteSizeFormatter::new().decimal_places(3);
        assert_eq!(precise.format(0).unwrap(), "0B");
    }

    #[test]
    fn test_format_bytes_bytes() {
        assert_eq!(format_bytes(1).unwrap(), "1.0B");
        assert_eq!(format_bytes(512).unwrap(), "512.0B");
        assert_eq!(format_bytes(1023).unwrap(), "1023.0B");
    }

    #[test]
    fn test_format_bytes_scaled() {
        assert_eq!(format_bytes(1024).unwrap(), "1.0KB");
        assert_eq!(format_bytes(1536).unwrap(), "1.5KB");
        assert_eq!(format_bytes(1024 * 1024).unwrap(), "1.0MB");
        assert_eq!(format_bytes(1_572_864).unwrap(), "1.5MB");
        assert_eq!(format_bytes(1024u64 * 1024 * 1024).unwrap(), "1.0GB");
    }

    #[test]
    fn test_format_bytes_rounds_instead_of_truncating() {
        // 1.96875 KB
        assert_eq!(format_bytes(2016).unwrap(), "2.0KB");
        // 1023.999... KB rounds up without moving to MB
        assert_eq!(format_bytes(1_048_575).unwrap(), "1024.0KB");
        // 1.25 KB, midpoint goes away from zero
        assert_eq!(format_bytes(1280).unwrap(), "1.3KB");
    }

    #[test]
    fn test_format_bytes_table_exhausted() {
        let tb = 1024u64.pow(4);
        assert_eq!(format_bytes(tb * 5).unwrap(), "5120.0GB");
        let f = ByteSizeFormatter::new().units(ByteUnits::extended());
        assert_eq!(f.format(tb * 5).unwrap(), "5.0TB");
    }

    #[test]
    fn test_custom_units() {
        let units = ByteUnits::new(["o", "Ko", "Mo"]).unwrap();
        let f = ByteSizeFormatter::new().units(units);
        assert_eq!(f.format(2048).unwrap(), "2.0KO");
        let f = f.label_case(LabelCase::Lower);
        assert_eq!(f.format(3 * 1024 * 1024).unwrap(), "3.0mo");
        assert!(ByteUnits::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_format_in_fixed_units() {
        assert_eq!(format_bytes_in(1536, ByteUnit::Bytes, 0).unwrap(), "1536B");
        assert_eq!(format_bytes_in(1536, ByteUnit::Kilobytes, 1).unwrap(), "1.5KB");
        assert_eq!(format_bytes_in(1536, ByteUnit::Megabytes, 3).unwrap(), "0.001MB");
        assert_eq!(
            format_bytes_in(3u64 * 1024 * 1024 * 1024, ByteUnit::Gigabytes, 1).unwrap(),
            "3.0GB"
        );
        assert_eq!(
            format_bytes_in(1024u64.pow(4) / 2, ByteUnit::Terabytes, 2).unwrap(),
            "0.50TB"
        );
        assert_eq!(format_bytes_in(0, ByteUnit::Kilobytes, 1).unwrap(), "0.0KB");
    }

    #[test]
    fn test_byte_unit_divisors() {
        let divisors: Vec<u64> = ByteUnit::iter().map(|u| u.divisor()).collect();
        assert_eq!(
            divisors,
            vec![1, 1024, 1_048_576, 1_073_741_824, 1_099_511_627_776]
        );
        assert_eq!(ByteUnit::Megabytes.to_string(), "megabytes");
    }

    #[test]
    fn test_format_detailed() {
        assert_eq!(
            format_bytes_detailed(1_572_864).unwrap(),
            "1.5MB (1,572,864 bytes)"
        );
        assert_eq!(format_bytes_detailed(512).unwrap(), "512.0B (512 bytes)");
        assert_eq!(format_bytes_detailed(0).unwrap(), "0B (0 bytes)");
        assert_eq!(format_bytes_detailed(-3).unwrap(), "0B (0 bytes)");
        let lower = ByteSizeFormatter::new().label_case(LabelCase::Lower);
        assert_eq!(lower.format_detailed(0).unwrap(), "0b (0 bytes)");
        let de = ByteSizeFormatter::new().grouping(Grouping::for_locale("de").unwrap());
        assert_eq!(
            de.format_detailed(1_572_864).unwrap(),
            "1.5MB (1.572.864 bytes)"
        );
    }

    #[test]
    fn test_scaled_value_stays_below_kibi() {
        for bytes in [1u64, 1000, 1024, 5_000, 1_000_000, 123_456_789, 999_999_999] {
            let f = ByteSizeFormatter::new().decimal_places(6);
            let out = f.format(bytes).unwrap();
            let number: String = out.chars().take_while(|c| c.is_ascii_digit() || *c == '.').collect();
            let value: f64 = number.parse().unwrap();
            assert!((1.0..1024.0).contains(&value), "{bytes} -> {out}");
        }
    }

    #[test]
    fn test_high_precision_keeps_every_digit() {
        let f = ByteSizeFormatter::new().decimal_places(28);
        assert_eq!(f.format(1536).unwrap(), format!("1.5{}KB", "0".repeat(27)));
        assert_eq!(f.format(1023).unwrap(), format!("1023.{}B", "0".repeat(28)));
        assert_eq!(
            format_bytes_in(5u64 * 1024u64.pow(4), ByteUnit::Terabytes, 28).unwrap(),
            format!("5.{}TB", "0".repeat(28))
        );
    }

    #[test]
    fn test_inexact_scale_past_precision() {
        // 1 TB + 1 byte needs 40 fractional digits in terabytes
        let bytes = 1024u64.pow(4) + 1;
        let f = ByteSizeFormatter::new().units(ByteUnits::extended());
        assert_eq!(f.format(bytes).unwrap(), "1.0TB");
        let err = f.decimal_places(28).format(bytes).unwrap_err();
        assert!(err.kind().is_precondition_violation());
    }

    #[test]
    fn test_string_and_float_inputs() {
        assert_eq!(format_bytes("2048").unwrap(), "2.0KB");
        assert_eq!(format_bytes(1536.0f64).unwrap(), "1.5KB");
        assert!(format_bytes("").is_err());
    }
}
