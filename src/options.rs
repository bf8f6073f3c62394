//! Options shared by the magnitude, byte-size, and percentage formatters.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Default number of fractional digits for every formatter.
pub const DEFAULT_DECIMAL_PLACES: u32 = 1;

/// Casing applied to unit labels.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIs,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LabelCase {
    /// `K`, `MB`, `0B`
    #[default]
    Upper,
    /// `k`, `mb`, `0b`
    Lower,
}

impl LabelCase {
    /// Applies this casing to a label.
    pub fn apply(&self, label: &str) -> String {
        match self {
            LabelCase::Upper => label.to_uppercase(),
            LabelCase::Lower => label.to_lowercase(),
        }
    }

    /// Maps the `upper_case` flag most callers carry around.
    pub fn from_upper(upper_case: bool) -> Self {
        if upper_case {
            LabelCase::Upper
        } else {
            LabelCase::Lower
        }
    }
}

/// How a value is rounded to the requested number of fractional digits.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoundingMode {
    /// 2.5 -> 3, -2.5 -> -3
    #[default]
    HalfAwayFromZero,
    /// 2.5 -> 2, 3.5 -> 4
    HalfEven,
    /// 2.5 -> 2, -2.5 -> -2
    HalfTowardZero,
    /// Plain truncation.
    TowardZero,
    AwayFromZero,
    Floor,
    Ceiling,
}

impl RoundingMode {
    pub(crate) fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfTowardZero => RoundingStrategy::MidpointTowardZero,
            RoundingMode::TowardZero => RoundingStrategy::ToZero,
            RoundingMode::AwayFromZero => RoundingStrategy::AwayFromZero,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

/// Precision and label settings for the number formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Fractional digits kept in the output (default: 1).
    pub decimal_places: u32,
    /// Casing of the unit label (default: upper).
    pub label_case: LabelCase,
    /// Rounding used when the compact formatter finds no matching unit.
    pub rounding: RoundingMode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            label_case: LabelCase::Upper,
            rounding: RoundingMode::HalfAwayFromZero,
        }
    }
}
