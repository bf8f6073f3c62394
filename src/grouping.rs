//! Thousands-grouped numbers: `1,234,567`, `1.234.567,89`.
//!
//! Values are rounded half away from zero to the requested number of digits
//! and the integer part is split into groups of three.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::number::{ToDecimal, render_fixed, round};
use crate::options::RoundingMode;
use crate::{Error, Result};

const NARROW_NBSP: &str = "\u{202f}";
const NBSP: &str = "\u{a0}";

/// Separator characters used when grouping digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grouping {
    /// Inserted between groups of three integer digits.
    pub group_separator: String,
    /// Placed between the integer and fractional digits.
    pub decimal_separator: String,
}

impl Default for Grouping {
    fn default() -> Self {
        Self::invariant()
    }
}

impl Grouping {
    /// Creates grouping rules from explicit separators.
    pub fn new(group_separator: impl Into<String>, decimal_separator: impl Into<String>) -> Self {
        Self {
            group_separator: group_separator.into(),
            decimal_separator: decimal_separator.into(),
        }
    }

    /// Culture-neutral rules: `,` between groups, `.` before decimals.
    pub fn invariant() -> Self {
        Self::new(",", ".")
    }

    /// Looks up grouping rules for a language tag such as `de-DE` or `fr`.
    ///
    /// An empty tag or `"invariant"` selects [`Grouping::invariant`].
    pub fn for_locale(tag: &str) -> Result<Self> {
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        let grouping = match (language.as_str(), region.as_str()) {
            ("" | "invariant", _) => Self::invariant(),
            ("de", "CH") | ("it", "CH") => Self::new("’", "."),
            ("pt", "BR") => Self::new(".", ","),
            ("pt", _) => Self::new(NBSP, ","),
            ("en" | "ja" | "zh" | "ko" | "he" | "th" | "ms" | "fil", _) => Self::invariant(),
            ("de" | "es" | "it" | "nl" | "id" | "da" | "tr" | "el" | "ro" | "hr" | "sl", _) => {
                Self::new(".", ",")
            }
            ("fr", _) => Self::new(NARROW_NBSP, ","),
            (
                "ru" | "uk" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "no" | "hu" | "bg" | "lt"
                | "lv" | "et",
                _,
            ) => Self::new(NBSP, ","),
            _ => return Err(Error::UnknownLocale(tag.to_string())),
        };
        Ok(grouping)
    }

    /// Rounds `value` to an integer and groups its digits.
    pub fn format(&self, value: impl ToDecimal) -> Result<String> {
        self.format_with_places(value, 0)
    }

    /// Rounds `value` to `decimal_places` digits and groups the integer part.
    pub fn format_with_places(&self, value: impl ToDecimal, decimal_places: u32) -> Result<String> {
        let value = round(
            value.to_decimal()?,
            decimal_places,
            RoundingMode::HalfAwayFromZero,
        )?;
        let rendered = render_fixed(value.abs(), decimal_places);
        let (integer, fraction) = match rendered.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rendered.as_str(), None),
        };

        let mut out = String::with_capacity(rendered.len() + integer.len() / 3 * 3 + 1);
        if value < Decimal::ZERO {
            out.push('-');
        }
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push_str(&self.group_separator);
            }
            out.push(digit);
        }
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        Ok(out)
    }
}

/// Formats `value` as a grouped integer with invariant separators.
///
/// ```rust
/// use readout::format_grouped;
///
/// assert_eq!(format_grouped(1_572_864).unwrap(), "1,572,864");
/// assert_eq!(format_grouped("-1234.5").unwrap(), "-1,235");
/// ```
pub fn format_grouped(value: impl ToDecimal) -> Result<String> {
    Grouping::invariant().format(value)
}
