//! Elapsed-time formatting: `1:02:03:04`, `00:01:01`, `01d00h05m09s`.
//!
//! A second count is decomposed into days, hours, minutes, and seconds
//! ([`TimeParts`]) and rendered in one of two modes:
//!
//! - **Clock** ([`DurationFormatter::format_clock`]): fields joined by a
//!   separator. Hours, minutes, and seconds are padded to two digits; days are
//!   never padded.
//! - **Labeled** ([`DurationFormatter::format_labeled`]): every field padded to
//!   two digits and followed by its unit label. Seconds are always emitted.
//!
//! Both modes can drop leading zero units. A unit is dropped only while it and
//! every more significant unit are zero; once a nonzero unit appears, all less
//! significant units are shown. When leading units are dropped in clock mode,
//! the first remaining field is not padded, so an all-zero duration is `"0"`.
//!
//! # Examples
//!
//! ```rust
//! use readout::{DurationFormatter, format_clock, format_labeled};
//!
//! assert_eq!(format_clock(3_661), "00:01:01");
//! assert_eq!(format_labeled(90_061), "01d01h01m01s");
//!
//! let compact = DurationFormatter::new().show_zero_units(false);
//! assert_eq!(compact.format_clock(125), "2:05");
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::number::ToDecimal;
use crate::{Error, Result};

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

const DEFAULT_SEPARATOR: &str = ":";

/// A non-negative duration split into calendar-free units.
///
/// `hours < 24`, `minutes < 60`, and `seconds < 60`. Days are bounded only by
/// the whole duration fitting in a `u64` second count, so [`Self::total_hours`]
/// and [`Self::total_seconds`] cannot overflow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeParts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl TimeParts {
    /// Builds parts from individual fields, rejecting out-of-range units.
    ///
    /// ```rust
    /// use readout::TimeParts;
    ///
    /// let parts = TimeParts::new(1, 2, 3, 4).unwrap();
    /// assert_eq!(parts.total_seconds(), 93_784);
    /// assert!(TimeParts::new(0, 24, 0, 0).is_err());
    /// ```
    pub fn new(days: u64, hours: u64, minutes: u64, seconds: u64) -> Result<Self> {
        for (unit, value, limit) in [
            (TimeUnit::Hour, hours, 24),
            (TimeUnit::Minute, minutes, 60),
            (TimeUnit::Second, seconds, 60),
        ] {
            if value >= limit {
                return Err(Error::TimeField { unit, value, limit });
            }
        }
        let within_day = hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds;
        let total = days
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|secs| secs.checked_add(within_day))
            .ok_or_else(|| Error::Overflow(format!("{days} days")))?;
        Ok(Self::from_secs(total))
    }

    /// Decomposes a whole number of seconds.
    pub fn from_secs(total_seconds: u64) -> Self {
        Self {
            days: total_seconds / SECONDS_PER_DAY,
            hours: (total_seconds / SECONDS_PER_HOUR) % 24,
            minutes: (total_seconds / SECONDS_PER_MINUTE) % 60,
            seconds: total_seconds % SECONDS_PER_MINUTE,
        }
    }

    /// Decomposes any numeric second count, dropping fractional seconds.
    ///
    /// Negative durations are rejected rather than decomposed.
    pub fn try_from_secs(seconds: impl ToDecimal) -> Result<Self> {
        let seconds = seconds.to_decimal()?;
        if seconds < Decimal::ZERO {
            return Err(Error::NegativeDuration(seconds.to_string()));
        }
        let whole = seconds
            .trunc()
            .to_u64()
            .ok_or_else(|| Error::Unsupported(seconds.to_string()))?;
        Ok(Self::from_secs(whole))
    }

    /// Days folded into hours.
    pub fn total_hours(&self) -> u64 {
        self.days * 24 + self.hours
    }

    /// The second count these parts were built from.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    pub fn days(&self) -> u64 {
        self.days
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Value of a single unit.
    pub fn get(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Day => self.days,
            TimeUnit::Hour => self.hours,
            TimeUnit::Minute => self.minutes,
            TimeUnit::Second => self.seconds,
        }
    }
}

impl From<std::time::Duration> for TimeParts {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_secs(duration.as_secs())
    }
}

/// Units of a [`TimeParts`], most significant first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    Second,
}

/// Short and full display label for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLabel {
    pub short: String,
    pub full: String,
}

impl TimeLabel {
    pub fn new(short: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            full: full.into(),
        }
    }
}

/// Labels used by the labeled rendering mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeLabels {
    pub day: TimeLabel,
    pub hour: TimeLabel,
    pub minute: TimeLabel,
    pub second: TimeLabel,
}

impl Default for TimeLabels {
    fn default() -> Self {
        Self {
            day: TimeLabel::new("d", "Day"),
            hour: TimeLabel::new("h", "Hour"),
            minute: TimeLabel::new("m", "Minute"),
            second: TimeLabel::new("s", "Second"),
        }
    }
}

impl TimeLabels {
    pub fn get(&self, unit: TimeUnit) -> &TimeLabel {
        match unit {
            TimeUnit::Day => &self.day,
            TimeUnit::Hour => &self.hour,
            TimeUnit::Minute => &self.minute,
            TimeUnit::Second => &self.second,
        }
    }

    /// Replaces the labels for one unit.
    pub fn with(mut self, unit: TimeUnit, label: TimeLabel) -> Self {
        match unit {
            TimeUnit::Day => self.day = label,
            TimeUnit::Hour => self.hour = label,
            TimeUnit::Minute => self.minute = label,
            TimeUnit::Second => self.second = label,
        }
        self
    }

    fn label(&self, unit: TimeUnit, short: bool) -> &str {
        let label = self.get(unit);
        if short { &label.short } else { &label.full }
    }
}

/// Settings for [`DurationFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFormatOptions {
    /// Keep leading zero units (default: true for clock, false for labeled).
    pub show_zero_units: bool,
    /// Joins clock fields (default: `":"`).
    pub separator: String,
    /// Show days as their own unit; when false they are folded into hours.
    pub separate_days: bool,
    /// Use `d`/`h`/`m`/`s` rather than full unit names.
    pub use_short_labels: bool,
    pub labels: TimeLabels,
    /// Joins labeled segments (default: empty, the labels delimit).
    pub segment_separator: String,
}

impl Default for TimeFormatOptions {
    fn default() -> Self {
        Self::clock()
    }
}

impl TimeFormatOptions {
    /// Defaults for the clock mode: zero units shown.
    pub fn clock() -> Self {
        Self {
            show_zero_units: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            separate_days: true,
            use_short_labels: true,
            labels: TimeLabels::default(),
            segment_separator: String::new(),
        }
    }

    /// Defaults for the labeled mode: leading zero units dropped.
    pub fn labeled() -> Self {
        Self {
            show_zero_units: false,
            ..Self::clock()
        }
    }
}

/// Renders durations as clock strings or labeled segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct DurationFormatter {
    options: TimeFormatOptions,
}

impl DurationFormatter {
    /// Creates a formatter with clock-mode defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with labeled-mode defaults.
    pub fn labeled() -> Self {
        Self::with_options(TimeFormatOptions::labeled())
    }

    pub fn with_options(options: TimeFormatOptions) -> Self {
        Self { options }
    }

    pub fn show_zero_units(mut self, show_zero_units: bool) -> Self {
        self.options.show_zero_units = show_zero_units;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }

    pub fn separate_days(mut self, separate_days: bool) -> Self {
        self.options.separate_days = separate_days;
        self
    }

    pub fn use_short_labels(mut self, use_short_labels: bool) -> Self {
        self.options.use_short_labels = use_short_labels;
        self
    }

    pub fn labels(mut self, labels: TimeLabels) -> Self {
        self.options.labels = labels;
        self
    }

    pub fn segment_separator(mut self, segment_separator: impl Into<String>) -> Self {
        self.options.segment_separator = segment_separator.into();
        self
    }

    pub fn options(&self) -> &TimeFormatOptions {
        &self.options
    }

    /// Formats `total_seconds` as separator-joined fields.
    pub fn format_clock(&self, total_seconds: u64) -> String {
        self.format_clock_parts(&TimeParts::from_secs(total_seconds))
    }

    /// Formats `total_seconds` as label-suffixed segments.
    pub fn format_labeled(&self, total_seconds: u64) -> String {
        self.format_labeled_parts(&TimeParts::from_secs(total_seconds))
    }

    pub fn format_clock_parts(&self, parts: &TimeParts) -> String {
        let fields = self.fields(parts);
        let start = if self.options.show_zero_units {
            // a zero day count is never shown in clock mode
            usize::from(fields[0] == (TimeUnit::Day, 0))
        } else {
            first_significant(&fields)
        };

        fields[start..]
            .iter()
            .enumerate()
            .map(|(i, (unit, value))| {
                let leading = i == 0 && !self.options.show_zero_units;
                if *unit == TimeUnit::Day || leading {
                    value.to_string()
                } else {
                    format!("{value:02}")
                }
            })
            .collect::<Vec<_>>()
            .join(&self.options.separator)
    }

    pub fn format_labeled_parts(&self, parts: &TimeParts) -> String {
        let fields = self.fields(parts);
        let start = if self.options.show_zero_units {
            0
        } else {
            first_significant(&fields)
        };

        fields[start..]
            .iter()
            .map(|(unit, value)| {
                let label = self
                    .options
                    .labels
                    .label(*unit, self.options.use_short_labels);
                format!("{value:02}{label}")
            })
            .collect::<Vec<_>>()
            .join(&self.options.segment_separator)
    }

    fn fields(&self, parts: &TimeParts) -> Vec<(TimeUnit, u64)> {
        if self.options.separate_days {
            vec![
                (TimeUnit::Day, parts.days),
                (TimeUnit::Hour, parts.hours),
                (TimeUnit::Minute, parts.minutes),
                (TimeUnit::Second, parts.seconds),
            ]
        } else {
            vec![
                (TimeUnit::Hour, parts.total_hours()),
                (TimeUnit::Minute, parts.minutes),
                (TimeUnit::Second, parts.seconds),
            ]
        }
    }
}

/// Index of the first nonzero field, or the last field when all are zero.
fn first_significant(fields: &[(TimeUnit, u64)]) -> usize {
    fields
        .iter()
        .position(|(_, value)| *value > 0)
        .unwrap_or(fields.len() - 1)
}

/// Formats `total_seconds` as `[d:]hh:mm:ss` with zero units shown.
pub fn format_clock(total_seconds: u64) -> String {
    DurationFormatter::new().format_clock(total_seconds)
}

/// Formats `total_seconds` as `01d02h03m04s`, dropping leading zero units.
pub fn format_labeled(total_seconds: u64) -> String {
    DurationFormatter::labeled().format_labeled(total_seconds)
}
