//! Human-readable text for numbers, byte sizes, durations, and percentages.
//!
//! | Formatter | Example | Policy |
//! |---|---|---|
//! | [`format_compact`] | `1_500` -> `1.5K` | truncates toward zero |
//! | [`format_bytes`] | `1_572_864` -> `1.5MB` | rounds half away from zero |
//! | [`format_clock`] / [`format_labeled`] | `3_661` -> `00:01:01` | whole seconds |
//! | [`format_percent`] | `45.67` -> `45.6%` | truncates toward zero |
//! | [`format_grouped`] | `1234567` -> `1,234,567` | rounds half away from zero |
//!
//! The compact and percentage formatters truncate while the byte-size and
//! grouped formatters round. This is intentional: a compact count never
//! overstates a value (`999_999` is `999.9K`, not `1.0M`), while byte sizes
//! read as conventional rounded measurements.
//!
//! All arithmetic is done on [`rust_decimal::Decimal`]. Inputs may be any
//! primitive number, a `Decimal`, or a numeric string (see [`ToDecimal`]).
//! Every formatter is a plain value; there is no global state.
//!
//! ```rust
//! use readout::{ByteSizeFormatter, LabelCase, format_compact, format_percent_of_total};
//!
//! assert_eq!(format_compact(-1_500, 1).unwrap(), "-1.5K");
//! assert_eq!(format_percent_of_total(1, 4, 1).unwrap(), "25.0%");
//!
//! let bytes = ByteSizeFormatter::new().label_case(LabelCase::Lower);
//! assert_eq!(bytes.format(0).unwrap(), "0b");
//! ```

pub use bytes::{
    ByteSizeFormatter, ByteUnit, ByteUnits, format_bytes, format_bytes_detailed, format_bytes_in,
};
pub use compact::{CompactFormatter, Unit, UnitTable, format_compact};
pub use config::{BytesConfig, CompactConfig, FormatConfig, PercentConfig};
pub use duration::{
    DurationFormatter, TimeFormatOptions, TimeLabel, TimeLabels, TimeParts, TimeUnit,
    format_clock, format_labeled,
};
pub use error::{Error, ErrorKind, Result};
pub use grouping::{Grouping, format_grouped};
pub use number::{MAX_DECIMAL_PLACES, ToDecimal, parse_decimal, round, truncate};
pub use options::{FormatOptions, LabelCase, RoundingMode};
pub use percent::{PercentFormatter, format_percent, format_percent_of_total};

mod bytes;
mod compact;
mod config;
pub mod duration;
mod error;
mod grouping;
mod number;
mod options;
mod percent;
pub mod template;
mod tracing;

pub use rust_decimal::Decimal;
