//! Formatter configuration loaded from JSON.
//!
//! Every section and field is optional; missing values take the same defaults
//! as the formatter constructors.
//!
//! ```rust
//! use readout::FormatConfig;
//!
//! let config = FormatConfig::from_json(r#"{
//!     "compact": { "decimal_places": 2, "label_case": "lower" },
//!     "time": { "separator": "." },
//!     "locale": "de-DE"
//! }"#).unwrap();
//!
//! assert_eq!(config.compact_formatter().format(1_234_567).unwrap(), "1.23m");
//! assert_eq!(config.duration_formatter().format_clock(61), "00.01.01");
//! assert_eq!(config.grouping().unwrap().format(1_234_567).unwrap(), "1.234.567");
//! ```

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::bytes::{ByteSizeFormatter, ByteUnits};
use crate::compact::{CompactFormatter, Unit, UnitTable};
use crate::duration::{DurationFormatter, TimeFormatOptions};
use crate::grouping::Grouping;
use crate::number::check_decimal_places;
use crate::options::{DEFAULT_DECIMAL_PLACES, FormatOptions, LabelCase, RoundingMode};
use crate::percent::PercentFormatter;

/// Settings for the compact number formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompactConfig {
    pub decimal_places: u32,
    pub label_case: LabelCase,
    pub rounding: RoundingMode,
    /// Replaces the default K/M/B/T/Q table when present.
    pub units: Option<UnitTable>,
}

impl Default for CompactConfig {
    fn default() -> Self {
        let options = FormatOptions::default();
        Self {
            decimal_places: options.decimal_places,
            label_case: options.label_case,
            rounding: options.rounding,
            units: None,
        }
    }
}

/// Settings for the byte-size formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BytesConfig {
    pub decimal_places: u32,
    pub label_case: LabelCase,
    /// Replaces the default B/KB/MB/GB labels when present.
    pub units: Option<ByteUnits>,
}

impl Default for BytesConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            label_case: LabelCase::Upper,
            units: None,
        }
    }
}

/// Settings for the percentage formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentConfig {
    pub decimal_places: u32,
    pub unit: String,
}

impl Default for PercentConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            unit: "%".to_string(),
        }
    }
}

/// Complete formatter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub compact: CompactConfig,
    pub bytes: BytesConfig,
    pub time: TimeFormatOptions,
    pub percent: PercentConfig,
    /// Language tag for grouped numbers; invariant when absent.
    pub locale: Option<String>,
}

impl FormatConfig {
    /// Parses and validates a JSON document.
    ///
    /// Malformed JSON or mistyped fields fail as [`crate::Error::Json`]. A unit
    /// table that is well formed but empty or out of order fails as
    /// [`crate::Error::InvalidUnitTable`], the same error its constructor
    /// returns.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        check_tables(&document)?;
        let config: Self = serde_json::from_value(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks digit counts and the locale tag up front.
    pub fn validate(&self) -> Result<()> {
        check_decimal_places(self.compact.decimal_places)?;
        check_decimal_places(self.bytes.decimal_places)?;
        check_decimal_places(self.percent.decimal_places)?;
        self.grouping()?;
        Ok(())
    }

    /// Serializes the configuration back to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn compact_formatter(&self) -> CompactFormatter {
        let formatter = CompactFormatter::with_options(FormatOptions {
            decimal_places: self.compact.decimal_places,
            label_case: self.compact.label_case,
            rounding: self.compact.rounding,
        });
        match &self.compact.units {
            Some(table) => formatter.table(table.clone()),
            None => formatter,
        }
    }

    pub fn byte_size_formatter(&self) -> Result<ByteSizeFormatter> {
        let formatter = ByteSizeFormatter::new()
            .decimal_places(self.bytes.decimal_places)
            .label_case(self.bytes.label_case)
            .grouping(self.grouping()?);
        Ok(match &self.bytes.units {
            Some(units) => formatter.units(units.clone()),
            None => formatter,
        })
    }

    pub fn duration_formatter(&self) -> DurationFormatter {
        DurationFormatter::with_options(self.time.clone())
    }

    pub fn percent_formatter(&self) -> PercentFormatter {
        PercentFormatter::new()
            .decimal_places(self.percent.decimal_places)
            .unit(self.percent.unit.clone())
    }

    pub fn grouping(&self) -> Result<Grouping> {
        match &self.locale {
            Some(tag) => Grouping::for_locale(tag),
            None => Ok(Grouping::invariant()),
        }
    }
}

fn check_tables(document: &serde_json::Value) -> Result<()> {
    if let Some(units) = table_at(document, "/compact/units") {
        let units: Vec<Unit> = serde_json::from_value(units.clone())?;
        UnitTable::try_from(units)?;
    }
    if let Some(labels) = table_at(document, "/bytes/units") {
        let labels: Vec<String> = serde_json::from_value(labels.clone())?;
        ByteUnits::try_from(labels)?;
    }
    Ok(())
}

fn table_at<'a>(document: &'a serde_json::Value, pointer: &str) -> Option<&'a serde_json::Value> {
    document.pointer(pointer).filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = FormatConfig::from_json("{}").unwrap();
        assert_eq!(config, FormatConfig::default());
        assert_eq!(config.compact_formatter().format(1_500).unwrap(), "1.5K");
        assert_eq!(
            config.byte_size_formatter().unwrap().format(1_536).unwrap(),
            "1.5KB"
        );
        assert_eq!(config.duration_formatter().format_clock(61), "00:01:01");
        assert_eq!(config.percent_formatter().format(12).unwrap(), "12.0%");
    }

    #[test]
    fn test_custom_tables() {
        let config = FormatConfig::from_json(
            r#"{
                "compact": {
                    "units": [
                        {"threshold": "1000000", "label": "Mio"},
                        {"threshold": "1000", "label": "Tsd"}
                    ],
                    "label_case": "lower"
                },
                "bytes": { "units": ["B", "KiB", "MiB"], "decimal_places": 2 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.compact_formatter().format(2_500_000).unwrap(), "2.5mio");
        assert_eq!(
            config.byte_size_formatter().unwrap().format(1_536).unwrap(),
            "1.50KIB"
        );
    }

    #[test]
    fn test_unsorted_table_rejected() {
        let err = FormatConfig::from_json(
            r#"{"compact": {"units": [{"threshold": "1", "label": "a"}, {"threshold": "2", "label": "b"}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidUnitTable(_)));
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);

        let err = FormatConfig::from_json(r#"{"bytes": {"units": []}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);

        // a mistyped table is still a malformed document
        let err = FormatConfig::from_json(r#"{"compact": {"units": [{"label": "K"}]}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        let err = FormatConfig::from_json(r#"{"compact": {"units": 5}}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_table_errors_match_constructors() {
        let from_config = FormatConfig::from_json(
            r#"{"compact": {"units": [{"threshold": "1000", "label": "K"}, {"threshold": "1000", "label": "k"}]}}"#,
        )
        .unwrap_err();
        let from_constructor = UnitTable::new([(1_000, "K"), (1_000, "k")]).unwrap_err();
        assert_eq!(from_config.kind(), from_constructor.kind());
        assert_eq!(from_config.to_string(), from_constructor.to_string());
    }

    #[test]
    fn test_validation_errors() {
        let err = FormatConfig::from_json(r#"{"percent": {"decimal_places": 40}}"#).unwrap_err();
        assert!(err.kind().is_precondition_violation());

        let err = FormatConfig::from_json(r#"{"locale": "zz"}"#).unwrap_err();
        assert!(matches!(err, Error::UnknownLocale(_)));

        let err = FormatConfig::from_json(r#"{"bytes": {"decimal_places": -1}}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_round_trip_json() {
        let mut config = FormatConfig::default();
        config.percent.unit = " pct".to_string();
        config.time = TimeFormatOptions::labeled();
        let json = config.to_json().unwrap();
        assert_eq!(FormatConfig::from_json(&json).unwrap(), config);
    }
}
