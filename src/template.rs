//! Tera filter registration.
//!
//! Exposes the formatters as template filters so UI templates can format
//! values inline:
//!
//! ```rust
//! use readout::template::render_str;
//! use tera::Context;
//!
//! let mut ctx = Context::new();
//! ctx.insert("downloads", &1_534_000);
//! ctx.insert("size", &1_572_864);
//! ctx.insert("elapsed", &3_725);
//!
//! let out = render_str(
//!     "{{ downloads | compact }} / {{ size | bytes }} / {{ elapsed | duration }}",
//!     &ctx,
//! ).unwrap();
//! assert_eq!(out, "1.5M / 1.5MB / 01:02:05");
//! ```
//!
//! ## Available Filters
//!
//! - `compact(decimals=1, lower=false)` - `1.5K`, `2.3M`
//! - `bytes(decimals=1, lower=false, unit='kilobytes', detailed=false)` - `1.5MB`;
//!   `unit` and `detailed=true` cannot be combined
//! - `duration(show_zero=true, separate_days=true, separator=':')` - `01:02:05`
//! - `duration_labels(show_zero=false, separate_days=true, short=true, separator='')` - `01h02m05s`
//! - `percent(decimals=1, unit='%', total=N)` - `45.6%`, or value/total when `total` is given
//! - `grouped(decimals=0, locale='en')` - `1,234,567`

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use tera::{Context, Tera, Value};

use crate::Result;
use crate::bytes::{ByteSizeFormatter, ByteUnit};
use crate::compact::CompactFormatter;
use crate::duration::{DurationFormatter, TimeParts};
use crate::grouping::Grouping;
use crate::number::{ToDecimal, decimal_places_from_i64, parse_decimal};
use crate::options::{DEFAULT_DECIMAL_PLACES, LabelCase};
use crate::percent::PercentFormatter;

const INLINE_TEMPLATE: &str = "__readout_inline";

type Args = HashMap<String, Value>;

/// Registers all formatting filters on `tera`.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter("compact", compact_filter);
    tera.register_filter("bytes", bytes_filter);
    tera.register_filter("duration", duration_filter);
    tera.register_filter("duration_labels", duration_labels_filter);
    tera.register_filter("percent", percent_filter);
    tera.register_filter("grouped", grouped_filter);
}

/// Renders a one-off template with the formatting filters installed.
pub fn render_str(template: &str, context: &Context) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(INLINE_TEMPLATE, template)?;
    register_filters(&mut tera);
    Ok(tera.render(INLINE_TEMPLATE, context)?)
}

fn compact_filter(value: &Value, args: &Args) -> tera::Result<Value> {
    let formatter = CompactFormatter::new()
        .decimal_places(decimals_arg(args, DEFAULT_DECIMAL_PLACES)?)
        .label_case(label_case_arg(args));
    let out = formatter.format(value_to_decimal(value)?).map_err(filter_error)?;
    Ok(out.into())
}

fn bytes_filter(value: &Value, args: &Args) -> tera::Result<Value> {
    let formatter = ByteSizeFormatter::new()
        .decimal_places(decimals_arg(args, DEFAULT_DECIMAL_PLACES)?)
        .label_case(label_case_arg(args));
    let bytes = value_to_decimal(value)?;
    let detailed = bool_arg(args, "detailed", false);

    let out = match args.get("unit").and_then(|v| v.as_str()) {
        Some(_) if detailed => {
            return Err(tera::Error::msg(
                "bytes filter: `unit` and `detailed` are mutually exclusive",
            ));
        }
        Some(unit) => {
            let unit = ByteUnit::from_str(unit)
                .map_err(|_| tera::Error::msg(format!("unknown byte unit: {unit}")))?;
            formatter.format_in(bytes, unit)
        }
        None if detailed => formatter.format_detailed(bytes),
        None => formatter.format(bytes),
    };
    Ok(out.map_err(filter_error)?.into())
}

fn duration_filter(value: &Value, args: &Args) -> tera::Result<Value> {
    let parts = TimeParts::try_from_secs(value_to_decimal(value)?).map_err(filter_error)?;
    let formatter = DurationFormatter::new()
        .show_zero_units(bool_arg(args, "show_zero", true))
        .separate_days(bool_arg(args, "separate_days", true));
    let formatter = match args.get("separator").and_then(|v| v.as_str()) {
        Some(separator) => formatter.separator(separator),
        None => formatter,
    };
    Ok(formatter.format_clock_parts(&parts).into())
}

fn duration_labels_filter(value: &Value, args: &Args) -> tera::Result<Value> {
    let parts = TimeParts::try_from_secs(value_to_decimal(value)?).map_err(filter_error)?;
    let formatter = DurationFormatter::labeled()
        .show_zero_units(bool_arg(args, "show_zero", false))
        .separate_days(bool_arg(args, "separate_days", true))
        .use_short_labels(bool_arg(args, "short", true));
    let formatter = match args.get("separator").and_then(|v| v.as_str()) {
        Some(separator) => formatter.segment_separator(separator),
        None => formatter,
    };
    Ok(formatter.format_labeled_parts(&parts).into())
}

fn percent_filter(value: &Value, args: &Args) -> tera::Result<Value> {
    let mut formatter =
        PercentFormatter::new().decimal_places(decimals_arg(args, DEFAULT_DECIMAL_PLACES)?);
    if let Some(unit) = args.get("unit").and_then(|v| v.as_str()) {
        formatter = formatter.unit(unit);
    }
    let value = value_to_decimal(value)?;
    let out = match args.get("total") {
        Some(total) => formatter.format_of_total(value, value_to_decimal(total)?),
        None => formatter.format(value),
    };
    Ok(out.map_err(filter_error)?.into())
}

fn grouped_filter(value: &Value, args: &Args) -> tera::Result<Value> {
    let grouping = match args.get("locale").and_then(|v| v.as_str()) {
        Some(tag) => Grouping::for_locale(tag).map_err(filter_error)?,
        None => Grouping::invariant(),
    };
    let out = grouping
        .format_with_places(value_to_decimal(value)?, decimals_arg(args, 0)?)
        .map_err(filter_error)?;
    Ok(out.into())
}

fn value_to_decimal(value: &Value) -> tera::Result<Decimal> {
    let decimal = match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Decimal::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Decimal::from(u))
            } else {
                n.as_f64().unwrap_or(f64::NAN).to_decimal()
            }
        }
        Value::String(s) => parse_decimal(s),
        other => return Err(tera::Error::msg(format!("expected a number, got {other}"))),
    };
    decimal.map_err(filter_error)
}

fn decimals_arg(args: &Args, default: u32) -> tera::Result<u32> {
    match args.get("decimals") {
        None => Ok(default),
        Some(v) => {
            let n = v
                .as_i64()
                .ok_or_else(|| tera::Error::msg("`decimals` must be an integer"))?;
            decimal_places_from_i64(n).map_err(filter_error)
        }
    }
}

fn label_case_arg(args: &Args) -> LabelCase {
    LabelCase::from_upper(!bool_arg(args, "lower", false))
}

fn bool_arg(args: &Args, name: &str, default: bool) -> bool {
    args.get(name).and_then(|v| v.as_bool()).unwrap_or(default)
}

fn filter_error(err: crate::Error) -> tera::Error {
    tera::Error::msg(err.to_string())
}
