//! Numeric input conversion and the truncation primitive.
//!
//! Every displayed value goes through [`Decimal`] so that truncating or rounding
//! to a handful of fractional digits is exact. Binary floats are accepted only
//! as an input source and are converted once, up front.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::options::RoundingMode;
use crate::{Error, Result};

/// Largest number of fractional digits a [`Decimal`] can carry.
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Values that can be converted to an exact decimal for formatting.
///
/// Implemented for the primitive integers, `f32`, `f64`, [`Decimal`], and
/// strings (parsed with [`parse_decimal`]).
pub trait ToDecimal {
    /// Converts the value, failing when it has no exact decimal form.
    fn to_decimal(&self) -> Result<Decimal>;
}

impl<T: ToDecimal + ?Sized> ToDecimal for &T {
    fn to_decimal(&self) -> Result<Decimal> {
        (**self).to_decimal()
    }
}

impl ToDecimal for Decimal {
    fn to_decimal(&self) -> Result<Decimal> {
        Ok(*self)
    }
}

macro_rules! impl_to_decimal_int {
    ($($t:ty),*) => {
        $(
            impl ToDecimal for $t {
                fn to_decimal(&self) -> Result<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_to_decimal_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToDecimal for i128 {
    fn to_decimal(&self) -> Result<Decimal> {
        Decimal::from_i128(*self).ok_or_else(|| Error::Unsupported(self.to_string()))
    }
}

impl ToDecimal for u128 {
    fn to_decimal(&self) -> Result<Decimal> {
        Decimal::from_u128(*self).ok_or_else(|| Error::Unsupported(self.to_string()))
    }
}

impl ToDecimal for f64 {
    fn to_decimal(&self) -> Result<Decimal> {
        if !self.is_finite() {
            return Err(Error::Unsupported(self.to_string()));
        }
        Decimal::try_from(*self).map_err(|_| Error::Unsupported(self.to_string()))
    }
}

impl ToDecimal for f32 {
    fn to_decimal(&self) -> Result<Decimal> {
        if !self.is_finite() {
            return Err(Error::Unsupported(self.to_string()));
        }
        Decimal::try_from(*self).map_err(|_| Error::Unsupported(self.to_string()))
    }
}

impl ToDecimal for str {
    fn to_decimal(&self) -> Result<Decimal> {
        parse_decimal(self)
    }
}

impl ToDecimal for String {
    fn to_decimal(&self) -> Result<Decimal> {
        parse_decimal(self)
    }
}

/// Parses a loosely formatted numeric string.
///
/// Surrounding whitespace is ignored. Plain (`"-12.5"`) and scientific
/// (`"1.5e3"`) notation are accepted.
pub fn parse_decimal(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    Decimal::from_str(unsigned)
        .or_else(|_| Decimal::from_scientific(unsigned))
        .map_err(|_| Error::Parse(input.to_string()))
}

/// Fails unless `decimal_places` fits the decimal type's scale.
pub fn check_decimal_places(decimal_places: u32) -> Result<()> {
    if decimal_places > MAX_DECIMAL_PLACES {
        return Err(Error::DecimalPlaces {
            got: decimal_places.into(),
            max: MAX_DECIMAL_PLACES,
        });
    }
    Ok(())
}

/// Converts a signed digit count coming from an untyped source (templates, JSON).
pub(crate) fn decimal_places_from_i64(decimal_places: i64) -> Result<u32> {
    u32::try_from(decimal_places)
        .ok()
        .filter(|dp| *dp <= MAX_DECIMAL_PLACES)
        .ok_or(Error::DecimalPlaces {
            got: decimal_places,
            max: MAX_DECIMAL_PLACES,
        })
}

/// Truncates `value` to `decimal_places` fractional digits, toward zero.
///
/// ```
/// use readout::truncate;
/// use rust_decimal::Decimal;
///
/// let v = Decimal::new(-19, 1); // -1.9
/// assert_eq!(truncate(v, 0).unwrap(), Decimal::from(-1));
/// ```
pub fn truncate(value: Decimal, decimal_places: u32) -> Result<Decimal> {
    check_decimal_places(decimal_places)?;
    Ok(positive_zero(
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero),
    ))
}

/// Rounds `value` to `decimal_places` fractional digits using `mode`.
pub fn round(value: Decimal, decimal_places: u32, mode: RoundingMode) -> Result<Decimal> {
    check_decimal_places(decimal_places)?;
    Ok(positive_zero(
        value.round_dp_with_strategy(decimal_places, mode.strategy()),
    ))
}

/// Divides `lhs` by `rhs` for display at `decimal_places` digits.
///
/// A quotient that does not terminate is cut off at the decimal type's
/// precision, and its last digit is rounded. Asking for that digit or any
/// digit past it fails with [`Error::DecimalPlaces`] instead of showing it.
pub(crate) fn quotient(lhs: Decimal, rhs: Decimal, decimal_places: u32) -> Result<Decimal> {
    if rhs.is_zero() {
        return Err(Error::DivisionByZero);
    }
    let q = lhs
        .checked_div(rhs)
        .ok_or_else(|| Error::Overflow(format!("{lhs} / {rhs}")))?;
    let exact = q.checked_mul(rhs) == Some(lhs);
    if !exact && q.scale() <= decimal_places {
        return Err(Error::DecimalPlaces {
            got: decimal_places.into(),
            max: q.scale().saturating_sub(1),
        });
    }
    Ok(q)
}

/// Renders `value` with exactly `decimal_places` fractional digits.
///
/// The value must already be truncated or rounded to at most that many digits;
/// this only pads with zeros.
pub(crate) fn render_fixed(value: Decimal, decimal_places: u32) -> String {
    let mut value = positive_zero(value);
    value.rescale(decimal_places);
    let mut rendered = value.to_string();
    // rescale stops short when the padded mantissa would not fit in 96 bits
    let missing = decimal_places.saturating_sub(value.scale());
    if missing > 0 {
        if value.scale() == 0 {
            rendered.push('.');
        }
        rendered.extend(std::iter::repeat_n('0', missing as usize));
    }
    rendered
}

fn positive_zero(mut value: Decimal) -> Decimal {
    if value.is_zero() {
        value.set_sign_positive(true);
    }
    value
}
