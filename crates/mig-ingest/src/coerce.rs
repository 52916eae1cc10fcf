//! Lenient integer coercion for count cells.
//!
//! A cell is read as an integer literal first, then as a decimal literal
//! truncated toward zero. Anything else is an [`UnparsableValue`].

use polars::prelude::AnyValue;

use crate::error::UnparsableValue;

/// Float magnitude at and above which truncation into an `i128` saturates.
const I128_FLOAT_LIMIT: f64 = i128::MAX as f64;

/// Parses `raw` as an integer, falling back to a truncated float.
///
/// The result is an `i128` so that literals past the `i64` range still sum.
pub fn coerce_integer(raw: &str) -> Result<i128, UnparsableValue> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i128>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => float_to_integer(value).ok_or_else(|| unparsable(raw)),
        Err(_) => Err(unparsable(raw)),
    }
}

/// Like [`coerce_integer`], but only accepts values that fit a `u64`.
/// Negative counts are unparsable.
pub fn coerce_count(raw: &str) -> Result<u64, UnparsableValue> {
    let value = coerce_integer(raw)?;
    u64::try_from(value).map_err(|_| unparsable(raw))
}

/// Coerces a typed Polars cell into a count.
pub fn any_to_count(value: AnyValue<'_>) -> Result<u64, UnparsableValue> {
    match value {
        AnyValue::Int8(v) => non_negative(i128::from(v)),
        AnyValue::Int16(v) => non_negative(i128::from(v)),
        AnyValue::Int32(v) => non_negative(i128::from(v)),
        AnyValue::Int64(v) => non_negative(i128::from(v)),
        AnyValue::UInt8(v) => Ok(u64::from(v)),
        AnyValue::UInt16(v) => Ok(u64::from(v)),
        AnyValue::UInt32(v) => Ok(u64::from(v)),
        AnyValue::UInt64(v) => Ok(v),
        AnyValue::Float32(v) => float_to_integer(f64::from(v))
            .ok_or_else(|| unparsable(v))
            .and_then(non_negative),
        AnyValue::Float64(v) => float_to_integer(v)
            .ok_or_else(|| unparsable(v))
            .and_then(non_negative),
        AnyValue::String(s) => coerce_count(s),
        AnyValue::StringOwned(s) => coerce_count(&s),
        AnyValue::Null => Err(unparsable("")),
        other => Err(unparsable(other)),
    }
}

/// Converts a Polars text cell to a String; nulls become empty strings.
pub fn any_to_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

fn float_to_integer(value: f64) -> Option<i128> {
    if !value.is_finite() || value.abs() >= I128_FLOAT_LIMIT {
        return None;
    }
    Some(value.trunc() as i128)
}

fn non_negative(value: i128) -> Result<u64, UnparsableValue> {
    u64::try_from(value).map_err(|_| unparsable(value))
}

fn unparsable(value: impl ToString) -> UnparsableValue {
    UnparsableValue {
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals_pass_through() {
        assert_eq!(coerce_integer("120"), Ok(120));
        assert_eq!(coerce_integer(" 42 "), Ok(42));
        assert_eq!(coerce_integer("-7"), Ok(-7));
    }

    #[test]
    fn decimal_literals_truncate() {
        assert_eq!(coerce_integer("12.0"), Ok(12));
        assert_eq!(coerce_integer("12.9"), Ok(12));
        assert_eq!(coerce_integer("-3.5"), Ok(-3));
        assert_eq!(coerce_integer("1e3"), Ok(1000));
    }

    #[test]
    fn literals_past_i64_still_parse() {
        assert_eq!(
            coerce_integer("99999999999999999999"),
            Ok(99_999_999_999_999_999_999)
        );
        assert_eq!(coerce_integer("1e20"), Ok(100_000_000_000_000_000_000));
        assert!(coerce_integer("1e40").is_err());
        assert!(coerce_count("99999999999999999999").is_err());
    }

    #[test]
    fn garbage_is_unparsable() {
        for raw in ["", "  ", "n/a", "12abc", "NaN", "inf"] {
            assert!(coerce_integer(raw).is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn counts_reject_negatives() {
        assert_eq!(coerce_count("80"), Ok(80));
        assert_eq!(
            coerce_count("-1"),
            Err(UnparsableValue {
                value: "-1".to_string()
            })
        );
    }

    #[test]
    fn typed_cells_coerce() {
        assert_eq!(any_to_count(AnyValue::Int64(50)), Ok(50));
        assert_eq!(any_to_count(AnyValue::Float64(7.8)), Ok(7));
        assert_eq!(any_to_count(AnyValue::String("9")), Ok(9));
        assert!(any_to_count(AnyValue::Null).is_err());
        assert!(any_to_count(AnyValue::Int32(-2)).is_err());
    }

    #[test]
    fn text_cells_convert() {
        assert_eq!(any_to_text(AnyValue::String("Gallatin")), "Gallatin");
        assert_eq!(any_to_text(AnyValue::Null), "");
    }
}
