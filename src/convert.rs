use tracing::trace;

use crate::errors::ParseError;
use crate::kind::Kind;
use crate::value::Value;

/// The built-in conversion registry.
///
/// Dispatches `value` to the parse function for `kind` and returns the
/// converted result, or `None` when the kind has no conversion or the
/// text does not parse. Never panics. This is the converter the default
/// entry points use; [`crate::bind_tag_with`] accepts any replacement
/// with the same signature.
pub fn convert(value: &str, kind: Kind) -> Option<Value> {
    let parsed = match kind {
        Kind::Str => parse_str(value),
        Kind::I8 => parse_i8(value),
        Kind::I16 => parse_i16(value),
        Kind::Int => parse_int(value),
        Kind::I32 => parse_i32(value),
        Kind::I64 => parse_i64(value),
        Kind::F32 => parse_f32(value),
        Kind::F64 => parse_f64(value),
        Kind::Bool => parse_bool(value),
        Kind::Unsupported => Err(ParseError::UnsupportedKind(kind)),
    };
    match parsed {
        Ok(converted) => Some(converted),
        Err(err) => {
            trace!(%kind, value, error = %err, "conversion declined");
            None
        }
    }
}

fn parse_str(v: &str) -> Result<Value, ParseError> {
    Ok(Value::Str(v.to_owned()))
}

fn parse_i8(v: &str) -> Result<Value, ParseError> {
    Ok(Value::I8(v.parse()?))
}

fn parse_i16(v: &str) -> Result<Value, ParseError> {
    Ok(Value::I16(v.parse()?))
}

// Default-width integers parse with 64-bit range, then narrow to the
// slot. The narrowing is lossless on 64-bit targets.
fn parse_int(v: &str) -> Result<Value, ParseError> {
    let wide: i64 = v.parse()?;
    let narrowed = isize::try_from(wide).map_err(|_| ParseError::OutOfRange(Kind::Int))?;
    Ok(Value::Int(narrowed))
}

fn parse_i32(v: &str) -> Result<Value, ParseError> {
    Ok(Value::I32(v.parse()?))
}

fn parse_i64(v: &str) -> Result<Value, ParseError> {
    Ok(Value::I64(v.parse()?))
}

fn parse_f32(v: &str) -> Result<Value, ParseError> {
    Ok(Value::F32(v.parse()?))
}

fn parse_f64(v: &str) -> Result<Value, ParseError> {
    Ok(Value::F64(v.parse()?))
}

fn parse_bool(v: &str) -> Result<Value, ParseError> {
    match v {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(Value::Bool(true)),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(Value::Bool(false)),
        other => Err(ParseError::Bool(other.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_string_is_identity() {
        assert_eq!(
            convert("hello world", Kind::Str),
            Some(Value::Str("hello world".to_owned()))
        );
        // Even text that looks like another kind stays text.
        assert_eq!(convert("42", Kind::Str), Some(Value::Str("42".to_owned())));
    }

    #[test]
    fn test_integer_widths_parse_into_their_own_variant() {
        assert_eq!(convert("-128", Kind::I8), Some(Value::I8(-128)));
        assert_eq!(convert("127", Kind::I8), Some(Value::I8(127)));
        assert_eq!(convert("-32768", Kind::I16), Some(Value::I16(-32768)));
        assert_eq!(convert("32767", Kind::I16), Some(Value::I16(32767)));
        assert_eq!(convert("9000", Kind::Int), Some(Value::Int(9000)));
        assert_eq!(
            convert("-2147483648", Kind::I32),
            Some(Value::I32(i32::MIN))
        );
        assert_eq!(
            convert("9223372036854775807", Kind::I64),
            Some(Value::I64(i64::MAX))
        );
    }

    #[test]
    fn test_integer_range_edges_fail() {
        assert_eq!(convert("128", Kind::I8), None);
        assert_eq!(convert("-129", Kind::I8), None);
        assert_eq!(convert("32768", Kind::I16), None);
        assert_eq!(convert("2147483648", Kind::I32), None);
        assert_eq!(convert("9223372036854775808", Kind::I64), None);
        assert_eq!(convert("9223372036854775808", Kind::Int), None);
    }

    #[test]
    fn test_non_numeric_text_fails_integer_kinds() {
        for kind in [Kind::I8, Kind::I16, Kind::Int, Kind::I32, Kind::I64] {
            assert_eq!(convert("wrong", kind), None);
            assert_eq!(convert("1.5", kind), None);
            assert_eq!(convert("0x1", kind), None);
            assert_eq!(convert("", kind), None);
        }
    }

    #[test]
    fn test_floats_accept_decimal_and_exponential_forms() {
        assert_eq!(convert("1.123", Kind::F32), Some(Value::F32(1.123)));
        assert_eq!(convert("1.123456", Kind::F64), Some(Value::F64(1.123456)));
        assert_eq!(convert("-2.5e3", Kind::F64), Some(Value::F64(-2500.0)));
        assert_eq!(convert("1e-2", Kind::F32), Some(Value::F32(0.01)));
        assert_eq!(convert("not-a-float", Kind::F32), None);
        assert_eq!(convert("1.2.3", Kind::F64), None);
    }

    #[test]
    fn test_bool_accepts_exactly_the_canonical_spellings() {
        for text in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(convert(text, Kind::Bool), Some(Value::Bool(true)));
        }
        for text in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(convert(text, Kind::Bool), Some(Value::Bool(false)));
        }
        for text in ["yes", "no", "tRuE", " true", "true ", "2", ""] {
            assert_eq!(convert(text, Kind::Bool), None);
        }
    }

    #[test]
    fn test_unsupported_kind_is_declined_not_panicked() {
        assert_eq!(convert("0x1", Kind::Unsupported), None);
        assert_eq!(convert("anything", Kind::Unsupported), None);
    }

    proptest! {
        #[test]
        fn prop_in_range_integers_round_trip(n: i8) {
            prop_assert_eq!(convert(&n.to_string(), Kind::I8), Some(Value::I8(n)));
        }

        #[test]
        fn prop_out_of_i16_range_is_declined(n in i64::from(i16::MAX) + 1..=i64::MAX) {
            prop_assert_eq!(convert(&n.to_string(), Kind::I16), None);
            // Still fine at full width.
            prop_assert_eq!(convert(&n.to_string(), Kind::I64), Some(Value::I64(n)));
        }

        #[test]
        fn prop_alphabetic_text_never_converts_numerically(s in "[a-zA-Z]+") {
            for kind in [Kind::I8, Kind::I16, Kind::Int, Kind::I32, Kind::I64, Kind::F64] {
                let special_float = s.eq_ignore_ascii_case("inf")
                    || s.eq_ignore_ascii_case("infinity")
                    || s.eq_ignore_ascii_case("nan");
                if kind == Kind::F64 && special_float {
                    continue; // spellings the stdlib float parser accepts
                }
                prop_assert_eq!(convert(&s, kind), None);
            }
        }
    }
}
