//! Binding of `default` annotation literals into field values.

use core::time::Duration;

use vt_reflect::Reflect;
use vt_reflect::info::{NamedField, ReflectKind, ScalarKind};

use crate::BindError;

// -----------------------------------------------------------------------------
// DefaultBinder

/// Parses a literal into a field value.
///
/// Used by the `DEFAULT_VALUE` pass, see [`Mapper::with_binder`](crate::Mapper::with_binder).
/// `target` is the field value itself, or a freshly allocated pointee when
/// the field is an empty `Option`.
///
/// # Examples
///
/// ```
/// use vt_map::{BindError, DefaultBinder};
/// use vt_map::reflect::{Reflect, info::NamedField};
///
/// /// Binds every literal as its length.
/// struct LenBinder;
///
/// impl DefaultBinder for LenBinder {
///     fn bind(
///         &self,
///         literal: &str,
///         target: &mut dyn Reflect,
///         field: &NamedField,
///     ) -> Result<(), BindError> {
///         target
///             .set(Box::new(literal.len()))
///             .map_err(|_| BindError::Unsupported {
///                 field: field.name(),
///                 type_path: field.type_path(),
///             })
///     }
/// }
/// ```
pub trait DefaultBinder {
    fn bind(
        &self,
        literal: &str,
        target: &mut dyn Reflect,
        field: &NamedField,
    ) -> Result<(), BindError>;
}

// -----------------------------------------------------------------------------
// LiteralBinder

/// The bundled [`DefaultBinder`].
///
/// - integers and floats: decimal `FromStr` of the exact type, overflow is
///   an error;
/// - `bool`: `1 t T TRUE true True` and `0 f F FALSE false False`;
/// - `char`: exactly one character;
/// - `String`: the literal verbatim;
/// - `Duration`: a sequence of decimal numbers with a unit suffix, such as
///   `"300ms"`, `"1.5h"` or `"2h45m"`. Valid units are `ns`, `us` (or `µs`),
///   `ms`, `s`, `m` and `h`.
///
/// Other types are [unsupported](BindError::Unsupported).
///
/// ```
/// use core::time::Duration;
/// use vt_map::{DefaultBinder, LiteralBinder};
/// use vt_map::reflect::info::NamedField;
///
/// let field = NamedField::new::<Duration>("timeout");
/// let mut timeout = Duration::ZERO;
///
/// LiteralBinder.bind("1m30s", &mut timeout, &field).unwrap();
/// assert_eq!(timeout, Duration::from_secs(90));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralBinder;

impl DefaultBinder for LiteralBinder {
    fn bind(
        &self,
        literal: &str,
        target: &mut dyn Reflect,
        field: &NamedField,
    ) -> Result<(), BindError> {
        let type_path = target.reflect_type_path();
        let parse_error = |reason: String| BindError::Parse {
            field: field.name(),
            literal: literal.to_owned(),
            type_path,
            reason,
        };
        let unsupported = || BindError::Unsupported {
            field: field.name(),
            type_path,
        };

        let value: Box<dyn Reflect> = match target.reflect_kind() {
            ReflectKind::Scalar(kind) => parse_scalar(kind, literal).map_err(parse_error)?,
            ReflectKind::Opaque if target.is::<Duration>() => {
                Box::new(parse_duration(literal).map_err(parse_error)?)
            }
            _ => return Err(unsupported()),
        };

        target.set(value).map_err(|_| unsupported())
    }
}

fn parse_scalar(kind: ScalarKind, literal: &str) -> Result<Box<dyn Reflect>, String> {
    macro_rules! parse {
        ($ty:ty) => {
            Box::new(literal.parse::<$ty>().map_err(|e| e.to_string())?) as Box<dyn Reflect>
        };
    }

    let value: Box<dyn Reflect> = match kind {
        ScalarKind::I8 => parse!(i8),
        ScalarKind::I16 => parse!(i16),
        ScalarKind::I32 => parse!(i32),
        ScalarKind::I64 => parse!(i64),
        ScalarKind::I128 => parse!(i128),
        ScalarKind::Isize => parse!(isize),
        ScalarKind::U8 => parse!(u8),
        ScalarKind::U16 => parse!(u16),
        ScalarKind::U32 => parse!(u32),
        ScalarKind::U64 => parse!(u64),
        ScalarKind::U128 => parse!(u128),
        ScalarKind::Usize => parse!(usize),
        ScalarKind::F32 => parse!(f32),
        ScalarKind::F64 => parse!(f64),
        ScalarKind::Bool => Box::new(parse_bool(literal)?),
        ScalarKind::Char => {
            let mut chars = literal.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Box::new(c),
                _ => return Err("expected exactly one character".to_owned()),
            }
        }
        ScalarKind::String => Box::new(literal.to_owned()),
    };
    Ok(value)
}

fn parse_bool(literal: &str) -> Result<bool, String> {
    match literal {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err("invalid boolean".to_owned()),
    }
}

// -----------------------------------------------------------------------------
// Duration

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Fraction digits beyond this are dropped, they are below a nanosecond.
const MAX_FRACTION_DIGITS: usize = 18;

fn unit_scale(unit: &str) -> Option<u128> {
    Some(match unit {
        "ns" => 1,
        "us" | "µs" | "μs" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SEC,
        "m" => 60 * NANOS_PER_SEC,
        "h" => 3600 * NANOS_PER_SEC,
        _ => return None,
    })
}

fn split_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

/// Parses a duration string such as `"1h15m30.5s"`.
fn parse_duration(literal: &str) -> Result<Duration, String> {
    let invalid = || format!("invalid duration `{literal}`");

    let mut rest = literal.strip_prefix('+').unwrap_or(literal);
    if rest.starts_with('-') {
        return Err("negative durations are not supported".to_owned());
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (int_part, tail) = split_digits(rest);
        let (frac_part, tail) = match tail.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", tail),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = tail
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        if unit.is_empty() {
            return Err(format!("missing unit in duration `{literal}`"));
        }
        let scale = unit_scale(unit)
            .ok_or_else(|| format!("unknown unit `{unit}` in duration `{literal}`"))?;

        let int: u128 = match int_part {
            "" => 0,
            digits => digits.parse().map_err(|_| invalid())?,
        };
        let mut nanos = int.checked_mul(scale).ok_or_else(invalid)?;

        let frac_part = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
        if !frac_part.is_empty() {
            let frac: u128 = frac_part.parse().map_err(|_| invalid())?;
            nanos += frac * scale / 10_u128.pow(frac_part.len() as u32);
        }

        total = total.checked_add(nanos).ok_or_else(invalid)?;
        rest = tail;
    }

    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| format!("duration `{literal}` is out of range"))
}

#[cfg(test)]
mod tests {
    use core::time::Duration;
    use std::time::SystemTime;

    use vt_reflect::info::NamedField;

    use super::{DefaultBinder, LiteralBinder, parse_duration};
    use crate::BindError;

    fn bind<T>(literal: &str, mut value: T) -> Result<T, BindError>
    where
        T: vt_reflect::Reflect + vt_reflect::info::Typed,
    {
        let field = NamedField::new::<T>("field");
        LiteralBinder.bind(literal, &mut value, &field)?;
        Ok(value)
    }

    #[test]
    fn numbers() {
        assert_eq!(bind("18", 0_u32).unwrap(), 18);
        assert_eq!(bind("-7", 0_i16).unwrap(), -7);
        assert_eq!(bind("+7", 0_i64).unwrap(), 7);
        assert_eq!(bind("2.5", 0_f32).unwrap(), 2.5);

        let err = bind("300", 0_u8).unwrap_err();
        assert!(matches!(
            err,
            BindError::Parse { field: "field", type_path: "u8", .. }
        ));
        assert!(bind("1.0", 0_i32).is_err());
        assert!(bind("", 0_u64).is_err());
    }

    #[test]
    fn bool_char_string() {
        for literal in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(bind(literal, false).unwrap());
        }
        for literal in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!bind(literal, true).unwrap());
        }
        assert!(bind("yes", false).is_err());

        assert_eq!(bind("é", 'a').unwrap(), 'é');
        assert!(bind("ab", 'a').is_err());

        assert_eq!(bind("guest, user", String::new()).unwrap(), "guest, user");
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration("1500ms").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration(".5us").unwrap(), Duration::from_nanos(500));
        assert_eq!(parse_duration("10µs").unwrap(), Duration::from_micros(10));
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);

        assert!(parse_duration("").is_err());
        assert!(parse_duration("5").is_err());
        assert!(parse_duration("3d").is_err());
        assert!(parse_duration("-1s").is_err());
        assert!(parse_duration("1.s.").is_err());

        assert_eq!(bind("250ms", Duration::ZERO).unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn unsupported() {
        let err = bind("2024-01-01", SystemTime::UNIX_EPOCH).unwrap_err();
        assert_eq!(
            err,
            BindError::Unsupported {
                field: "field",
                type_path: "std::time::SystemTime",
            }
        );
        assert!(bind("1", None::<u8>).is_err());
    }
}
