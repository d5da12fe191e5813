//! Conversion between scalar values of different types.
//!
//! Follows the `as` cast rules:
//!
//! - integer to integer wraps (keeps the low bits);
//! - float to integer truncates toward zero and saturates, `NaN` becomes `0`;
//! - integer to float rounds to the nearest representable value;
//! - `char` converts to any integer or float through its code point.
//!
//! Values of the same type always convert (by copy). Nothing else converts:
//! there is no conversion between `bool` and numbers, and numbers never
//! become strings.
//!
//! # Examples
//!
//! ```
//! use vt_reflect::convert::{can_convert, convert};
//! use vt_reflect::info::Typed;
//!
//! assert!(can_convert(i64::type_info(), u8::type_info()));
//! assert!(can_convert(char::type_info(), f32::type_info()));
//! assert!(!can_convert(bool::type_info(), i32::type_info()));
//! assert!(!can_convert(u8::type_info(), char::type_info()));
//!
//! let value = convert(&300_i64, u8::type_info()).unwrap();
//! assert_eq!(value.take::<u8>().unwrap(), 44);
//!
//! let value = convert(&-2.7_f64, i32::type_info()).unwrap();
//! assert_eq!(value.take::<i32>().unwrap(), -2);
//! ```

use crate::Reflect;
use crate::info::{ReflectKind, ScalarKind, TypeInfo};

/// Returns `true` if values of `from` can be converted into `to`.
pub fn can_convert(from: &TypeInfo, to: &TypeInfo) -> bool {
    from.ty_id() == to.ty_id() || can_convert_kind(from.kind(), to.kind())
}

/// Returns `true` if scalar kind `from` converts into kind `to`.
///
/// Only answers for distinct scalar kinds; identical types are handled by
/// [`can_convert`].
pub fn can_convert_kind(from: ReflectKind, to: ReflectKind) -> bool {
    let (ReflectKind::Scalar(from), ReflectKind::Scalar(to)) = (from, to) else {
        return false;
    };
    to.is_numeric() && (from.is_numeric() || from == ScalarKind::Char)
}

/// Converts `value` into the type described by `to`.
///
/// Returns `None` when the conversion is not allowed, see [`can_convert`].
pub fn convert(value: &dyn Reflect, to: &TypeInfo) -> Option<Box<dyn Reflect>> {
    if value.ty_id() == to.ty_id() {
        return value.reflect_clone().ok();
    }
    let TypeInfo::Scalar(target) = to else {
        return None;
    };
    if !can_convert_kind(value.reflect_kind(), to.kind()) {
        return None;
    }
    read_number(value)?.cast(target.scalar_kind())
}

// -----------------------------------------------------------------------------
// Number

/// A numeric value widened to the largest type of its class.
///
/// Widening is lossless, so casting the widened value gives the same result
/// as casting the original one.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

fn read_number(value: &dyn Reflect) -> Option<Number> {
    macro_rules! read {
        ($variant:ident, $wide:ty, $($ty:ty),+) => {
            $(
                if let Some(v) = value.downcast_ref::<$ty>() {
                    return Some(Number::$variant(*v as $wide));
                }
            )+
        };
    }

    read!(Signed, i128, i8, i16, i32, i64, i128, isize);
    read!(Unsigned, u128, u8, u16, u32, u64, u128, usize);
    read!(Float, f64, f32, f64);

    value
        .downcast_ref::<char>()
        .map(|c| Number::Unsigned(u32::from(*c) as u128))
}

impl Number {
    fn cast(self, kind: ScalarKind) -> Option<Box<dyn Reflect>> {
        macro_rules! cast {
            ($ty:ty) => {
                Box::new(match self {
                    Number::Signed(v) => v as $ty,
                    Number::Unsigned(v) => v as $ty,
                    Number::Float(v) => v as $ty,
                }) as Box<dyn Reflect>
            };
        }

        Some(match kind {
            ScalarKind::I8 => cast!(i8),
            ScalarKind::I16 => cast!(i16),
            ScalarKind::I32 => cast!(i32),
            ScalarKind::I64 => cast!(i64),
            ScalarKind::I128 => cast!(i128),
            ScalarKind::Isize => cast!(isize),
            ScalarKind::U8 => cast!(u8),
            ScalarKind::U16 => cast!(u16),
            ScalarKind::U32 => cast!(u32),
            ScalarKind::U64 => cast!(u64),
            ScalarKind::U128 => cast!(u128),
            ScalarKind::Usize => cast!(usize),
            ScalarKind::F32 => cast!(f32),
            ScalarKind::F64 => cast!(f64),
            ScalarKind::Bool | ScalarKind::Char | ScalarKind::String => return None,
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::{Number, can_convert, convert, read_number};
    use crate::Reflect;
    use crate::info::Typed;

    fn converted<T: Reflect + Typed>(value: &dyn Reflect) -> T {
        convert(value, T::type_info()).unwrap().take::<T>().unwrap()
    }

    #[test]
    fn widening_is_lossless() {
        assert_eq!(read_number(&-5_i8), Some(Number::Signed(-5)));
        assert_eq!(read_number(&u64::MAX), Some(Number::Unsigned(u64::MAX as u128)));
        assert_eq!(read_number(&1.5_f32), Some(Number::Float(1.5)));
        assert_eq!(read_number(&'A'), Some(Number::Unsigned(65)));
        assert_eq!(read_number(&true), None);
    }

    #[test]
    fn integer_casts_wrap() {
        assert_eq!(converted::<u8>(&-1_i32), 255);
        assert_eq!(converted::<i8>(&200_u16), -56);
        assert_eq!(converted::<i64>(&7_u8), 7);
        assert_eq!(converted::<u32>(&(u64::MAX)), u32::MAX);
    }

    #[test]
    fn float_casts_saturate() {
        assert_eq!(converted::<u8>(&300.9_f64), 255);
        assert_eq!(converted::<i16>(&-1e9_f32), i16::MIN);
        assert_eq!(converted::<i32>(&f64::NAN), 0);
        assert_eq!(converted::<f32>(&0.5_f64), 0.5);
        assert_eq!(converted::<f64>(&3_i32), 3.0);
    }

    #[test]
    fn char_to_numbers() {
        assert_eq!(converted::<u8>(&'a'), 97);
        assert_eq!(converted::<f64>(&'a'), 97.0);
        assert!(!can_convert(u32::type_info(), char::type_info()));
    }

    #[test]
    fn same_type_and_rejections() {
        assert_eq!(converted::<String>(&String::from("x")), "x");
        assert_eq!(converted::<Duration>(&Duration::from_secs(1)), Duration::from_secs(1));

        assert!(can_convert(String::type_info(), String::type_info()));
        assert!(!can_convert(i32::type_info(), String::type_info()));
        assert!(!can_convert(bool::type_info(), u8::type_info()));
        assert!(!can_convert(Duration::type_info(), u64::type_info()));
        assert!(!can_convert(<Option<u8>>::type_info(), u8::type_info()));

        assert!(convert(&1_u8, bool::type_info()).is_none());
        assert!(convert(&1_u8, String::type_info()).is_none());
    }
}
