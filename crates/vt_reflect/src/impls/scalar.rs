use core::fmt;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{ApplyError, ReflectCloneError};
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_scalar {
    ($ty:ident, $kind:ident) => {
        impl_reflect_scalar!($ty, $kind, stringify!($ty), stringify!($ty), None, |v| *v == 0);
    };
    ($ty:ty, $kind:ident, $path:expr, $name:expr, $module:expr, |$v:ident| $is_zero:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<$ty>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Scalar($kind));

            fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
                match value.downcast_ref::<Self>() {
                    Some(value) => {
                        self.clone_from(value);
                        Ok(())
                    }
                    None => Err(ApplyError::mismatched_types(
                        value.reflect_type_path(),
                        Self::type_path(),
                    )),
                }
            }

            #[inline]
            fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
                Ok(Box::new(self.clone()))
            }

            #[inline]
            fn is_zero(&self) -> bool {
                let $v = self;
                $is_zero
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

impl_reflect_scalar!(i8, I8);
impl_reflect_scalar!(i16, I16);
impl_reflect_scalar!(i32, I32);
impl_reflect_scalar!(i64, I64);
impl_reflect_scalar!(i128, I128);
impl_reflect_scalar!(isize, Isize);
impl_reflect_scalar!(u8, U8);
impl_reflect_scalar!(u16, U16);
impl_reflect_scalar!(u32, U32);
impl_reflect_scalar!(u64, U64);
impl_reflect_scalar!(u128, U128);
impl_reflect_scalar!(usize, Usize);
// Negative zero has a sign bit and is not the zero value.
impl_reflect_scalar!(f32, F32, "f32", "f32", None, |v| v.to_bits() == 0);
impl_reflect_scalar!(f64, F64, "f64", "f64", None, |v| v.to_bits() == 0);
impl_reflect_scalar!(bool, Bool, "bool", "bool", None, |v| !*v);
impl_reflect_scalar!(char, Char, "char", "char", None, |v| *v == '\0');
impl_reflect_scalar!(
    String,
    String,
    "alloc::string::String",
    "String",
    Some("alloc::string"),
    |v| v.is_empty()
);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, ScalarKind, TypePath, Typed};
    use crate::ops::ApplyError;

    #[test]
    fn zero_values() {
        assert!(0_u8.is_zero());
        assert!(!7_i64.is_zero());
        assert!(0.0_f64.is_zero());
        assert!(!(-0.0_f32).is_zero());
        assert!(false.is_zero());
        assert!('\0'.is_zero());
        assert!(!'a'.is_zero());
        assert!(String::new().is_zero());
        assert!(!String::from("x").is_zero());
    }

    #[test]
    fn kinds_and_paths() {
        assert_eq!(3_u16.reflect_kind(), ReflectKind::Scalar(ScalarKind::U16));
        assert_eq!(<isize as TypePath>::type_path(), "isize");
        assert_eq!(String::type_info().type_name(), "String");
        assert_eq!(bool::module_path(), None);
    }

    #[test]
    fn apply_and_set() {
        let mut a = 1_i32;
        a.try_apply(&5_i32).unwrap();
        assert_eq!(a, 5);

        let err = a.try_apply(&5_i64).unwrap_err();
        assert!(matches!(err, ApplyError::MismatchedTypes { .. }));
        assert_eq!(err.to_string(), "cannot assign `i64` to `i32`");

        let mut s = String::from("old");
        s.set(Box::new(String::from("new"))).unwrap();
        assert_eq!(s, "new");
        assert!(s.set(Box::new(1_u8)).is_err());
    }

    #[test]
    fn clone_and_debug() {
        let value: Box<dyn Reflect> = 'x'.reflect_clone().unwrap();
        assert_eq!(value.downcast_ref::<char>(), Some(&'x'));
        assert_eq!(format!("{value:?}"), "'x'");
    }
}
