use core::fmt;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, clone_value, concat};
use crate::info::{PointerInfo, TypeInfo, TypePath, Typed, default_boxed};
use crate::ops::{ApplyError, Pointer, ReflectCloneError};
use crate::reflection::impl_reflect_cast_fn;

fn expect_pointer_info(info: &'static TypeInfo) -> &'static PointerInfo {
    match info {
        TypeInfo::Pointer(info) => info,
        _ => unreachable!("pointer types always register `PointerInfo`"),
    }
}

// -----------------------------------------------------------------------------
// Option

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::Pointer(
                PointerInfo::new::<Self, T>(true).with_default_fn(default_boxed::<Self>),
            )
        })
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    impl_reflect_cast_fn!(Pointer);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        let Some(value) = value.downcast_ref::<Self>() else {
            return Err(ApplyError::mismatched_types(
                value.reflect_type_path(),
                Self::type_path(),
            ));
        };
        match value {
            None => *self = None,
            Some(src) => match self {
                Some(dst) => dst.try_apply(src)?,
                None => *self = Some(clone_value(src)?),
            },
        }
        Ok(())
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let cloned = match self {
            Some(value) => Some(clone_value(value)?),
            None => None,
        };
        Ok(Box::new(cloned))
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Reflect + Typed> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(Reflect::as_reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(Reflect::as_reflect_mut)
    }

    fn replace_pointee(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Some(value.take::<T>()?);
        Ok(())
    }

    #[inline]
    fn pointer_info(&self) -> &'static PointerInfo {
        expect_pointer_info(Self::type_info())
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: TypePath> TypePath for Box<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::boxed::Box<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Box<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Box"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::boxed")
    }
}

impl<T: Reflect + Typed> Typed for Box<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Pointer(PointerInfo::new::<Self, T>(false)))
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    impl_reflect_cast_fn!(Pointer);

    fn try_apply(&mut self, value: &dyn Reflect) -> Result<(), ApplyError> {
        match value.downcast_ref::<Self>() {
            Some(value) => (**self).try_apply(&**value),
            None => Err(ApplyError::mismatched_types(
                value.reflect_type_path(),
                Self::type_path(),
            )),
        }
    }

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        Ok(Box::new(Box::new(clone_value(&**self)?)))
    }

    /// A box always points at a value, so it is never zero.
    #[inline]
    fn is_zero(&self) -> bool {
        false
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).reflect_debug(f)
    }
}

impl<T: Reflect + Typed> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some((**self).as_reflect())
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some((**self).as_reflect_mut())
    }

    fn replace_pointee(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        **self = value.take::<T>()?;
        Ok(())
    }

    #[inline]
    fn pointer_info(&self) -> &'static PointerInfo {
        expect_pointer_info(Self::type_info())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ReflectKind, ScalarKind, TypePath, Typed};
    use crate::ops::{Pointer, ReflectRef};

    #[test]
    fn option_paths_and_info() {
        assert_eq!(<Option<u8>>::type_path(), "core::option::Option<u8>");
        assert_eq!(<Option<Box<i32>>>::type_name(), "Option<Box<i32>>");

        let info = <Option<String>>::type_info().as_pointer().unwrap();
        assert!(info.is_nullable());
        assert_eq!(
            info.pointee_info().kind(),
            ReflectKind::Scalar(ScalarKind::String)
        );
    }

    #[test]
    fn option_zero_and_apply() {
        let mut dst: Option<u32> = None;
        assert!(dst.is_zero());
        assert!(!Some(0_u32).is_zero());

        dst.try_apply(&Some(9_u32)).unwrap();
        assert_eq!(dst, Some(9));

        dst.try_apply(&Some(10_u32)).unwrap();
        assert_eq!(dst, Some(10));

        dst.try_apply(&None::<u32>).unwrap();
        assert_eq!(dst, None);

        assert!(dst.try_apply(&Some(1_u64)).is_err());
    }

    #[test]
    fn option_pointer_ops() {
        let mut value: Option<i16> = None;
        assert!(value.is_null());
        assert!(value.pointee().is_none());

        let mut backing = value.new_pointee().unwrap();
        backing.set(Box::new(4_i16)).unwrap();
        value.replace_pointee(backing).unwrap();
        assert_eq!(value, Some(4));

        *value.pointee_mut().unwrap().downcast_mut::<i16>().unwrap() += 1;
        assert_eq!(value, Some(5));

        assert!(value.replace_pointee(Box::new(1_u8)).is_err());
        assert_eq!(format!("{:?}", value.as_reflect()), "Some(5)");
    }

    #[test]
    fn box_is_never_null_or_zero() {
        let mut value = Box::new(0_u8);
        assert!(!value.is_zero());
        assert!(!value.is_null());
        assert!(!Box::<u8>::type_info().as_pointer().unwrap().is_nullable());

        value.try_apply(&Box::new(3_u8)).unwrap();
        assert_eq!(*value, 3);

        let ReflectRef::Pointer(ptr) = value.reflect_ref() else {
            panic!("expected a pointer");
        };
        assert_eq!(ptr.pointee().unwrap().downcast_ref::<u8>(), Some(&3));

        let copy = value.reflect_clone().unwrap().take::<Box<u8>>().unwrap();
        assert_eq!(*copy, 3);
    }
}
