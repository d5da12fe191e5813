use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::{Pointer, Struct};

/// An immutable enumeration of ["kinds"](ReflectKind) of a reflected value.
///
/// Obtained via [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    Pointer(&'a dyn Pointer),
    Scalar(&'a dyn Reflect),
    Opaque(&'a dyn Reflect),
}

/// A mutable enumeration of ["kinds"](ReflectKind) of a reflected value.
///
/// Obtained via [`Reflect::reflect_mut`].
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Pointer(&'a mut dyn Pointer),
    Scalar(&'a mut dyn Reflect),
    Opaque(&'a mut dyn Reflect),
}

macro_rules! impl_kind_cast {
    ($name:ident, $variant:ident, $ret:ty) => {
        /// Casts to the specific view, failing on any other kind.
        #[inline]
        pub fn $name(self) -> Result<$ret, ReflectKindError> {
            match self {
                Self::$variant(value) => Ok(value),
                other => Err(ReflectKindError {
                    expected: stringify!($variant),
                    received: other.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    /// Returns the kind of the underlying value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(value) | Self::Opaque(value) => value.reflect_kind(),
        }
    }

    impl_kind_cast!(as_struct, Struct, &'a dyn Struct);
    impl_kind_cast!(as_pointer, Pointer, &'a dyn Pointer);
}

impl<'a> ReflectMut<'a> {
    /// Returns the kind of the underlying value.
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(value) | Self::Opaque(value) => value.reflect_kind(),
        }
    }

    impl_kind_cast!(as_struct, Struct, &'a mut dyn Struct);
    impl_kind_cast!(as_pointer, Pointer, &'a mut dyn Pointer);
}
