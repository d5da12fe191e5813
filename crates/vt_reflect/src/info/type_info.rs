use core::{error, fmt};

use crate::Reflect;
use crate::info::{OpaqueInfo, PointerInfo, ScalarInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ScalarKind

/// The primitive value kinds that take part in scalar conversion.
///
/// Every integer width is a distinct kind, so an `i32` field and an `i64`
/// field do not share a kind even though one converts to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    String,
}

impl ScalarKind {
    /// Returns `true` for signed and unsigned integers.
    #[inline]
    pub const fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    /// Returns `true` for signed integers.
    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128 | Self::Isize
        )
    }

    /// Returns `true` for unsigned integers.
    #[inline]
    pub const fn is_unsigned(self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::U128 | Self::Usize
        )
    }

    /// Returns `true` for `f32` and `f64`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for integers and floats.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// The Rust spelling of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`] or
/// [`TypeInfo::kind`]. Two kinds are equal only when identical.
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A record with named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// A handle to another value, see [`Pointer`](crate::ops::Pointer).
    Pointer,
    /// A primitive value or a string.
    Scalar(ScalarKind),
    /// A value whose internals are not reflected.
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Pointer => f.pad("Pointer"),
            Self::Scalar(kind) => write!(f, "Scalar({kind})"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected kind.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: &'static str,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// DefaultFn

/// Constructor of a type's default value.
///
/// Registered on the type info so a nullable handle can allocate a backing
/// value without knowing the pointee type statically.
pub type DefaultFn = fn() -> Box<dyn Reflect>;

/// Boxes `T::default()`, usable as a [`DefaultFn`].
#[inline]
pub fn default_boxed<T: Default + Reflect>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information of a reflected type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info) or
/// [`DynamicTyped::reflect_type_info`](crate::info::DynamicTyped::reflect_type_info).
/// The mapping engine reads field descriptors from [`StructInfo`] and pointee
/// types from [`PointerInfo`].
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Pointer(PointerInfo),
    Scalar(ScalarInfo),
    Opaque(OpaqueInfo),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: stringify!($kind),
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns `true` if the described type is a struct.
    #[inline]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Returns `true` if the described type is a pointer.
    #[inline]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Returns the underlying [`Type`] metadata.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Scalar(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] of the described type.
    ///
    /// ```
    /// use vt_reflect::info::{Typed, ReflectKind, ScalarKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Scalar(ScalarKind::I32));
    /// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Pointer);
    /// ```
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(info) => ReflectKind::Scalar(info.scalar_kind()),
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the registered default constructor, if any.
    pub const fn default_fn(&self) -> Option<DefaultFn> {
        match self {
            Self::Struct(info) => info.default_fn(),
            Self::Pointer(info) => info.default_fn(),
            Self::Scalar(info) => info.default_fn(),
            Self::Opaque(info) => info.default_fn(),
        }
    }

    /// Builds a default value of the described type.
    ///
    /// Returns `None` when the type registered no default constructor.
    ///
    /// ```
    /// use vt_reflect::info::Typed;
    ///
    /// let value = u16::type_info().default_value().unwrap();
    /// assert_eq!(value.take::<u16>().unwrap(), 0);
    /// ```
    #[inline]
    pub fn default_value(&self) -> Option<Box<dyn Reflect>> {
        self.default_fn().map(|f| f())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ReflectKind, ScalarKind};
    use crate::info::Typed;

    #[test]
    fn kind_display() {
        assert_eq!(ReflectKind::Struct.to_string(), "Struct");
        assert_eq!(ReflectKind::Scalar(ScalarKind::U8).to_string(), "Scalar(u8)");
        assert_eq!(format!("{:>6}", ScalarKind::Char), "  char");
    }

    #[test]
    fn scalar_classes() {
        assert!(ScalarKind::Isize.is_signed());
        assert!(ScalarKind::U128.is_unsigned());
        assert!(ScalarKind::F32.is_numeric());
        assert!(!ScalarKind::Char.is_numeric());
        assert!(!ScalarKind::Bool.is_integer());
        assert_ne!(ReflectKind::Scalar(ScalarKind::I32), ReflectKind::Scalar(ScalarKind::I64));
    }

    #[test]
    fn cast_error() {
        let err = String::type_info().as_struct().unwrap_err();
        assert_eq!(err.expected, "Struct");
        assert_eq!(err.received, ReflectKind::Scalar(ScalarKind::String));
        assert_eq!(
            err.to_string(),
            "reflect kind mismatch: expected Struct, received Scalar(String)"
        );
    }
}
