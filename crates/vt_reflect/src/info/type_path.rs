use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// A stable alternative to [`core::any::type_name`], used in error messages
/// and debug output of the mapping engine.
///
/// - [`type_path`]: the unique identifier of the type, with generics.
/// - [`type_name`]: type name without module path, may be duplicated.
/// - [`type_ident`]: the shortest name, without module path and generics.
/// - [`module_path`]: optional module path.
///
/// These names never carry a leading `::`.
///
/// # Implementation
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements this trait, and
/// the path can be pinned with `#[reflect(type_path = "...")]`:
///
/// ```
/// use vt_reflect::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "app::view::UserVo")]
/// struct UserVo {
///     pub name: String,
/// }
///
/// assert_eq!(UserVo::type_path(), "app::view::UserVo");
/// assert_eq!(UserVo::type_name(), "UserVo");
/// assert_eq!(UserVo::module_path(), Some("app::view"));
/// ```
///
/// Manual implementations are straightforward for non-generic types:
///
/// ```
/// use vt_reflect::info::TypePath;
///
/// struct Foo;
///
/// impl TypePath for Foo {
///     fn type_path() -> &'static str { "my_crate::foo::Foo" }
///     fn type_name() -> &'static str { "Foo" }
///     fn type_ident() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate::foo") }
/// }
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics of the type.
    ///
    /// For `Option<Box<u8>>`, this is `"core::option::Option<alloc::boxed::Box<u8>>"`.
    fn type_path() -> &'static str;

    /// Returns a short path to the type, generics included.
    ///
    /// For `Option<Box<u8>>`, this is `"Option<Box<u8>>"`.
    fn type_name() -> &'static str;

    /// Returns the short name of the type, without generics.
    ///
    /// For `Option<Box<u8>>`, this is `"Option"`.
    fn type_ident() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Object-safe access to [`TypePath`], for values behind `dyn Reflect`.
///
/// ```
/// use vt_reflect::{info::DynamicTypePath, Reflect};
///
/// let value: &dyn Reflect = &Some(3_u16);
/// assert_eq!(value.reflect_type_path(), "core::option::Option<u16>");
/// assert_eq!(value.reflect_type_name(), "Option<u16>");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a type, with lazily resolved names.
///
/// Equality and hashing only look at the [`TypeId`], the names are read
/// through the type's [`TypePath`] on demand.
///
/// ```
/// use vt_reflect::info::Type;
///
/// let ty = Type::of::<Option<String>>();
/// assert!(ty.is::<Option<String>>());
/// assert_eq!(ty.name(), "Option<String>");
/// assert_eq!(format!("{ty:?}"), "core::option::Option<alloc::string::String>");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
    name: fn() -> &'static str,
}

impl Type {
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: T::type_path,
            name: T::type_name,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns `true` if this is the type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.name)()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `ty` and the accessors derived from it.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().id() == ::core::any::TypeId::of::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }
    };
}

pub(crate) use impl_type_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{DynamicTypePath, Type, TypePath};

    struct Local;

    impl TypePath for Local {
        fn type_path() -> &'static str {
            "app::inner::Local"
        }
        fn type_name() -> &'static str {
            "Local"
        }
        fn type_ident() -> &'static str {
            "Local"
        }
        fn module_path() -> Option<&'static str> {
            Some("app::inner")
        }
    }

    #[test]
    fn manual_impl() {
        assert_eq!(Local.reflect_type_path(), "app::inner::Local");
        assert_eq!(Local.reflect_type_name(), "Local");
        assert_eq!(Local::module_path(), Some("app::inner"));
        assert_eq!(u8::module_path(), None);
    }

    #[test]
    fn type_equality_uses_type_id() {
        assert_eq!(Type::of::<Local>(), Type::of::<Local>());
        assert_ne!(Type::of::<Local>(), Type::of::<u8>());
        assert_eq!(format!("{:?}", Type::of::<Local>()), "app::inner::Local");
    }
}
