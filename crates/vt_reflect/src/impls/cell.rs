//! Containers for static storage of type information.
//!
//! This is usually used to implement [`Typed`](crate::info::Typed) and
//! [`TypePath`](crate::info::TypePath).
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] holding one [`TypeInfo`].
//! - [`GenericTypeInfoCell`] and [`GenericTypePathCell`]: the `static CELL`
//!   inside a generic function is shared by every instantiation, so these
//!   cells map a [`TypeId`] to a leaked value behind a [`RwLock`].

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::hash::{FixedHashState, HashMap};
use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;

    pub trait TypedProperty: Send + Sync + 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

/// Container for static storage of non-generic type information.
///
/// See [`NonGenericTypeInfoCell`].
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use vt_reflect::derive::Reflect;
/// use vt_reflect::impls::NonGenericTypeInfoCell;
/// use vt_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     pub a: u32,
/// }
///
/// fn manual_info() -> &'static TypeInfo {
///     static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///     CELL.get_or_init(|| TypeInfo::Struct(
///         StructInfo::new::<A>(&[NamedField::new::<u32>("a")])
///     ))
/// }
///
/// let info = manual_info().as_struct().unwrap();
/// assert_eq!(info.field("a").unwrap().type_path(), "u32");
/// assert!(core::ptr::eq(manual_info(), manual_info()));
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns a reference to the value stored in the cell.
    ///
    /// If the cell is empty, the value is generated from `f`.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<HashMap<TypeId, &'static T>>);

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use vt_reflect::{derive::Reflect, Reflect};
/// use vt_reflect::impls::GenericTypeInfoCell;
/// use vt_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
///
/// #[derive(Reflect)]
/// struct Wrapper<T> {
///     pub inner: T,
/// }
///
/// fn manual_info<T: Reflect + Typed>() -> &'static TypeInfo {
///     static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///     CELL.get_or_insert::<Wrapper<T>>(|| TypeInfo::Struct(
///         StructInfo::new::<Wrapper<T>>(&[NamedField::new::<T>("inner")])
///     ))
/// }
///
/// let info = manual_info::<u64>().as_struct().unwrap();
/// assert_eq!(info.field_at(0).unwrap().type_path(), "u64");
///
/// let info = manual_info::<u8>().as_struct().unwrap();
/// assert_eq!(info.field_at(0).unwrap().type_path(), "u8");
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for static storage of type paths with generics.
///
/// ## Example
///
/// ```
/// use vt_reflect::impls::{concat, GenericTypePathCell};
/// use vt_reflect::info::TypePath;
///
/// fn page_path<T: TypePath>() -> &'static str {
///     static CELL: GenericTypePathCell = GenericTypePathCell::new();
///     CELL.get_or_insert::<Vec<T>>(|| concat(&["app::Page<", T::type_path(), ">"]))
/// }
///
/// assert_eq!(page_path::<i32>(), "app::Page<i32>");
/// assert_eq!(page_path::<u8>(), "app::Page<u8>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(HashMap::with_hasher(FixedHashState)))
    }

    /// Returns a reference to the value stored for the type `G`.
    ///
    /// If there is no entry found, a new one will be generated from `f`.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}

/// Concatenates string pieces, used to build generic type paths.
#[inline(never)]
pub fn concat(pieces: &[&str]) -> String {
    let len = pieces.iter().map(|s| s.len()).sum();
    let mut out = String::with_capacity(len);
    pieces.iter().for_each(|s| out.push_str(s));
    out
}
