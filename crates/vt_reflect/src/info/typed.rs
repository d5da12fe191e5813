use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by the
/// built-in impls, so field descriptors can be inspected without an instance.
///
/// ```
/// use vt_reflect::{derive::Reflect, info::{Typed, TypeInfo}};
///
/// #[derive(Reflect)]
/// struct A {
///     pub id: u64,
/// }
///
/// let info: &'static TypeInfo = <A as Typed>::type_info();
/// assert!(info.as_struct().is_ok());
/// ```
///
/// Manual implementations should store the info in a
/// [`NonGenericTypeInfoCell`](crate::impls::NonGenericTypeInfoCell) or a
/// [`GenericTypeInfoCell`](crate::impls::GenericTypeInfoCell).
pub trait Typed: TypePath {
    /// Returns the static type information.
    ///
    /// Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `Typed` type.
pub trait DynamicTyped {
    /// Returns the static type information of the underlying type.
    ///
    /// ```
    /// # use vt_reflect::{derive::Reflect, Reflect, info::DynamicTyped};
    /// #[derive(Reflect)]
    /// struct A {
    ///     pub id: u64,
    /// }
    ///
    /// let a = Box::new(A { id: 1 }) as Box<dyn Reflect>;
    /// assert_eq!(a.reflect_type_info().type_name(), "A");
    /// ```
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
