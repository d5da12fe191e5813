use core::any::TypeId;

use crate::info::{DefaultFn, Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Pointer;

/// Compile-time information of a pointer-like handle.
///
/// Records the pointee type, so the pointee's kind is known even when the
/// handle is currently null, and whether the handle can be null at all.
///
/// ```
/// use vt_reflect::info::Typed;
///
/// let info = <Option<u32>>::type_info().as_pointer().unwrap();
/// assert!(info.is_nullable());
/// assert!(info.pointee_is::<u32>());
///
/// let info = <Box<String>>::type_info().as_pointer().unwrap();
/// assert!(!info.is_nullable());
/// assert_eq!(info.pointee_info().type_name(), "String");
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_id: TypeId,
    pointee_info: fn() -> &'static TypeInfo,
    nullable: bool,
    default_fn: Option<DefaultFn>,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Create a new [`PointerInfo`] for handle `T` pointing at `P`.
    #[inline]
    pub const fn new<T: Pointer + TypePath, P: Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<T>(),
            pointee_id: TypeId::of::<P>(),
            pointee_info: P::type_info,
            nullable,
            default_fn: None,
        }
    }

    /// Registers a default constructor.
    #[inline]
    pub const fn with_default_fn(mut self, default_fn: DefaultFn) -> Self {
        self.default_fn = Some(default_fn);
        self
    }

    /// Returns the registered default constructor.
    #[inline]
    pub const fn default_fn(&self) -> Option<DefaultFn> {
        self.default_fn
    }

    /// Returns `true` if the handle may hold no value.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the [`TypeInfo`] of the pointee type.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }

    /// Returns the `TypeId` of the pointee type.
    #[inline]
    pub const fn pointee_id(&self) -> TypeId {
        self.pointee_id
    }

    /// Check if the pointee type is `P`.
    #[inline]
    pub fn pointee_is<P: core::any::Any>(&self) -> bool {
        self.pointee_id == TypeId::of::<P>()
    }
}
