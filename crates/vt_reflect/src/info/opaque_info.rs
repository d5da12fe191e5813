use crate::Reflect;
use crate::info::{DefaultFn, Type, TypePath, impl_type_fn};

/// Metadata for types whose internals are opaque to the reflection system.
///
/// Such values are copied whole and compared against their zero value, for
/// example `std::time::SystemTime` or `core::time::Duration`.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    default_fn: Option<DefaultFn>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: Reflect + TypePath>() -> Self {
        Self {
            ty: Type::of::<T>(),
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
}
