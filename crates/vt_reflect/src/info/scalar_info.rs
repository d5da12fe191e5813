use crate::Reflect;
use crate::info::{DefaultFn, ScalarKind, Type, TypePath, default_boxed, impl_type_fn};

/// Compile-time information of a primitive value or string.
///
/// Scalars always have a default constructor (their zero value).
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
    default_fn: DefaultFn,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    /// Create a new [`ScalarInfo`].
    #[inline]
    pub fn new<T: Reflect + TypePath + Default>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
            default_fn: default_boxed::<T>,
        }
    }

    /// Returns the scalar kind.
    #[inline]
    pub const fn scalar_kind(&self) -> ScalarKind {
        self.kind
    }

    /// Returns the default constructor.
    #[inline]
    pub const fn default_fn(&self) -> Option<DefaultFn> {
        Some(self.default_fn)
    }
}
