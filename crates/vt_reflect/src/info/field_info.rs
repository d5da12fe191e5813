use core::any::{Any, TypeId};

use crate::info::{Annotations, TypeInfo, Typed, impl_annotations_fn};

// -----------------------------------------------------------------------------
// NamedField

/// Descriptor of a named struct field.
///
/// Carries the field name, its type, whether the field is exported (`pub`)
/// and its declared [`Annotations`].
///
/// ```
/// use vt_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Foo {
///     #[tag(json = "a")]
///     pub field_a: f32,
///     secret: u8,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
///
/// let a = info.field_at(0).unwrap();
/// assert!(a.type_is::<f32>());
/// assert_eq!(a.name(), "field_a");
/// assert!(a.is_exported());
/// assert_eq!(a.annotation("json"), Some("a"));
///
/// assert!(!info.field("secret").unwrap().is_exported());
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    exported: bool,
    annotations: Annotations,
}

impl NamedField {
    impl_annotations_fn!(annotations);

    /// Creates an exported field without annotations.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            type_info: T::type_info,
            ty_id: TypeId::of::<T>(),
            exported: true,
            annotations: Annotations::EMPTY,
        }
    }

    /// Sets whether the field is visible to the mapping engine.
    #[inline]
    pub const fn with_exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Replaces the field annotations.
    #[inline]
    pub const fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Returns the `TypeId`.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if the field is `pub`.
    #[inline]
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the type path of the field type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_info().type_path()
    }
}
