use crate::hash::{FixedHashState, HashMap};
use crate::info::{DefaultFn, NamedField, Type, TypePath, default_boxed, impl_type_fn};
use crate::ops::Struct;

/// Compile-time information of a struct with named fields.
///
/// Fields are kept in declaration order and indexed by name.
///
/// ```rust
/// use vt_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     pub id: u64,
///     pub name: String,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("name"), Some(1));
/// assert_eq!(info.field_names().collect::<Vec<_>>(), ["id", "name"]);
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    field_indices: HashMap<&'static str, usize>,
    default_fn: Option<DefaultFn>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of fields is the input order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let mut field_indices =
            HashMap::with_capacity_and_hasher(fields.len(), FixedHashState);
        for (index, field) in fields.iter().enumerate() {
            field_indices.entry(field.name()).or_insert(index);
        }

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            field_indices,
            default_fn: None,
        }
    }

    /// Registers `T::default` as the default constructor.
    #[inline]
    pub fn with_default<T: Default + Struct + TypePath>(self) -> Self {
        self.with_default_fn(default_boxed::<T>)
    }

    /// Registers a default constructor.
    #[inline]
    pub fn with_default_fn(mut self, default_fn: DefaultFn) -> Self {
        self.default_fn = Some(default_fn);
        self
    }

    /// Returns the registered default constructor.
    #[inline]
    pub const fn default_fn(&self) -> Option<DefaultFn> {
        self.default_fn
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.field_indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index of the field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    #[inline]
    pub fn field_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
