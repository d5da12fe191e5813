use crate::Reflect;
use crate::info::StructInfo;

// -----------------------------------------------------------------------------
// Struct trait

/// A trait for type-erased struct operations via reflection.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for structs
/// with named fields. Fields are addressed by name or by declaration index;
/// fields marked `#[reflect(ignore)]` are invisible here.
///
/// # Examples
///
/// ```
/// use vt_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Foo {
///     pub a: i32,
///     pub b: bool,
/// }
///
/// let mut foo = Foo { a: 10_i32, b: true };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.name_at(1), Some("b"));
/// assert!(foo.field("c").is_none());
///
/// *foo.field_mut("a").unwrap().downcast_mut::<i32>().unwrap() = 42;
/// assert_eq!(foo.a, 42);
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field named `name`, mutably.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the field at `index` in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the field at `index` in declaration order, mutably.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the field values in declaration order.
    fn iter_fields(&self) -> StructFieldIter<'_>;

    /// Returns the static [`StructInfo`] of this struct.
    fn struct_info(&self) -> &'static StructInfo;
}

// -----------------------------------------------------------------------------
// Iterator

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl<'a> ExactSizeIterator for StructFieldIter<'a> {}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Struct;
    use crate::Reflect;
    use crate::derive::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::{ApplyError, ReflectRef};

    #[derive(Reflect, Debug, Clone, PartialEq, Default)]
    #[reflect(default)]
    struct Profile {
        #[tag(json = "mail,omitempty")]
        #[tag(json = "ignored", default = "a@b.com")]
        pub email: String,
        pub age: u32,
        secret: u64,
        #[reflect(ignore)]
        pub cache: Vec<u8>,
    }

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(type_path = "app::Page")]
    struct Page<T> {
        pub item: Option<T>,
        pub r#type: u8,
    }

    fn profile() -> Profile {
        Profile {
            email: "x@y.z".into(),
            age: 7,
            secret: 1,
            cache: vec![1, 2, 3],
        }
    }

    #[test]
    fn struct_info_layout() {
        let info = Profile::type_info().as_struct().unwrap();
        assert_eq!(info.field_len(), 3);
        assert_eq!(info.field_names().collect::<Vec<_>>(), ["email", "age", "secret"]);
        assert!(info.field("cache").is_none());

        let email = info.field("email").unwrap();
        assert!(email.is_exported());
        assert_eq!(email.annotation("json"), Some("mail,omitempty"));
        assert_eq!(email.annotation("default"), Some("a@b.com"));
        assert_eq!(email.annotations().len(), 2);
        assert!(!info.field("secret").unwrap().is_exported());

        let value = info.default_fn().unwrap()();
        assert_eq!(value.take::<Profile>().unwrap(), Profile::default());
    }

    #[test]
    fn field_access() {
        let mut value = profile();
        assert_eq!(value.reflect_kind(), ReflectKind::Struct);
        assert_eq!(value.field_len(), 3);
        assert_eq!(value.name_at(2), Some("secret"));
        assert_eq!(value.name_at(3), None);
        assert_eq!(value.field_at(1).unwrap().downcast_ref::<u32>(), Some(&7));

        value.field_mut("age").unwrap().set(Box::new(9_u32)).unwrap();
        assert_eq!(value.age, 9);

        let fields: Vec<_> = value.iter_fields().collect();
        assert_eq!(fields.len(), 3);
        assert!(core::ptr::eq(value.struct_info(), Profile::type_info().as_struct().unwrap()));
    }

    #[test]
    fn zero_apply_and_clone() {
        assert!(Profile::default().is_zero());
        // Ignored fields do not count.
        let only_cache = Profile {
            cache: vec![1],
            ..Profile::default()
        };
        assert!(only_cache.is_zero());
        assert!(!profile().is_zero());

        let mut dst = Profile {
            cache: vec![9],
            ..Profile::default()
        };
        dst.try_apply(&profile()).unwrap();
        assert_eq!(dst.email, "x@y.z");
        assert_eq!(dst.secret, 1);
        assert_eq!(dst.cache, [9]);

        let err = dst.try_apply(&1_u8).unwrap_err();
        assert!(matches!(err, ApplyError::MismatchedTypes { .. }));

        let copy = profile().reflect_clone().unwrap().take::<Profile>().unwrap();
        assert_eq!(copy.email, "x@y.z");
        assert!(copy.cache.is_empty());
    }

    #[test]
    fn generic_struct() {
        assert_eq!(<Page<u8>>::type_path(), "app::Page<u8>");
        assert_eq!(<Page<String>>::type_name(), "Page<String>");
        assert_eq!(<Page<u8>>::type_ident(), "Page");
        assert_eq!(<Page<u8>>::module_path(), Some("app"));

        let info = <Page<u16>>::type_info().as_struct().unwrap();
        assert_eq!(info.field_at(0).unwrap().type_path(), "core::option::Option<u16>");
        assert_eq!(info.field_at(1).unwrap().name(), "type");
        assert!(info.default_fn().is_none());

        let page = Page { item: Some(3_i32), r#type: 1 };
        let ReflectRef::Struct(value) = page.reflect_ref() else {
            panic!("expected a struct");
        };
        assert_eq!(value.field("type").unwrap().downcast_ref::<u8>(), Some(&1));
        assert_eq!(
            format!("{:?}", page.as_reflect()),
            "Page<i32> { item: Some(3), type: 1 }"
        );
    }

    #[test]
    fn default_type_path() {
        assert_eq!(Profile::type_name(), "Profile");
        assert!(Profile::type_path().ends_with("::ops::struct_ops::tests::Profile"));
        assert_eq!(Profile::module_path(), Some(module_path!()));
    }
}
