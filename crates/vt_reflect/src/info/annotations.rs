use core::fmt;

// -----------------------------------------------------------------------------
// Annotations

/// Declared key/value annotations of a field, in declaration order.
///
/// Created by the `#[tag(..)]` attribute of
/// [`#[derive(Reflect)]`](crate::derive::Reflect). Values are raw strings;
/// splitting them into tokens is left to the consumer.
///
/// ```
/// use vt_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Contact {
///     #[tag(json = "mail,omitempty", default = "none")]
///     pub email: String,
///     pub phone: String,
/// }
///
/// let info = Contact::type_info().as_struct().unwrap();
///
/// let email = info.field("email").unwrap().annotations();
/// assert_eq!(email.get("json"), Some("mail,omitempty"));
/// assert_eq!(email.get("default"), Some("none"));
/// assert_eq!(email.get("xml"), None);
///
/// assert!(info.field("phone").unwrap().annotations().is_empty());
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotations {
    pairs: &'static [(&'static str, &'static str)],
}

impl Annotations {
    /// An empty set of annotations.
    pub const EMPTY: Self = Self { pairs: &[] };

    /// Creates annotations from `(key, value)` pairs.
    ///
    /// When a key repeats, [`get`](Self::get) returns the first value.
    #[inline]
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// Returns the value declared under `key`.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find_map(|&(k, v)| if k == key { Some(v) } else { None })
    }

    /// Returns `true` if `key` is declared.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates `(key, value)` pairs in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
        self.pairs.iter().copied()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Debug for Annotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement `annotations` and `annotation`.
macro_rules! impl_annotations_fn {
    ($field:ident) => {
        /// Returns the declared annotations.
        #[inline]
        pub const fn annotations(&self) -> $crate::info::Annotations {
            self.$field
        }

        /// Returns the annotation value declared under `key`.
        #[inline]
        pub fn annotation(&self, key: &str) -> Option<&'static str> {
            self.$field.get(key)
        }
    };
}

pub(crate) use impl_annotations_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Annotations;

    static PAIRS: [(&str, &str); 3] = [("json", "a,b"), ("default", "7"), ("json", "c")];

    #[test]
    fn first_key_wins() {
        let annotations = Annotations::new(&PAIRS);
        assert_eq!(annotations.get("json"), Some("a,b"));
        assert_eq!(annotations.len(), 3);
        assert!(annotations.contains("default"));
        assert!(!annotations.contains("xml"));
    }

    #[test]
    fn empty_and_debug() {
        assert!(Annotations::EMPTY.is_empty());
        assert_eq!(Annotations::default(), Annotations::EMPTY);
        let annotations = Annotations::new(&PAIRS[1..2]);
        assert_eq!(format!("{annotations:?}"), r#"{"default": "7"}"#);
    }
}
