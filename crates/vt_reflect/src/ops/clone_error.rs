use core::fmt;

/// An error returned by [`Reflect::reflect_clone`](crate::Reflect::reflect_clone).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectCloneError {
    /// The copy did not produce a value of the original type.
    Unsupported { type_path: &'static str },
    /// A field of a derived struct could not be copied.
    Field {
        owner: &'static str,
        field: &'static str,
    },
}

impl fmt::Display for ReflectCloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { type_path } => write!(f, "`{type_path}` cannot be copied"),
            Self::Field { owner, field } => write!(f, "field `{owner}::{field}` cannot be copied"),
        }
    }
}

impl core::error::Error for ReflectCloneError {}
