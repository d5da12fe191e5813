use core::{error, fmt};

use crate::info::{ReflectKind, ReflectKindError};
use crate::ops::ReflectCloneError;

/// An error returned by [`Reflect::try_apply`](crate::Reflect::try_apply).
#[derive(Debug)]
pub enum ApplyError {
    /// The value has another type than the target.
    MismatchedTypes {
        from_type: &'static str,
        to_type: &'static str,
    },
    /// The value has another [kind](ReflectKind) than the target expects.
    MismatchedKinds {
        from_kind: ReflectKind,
        expected: &'static str,
    },
    /// An empty handle had to be filled with a copy of the value, and the
    /// copy failed.
    Clone(ReflectCloneError),
}

impl ApplyError {
    /// Shortcut for [`ApplyError::MismatchedTypes`].
    #[inline]
    pub const fn mismatched_types(from_type: &'static str, to_type: &'static str) -> Self {
        Self::MismatchedTypes { from_type, to_type }
    }
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedTypes { from_type, to_type } => {
                write!(f, "cannot assign `{from_type}` to `{to_type}`")
            }
            Self::MismatchedKinds {
                from_kind,
                expected,
            } => {
                write!(f, "cannot assign a `{from_kind}` value where `{expected}` is expected")
            }
            Self::Clone(err) => write!(f, "cannot fill an empty handle: {err}"),
        }
    }
}

impl error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Clone(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ReflectKindError> for ApplyError {
    #[inline]
    fn from(value: ReflectKindError) -> Self {
        Self::MismatchedKinds {
            from_kind: value.received,
            expected: value.expected,
        }
    }
}

impl From<ReflectCloneError> for ApplyError {
    #[inline]
    fn from(value: ReflectCloneError) -> Self {
        Self::Clone(value)
    }
}

#[cfg(test)]
mod tests {
    use super::ApplyError;
    use crate::ops::ReflectCloneError;

    #[test]
    fn messages() {
        let err = ApplyError::mismatched_types("u8", "alloc::string::String");
        assert_eq!(err.to_string(), "cannot assign `u8` to `alloc::string::String`");

        let err: ApplyError = ReflectCloneError::Field {
            owner: "app::User",
            field: "name",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "cannot fill an empty handle: field `app::User::name` cannot be copied"
        );
    }
}
