use thiserror::Error;
use vt_reflect::info::ReflectKind;
use vt_reflect::ops::ApplyError;

// -----------------------------------------------------------------------------
// Error

/// An error returned by a mapping call.
///
/// Structural errors are reported before anything is copied. A
/// [`DefaultValue`](MapError::DefaultValue) or [`Apply`](MapError::Apply)
/// error aborts the call, fields written earlier keep their new values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    #[error("destination and source have different kinds: `{dst}` and `{src}`")]
    ShapeMismatch { dst: ReflectKind, src: ReflectKind },

    #[error("expected pointer handles, found `{0}`")]
    MustBePointer(ReflectKind),

    #[error("expected handles to structs, found `{0}`")]
    MustBeStructPointer(&'static str),

    #[error("handle does not point at a value")]
    NullPointer,

    #[error(transparent)]
    DefaultValue(#[from] BindError),

    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// An error returned by a [`DefaultBinder`](crate::DefaultBinder).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindError {
    #[error("cannot bind `{literal}` to field `{field}` of type `{type_path}`: {reason}")]
    Parse {
        field: &'static str,
        literal: String,
        type_path: &'static str,
        reason: String,
    },

    #[error("field `{field}` of type `{type_path}` has no literal form")]
    Unsupported {
        field: &'static str,
        type_path: &'static str,
    },

    #[error("cannot allocate a value for field `{field}` of type `{type_path}`")]
    Unallocatable {
        field: &'static str,
        type_path: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use vt_reflect::info::{ReflectKind, ScalarKind};

    use super::{BindError, MapError};

    #[test]
    fn messages() {
        let err = MapError::ShapeMismatch {
            dst: ReflectKind::Pointer,
            src: ReflectKind::Struct,
        };
        assert_eq!(
            err.to_string(),
            "destination and source have different kinds: `Pointer` and `Struct`"
        );

        let err = MapError::MustBePointer(ReflectKind::Scalar(ScalarKind::U8));
        assert_eq!(err.to_string(), "expected pointer handles, found `Scalar(u8)`");

        let err: MapError = BindError::Unsupported {
            field: "tags",
            type_path: "app::Tags",
        }
        .into();
        assert_eq!(err.to_string(), "field `tags` of type `app::Tags` has no literal form");
    }
}
