use vt_reflect::Reflect;
use vt_reflect::convert::{can_convert, convert};
use vt_reflect::info::ReflectKind;
use vt_reflect::ops::{ApplyError, ReflectMut, ReflectRef};

use super::Mapper;
use crate::{DefaultBinder, MapError};

/// What a single value binding did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Bound {
    /// Same type, the source was assigned.
    Assigned,
    /// The source was converted into the destination type.
    Converted,
    /// Both are records of different types, mapped field by field.
    Recursed,
    /// The source is zero, nothing was written.
    ZeroSource,
    /// A null handle was met while dereferencing the source.
    NullSource,
    /// Kinds differ and no conversion exists.
    Incompatible,
}

impl<B: DefaultBinder> Mapper<B> {
    /// Binds `src` into `dst`.
    ///
    /// Source handles are dereferenced until the destination kind is met.
    /// Zero sources never overwrite, incompatible values are skipped.
    pub(super) fn bind_value(
        &self,
        dst: &mut dyn Reflect,
        src: &dyn Reflect,
    ) -> Result<Bound, MapError> {
        let mut src = src;
        while dst.reflect_kind() != ReflectKind::Pointer {
            let ReflectRef::Pointer(ptr) = src.reflect_ref() else {
                break;
            };
            let Some(pointee) = ptr.pointee() else {
                return Ok(Bound::NullSource);
            };
            src = pointee;
        }

        let dst_kind = dst.reflect_kind();
        if dst_kind != src.reflect_kind()
            && !can_convert(src.reflect_type_info(), dst.reflect_type_info())
        {
            return Ok(Bound::Incompatible);
        }

        if dst_kind == ReflectKind::Struct && dst.ty_id() != src.ty_id() {
            let (ReflectMut::Struct(dst), ReflectRef::Struct(src)) =
                (dst.reflect_mut(), src.reflect_ref())
            else {
                return Ok(Bound::Incompatible);
            };
            log::debug!(
                "mapping nested `{}` into `{}`",
                src.reflect_type_path(),
                dst.reflect_type_path(),
            );
            self.map_struct(dst, src)?;
            return Ok(Bound::Recursed);
        }

        if src.is_zero() {
            return Ok(Bound::ZeroSource);
        }

        if dst.ty_id() == src.ty_id() {
            dst.try_apply(src)?;
            return Ok(Bound::Assigned);
        }

        let Some(value) = convert(src, dst.reflect_type_info()) else {
            return Ok(Bound::Incompatible);
        };
        let to_type = dst.reflect_type_path();
        dst.set(value)
            .map_err(|value| ApplyError::mismatched_types(value.reflect_type_path(), to_type))?;
        Ok(Bound::Converted)
    }
}
