use vt_reflect::Reflect;
use vt_reflect::info::NamedField;
use vt_reflect::ops::{ApplyError, ReflectMut, Struct};

use super::Mapper;
use super::value::Bound;
use crate::config::DEFAULT_VALUE_KEY;
use crate::{BindError, BindMode, DefaultBinder, MapError, TokenIndex};

/// Returns `true` for annotation values that take part in binding.
#[inline]
fn is_active(value: &str) -> bool {
    !value.is_empty() && value != "-"
}

impl<B: DefaultBinder> Mapper<B> {
    /// Copies fields declared with the same name by both records.
    pub(super) fn field_pass(
        &self,
        dst: &mut dyn Struct,
        src: &dyn Struct,
    ) -> Result<(), MapError> {
        let dst_info = dst.struct_info();
        let src_info = src.struct_info();

        for (index, field) in dst_info.iter().enumerate() {
            if !field.is_exported() {
                log::trace!("field pass: skip private `{}`", field.name());
                continue;
            }
            let Some(src_index) = src_info.index_of(field.name()) else {
                log::trace!("field pass: `{}` has no source field", field.name());
                continue;
            };
            if src_info.field_at(src_index).is_none_or(|f| !f.is_exported()) {
                log::trace!("field pass: source `{}` is private", field.name());
                continue;
            }
            let (Some(d), Some(s)) = (dst.field_at_mut(index), src.field_at(src_index)) else {
                continue;
            };

            let bound = self.bind_value(d, s)?;
            log::trace!("field pass: `{}` -> {bound:?}", field.name());
        }
        Ok(())
    }

    /// Copies fields whose annotations share a token.
    pub(super) fn tag_pass(
        &self,
        dst: &mut dyn Struct,
        src: &dyn Struct,
    ) -> Result<(), MapError> {
        let config = &self.config;
        let index = TokenIndex::build(src.struct_info(), config);
        let overlay = config.requests(BindMode::OVERLAY);

        for (dst_index, field) in dst.struct_info().iter().enumerate() {
            if !field.is_exported() {
                continue;
            }
            let Some(d) = dst.field_at_mut(dst_index) else {
                continue;
            };
            if !overlay && !d.is_zero() {
                log::trace!("tag pass: keep non-zero `{}`", field.name());
                continue;
            }
            let Some(value) = field.annotation(config.tag()).filter(|v| is_active(v)) else {
                continue;
            };

            let Some((token, src_index)) = config
                .tokens(value)
                .find_map(|token| index.get(token).map(|i| (token, i)))
            else {
                log::trace!("tag pass: no token of `{}` resolves", field.name());
                continue;
            };
            let Some(s) = src.field_at(src_index) else {
                continue;
            };

            match self.bind_value(d, s)? {
                Bound::Incompatible => log::warn!(
                    "token `{token}` matches `{}` but `{}` cannot be bound to `{}`",
                    field.name(),
                    s.reflect_type_path(),
                    field.type_path(),
                ),
                bound => log::trace!("tag pass: `{}` via `{token}` -> {bound:?}", field.name()),
            }
        }
        Ok(())
    }

    /// Binds `default` literals into fields that are still zero.
    pub(super) fn default_pass(&self, dst: &mut dyn Struct) -> Result<(), MapError> {
        for (index, field) in dst.struct_info().iter().enumerate() {
            if !field.is_exported() {
                continue;
            }
            let Some(literal) = field.annotation(DEFAULT_VALUE_KEY).filter(|v| is_active(v)) else {
                continue;
            };
            let Some(d) = dst.field_at_mut(index) else {
                continue;
            };
            if !d.is_zero() {
                log::trace!("default pass: keep non-zero `{}`", field.name());
                continue;
            }

            self.bind_default(literal, d, field)?;
            log::trace!("default pass: `{}` = {literal:?}", field.name());
        }
        Ok(())
    }

    fn bind_default(
        &self,
        literal: &str,
        dst: &mut dyn Reflect,
        field: &NamedField,
    ) -> Result<(), MapError> {
        if let ReflectMut::Pointer(ptr) = dst.reflect_mut() {
            let mut backing = ptr.new_pointee().ok_or_else(|| BindError::Unallocatable {
                field: field.name(),
                type_path: ptr.pointee_info().type_path(),
            })?;
            self.binder.bind(literal, &mut *backing, field)?;

            let to_type = ptr.pointee_info().type_path();
            ptr.replace_pointee(backing)
                .map_err(|value| ApplyError::mismatched_types(value.reflect_type_path(), to_type))?;
            return Ok(());
        }

        self.binder.bind(literal, dst, field)?;
        Ok(())
    }
}
