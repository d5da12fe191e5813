use core::fmt;

use crate::Reflect;
use crate::ops::{ApplyError, ReflectCloneError, Struct};

/// A function use for implementing [`Reflect::try_apply`] on structs.
///
/// # Rules
///
/// 1. If `y` is not of the same type as `x`, return Err.
/// 2. Apply every reflected field of `y` to the field of `x` with the same
///    index. Fields excluded from reflection are left untouched.
#[inline(never)]
pub fn struct_try_apply(x: &mut dyn Struct, y: &dyn Reflect) -> Result<(), ApplyError> {
    if x.ty_id() != y.ty_id() {
        return Err(ApplyError::mismatched_types(
            y.reflect_type_path(),
            x.reflect_type_path(),
        ));
    }
    let y = y.reflect_ref().as_struct()?;

    for (index, y_field) in y.iter_fields().enumerate() {
        if let Some(x_field) = x.field_at_mut(index) {
            x_field.try_apply(y_field)?;
        }
    }
    Ok(())
}

/// A function use for implementing [`Reflect::is_zero`] on structs.
///
/// A struct is zero when every reflected field is zero.
#[inline(never)]
pub fn struct_is_zero(x: &dyn Struct) -> bool {
    x.iter_fields().all(|field| field.is_zero())
}

/// A function use for implementing [`Reflect::reflect_debug`] on structs.
#[inline(never)]
pub fn struct_debug(x: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_struct(x.reflect_type_name());

    for (index, field) in x.iter_fields().enumerate() {
        if let Some(name) = x.name_at(index) {
            debug.field(name, &field as &dyn fmt::Debug);
        }
    }
    debug.finish()
}

/// Deep-copies a value through [`Reflect::reflect_clone`], keeping its type.
pub fn clone_value<T: Reflect>(value: &T) -> Result<T, ReflectCloneError> {
    value
        .reflect_clone()?
        .take::<T>()
        .map_err(|_| ReflectCloneError::Unsupported {
            type_path: value.reflect_type_path(),
        })
}

/// Deep-copies the field `field` of a struct `owner`, used by
/// [`#[derive(Reflect)]`](crate::derive::Reflect).
pub fn clone_field<T: Reflect>(
    value: &T,
    owner: &'static str,
    field: &'static str,
) -> Result<T, ReflectCloneError> {
    clone_value(value).map_err(|_| ReflectCloneError::Field { owner, field })
}
