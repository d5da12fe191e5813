//! Built-in reflection impls and helpers used by generated code.
//!
//! - scalars: integers, floats, `bool`, `char` and `String`;
//! - pointers: `Option<T>` (nullable) and `Box<T>`;
//! - opaque: `core::time::Duration` and `std::time::SystemTime`.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod common;
mod opaque;
mod pointer;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, NonGenericTypeCell, concat};
pub use cell::{GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use common::{clone_field, clone_value, struct_debug, struct_is_zero, struct_try_apply};
