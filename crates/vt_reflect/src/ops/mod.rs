//! Provide interfaces for data operation.
//!
//! The following are subtraits of [`Reflect`](crate::Reflect), reached through
//! [`ReflectRef`] and [`ReflectMut`]:
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`) .
//! - [`Pointer`]: For pointer-like handles (`Option<T>`, `Box<T>`) .
//!
//! Scalars and opaque values have no dedicated interface; they are read with
//! `downcast_ref` or replaced with [`Reflect::set`](crate::Reflect::set).

// -----------------------------------------------------------------------------
// Modules

mod apply_error;
mod clone_error;
mod kind;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use apply_error::ApplyError;
pub use clone_error::ReflectCloneError;

pub use kind::{ReflectMut, ReflectRef};

pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
