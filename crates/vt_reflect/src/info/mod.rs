//! Provide compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: A trait for obtaining type names, without prefix `::`.
//! - [`DynamicTypePath`]: Provide dynamic dispatch for `TypePath`.
//! - [`Type`]: A `TypeId` together with the type's names.
//!
//! - [`TypeInfo`]: An enum of compile-time type information, one of:
//!     - [`StructInfo`]: named fields in declaration order, indexed by name.
//!     - [`PointerInfo`]: pointee type and nullability of a handle.
//!     - [`ScalarInfo`]: a primitive value or string, with its [`ScalarKind`].
//!     - [`OpaqueInfo`]: a value copied whole.
//!
//! - [`NamedField`]: a field descriptor, with name, type, visibility and [`Annotations`].
//!
//! - [`ReflectKind`]: the kind of a reflected type, for example `Struct` or `Pointer`.
//!
//! - [`Typed`]: A trait for obtaining `TypeInfo` data.
//! - [`DynamicTyped`]: Provide dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod annotations;
mod field_info;
mod opaque_info;
mod pointer_info;
mod scalar_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

use annotations::impl_annotations_fn;

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use annotations::Annotations;
pub use field_info::NamedField;
pub use opaque_info::OpaqueInfo;
pub use pointer_info::PointerInfo;
pub use scalar_info::ScalarInfo;
pub use struct_info::StructInfo;
pub use type_info::{DefaultFn, ReflectKind, ReflectKindError, ScalarKind, TypeInfo, default_boxed};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
