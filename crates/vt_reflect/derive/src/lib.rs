//! See following macros:
//!
//! - [`Reflect`]
//! - [`impl_reflect_opaque`]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static TAG_ATTRIBUTE_NAME: &str = "tag";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Struct Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for a struct with
/// named fields:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct`
///
/// Every field type must implement `Reflect + Typed`.
///
/// ## Exported Fields
///
/// `pub` fields are exported. Other fields are still reflected (they show up
/// in `StructInfo` and in `Struct::field`), but they are marked as
/// non-exported and the mapping engine never reads or writes them.
///
/// ## Field Annotations
///
/// `#[tag(...)]` declares `key = "value"` annotations on a field. Repeated
/// attributes accumulate, and the first occurrence of a key wins.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct UserVo {
///     #[tag(json = "mail,omitempty")]
///     pub email: String,
///     #[tag(default = "18")]
///     pub age: u32,
/// }
/// ```
///
/// ## Ignored Fields
///
/// `#[reflect(ignore)]` removes a field from reflection. The field type must
/// implement `Default`, which is used to rebuild the field in `reflect_clone`.
///
/// ## Default Constructor
///
/// `#[reflect(default)]` at type level registers `Default::default` as the
/// default constructor of the type, so that an empty `Option<T>` of this type
/// can be allocated.
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "app::view::UserVo")]
/// struct UserVo { /* ... */ }
/// ```
///
/// This path does not need to include generics (they will be automatically appended).
///
/// ## Generics
///
/// Type parameters are supported and get a `Reflect + Typed` bound. Type
/// information is stored per instantiation. Lifetime and const parameters
/// are rejected.
#[proc_macro_derive(Reflect, attributes(reflect, tag))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_ast(&ast) {
        Ok(reflect_struct) => impls::impl_struct(&reflect_struct).into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Implements reflection for a foreign value type as `Opaque`.
///
/// The type must implement `Clone`, `Debug` and `PartialEq`. Its zero value
/// is `Default::default()`, unless another one is given:
///
/// ```rust, ignore
/// impl_reflect_opaque!(::core::time::Duration);
/// impl_reflect_opaque!(::std::time::SystemTime(zero = ::std::time::UNIX_EPOCH));
/// ```
///
/// The zero value also serves as the default constructor of the type.
///
/// Paths starting with `::` are used as the type path (without the leading
/// `::`). Other paths are resolved against `module_path!()`.
#[proc_macro]
pub fn impl_reflect_opaque(input: TokenStream) -> TokenStream {
    let def = parse_macro_input!(input as derive_data::ReflectOpaqueDef);
    impls::impl_opaque(&def).into()
}
