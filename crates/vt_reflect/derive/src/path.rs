//! This independent module is used to provide the required path.
//! So as to minimize changes when the `vt_reflect` structure is modified.
//!
//! The only special feature is the path of vt_reflect itself,
//! See [`vt_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vt_reflect` crate.
///
/// Not all crates can access the reflection crate through `vt_reflect`,
/// we have to scan the builder's `Cargo.toml`.
///
/// 1. For crates that depend on `vt_reflect`, `::vt_reflect` is returned here.
/// 2. For crates that depend on `vt_core`, `::vt_core::reflect` is returned here.
/// 3. For crates that depend on `vt_map`, `::vt_map::reflect` is returned here.
/// 4. For other situations, `::vt_reflect` is returned here, but this may be incorrect.
///
/// The cost of this function is relatively high (accessing files, obtaining read-write lock permissions, querying content...),
/// so the crate path is obtained once per macro call and passed around.
pub(crate) fn vt_reflect() -> syn::Path {
    vt_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vt_reflect"))
}

// -----------------------------------------------------------------------------
// Reflection

#[inline(always)]
pub(crate) fn reflect_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn macro_exports_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::__macro_exports
    }
}

// -----------------------------------------------------------------------------
// Info

#[inline(always)]
pub(crate) fn type_path_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn dynamic_type_path_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::DynamicTypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn reflect_kind_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::ReflectKind
    }
}

#[inline(always)]
pub(crate) fn struct_info_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn opaque_info_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::OpaqueInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn annotations_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::info::Annotations
    }
}

// -----------------------------------------------------------------------------
// Ops

#[inline(always)]
pub(crate) fn struct_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn struct_field_iter_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::ops::StructFieldIter
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn apply_error_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::ops::ApplyError
    }
}

#[inline(always)]
pub(crate) fn clone_error_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::ops::ReflectCloneError
    }
}

// -----------------------------------------------------------------------------
// Cell

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::__macro_exports::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::__macro_exports::GenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_path_cell_(vt_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #vt_reflect_path::__macro_exports::GenericTypePathCell
    }
}

// -----------------------------------------------------------------------------
// Std

pub(crate) mod fp {
    //! Fully qualified std paths, immune to shadowing at the call site.

    use proc_macro2::TokenStream;
    use quote::{ToTokens, quote};

    macro_rules! fully_qualified {
        ($($name:ident => [$($path:tt)*],)*) => {
            $(
                pub(crate) struct $name;

                impl ToTokens for $name {
                    fn to_tokens(&self, tokens: &mut TokenStream) {
                        quote!($($path)*).to_tokens(tokens);
                    }
                }
            )*
        };
    }

    fully_qualified! {
        OptionFP => [::core::option::Option],
        ResultFP => [::core::result::Result],
        BoxFP => [::std::boxed::Box],
        CloneFP => [::core::clone::Clone],
        DefaultFP => [::core::default::Default],
        PartialEqFP => [::core::cmp::PartialEq],
        DebugFP => [::core::fmt::Debug],
        FormatterFP => [::core::fmt::Formatter],
        FmtResultFP => [::core::fmt::Result],
    }
}
