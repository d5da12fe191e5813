use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

mod opaque_kind;
mod struct_kind;
mod trait_reflect;
mod trait_type_path;
mod trait_typed;

pub(crate) use opaque_kind::impl_opaque;

/// Generate all implementations of `#[derive(Reflect)]`.
pub(crate) fn impl_struct(data: &ReflectStruct) -> TokenStream {
    let type_path_tokens = trait_type_path::impl_trait_type_path(data.meta());
    let typed_tokens = trait_typed::impl_trait_typed(data);
    let reflect_tokens = trait_reflect::impl_trait_reflect(data);
    let struct_tokens = struct_kind::impl_struct_kind(data);

    quote! {
        const _: () = {
            #type_path_tokens

            #typed_tokens

            #reflect_tokens

            #struct_tokens
        };
    }
}
