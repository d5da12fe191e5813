use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path::fp::OptionFP;
use crate::utils::StringExpr;

fn static_path_cell(vt_reflect_path: &syn::Path, generator: TokenStream) -> TokenStream {
    let path_cell_ = crate::path::generic_type_path_cell_(vt_reflect_path);

    quote! {
        static CELL: #path_cell_ = #path_cell_::new();
        CELL.get_or_insert::<Self>(|| {
            #generator
        })
    }
}

/// Generate implementation codes for `TypePath`
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let vt_reflect_path = meta.vt_reflect_path();
    let trait_type_path_ = crate::path::type_path_(vt_reflect_path);

    let ident = meta.ident();

    let (type_path, type_name, inline_flag) = if meta.is_generic() {
        (
            static_path_cell(
                vt_reflect_path,
                StringExpr::concat_owned(meta.generic_pieces(true), vt_reflect_path),
            ),
            static_path_cell(
                vt_reflect_path,
                StringExpr::concat_owned(meta.generic_pieces(false), vt_reflect_path),
            ),
            TokenStream::new(),
        )
    } else {
        (
            meta.base_type_path().into_borrowed(),
            meta.type_ident().into_borrowed(),
            quote! { #[inline] },
        )
    };

    let type_ident = meta.type_ident().into_borrowed();
    let module_path = match meta.module_path() {
        Some(module) => {
            let module = module.into_borrowed();
            quote! { #OptionFP::Some(#module) }
        }
        None => quote! { #OptionFP::None },
    };

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(None::<TokenStream>);

    quote! {
        impl #impl_generics #trait_type_path_ for #ident #ty_generics #where_clause {
            #inline_flag
            fn type_path() -> &'static str {
                #type_path
            }

            #inline_flag
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> #OptionFP<&'static str> {
                #module_path
            }
        }
    }
}
