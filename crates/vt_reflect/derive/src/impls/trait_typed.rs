use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectField, ReflectStruct};

/// Generate the `NamedField` expression of a field.
///
/// ```ignore
/// NamedField::new::<u32>("age")
///     .with_exported(true)
///     .with_annotations(Annotations::new(&[("default", "18")]))
/// ```
fn named_field(field: &ReflectField, vt_reflect_path: &syn::Path) -> TokenStream {
    let named_field_ = crate::path::named_field_(vt_reflect_path);
    let annotations_ = crate::path::annotations_(vt_reflect_path);

    let ty = field.ty;
    let name = field.name();
    let exported = field.exported;

    let with_annotations = if field.attrs.annotations.is_empty() {
        TokenStream::new()
    } else {
        let pairs = field
            .attrs
            .annotations
            .iter()
            .map(|(key, value)| quote! { (#key, #value) });
        quote! {
            .with_annotations(#annotations_::new(&[ #(#pairs),* ]))
        }
    };

    quote! {
        #named_field_::new::<#ty>(#name)
            .with_exported(#exported)
            #with_annotations
    }
}

/// Generate implementation codes for `Typed`
pub(crate) fn impl_trait_typed(data: &ReflectStruct) -> TokenStream {
    let meta = data.meta();
    let vt_reflect_path = meta.vt_reflect_path();
    let typed_ = crate::path::typed_(vt_reflect_path);
    let type_info_ = crate::path::type_info_(vt_reflect_path);
    let struct_info_ = crate::path::struct_info_(vt_reflect_path);

    let ident = meta.ident();

    let fields = data
        .active_fields()
        .map(|field| named_field(field, vt_reflect_path));

    let with_default = if meta.attrs().default {
        quote! { .with_default::<Self>() }
    } else {
        TokenStream::new()
    };

    let info = quote! {
        #type_info_::Struct(
            #struct_info_::new::<Self>(&[ #(#fields),* ])
                #with_default
        )
    };

    let body = if meta.is_generic() {
        let cell_ = crate::path::generic_type_info_cell_(vt_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(|| {
                #info
            })
        }
    } else {
        let cell_ = crate::path::non_generic_type_info_cell_(vt_reflect_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(|| {
                #info
            })
        }
    };

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(None::<TokenStream>);

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #body
            }
        }
    }
}
