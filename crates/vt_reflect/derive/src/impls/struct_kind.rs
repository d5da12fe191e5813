use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, quote};

use crate::derive_data::ReflectStruct;
use crate::path::fp::OptionFP;

/// Generate implementation codes for `Struct`
pub(crate) fn impl_struct_kind(data: &ReflectStruct) -> TokenStream {
    let meta = data.meta();
    let vt_reflect_path = meta.vt_reflect_path();
    let reflect_ = crate::path::reflect_(vt_reflect_path);
    let struct_ = crate::path::struct_(vt_reflect_path);
    let struct_info_ = crate::path::struct_info_(vt_reflect_path);
    let struct_field_iter_ = crate::path::struct_field_iter_(vt_reflect_path);
    let typed_ = crate::path::typed_(vt_reflect_path);
    let type_info_ = crate::path::type_info_(vt_reflect_path);
    let option_ = OptionFP.to_token_stream();

    let ident = meta.ident();

    let active: Vec<_> = data.active_fields().collect();
    let field_len = active.len();

    let idents: Vec<_> = active.iter().map(|field| field.ident).collect();
    let names: Vec<_> = active.iter().map(|field| field.name()).collect();
    let indices: Vec<_> = (0..field_len).map(Literal::usize_unsuffixed).collect();

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(None::<TokenStream>);

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#names => #option_::Some(#reflect_::as_reflect(&self.#idents)),)*
                    _ => #option_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #option_<&mut dyn #reflect_> {
                match name {
                    #(#names => #option_::Some(#reflect_::as_reflect_mut(&mut self.#idents)),)*
                    _ => #option_::None,
                }
            }

            fn field_at(&self, index: usize) -> #option_<&dyn #reflect_> {
                match index {
                    #(#indices => #option_::Some(#reflect_::as_reflect(&self.#idents)),)*
                    _ => #option_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #option_<&mut dyn #reflect_> {
                match index {
                    #(#indices => #option_::Some(#reflect_::as_reflect_mut(&mut self.#idents)),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn name_at(&self, index: usize) -> #option_<&str> {
                match index {
                    #(#indices => #option_::Some(#names),)*
                    _ => #option_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #struct_field_iter_<'_> {
                #struct_field_iter_::new(self)
            }

            fn struct_info(&self) -> &'static #struct_info_ {
                match <Self as #typed_>::type_info() {
                    #type_info_::Struct(info) => info,
                    _ => unreachable!(),
                }
            }
        }
    }
}
