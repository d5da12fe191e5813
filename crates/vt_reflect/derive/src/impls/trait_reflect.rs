use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;
use crate::path::fp::{BoxFP, DefaultFP, FmtResultFP, FormatterFP, ResultFP};

/// Generate the body of `reflect_clone`.
///
/// Reflected fields are cloned through reflection, ignored fields are
/// rebuilt with `Default::default()`.
fn clone_body(data: &ReflectStruct) -> TokenStream {
    let vt_reflect_path = data.meta().vt_reflect_path();
    let exports_ = crate::path::macro_exports_(vt_reflect_path);
    let type_path_ = crate::path::type_path_(vt_reflect_path);

    let fields = data.fields().iter().map(|field| {
        let ident = field.ident;
        if field.attrs.ignore {
            quote! { #ident: #DefaultFP::default() }
        } else {
            let ty = field.ty;
            let name = field.name();
            quote! {
                #ident: #exports_::clone_field::<#ty>(
                    &self.#ident,
                    <Self as #type_path_>::type_path(),
                    #name,
                )?
            }
        }
    });

    quote! {
        #ResultFP::Ok(#BoxFP::new(Self {
            #(#fields,)*
        }))
    }
}

/// Generate implementation codes for `Reflect`
pub(crate) fn impl_trait_reflect(data: &ReflectStruct) -> TokenStream {
    let meta = data.meta();
    let vt_reflect_path = meta.vt_reflect_path();
    let reflect_ = crate::path::reflect_(vt_reflect_path);
    let exports_ = crate::path::macro_exports_(vt_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(vt_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(vt_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(vt_reflect_path);
    let apply_error_ = crate::path::apply_error_(vt_reflect_path);
    let clone_error_ = crate::path::clone_error_(vt_reflect_path);

    let ident = meta.ident();
    let clone_body = clone_body(data);

    let ignored_bounds = data.ignored_fields().map(|field| {
        let ty = field.ty;
        quote! { #ty: #DefaultFP }
    });

    let (impl_generics, ty_generics, where_clause) = meta.split_generics(ignored_bounds);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::Struct(self)
            }

            fn set(
                &mut self,
                value: #BoxFP<dyn #reflect_>,
            ) -> #ResultFP<(), #BoxFP<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #ResultFP::Ok(())
            }

            #[inline]
            fn try_apply(&mut self, value: &dyn #reflect_) -> #ResultFP<(), #apply_error_> {
                #exports_::struct_try_apply(self, value)
            }

            fn reflect_clone(&self) -> #ResultFP<#BoxFP<dyn #reflect_>, #clone_error_> {
                #clone_body
            }

            #[inline]
            fn is_zero(&self) -> bool {
                #exports_::struct_is_zero(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
                #exports_::struct_debug(self, f)
            }
        }
    }
}
