use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectOpaqueDef;
use crate::path::fp::{
    BoxFP, CloneFP, DebugFP, DefaultFP, FmtResultFP, FormatterFP, OptionFP, PartialEqFP, ResultFP,
};

/// Generate `TypePath`, `Typed` and `Reflect` for an opaque type.
pub(crate) fn impl_opaque(def: &ReflectOpaqueDef) -> TokenStream {
    let Some(ident) = def.ident() else {
        return syn::Error::new_spanned(&def.path, "expected a type path").into_compile_error();
    };

    let vt_reflect_path = crate::path::vt_reflect();
    let reflect_ = crate::path::reflect_(&vt_reflect_path);
    let type_path_ = crate::path::type_path_(&vt_reflect_path);
    let dynamic_type_path_ = crate::path::dynamic_type_path_(&vt_reflect_path);
    let typed_ = crate::path::typed_(&vt_reflect_path);
    let type_info_ = crate::path::type_info_(&vt_reflect_path);
    let opaque_info_ = crate::path::opaque_info_(&vt_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(&vt_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(&vt_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(&vt_reflect_path);
    let apply_error_ = crate::path::apply_error_(&vt_reflect_path);
    let clone_error_ = crate::path::clone_error_(&vt_reflect_path);
    let cell_ = crate::path::non_generic_type_info_cell_(&vt_reflect_path);

    let ty = &def.path;
    let ident_str = ident.to_string();

    let (type_path, module_path) = if def.is_local() {
        (
            quote! { ::core::concat!(::core::module_path!(), "::", #ident_str) },
            quote! { #OptionFP::Some(::core::module_path!()) },
        )
    } else {
        let written = def.written_path();
        let module = match crate::utils::split_type_path(&written).0 {
            Some(module) => quote! { #OptionFP::Some(#module) },
            None => quote! { #OptionFP::None },
        };
        (quote! { #written }, module)
    };

    let zero = match &def.zero {
        Some(expr) => quote! { #expr },
        None => quote! { <#ty as #DefaultFP>::default() },
    };

    quote! {
        const _: () = {
            impl #type_path_ for #ty {
                #[inline]
                fn type_path() -> &'static str {
                    #type_path
                }

                #[inline]
                fn type_name() -> &'static str {
                    #ident_str
                }

                #[inline]
                fn type_ident() -> &'static str {
                    #ident_str
                }

                #[inline]
                fn module_path() -> #OptionFP<&'static str> {
                    #module_path
                }
            }

            impl #typed_ for #ty {
                fn type_info() -> &'static #type_info_ {
                    static CELL: #cell_ = #cell_::new();
                    CELL.get_or_init(|| {
                        #type_info_::Opaque(
                            #opaque_info_::new::<Self>()
                                .with_default_fn(|| #BoxFP::new(#zero) as #BoxFP<dyn #reflect_>)
                        )
                    })
                }
            }

            impl #reflect_ for #ty {
                #[inline]
                fn reflect_kind(&self) -> #reflect_kind_ {
                    #reflect_kind_::Opaque
                }

                #[inline]
                fn reflect_ref(&self) -> #reflect_ref_<'_> {
                    #reflect_ref_::Opaque(self)
                }

                #[inline]
                fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                    #reflect_mut_::Opaque(self)
                }

                fn set(
                    &mut self,
                    value: #BoxFP<dyn #reflect_>,
                ) -> #ResultFP<(), #BoxFP<dyn #reflect_>> {
                    *self = value.take::<Self>()?;
                    #ResultFP::Ok(())
                }

                fn try_apply(&mut self, value: &dyn #reflect_) -> #ResultFP<(), #apply_error_> {
                    match value.downcast_ref::<Self>() {
                        #OptionFP::Some(value) => {
                            #CloneFP::clone_from(self, value);
                            #ResultFP::Ok(())
                        }
                        #OptionFP::None => #ResultFP::Err(#apply_error_::mismatched_types(
                            #dynamic_type_path_::reflect_type_path(value),
                            <Self as #type_path_>::type_path(),
                        )),
                    }
                }

                #[inline]
                fn reflect_clone(&self) -> #ResultFP<#BoxFP<dyn #reflect_>, #clone_error_> {
                    #ResultFP::Ok(#BoxFP::new(#CloneFP::clone(self)))
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    #PartialEqFP::eq(self, &#zero)
                }

                #[inline]
                fn reflect_debug(&self, f: &mut #FormatterFP<'_>) -> #FmtResultFP {
                    #DebugFP::fmt(self, f)
                }
            }
        };
    }
}
