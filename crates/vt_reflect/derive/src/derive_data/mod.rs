use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use crate::path::fp::DefaultFP;
use crate::utils::StringExpr;

mod attributes;
mod opaque_parser;

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use opaque_parser::ReflectOpaqueDef;

// -----------------------------------------------------------------------------
// ReflectMeta

/// Shared information of the type being derived.
pub(crate) struct ReflectMeta<'a> {
    vt_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            vt_reflect_path: crate::path::vt_reflect(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn vt_reflect_path(&self) -> &Path {
        &self.vt_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    /// Returns `true` if the type has type parameters.
    #[inline]
    pub fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Type path without generics.
    pub fn base_type_path(&self) -> StringExpr {
        match &self.attrs.type_path {
            Some(lit) => StringExpr::Const(quote! { #lit }),
            None => {
                let ident = self.ident.unraw().to_string();
                StringExpr::Const(quote! {
                    ::core::concat!(::core::module_path!(), "::", #ident)
                })
            }
        }
    }

    /// The short name without generics.
    pub fn type_ident(&self) -> StringExpr {
        match &self.attrs.type_path {
            Some(lit) => {
                let path = lit.value();
                StringExpr::from_str(crate::utils::split_type_path(&path).1)
            }
            None => StringExpr::from_str(&self.ident.unraw().to_string()),
        }
    }

    pub fn module_path(&self) -> Option<StringExpr> {
        match &self.attrs.type_path {
            Some(lit) => {
                let path = lit.value();
                crate::utils::split_type_path(&path).0.map(StringExpr::from_str)
            }
            None => Some(StringExpr::Const(quote! { ::core::module_path!() })),
        }
    }

    /// Pieces of the full type path, or type name if `full` is `false`.
    ///
    /// `base<T0, T1>` where each parameter is asked for its own path (or name).
    pub fn generic_pieces(&self, full: bool) -> Vec<StringExpr> {
        let type_path_ = crate::path::type_path_(&self.vt_reflect_path);
        let getter = if full { quote!(type_path) } else { quote!(type_name) };

        let mut pieces = vec![
            if full { self.base_type_path() } else { self.type_ident() },
            StringExpr::from_str("<"),
        ];
        for (index, param) in self.generics.type_params().enumerate() {
            if index > 0 {
                pieces.push(StringExpr::from_str(", "));
            }
            let ident = &param.ident;
            pieces.push(StringExpr::Borrowed(quote! {
                <#ident as #type_path_>::#getter()
            }));
        }
        pieces.push(StringExpr::from_str(">"));
        pieces
    }

    /// Splits generics for an impl block.
    ///
    /// Every type parameter gets a `Reflect + Typed` bound, `extra`
    /// predicates are appended. With `#[reflect(default)]` the type itself
    /// must implement `Default`.
    pub fn split_generics(
        &self,
        extra: impl IntoIterator<Item = TokenStream>,
    ) -> (ImplGenerics<'_>, TypeGenerics<'_>, TokenStream) {
        let reflect_ = crate::path::reflect_(&self.vt_reflect_path);
        let typed_ = crate::path::typed_(&self.vt_reflect_path);

        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        let mut generic_where_clause = quote! { where };

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        for param in self.generics.type_params() {
            let ident = &param.ident;
            generic_where_clause.extend(quote! { #ident: #reflect_ + #typed_, });
        }

        for predicate in extra {
            generic_where_clause.extend(quote! { #predicate, });
        }

        if self.attrs.default {
            let ident = self.ident;
            generic_where_clause.extend(quote! { #ident #ty_generics: #DefaultFP, });
        }

        (impl_generics, ty_generics, generic_where_clause)
    }

    fn check_generics(generics: &Generics) -> syn::Result<()> {
        if let Some(lifetime) = generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Reflect` cannot be derived for types with lifetime parameters",
            ));
        }
        if let Some(param) = generics.const_params().next() {
            return Err(syn::Error::new(
                param.span(),
                "`Reflect` cannot be derived for types with const parameters",
            ));
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// ReflectField

/// A named field of the struct being derived.
pub(crate) struct ReflectField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub exported: bool,
    pub attrs: FieldAttributes,
}

impl ReflectField<'_> {
    /// Field name as seen by reflection, `r#type` becomes `type`.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<ReflectField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.ident.span(),
                "`Reflect` can only be derived for structs",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`Reflect` can only be derived for structs with named fields",
            ));
        };

        ReflectMeta::check_generics(&ast.generics)?;
        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let Some(ident) = field.ident.as_ref() else {
                return Err(syn::Error::new(field.span(), "expected a named field"));
            };
            fields.push(ReflectField {
                ident,
                ty: &field.ty,
                exported: matches!(field.vis, syn::Visibility::Public(_)),
                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
            });
        }

        Ok(Self {
            meta: ReflectMeta::new(attrs, &ast.ident, &ast.generics),
            fields,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// All fields, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[ReflectField<'a>] {
        &self.fields
    }

    /// Fields taking part in reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &ReflectField<'a>> {
        self.fields.iter().filter(|field| !field.attrs.ignore)
    }

    /// Fields excluded with `#[reflect(ignore)]`.
    pub fn ignored_fields(&self) -> impl Iterator<Item = &ReflectField<'a>> {
        self.fields.iter().filter(|field| field.attrs.ignore)
    }
}
