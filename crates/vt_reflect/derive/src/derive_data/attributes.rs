use syn::ext::IdentExt;
use syn::{Attribute, LitStr};

use crate::{REFLECT_ATTRIBUTE_NAME, TAG_ATTRIBUTE_NAME};

// -----------------------------------------------------------------------------
// Type attributes

/// Type level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "...")]`
    pub type_path: Option<LitStr>,
    /// `#[reflect(default)]`
    pub default: bool,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if out.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path` attribute"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_type_path(&lit)?;
                    out.type_path = Some(lit);
                    Ok(())
                } else if meta.path.is_ident("default") {
                    out.default = true;
                    Ok(())
                } else if meta.path.is_ident("ignore") {
                    Err(meta.error("`ignore` can only be applied to fields"))
                } else {
                    Err(meta.error("unsupported reflect attribute, expected `type_path` or `default`"))
                }
            })?;
        }

        Ok(out)
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let path = lit.value();
    if path.is_empty() {
        return Err(syn::Error::new(lit.span(), "type path cannot be empty"));
    }
    if path.starts_with("::") {
        return Err(syn::Error::new(lit.span(), "type path must not start with `::`"));
    }
    if path.contains(['<', '>', ' ']) {
        return Err(syn::Error::new(
            lit.span(),
            "type path must not contain generics, they are appended automatically",
        ));
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Field attributes

/// Field level `#[reflect(...)]` and `#[tag(...)]` attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(ignore)]`
    pub ignore: bool,
    /// `#[tag(key = "value", ...)]` in declaration order, keys are unique.
    pub annotations: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("ignore") {
                        out.ignore = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported reflect attribute, expected `ignore`"))
                    }
                })?;
            } else if attr.path().is_ident(TAG_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    let Some(ident) = meta.path.get_ident() else {
                        return Err(meta.error("tag key must be a single identifier"));
                    };
                    let key = ident.unraw().to_string();
                    let value: LitStr = meta.value()?.parse()?;
                    // The first occurrence of a key wins.
                    if !out.annotations.iter().any(|(k, _)| *k == key) {
                        out.annotations.push((key, value));
                    }
                    Ok(())
                })?;
            }
        }

        Ok(out)
    }
}
