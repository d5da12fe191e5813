use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, Path, Token, parenthesized, token};

/// Input of `impl_reflect_opaque!`.
///
/// ```ignore
/// ::core::time::Duration
/// ::std::time::SystemTime(zero = ::std::time::UNIX_EPOCH)
/// ```
pub(crate) struct ReflectOpaqueDef {
    pub path: Path,
    pub zero: Option<Expr>,
}

impl Parse for ReflectOpaqueDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path = input.call(Path::parse_mod_style)?;

        let zero = if input.peek(token::Paren) {
            let content;
            parenthesized!(content in input);
            let key: Ident = content.parse()?;
            if key != "zero" {
                return Err(syn::Error::new(key.span(), "expected `zero = ...`"));
            }
            content.parse::<Token![=]>()?;
            Some(content.parse::<Expr>()?)
        } else {
            None
        };

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after the opaque type"));
        }

        Ok(Self { path, zero })
    }
}

impl ReflectOpaqueDef {
    /// Returns `true` if the path must be resolved against `module_path!()`.
    pub fn is_local(&self) -> bool {
        if self.path.leading_colon.is_some() {
            return false;
        }
        match self.path.segments.first() {
            Some(first) => {
                self.path.segments.len() == 1
                    || first.ident == "crate"
                    || first.ident == "self"
                    || first.ident == "super"
            }
            None => true,
        }
    }

    /// The path as written, without the leading `::`.
    pub fn written_path(&self) -> String {
        let segments: Vec<String> = self
            .path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        segments.join("::")
    }

    pub fn ident(&self) -> Option<&Ident> {
        self.path.segments.last().map(|segment| &segment.ident)
    }
}

#[cfg(test)]
mod tests {
    use super::ReflectOpaqueDef;

    #[test]
    fn parse_with_zero() {
        let def: ReflectOpaqueDef =
            syn::parse_str("::std::time::SystemTime(zero = ::std::time::UNIX_EPOCH)").unwrap();
        assert!(!def.is_local());
        assert!(def.zero.is_some());
        assert_eq!(def.written_path(), "std::time::SystemTime");
        assert_eq!(def.ident().unwrap(), "SystemTime");
    }

    #[test]
    fn parse_local() {
        let def: ReflectOpaqueDef = syn::parse_str("Money").unwrap();
        assert!(def.is_local());
        assert!(def.zero.is_none());

        let def: ReflectOpaqueDef = syn::parse_str("crate::money::Money").unwrap();
        assert!(def.is_local());
    }

    #[test]
    fn reject_unknown_key() {
        assert!(syn::parse_str::<ReflectOpaqueDef>("Money(default = 1)").is_err());
        assert!(syn::parse_str::<ReflectOpaqueDef>("Money extra").is_err());
    }
}
