use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

/// A string expression in generated code.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// A string that is valid at compile time.
    ///
    /// In most cases, this is a string lit, such as: `"mystring"`.
    ///
    /// But sometimes, this also includes macros, such as: `module_path!()`
    Const(TokenStream),
    /// A [string slice](str) that is borrowed for a `'static` lifetime.
    ///
    /// For example: `<T as TypePath>::type_path()`.
    Borrowed(TokenStream),
}

impl StringExpr {
    /// Creates a [constant](StringExpr::Const) expression from a string.
    pub fn from_str(string: &str) -> Self {
        Self::Const(string.to_token_stream())
    }

    /// Returns tokens for a statically borrowed [string slice](str).
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
        }
    }

    /// Concatenates expressions into an owned [`String`] expression.
    ///
    /// Used inside the initializer of a `GenericTypePathCell`.
    pub fn concat_owned<I>(iter: I, vt_reflect_path: &syn::Path) -> TokenStream
    where
        I: IntoIterator<Item = StringExpr>,
    {
        let exports_ = crate::path::macro_exports_(vt_reflect_path);
        let inner = iter.into_iter().map(StringExpr::into_borrowed);

        quote! {
            #exports_::concat(&[ #(#inner),* ])
        }
    }
}

/// Splits `"a::b::C"` into the module path `Some("a::b")` and the ident `"C"`.
pub(crate) fn split_type_path(path: &str) -> (Option<&str>, &str) {
    match path.rsplit_once("::") {
        Some((module, ident)) => (Some(module), ident),
        None => (None, path),
    }
}

#[cfg(test)]
mod tests {
    use super::split_type_path;

    #[test]
    fn split_paths() {
        assert_eq!(split_type_path("app::view::UserVo"), (Some("app::view"), "UserVo"));
        assert_eq!(split_type_path("UserVo"), (None, "UserVo"));
    }
}
