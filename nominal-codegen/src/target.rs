//! The path under which generated code refers to the `nominal` library.

use {lazy_static::lazy_static, proc_macro2::Span, proc_macro_crate::FoundCrate, syn::Ident};

lazy_static! {
    static ref CRATE_NAME: String = match proc_macro_crate::crate_name("nominal") {
        Ok(FoundCrate::Name(name)) => name,
        // Inside `nominal` itself (including its doctests and integration tests), the name still
        // resolves, through `extern crate self as nominal;` at the crate root.
        Ok(FoundCrate::Itself) | Err(_) => "nominal".to_owned(),
    };
}

/// The identifier naming the `nominal` crate at the invocation site, spanned at `span`.
pub fn krate(span: Span) -> Ident {
    Ident::new(&**CRATE_NAME, span)
}
