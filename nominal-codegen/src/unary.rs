//! Unary type-level numbers, as tokens.

use {
    proc_macro2::{Span, TokenStream},
    quote::quote,
    syn::Ident,
};

use crate::target::krate;

/// The unary representation of `n`: `S<S<...Z>>` with `n` successors.
pub fn unary_type(n: usize, krate: &Ident) -> TokenStream {
    let mut tokens = quote!(#krate::unary::Z);
    for _ in 0..n {
        tokens = quote!(#krate::unary::S<#tokens>);
    }
    tokens
}

/// Conversions between `Number<N>` and its unary representation, for every `N` up to and
/// including `max`.
pub fn unary_conversions(max: usize) -> TokenStream {
    let krate = krate(Span::call_site());
    let mut impls = TokenStream::new();
    for n in 0..=max {
        let unary = unary_type(n, &krate);
        impls.extend(quote! {
            impl #krate::unary::ToConstant for #unary {
                type AsConstant = #krate::unary::Number<#n>;
            }

            impl #krate::unary::ToUnary for #krate::unary::Number<#n> {
                type AsUnary = #unary;
            }
        });
    }
    impls
}
