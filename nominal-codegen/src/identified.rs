//! `#[derive(Identified)]`: give a user-defined type a compile-time identity.
//!
//! The identity of a non-generic type is the label of its name. The identity of a generic type
//! pairs that label with the identities of its type parameters, so that `Wrapper<u8>` and
//! `Wrapper<u16>` are told apart. Lifetime parameters do not contribute.
//!
//! A derived type is also registered as a scalar segment, so concatenation and insertion keep it
//! whole, as a single element.

use {
    proc_macro2::{Span, TokenStream},
    quote::quote,
    syn::{parse_quote, DeriveInput, GenericParam, Lit, Meta, NestedMeta},
};

use crate::{label::label_type, target::krate, CompileError, Spanned};

fn explicit_label(input: &DeriveInput) -> Result<Option<(String, Span)>, Spanned<CompileError>> {
    for attr in &input.attrs {
        if !attr.path.is_ident("identified") {
            continue;
        }
        let malformed = || CompileError::MalformedAttribute.at(attr.bracket_token.span);
        let list = match attr.parse_meta() {
            Ok(Meta::List(list)) => list,
            _ => return Err(malformed()),
        };
        for nested in list.nested {
            match nested {
                NestedMeta::Meta(Meta::NameValue(nv)) if nv.path.is_ident("label") => {
                    if let Lit::Str(lit) = nv.lit {
                        return Ok(Some((lit.value(), lit.span())));
                    }
                    return Err(malformed());
                }
                _ => return Err(malformed()),
            }
        }
    }
    Ok(None)
}

/// Expand `#[derive(Identified)]` for the given item.
pub fn derive_identified(input: DeriveInput) -> Result<TokenStream, Spanned<CompileError>> {
    let krate = krate(input.ident.span());
    let (text, span) =
        explicit_label(&input)?.unwrap_or_else(|| (input.ident.to_string(), input.ident.span()));
    let label = label_type(&text, span)?;

    let mut generics = input.generics.clone();
    let mut parameters = Vec::new();
    for param in generics.params.iter_mut() {
        match param {
            GenericParam::Type(ty) => {
                ty.bounds.push(parse_quote!(#krate::Identified));
                let ident = &ty.ident;
                parameters.push(quote!(<#ident as #krate::Identified>::Identity));
            }
            GenericParam::Const(c) => {
                return Err(CompileError::ConstParameter(c.ident.to_string()).at(c.ident.span()));
            }
            GenericParam::Lifetime(_) => {}
        }
    }

    let identity = if parameters.is_empty() {
        label
    } else {
        let arguments = parameters
            .iter()
            .rev()
            .fold(quote!(()), |rest, param| quote!((#param, #rest)));
        quote!((#label, #arguments))
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let (scalar_generics, _, scalar_where) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics #krate::Identified for #name #ty_generics #where_clause {
            type Identity = #identity;
        }

        impl #scalar_generics #krate::concat::Segment for #name #ty_generics #scalar_where {
            type Items = (Self, ());
            type Factory = #krate::Scalar;

            fn into_items(self) -> Self::Items {
                (self, ())
            }
        }
    })
}
