//! Procedural macros used by and exported from the `nominal` crate.

extern crate proc_macro;

use {
    nominal_codegen::{
        identified::derive_identified,
        label::LabelInput,
        tags::TagDecls,
        tuples::{self, Arity},
        unary::unary_conversions,
    },
    proc_macro::TokenStream,
    syn::{parse_macro_input, DeriveInput},
};

/// Declare one or more parameter tags.
///
/// Each declaration is a (possibly attributed and visibility-qualified) lowercase name terminated
/// by a semicolon, optionally followed by `= "label"`.
///
/// Every declaration without a label is a tag of its own: two tags which happen to share a name,
/// declared in different places, never match each other. Declarations giving the same explicit
/// label share one identity, which is how separately declared tags can stand for the same
/// parameter.
///
/// # Examples
///
/// ```
/// use nominal::prelude::*;
///
/// tags! {
///     /// How many times to retry.
///     pub retries;
///     pub(crate) verbose;
///     timeout = "my_app::timeout";
/// }
///
/// let value = retries.equals(3);
/// assert_eq!(value.value, 3);
/// assert_eq!(<timeout as Tag>::LABEL, "my_app::timeout");
/// ```
///
/// A tag only matches itself, however it is named:
///
/// ```compile_fail
/// use nominal::prelude::*;
///
/// mod a {
///     nominal::tags! { pub retries; }
/// }
///
/// mod b {
///     nominal::tags! { pub retries; }
/// }
///
/// let _ = bind_parameters((b::retries.equals(9u8),), (a::retries.equals(0u8),));
/// ```
#[proc_macro]
pub fn tags(input: TokenStream) -> TokenStream {
    let decls = parse_macro_input!(input as TagDecls);
    match decls.expand() {
        Ok(tokens) => tokens.into(),
        Err(e) => syn::Error::from(e).to_compile_error().into(),
    }
}

/// The type-level label of some text: a string literal, or any tokens (labeled by their text with
/// whitespace removed).
///
/// # Examples
///
/// ```
/// use nominal::{label, SameLabel, boolean::{True, False}};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<label!("abc") as SameLabel<label!(abc)>>::Output, True);
/// assert_type_eq_all!(<label!("abc") as SameLabel<label!("abd")>>::Output, False);
/// ```
#[proc_macro]
pub fn label(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LabelInput);
    match input.to_label() {
        Ok(tokens) => tokens.into(),
        Err(e) => syn::Error::from(e).to_compile_error().into(),
    }
}

/// Derive [`Identified`](../nominal/trait.Identified.html) for a struct or enum, labeling it by
/// its name (or by `#[identified(label = "...")]`, if given).
#[proc_macro_derive(Identified, attributes(identified))]
pub fn identified(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_identified(input) {
        Ok(tokens) => tokens.into(),
        Err(e) => syn::Error::from(e).to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let arity = parse_macro_input!(input as Arity);
    match arity.checked() {
        Ok(max) => tuples::impl_tuples(max).into(),
        Err(e) => syn::Error::from(e).to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn impl_arrays(input: TokenStream) -> TokenStream {
    let arity = parse_macro_input!(input as Arity);
    match arity.checked() {
        Ok(max) => tuples::impl_arrays(max).into(),
        Err(e) => syn::Error::from(e).to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let arity = parse_macro_input!(input as Arity);
    unary_conversions(arity.max).into()
}
