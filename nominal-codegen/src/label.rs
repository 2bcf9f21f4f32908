//! Type-level labels: strings spelled out as lists of unary nibbles.
//!
//! A label is the UTF-8 encoding of some text, with each byte split into its high and low nibble
//! and each nibble written as a unary number. Two labels are the same type exactly when they were
//! produced from the same text, which is what gives tags and other identified types their
//! compile-time identity.

use {
    proc_macro2::{Span, TokenStream},
    quote::quote,
    syn::{
        parse::{Parse, ParseStream},
        LitStr, Result,
    },
};

use crate::{target::krate, unary::unary_type, CompileError, Spanned};

/// The input to `label!`: either a string literal, or arbitrary tokens which are labeled by their
/// textual form with all whitespace removed.
#[derive(Debug, Clone)]
pub struct LabelInput {
    pub text: String,
    pub span: Span,
}

impl Parse for LabelInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        if input.peek(LitStr) {
            let fork = input.fork();
            let lit: LitStr = fork.parse()?;
            if fork.is_empty() {
                let _: LitStr = input.parse()?;
                return Ok(LabelInput {
                    text: lit.value(),
                    span,
                });
            }
        }
        let tokens: TokenStream = input.parse()?;
        let text = tokens
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        Ok(LabelInput { text, span })
    }
}

impl LabelInput {
    /// The label type for this input.
    pub fn to_label(&self) -> std::result::Result<TokenStream, Spanned<CompileError>> {
        label_type(&self.text, self.span)
    }
}

/// Split text into nibbles, high nibble first.
pub fn nibbles(text: &str) -> Vec<u8> {
    let mut nibbles = Vec::with_capacity(text.len() * 2);
    for byte in text.bytes() {
        nibbles.push(byte >> 4);
        nibbles.push(byte & 0x0f);
    }
    nibbles
}

/// The type-level label for `text`.
pub fn label_type(text: &str, span: Span) -> std::result::Result<TokenStream, Spanned<CompileError>> {
    if text.is_empty() {
        return Err(CompileError::EmptyLabel.at(span));
    }
    let krate = krate(span);
    Ok(nibbles(text).iter().rev().fold(quote!(()), |rest, &nibble| {
        let nibble = unary_type(nibble.into(), &krate);
        quote!((#nibble, #rest))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nibbles_are_high_then_low() {
        // 'a' is 0x61, 'Z' is 0x5a
        assert_eq!(nibbles("aZ"), vec![6, 1, 5, 10]);
    }

    #[test]
    fn empty_label_is_rejected() {
        let err = label_type("", Span::call_site()).unwrap_err();
        assert_eq!(err.inner, CompileError::EmptyLabel);
    }

    #[test]
    fn tokens_are_labeled_without_whitespace() {
        let input: LabelInput = syn::parse_str("Vec < u8 >").unwrap();
        assert_eq!(input.text, "Vec<u8>");

        let input: LabelInput = syn::parse_str("\"first\"").unwrap();
        assert_eq!(input.text, "first");
    }

    #[test]
    fn label_has_two_entries_per_byte() {
        let tokens = label_type("ab", Span::call_site()).unwrap().to_string();
        assert_eq!(tokens.matches("unary :: Z").count(), 4);
    }
}
