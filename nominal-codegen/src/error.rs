//! Errors raised while expanding the `nominal` procedural macros.

use {proc_macro2::Span, thiserror::Error};

/// A value paired with the source span it was parsed from, so that errors about it can be reported
/// at the right location.
#[derive(Debug, Clone)]
pub struct Spanned<T> {
    /// The inner value.
    pub inner: T,
    /// The span associated with the inner value.
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Attach a span to some value.
    pub fn new(inner: T, span: Span) -> Self {
        Spanned { inner, span }
    }
}

/// Everything that can go wrong while generating code for a macro invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("cannot generate implementations for arity {requested}: the maximum is {max}")]
    ArityTooLarge { requested: usize, max: usize },
    #[error("the tag `{0}` is declared more than once in this invocation")]
    DuplicateTag(String),
    #[error("a label must contain at least one character")]
    EmptyLabel,
    #[error("the const parameter `{0}` cannot take part in a type identity")]
    ConstParameter(String),
    #[error("expected `#[identified(label = \"...\")]`")]
    MalformedAttribute,
}

impl CompileError {
    /// Report this error at the given location.
    pub fn at(self, span: Span) -> Spanned<CompileError> {
        Spanned::new(self, span)
    }
}

impl From<Spanned<CompileError>> for syn::Error {
    fn from(error: Spanned<CompileError>) -> Self {
        syn::Error::new(error.span, error.inner)
    }
}
