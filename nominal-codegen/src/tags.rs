//! Declaration of parameter tags.

use {
    proc_macro2::{Span, TokenStream},
    quote::{quote, quote_spanned},
    std::{
        collections::{hash_map::DefaultHasher, HashSet},
        hash::{Hash, Hasher},
        sync::atomic::{AtomicU64, Ordering},
    },
    syn::{
        parse::{Parse, ParseStream},
        Attribute, Ident, LitStr, Result, Token, Visibility,
    },
};

use crate::{label::label_type, target::krate, CompileError, Spanned};

/// A single tag declaration: `#[attrs] vis name (= "label")?;`
#[derive(Debug, Clone)]
pub struct TagDecl {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub label: Option<LitStr>,
}

/// The whole input of `tags!`: any number of semicolon-terminated tag declarations.
#[derive(Debug, Clone)]
pub struct TagDecls(pub Vec<TagDecl>);

impl Parse for TagDecl {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        let name = input.parse()?;
        let label = if input.peek(Token![=]) {
            let _: Token![=] = input.parse()?;
            Some(input.parse()?)
        } else {
            None
        };
        let _: Token![;] = input.parse()?;
        Ok(TagDecl {
            attrs,
            vis,
            name,
            label,
        })
    }
}

impl Parse for TagDecls {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut decls = Vec::new();
        while !input.is_empty() {
            decls.push(input.parse()?);
        }
        Ok(TagDecls(decls))
    }
}

/// Tag declarations expanded so far by this compiler process.
static DECLARED: AtomicU64 = AtomicU64::new(0);

/// A number telling this declaration of `name` apart from every other declaration in the build:
/// the declaring package and crate, the position of the name, and the order of expansion.
fn declaration_nonce(name: &Ident) -> u32 {
    let mut hasher = DefaultHasher::new();
    for var in &["CARGO_PKG_NAME", "CARGO_CRATE_NAME"] {
        std::env::var(var).unwrap_or_default().hash(&mut hasher);
    }
    format!("{:?}", name.span()).hash(&mut hasher);
    DECLARED.fetch_add(1, Ordering::Relaxed).hash(&mut hasher);
    hasher.finish() as u32
}

impl TagDecl {
    /// The readable label of this tag: the explicit label if one was given, otherwise the tag's
    /// name.
    pub fn label_text(&self) -> (String, Span) {
        match &self.label {
            Some(lit) => (lit.value(), lit.span()),
            None => (self.name.to_string(), self.name.span()),
        }
    }

    /// The text the tag's identity is spelled from. An explicit label is used as is, so every
    /// declaration naming it shares one identity. Otherwise the name is suffixed with a nonce and
    /// the tag is distinct from all others.
    pub fn identity_text(&self) -> String {
        match &self.label {
            Some(lit) => lit.value(),
            None => format!("{}#{:08x}", self.name, declaration_nonce(&self.name)),
        }
    }

    fn expand(&self) -> std::result::Result<TokenStream, Spanned<CompileError>> {
        let TagDecl {
            attrs, vis, name, ..
        } = self;
        let (text, span) = self.label_text();
        let label = label_type(&self.identity_text(), span)?;
        let krate = krate(name.span());

        Ok(quote_spanned! {name.span()=>
            #(#attrs)*
            #[allow(non_camel_case_types)]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            #vis struct #name;

            impl #krate::Identified for #name {
                type Identity = #label;
            }

            impl #krate::Tag for #name {
                const LABEL: &'static str = #text;
            }

            impl #krate::Named for #name {
                type Tag = #name;
            }

            impl #krate::Argument for #name {
                type Source = #krate::Single<bool>;

                fn into_source(self) -> Self::Source {
                    #krate::Single(true)
                }
            }

            impl ::core::ops::Not for #name {
                type Output = #krate::NamedValue<#name, bool>;

                fn not(self) -> Self::Output {
                    #krate::NamedValue::new(false)
                }
            }
        })
    }
}

impl TagDecls {
    /// Expand every declaration, rejecting any name declared twice.
    pub fn expand(&self) -> std::result::Result<TokenStream, Spanned<CompileError>> {
        let mut seen = HashSet::new();
        let mut output = quote!();
        for decl in &self.0 {
            if !seen.insert(decl.name.to_string()) {
                return Err(CompileError::DuplicateTag(decl.name.to_string()).at(decl.name.span()));
            }
            output.extend(decl.expand()?);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_visibility_attributes_and_labels() {
        let decls: TagDecls = syn::parse_str(
            r#"
            /// The first one.
            pub first;
            pub(crate) second = "app::second";
            third;
            "#,
        )
        .unwrap();
        assert_eq!(decls.0.len(), 3);
        assert_eq!(decls.0[0].attrs.len(), 1);
        assert_eq!(decls.0[0].label_text().0, "first");
        assert_eq!(decls.0[1].label_text().0, "app::second");
        assert!(matches!(decls.0[2].vis, Visibility::Inherited));
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let decls: TagDecls = syn::parse_str("pub first; first;").unwrap();
        let err = decls.expand().unwrap_err();
        assert_eq!(err.inner, CompileError::DuplicateTag("first".to_owned()));
    }

    #[test]
    fn empty_labels_are_rejected() {
        let decls: TagDecls = syn::parse_str(r#"pub first = "";"#).unwrap();
        assert_eq!(decls.expand().unwrap_err().inner, CompileError::EmptyLabel);
    }

    #[test]
    fn expansion_implements_tag_traits() {
        let decls: TagDecls = syn::parse_str("pub flag;").unwrap();
        let tokens = decls.expand().unwrap().to_string();
        assert!(tokens.contains("pub struct flag"));
        assert!(tokens.contains(":: Tag for flag"));
        assert!(tokens.contains(":: ops :: Not for flag"));
        assert!(tokens.contains("const LABEL : & 'static str = \"flag\""));
    }

    #[test]
    fn unlabeled_tags_get_distinct_identities() {
        let decls: TagDecls = syn::parse_str("pub retries;").unwrap();
        let first = decls.0[0].identity_text();
        let second = decls.0[0].identity_text();
        assert!(first.starts_with("retries#"));
        assert_eq!(first.len(), "retries#".len() + 8);
        assert_ne!(first, second);
    }

    #[test]
    fn explicit_labels_are_shared_identities() {
        let decls: TagDecls = syn::parse_str(r#"a = "app::retries"; b = "app::retries";"#).unwrap();
        assert_eq!(decls.0[0].identity_text(), "app::retries");
        assert_eq!(decls.0[0].identity_text(), decls.0[1].identity_text());
    }

    #[test]
    fn missing_semicolon_is_a_parse_error() {
        assert!(syn::parse_str::<TagDecls>("pub first").is_err());
    }
}
