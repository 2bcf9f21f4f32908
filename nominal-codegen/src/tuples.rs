//! Per-arity trait implementations for tuples and arrays.
//!
//! Rust has no variadic generics, so every trait which must hold for "all tuples" or "all arrays"
//! is implemented once per length, up to some maximum arity. These functions generate those
//! implementations.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote},
    syn::{
        parse::{Parse, ParseStream},
        Ident, Index, LitInt, Result,
    },
};

use crate::{target::krate, unary::unary_type, CompileError, Spanned};

/// The largest arity for which implementations may be generated.
pub const MAX_ARITY: usize = 64;

/// The input to the per-arity generators: a single integer literal giving the maximum arity.
#[derive(Debug, Clone, Copy)]
pub struct Arity {
    pub max: usize,
    pub span: Span,
}

impl Parse for Arity {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit: LitInt = input.parse()?;
        Ok(Arity {
            max: lit.base10_parse()?,
            span: lit.span(),
        })
    }
}

impl Arity {
    /// Check that this arity is within bounds.
    pub fn checked(self) -> std::result::Result<usize, Spanned<CompileError>> {
        if self.max > MAX_ARITY {
            Err(CompileError::ArityTooLarge {
                requested: self.max,
                max: MAX_ARITY,
            }
            .at(self.span))
        } else {
            Ok(self.max)
        }
    }
}

fn idents(prefix: &str, count: usize) -> Vec<Ident> {
    (0..count).map(|i| format_ident!("{}{}", prefix, i)).collect()
}

/// Nest a sequence of items into an inductive list: `(a, (b, (c, ())))`.
fn nest<T: quote::ToTokens>(items: &[T]) -> TokenStream {
    items
        .iter()
        .rev()
        .fold(quote!(()), |rest, item| quote!((#item, #rest)))
}

/// Implementations of the tuple-list conversions, tuple-likeness, concatenation, positional access,
/// element-wise construction, and parameter-list handling for every tuple of size `0..=max`.
pub fn impl_tuples(max: usize) -> TokenStream {
    let krate = krate(Span::call_site());
    let mut impls = TokenStream::new();

    for arity in 0..=max {
        let ts = idents("T", arity);
        let vs = idents("t", arity);
        let list = nest(&ts);
        let list_pattern = nest(&vs);

        impls.extend(quote! {
            impl<#(#ts),*> #krate::tuple::Tuple for (#(#ts,)*) {
                type AsList = #list;

                #[allow(clippy::unused_unit)]
                fn into_list(self) -> Self::AsList {
                    let (#(#vs,)*) = self;
                    #list_pattern
                }
            }

            impl<#(#ts),*> #krate::tuple::List for #list {
                type AsTuple = (#(#ts,)*);

                #[allow(clippy::unused_unit)]
                fn into_tuple(self) -> Self::AsTuple {
                    let #list_pattern = self;
                    (#(#vs,)*)
                }
            }

            impl<#(#ts),*> #krate::TupleLike for (#(#ts,)*) {
                type Elements = #list;
                type Factory = #krate::TupleFactory;

                fn into_elements(self) -> Self::Elements {
                    #krate::tuple::Tuple::into_list(self)
                }
            }

            impl<#(#ts),*> #krate::concat::Segment for (#(#ts,)*) {
                type Items = #list;
                type Factory = #krate::TupleFactory;

                fn into_items(self) -> Self::Items {
                    #krate::tuple::Tuple::into_list(self)
                }
            }
        });

        for (i, t) in ts.iter().enumerate() {
            let index = unary_type(i, &krate);
            let field = Index::from(i);
            impls.extend(quote! {
                impl<#(#ts),*> #krate::TupleAt<#index> for (#(#ts,)*) {
                    type Elem = #t;

                    fn at(&self) -> &#t {
                        &self.#field
                    }

                    fn at_mut(&mut self) -> &mut #t {
                        &mut self.#field
                    }

                    fn into_at(self) -> #t {
                        self.#field
                    }
                }
            });
        }

        let args = idents("A", arity);
        let fields = (0..arity).map(Index::from);
        impls.extend(quote! {
            impl<#(#ts,)* #(#args),*> #krate::FromElements<(#(#args,)*)> for (#(#ts,)*)
            where
                #(#ts: ::core::convert::From<#args>,)*
            {
                #[allow(unused_variables, clippy::unused_unit)]
                fn from_elements(args: (#(#args,)*)) -> Self {
                    (#(<#ts as ::core::convert::From<#args>>::from(args.#fields),)*)
                }
            }
        });

        let ps = idents("P", arity);
        let bs = idents("b", arity);
        let param_list = nest(&ps);
        let bound_pattern = nest(&bs);
        impls.extend(quote! {
            impl<#(#ps: #krate::Parameter),*> #krate::Parameters for (#(#ps,)*) {
                type List = #param_list;
                type Bound = (
                    #(#krate::NamedValue<
                        <#ps as #krate::Named>::Tag,
                        <#ps as #krate::Parameter>::Value,
                    >,)*
                );

                fn into_parameter_list(self) -> Self::List {
                    #krate::tuple::Tuple::into_list(self)
                }

                #[allow(clippy::unused_unit)]
                fn finish(bound: <Self::List as #krate::ParameterList>::Bound) -> Self::Bound {
                    let #bound_pattern = bound;
                    (#(#bs,)*)
                }
            }
        });
    }

    impls
}

/// Implementations of tuple-likeness, concatenation, positional access, and element-wise
/// construction for every array of length `0..=max`, and reconstruction through the array factory
/// for every non-empty length.
pub fn impl_arrays(max: usize) -> TokenStream {
    let krate = krate(Span::call_site());
    let mut impls = TokenStream::new();

    for len in 0..=max {
        let ts: Vec<Ident> = (0..len).map(|_| format_ident!("T")).collect();
        let vs = idents("t", len);
        let list = nest(&ts);
        let list_pattern = nest(&vs);

        impls.extend(quote! {
            impl<T> #krate::TupleLike for [T; #len] {
                type Elements = #list;
                type Factory = #krate::ArrayFactory;

                #[allow(clippy::unused_unit)]
                fn into_elements(self) -> Self::Elements {
                    let [#(#vs),*] = self;
                    #list_pattern
                }
            }

            impl<T> #krate::concat::Segment for [T; #len] {
                type Items = #list;
                type Factory = #krate::ArrayFactory;

                fn into_items(self) -> Self::Items {
                    #krate::TupleLike::into_elements(self)
                }
            }
        });

        let args = idents("A", len);
        impls.extend(quote! {
            impl<T, #(#args),*> #krate::FromElements<(#(#args,)*)> for [T; #len]
            where
                #(T: ::core::convert::From<#args>,)*
            {
                #[allow(unused_variables)]
                fn from_elements((#(#vs,)*): (#(#args,)*)) -> Self {
                    [#(<T as ::core::convert::From<#args>>::from(#vs)),*]
                }
            }
        });

        if len > 0 {
            impls.extend(quote! {
                impl<T> #krate::Rebuild<#list> for #krate::ArrayFactory {
                    type Output = [T; #len];

                    fn rebuild(list: #list) -> Self::Output {
                        let #list_pattern = list;
                        [#(#vs),*]
                    }
                }
            });
        }

        for i in 0..len {
            let index = unary_type(i, &krate);
            let pattern = (0..len).map(|j| if i == j { quote!(elem) } else { quote!(_) });
            impls.extend(quote! {
                impl<T> #krate::TupleAt<#index> for [T; #len] {
                    type Elem = T;

                    fn at(&self) -> &T {
                        &self[#i]
                    }

                    fn at_mut(&mut self) -> &mut T {
                        &mut self[#i]
                    }

                    fn into_at(self) -> T {
                        let [#(#pattern),*] = self;
                        elem
                    }
                }
            });
        }
    }

    impls
}
