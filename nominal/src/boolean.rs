//! Type-level booleans, the results of predicates.
//!
//! Every predicate in this crate evaluates to one of [`True`] or [`False`], and the [`Bool`]
//! trait provides the logical connectives and the type-level conditional used to combine them.

/// The type-level `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct True;

/// The type-level `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct False;

/// A type-level boolean: either [`True`] or [`False`].
///
/// # Examples
///
/// ```
/// use nominal::boolean::*;
/// use static_assertions::{assert_type_eq_all, const_assert};
///
/// assert_type_eq_all!(<True as Bool>::Not, False);
/// assert_type_eq_all!(<True as Bool>::And<False>, False);
/// assert_type_eq_all!(<False as Bool>::Or<True>, True);
/// assert_type_eq_all!(<False as Bool>::If<u8, u16>, u16);
/// const_assert!(<True as Bool>::VALUE);
/// ```
pub trait Bool: sealed::Bool + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level boolean.
    const VALUE: bool;

    /// Logical negation.
    type Not: Bool;

    /// Logical conjunction.
    type And<B: Bool>: Bool;

    /// Logical disjunction.
    type Or<B: Bool>: Bool;

    /// `Then` if this is [`True`], `Else` if this is [`False`].
    type If<Then, Else>;
}

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
    type If<Then, Else> = Then;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
    type If<Then, Else> = Else;
}

mod sealed {
    pub trait Bool: 'static {}
    impl Bool for super::True {}
    impl Bool for super::False {}
}
