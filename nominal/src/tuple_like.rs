//! Registration of sequence types with the tuple algebra.
//!
//! A type takes part in the algebra by implementing [`TupleLike`], which says how to take it apart
//! into an inductive list of its elements, and which *factory* knows how to build "the same kind"
//! of sequence back up from such a list. Tuples and fixed-size arrays are registered here. Other
//! types are scalars, which the algebra treats as single opaque elements: the standard library's
//! scalars and pointers are registered as such in [`concat`](crate::concat), and deriving
//! [`Identified`](crate::Identified) registers a type of your own.
//!
//! # Examples
//!
//! Registering a new kind of sequence means implementing [`TupleLike`] for it, and [`Rebuild`] for
//! its factory:
//!
//! ```
//! use nominal::{Factory, Rebuild, Sequence, TupleLike};
//!
//! #[derive(Debug, PartialEq)]
//! struct Pair<A, B>(A, B);
//!
//! struct PairFactory;
//! impl Factory for PairFactory {}
//!
//! impl<A, B> TupleLike for Pair<A, B> {
//!     type Elements = (A, (B, ()));
//!     type Factory = PairFactory;
//!
//!     fn into_elements(self) -> Self::Elements {
//!         (self.0, (self.1, ()))
//!     }
//! }
//!
//! impl<A, B> Rebuild<(A, (B, ()))> for PairFactory {
//!     type Output = Pair<A, B>;
//!
//!     fn rebuild((a, (b, ())): (A, (B, ()))) -> Pair<A, B> {
//!         Pair(a, b)
//!     }
//! }
//!
//! assert_eq!(Pair(1, "one").reverse(), Pair("one", 1));
//! ```
//!
//! To flatten it in concatenations as well, it is also a [`Segment`](crate::concat::Segment):
//!
//! ```
//! # use nominal::{Factory, Rebuild, TupleLike};
//! # struct Pair<A, B>(A, B);
//! # struct PairFactory;
//! # impl Factory for PairFactory {}
//! # impl<A, B> TupleLike for Pair<A, B> {
//! #     type Elements = (A, (B, ()));
//! #     type Factory = PairFactory;
//! #     fn into_elements(self) -> Self::Elements {
//! #         (self.0, (self.1, ()))
//! #     }
//! # }
//! use nominal::{concat::Segment, concat_into, TupleFactory};
//!
//! impl<A, B> Segment for Pair<A, B> {
//!     type Items = (A, (B, ()));
//!     type Factory = PairFactory;
//!
//!     fn into_items(self) -> Self::Items {
//!         self.into_elements()
//!     }
//! }
//!
//! assert_eq!(concat_into::<TupleFactory, _>((Pair(1, 2), 'c')), (1, 2, 'c'));
//! ```

use crate::tuple::List;

/// A fixed-length heterogeneous sequence that the tuple algebra can take apart and rebuild.
pub trait TupleLike: Sized {
    /// The elements, as an inductive list.
    type Elements;

    /// The factory which rebuilds this kind of sequence from a list of elements.
    type Factory;

    /// Take the sequence apart into its elements.
    fn into_elements(self) -> Self::Elements;
}

/// A marker for factories of tuple-like sequences. Every factory except [`Scalar`] implements
/// this.
pub trait Factory {}

/// Build a sequence from an inductive list of elements.
pub trait Rebuild<L> {
    /// The sequence built.
    type Output;

    /// Build it.
    fn rebuild(list: L) -> Self::Output;
}

/// The factory for tuples, which can hold any list of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TupleFactory;

/// The factory for fixed-size arrays, which can hold any non-empty list of elements that all have
/// the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ArrayFactory;

/// The "factory" of things that are not tuple-like, which cannot build anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Scalar;

impl Factory for TupleFactory {}
impl Factory for ArrayFactory {}

impl<L: List> Rebuild<L> for TupleFactory {
    type Output = L::AsTuple;

    fn rebuild(list: L) -> Self::Output {
        list.into_tuple()
    }
}

/// The factory common to `Self` and `F`.
///
/// [`Scalar`] is neutral: it meets any factory at that factory. Any factory meets itself at
/// itself. There is no meeting point for two different factories, so combining sequences of
/// different kinds without naming the result's kind is a type error.
pub trait Meet<F> {
    /// The common factory.
    type Output;
}

impl Meet<Scalar> for Scalar {
    type Output = Scalar;
}

impl<F: Factory> Meet<F> for Scalar {
    type Output = F;
}

impl<F: Factory> Meet<Scalar> for F {
    type Output = F;
}

impl<F: Factory> Meet<F> for F {
    type Output = F;
}

/// Access to the element at the unary position `I` of a tuple-like sequence.
pub trait TupleAt<I> {
    /// The element type.
    type Elem;

    /// Borrow the element.
    fn at(&self) -> &Self::Elem;

    /// Mutably borrow the element.
    fn at_mut(&mut self) -> &mut Self::Elem;

    /// Move the element out, dropping the rest.
    fn into_at(self) -> Self::Elem;
}

#[cfg(not(feature = "wide"))]
nominal_macro::impl_arrays!(16);

#[cfg(feature = "wide")]
nominal_macro::impl_arrays!(32);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    assert_type_eq_all!(<Scalar as Meet<Scalar>>::Output, Scalar);
    assert_type_eq_all!(<Scalar as Meet<TupleFactory>>::Output, TupleFactory);
    assert_type_eq_all!(<ArrayFactory as Meet<Scalar>>::Output, ArrayFactory);
    assert_type_eq_all!(<TupleFactory as Meet<TupleFactory>>::Output, TupleFactory);
    assert_not_impl_any!(TupleFactory: Meet<ArrayFactory>);
    assert_not_impl_any!(ArrayFactory: Rebuild<()>);
    assert_not_impl_any!(ArrayFactory: Rebuild<(u8, (u16, ()))>);
    assert_impl_all!(ArrayFactory: Rebuild<(u8, (u8, ()))>);
    assert_type_eq_all!(<[u8; 2] as TupleLike>::Elements, (u8, (u8, ())));
    assert_type_eq_all!(<(u8, char) as TupleLike>::Factory, TupleFactory);

    #[test]
    fn arrays_come_apart_and_go_back_together() {
        let list = [1, 2, 3].into_elements();
        assert_eq!(list, (1, (2, (3, ()))));
        assert_eq!(ArrayFactory::rebuild(list), [1, 2, 3]);
        assert_eq!(TupleFactory::rebuild(list), (1, 2, 3));
    }

    #[test]
    fn positional_access() {
        let mut pair = (1u8, String::from("two"));
        assert_eq!(*TupleAt::<S<Z>>::at(&pair), "two");
        *TupleAt::<Z>::at_mut(&mut pair) = 7;
        assert_eq!(TupleAt::<Z>::into_at(pair), 7);

        let array = [String::from("a"), String::from("b")];
        assert_eq!(TupleAt::<S<Z>>::into_at(array), "b");
    }
}
