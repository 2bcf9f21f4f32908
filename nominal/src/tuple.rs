//! Conversions back and forth between flat tuples and their corresponding inductive list
//! structures, and the basic operations on those lists.
//!
//! Internally, this library uses inductive type-level lists, but presents an external interface in
//! terms of tuples, for readability. The traits here convert between the two equivalent
//! representations, at the type level and at the value level.
//!
//! Tuples up to size 16 are supported, or up to size 32 with the `wide` feature.

use super::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Convert the tuple into its inductive list.
    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Convert the inductive list into its tuple.
    fn into_tuple(self) -> Self::AsTuple;
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// The placeholder for an element which has been moved out of a list, or which lies past its
/// end.
///
/// Keeping a placeholder where an element used to be means the positions of all the other
/// elements stay put, so a list can be taken apart one element at a time by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Vacant;

/// The type of the element at position `N`, or [`Vacant`] if the list is shorter than that.
pub trait TypeAt<N> {
    /// The element type.
    type Elem;
}

impl<N: Unary> TypeAt<N> for () {
    type Elem = Vacant;
}

impl<H, T> TypeAt<Z> for (H, T) {
    type Elem = H;
}

impl<N: Unary, H, T: TypeAt<N>> TypeAt<S<N>> for (H, T) {
    type Elem = T::Elem;
}

/// Move the element at position `N` out of a list, leaving [`Vacant`] in its place.
pub trait Extract<N> {
    /// The extracted element.
    type Elem;

    /// The list with the element replaced by [`Vacant`].
    type Rest;

    /// Take the element out.
    fn extract(self) -> (Self::Elem, Self::Rest);
}

impl<H, T> Extract<Z> for (H, T) {
    type Elem = H;
    type Rest = (Vacant, T);

    fn extract(self) -> (H, (Vacant, T)) {
        (self.0, (Vacant, self.1))
    }
}

impl<N: Unary, H, T: Extract<N>> Extract<S<N>> for (H, T) {
    type Elem = T::Elem;
    type Rest = (H, T::Rest);

    fn extract(self) -> (Self::Elem, Self::Rest) {
        let (elem, rest) = self.1.extract();
        (elem, (self.0, rest))
    }
}

/// Add an element to the end of a list.
pub trait Push<E> {
    /// The extended list.
    type Output;

    /// Add the element.
    fn push(self, elem: E) -> Self::Output;
}

impl<E> Push<E> for () {
    type Output = (E, ());

    fn push(self, elem: E) -> Self::Output {
        (elem, ())
    }
}

impl<E, H, T: Push<E>> Push<E> for (H, T) {
    type Output = (H, T::Output);

    fn push(self, elem: E) -> Self::Output {
        (self.0, self.1.push(elem))
    }
}

/// Join two lists, end to end.
pub trait Append<L> {
    /// The joined list.
    type Output;

    /// Join the lists.
    fn append(self, list: L) -> Self::Output;
}

impl<L> Append<L> for () {
    type Output = L;

    fn append(self, list: L) -> L {
        list
    }
}

impl<H, T: Append<L>, L> Append<L> for (H, T) {
    type Output = (H, T::Output);

    fn append(self, list: L) -> Self::Output {
        (self.0, self.1.append(list))
    }
}

#[cfg(not(feature = "wide"))]
nominal_macro::impl_tuples!(16);

#[cfg(feature = "wide")]
nominal_macro::impl_tuples!(32);
