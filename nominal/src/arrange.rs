//! The arrangement engine, from which slicing, filtering, and reversal are built.
//!
//! An *arranger* is a type-level rule which, given the index of the element currently under the
//! cursor, the length of the sequence, and the element's type, decides whether to keep that
//! element and where the cursor goes next. The engine starts the cursor at the arranger's
//! [`Origin`] and walks until the cursor [`Stop`]s or leaves the sequence, moving each kept
//! element onto the end of a new list.
//!
//! Elements are moved, not copied: each kept element is extracted from the source list and a
//! [`Vacant`](crate::tuple::Vacant) hole is left behind, so the engine also hands back whatever it
//! did not keep.
//!
//! # Examples
//!
//! An arranger which keeps every other element:
//!
//! ```
//! use nominal::arrange::{Arranger, Origin, Visit};
//! use nominal::boolean::True;
//! use nominal::unary::{S, Z};
//! use nominal::Sequence;
//!
//! struct EveryOther;
//!
//! impl<Index, Size, Elem> Arranger<Index, Size, Elem> for EveryOther {
//!     type Keep = True;
//!     type Next = Visit<S<S<Index>>>;
//! }
//!
//! impl<Size> Origin<Size> for EveryOther {
//!     type Cursor = Visit<Z>;
//! }
//!
//! assert_eq!((1, 'b', 3, 'd', 5).arrange::<EveryOther>(), (1, 3, 5));
//! ```

use std::marker::PhantomData;

use crate::{
    boolean::{False, True},
    predicate::Predicate,
    tuple::{Extract, HasLength, Push, TypeAt},
    tuple_like::{Rebuild, TupleLike},
    unary::{Below, Cmp, Unary, S, Z},
};

/// A cursor over the element at position `N`.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Visit<N>(PhantomData<fn() -> N>);

/// A cursor which has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Stop;

/// An unbounded upper limit for [`SliceArranger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct End;

/// A rule for walking over a sequence of length `Size`, deciding for the element of type `Elem`
/// at `Index` whether to keep it and where to go next.
pub trait Arranger<Index, Size, Elem> {
    /// [`True`] to keep the element, [`False`] to skip it.
    type Keep;

    /// The next cursor: [`Visit`] or [`Stop`].
    type Next;
}

/// Where an arranger starts, in a sequence of length `Size`.
pub trait Origin<Size> {
    /// The first cursor: [`Visit`] or [`Stop`].
    type Cursor;
}

/// The cursor on the element just before position `Self`, or [`Stop`] at the start.
pub trait Back {
    /// The cursor.
    type Cursor;
}

impl Back for Z {
    type Cursor = Stop;
}

impl<N> Back for S<N> {
    type Cursor = Visit<N>;
}

/// Walk the list `Self` with the arranger `A` from `Cursor`, pushing kept elements onto `Acc`.
pub trait Walk<A, Cursor, Size, Acc> {
    /// The accumulated list of kept elements.
    type Output;

    /// What is left of `Self`.
    type Rest;

    /// Walk it.
    fn walk(self, acc: Acc) -> (Self::Output, Self::Rest);
}

impl<L, A, Size, Acc> Walk<A, Stop, Size, Acc> for L {
    type Output = Acc;
    type Rest = L;

    fn walk(self, acc: Acc) -> (Acc, L) {
        (acc, self)
    }
}

impl<L, A, N, Size, Acc> Walk<A, Visit<N>, Size, Acc> for L
where
    Size: Unary,
    N: Cmp<Size, True, False, False>,
    L: Step<A, N, Size, Acc, Below<N, Size>>,
{
    type Output = <L as Step<A, N, Size, Acc, Below<N, Size>>>::Output;
    type Rest = <L as Step<A, N, Size, Acc, Below<N, Size>>>::Rest;

    fn walk(self, acc: Acc) -> (Self::Output, Self::Rest) {
        <L as Step<A, N, Size, Acc, Below<N, Size>>>::step(self, acc)
    }
}

/// One step of a walk, at position `N`, which is within the list exactly when `InRange` is
/// [`True`].
pub trait Step<A, N, Size, Acc, InRange> {
    /// The accumulated list of kept elements.
    type Output;

    /// What is left of `Self`.
    type Rest;

    /// Take the step.
    fn step(self, acc: Acc) -> (Self::Output, Self::Rest);
}

impl<L, A, N, Size, Acc> Step<A, N, Size, Acc, False> for L {
    type Output = Acc;
    type Rest = L;

    fn step(self, acc: Acc) -> (Acc, L) {
        (acc, self)
    }
}

impl<L, A, N, Size, Acc> Step<A, N, Size, Acc, True> for L
where
    L: TypeAt<N>,
    A: Arranger<N, Size, <L as TypeAt<N>>::Elem>,
    L: Gather<
        A,
        N,
        Size,
        Acc,
        <A as Arranger<N, Size, <L as TypeAt<N>>::Elem>>::Keep,
        <A as Arranger<N, Size, <L as TypeAt<N>>::Elem>>::Next,
    >,
{
    type Output = <L as Gather<
        A,
        N,
        Size,
        Acc,
        <A as Arranger<N, Size, <L as TypeAt<N>>::Elem>>::Keep,
        <A as Arranger<N, Size, <L as TypeAt<N>>::Elem>>::Next,
    >>::Output;
    type Rest = <L as Gather<
        A,
        N,
        Size,
        Acc,
        <A as Arranger<N, Size, <L as TypeAt<N>>::Elem>>::Keep,
        <A as Arranger<N, Size, <L as TypeAt<N>>::Elem>>::Next,
    >>::Rest;

    fn step(self, acc: Acc) -> (Self::Output, Self::Rest) {
        <L as Gather<
            A,
            N,
            Size,
            Acc,
            <A as Arranger<N, Size, <L as TypeAt<N>>::Elem>>::Keep,
            <A as Arranger<N, Size, <L as TypeAt<N>>::Elem>>::Next,
        >>::gather(self, acc)
    }
}

/// Keep (or skip) the element at position `N`, then continue the walk at `Next`.
pub trait Gather<A, N, Size, Acc, Keep, Next> {
    /// The accumulated list of kept elements.
    type Output;

    /// What is left of `Self`.
    type Rest;

    /// Gather the element.
    fn gather(self, acc: Acc) -> (Self::Output, Self::Rest);
}

impl<L, A, N, Size, Acc, Next> Gather<A, N, Size, Acc, False, Next> for L
where
    L: Walk<A, Next, Size, Acc>,
{
    type Output = <L as Walk<A, Next, Size, Acc>>::Output;
    type Rest = <L as Walk<A, Next, Size, Acc>>::Rest;

    fn gather(self, acc: Acc) -> (Self::Output, Self::Rest) {
        <L as Walk<A, Next, Size, Acc>>::walk(self, acc)
    }
}

impl<L, A, N, Size, Acc, Next> Gather<A, N, Size, Acc, True, Next> for L
where
    L: Extract<N>,
    Acc: Push<<L as Extract<N>>::Elem>,
    <L as Extract<N>>::Rest: Walk<A, Next, Size, <Acc as Push<<L as Extract<N>>::Elem>>::Output>,
{
    type Output = <<L as Extract<N>>::Rest as Walk<
        A,
        Next,
        Size,
        <Acc as Push<<L as Extract<N>>::Elem>>::Output,
    >>::Output;
    type Rest = <<L as Extract<N>>::Rest as Walk<
        A,
        Next,
        Size,
        <Acc as Push<<L as Extract<N>>::Elem>>::Output,
    >>::Rest;

    fn gather(self, acc: Acc) -> (Self::Output, Self::Rest) {
        let (elem, rest) = <L as Extract<N>>::extract(self);
        let acc = <Acc as Push<<L as Extract<N>>::Elem>>::push(acc, elem);
        <<L as Extract<N>>::Rest as Walk<
            A,
            Next,
            Size,
            <Acc as Push<<L as Extract<N>>::Elem>>::Output,
        >>::walk(rest, acc)
    }
}

/// Arrange a whole list with the arranger `A`, from its origin.
pub trait ArrangeList<A> {
    /// The list of kept elements, in the order visited.
    type Output;

    /// The original list, with a [`Vacant`](crate::tuple::Vacant) hole for every kept element.
    type Rest;

    /// Arrange the list.
    fn arrange_list(self) -> (Self::Output, Self::Rest);
}

impl<L, A> ArrangeList<A> for L
where
    L: HasLength,
    A: Origin<L::Length>,
    L: Walk<A, <A as Origin<L::Length>>::Cursor, L::Length, ()>,
{
    type Output = <L as Walk<A, <A as Origin<L::Length>>::Cursor, L::Length, ()>>::Output;
    type Rest = <L as Walk<A, <A as Origin<L::Length>>::Cursor, L::Length, ()>>::Rest;

    fn arrange_list(self) -> (Self::Output, Self::Rest) {
        <L as Walk<A, <A as Origin<L::Length>>::Cursor, L::Length, ()>>::walk(self, ())
    }
}

/// Arrange a tuple-like sequence with `A`, and build the result with the factory `F`.
pub trait ArrangeInto<A, F>: TupleLike {
    /// The arranged sequence.
    type Output;

    /// Arrange it.
    fn arrange_into(self) -> Self::Output;
}

impl<T, A, F> ArrangeInto<A, F> for T
where
    T: TupleLike,
    T::Elements: ArrangeList<A>,
    F: Rebuild<<T::Elements as ArrangeList<A>>::Output>,
{
    type Output = F::Output;

    fn arrange_into(self) -> F::Output {
        let (kept, _) = <T::Elements as ArrangeList<A>>::arrange_list(self.into_elements());
        F::rebuild(kept)
    }
}

/// Keep the elements at positions `From` up to (but not including) `To`, which is either a unary
/// number or [`End`].
///
/// An upper bound past the end of the sequence is clamped to it. A lower bound at or past the
/// end, or past the upper bound, keeps nothing.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct SliceArranger<From, To>(PhantomData<fn() -> (From, To)>);

impl<From, To, Index, Size, Elem> Arranger<Index, Size, Elem> for SliceArranger<From, To>
where
    To: Unary,
    Index: Cmp<To, True, False, False>,
    S<Index>: Cmp<To, Visit<S<Index>>, Stop, Stop>,
{
    type Keep = Below<Index, To>;
    type Next = <S<Index> as Cmp<To, Visit<S<Index>>, Stop, Stop>>::Result;
}

impl<From, Index, Size, Elem> Arranger<Index, Size, Elem> for SliceArranger<From, End> {
    type Keep = True;
    type Next = Visit<S<Index>>;
}

impl<From, To, Size> Origin<Size> for SliceArranger<From, To> {
    type Cursor = Visit<From>;
}

/// Keep the elements satisfying the predicate `P`, in order.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct FilterArranger<P>(PhantomData<fn() -> P>);

impl<P: Predicate<Elem>, Index, Size, Elem> Arranger<Index, Size, Elem> for FilterArranger<P> {
    type Keep = P::Output;
    type Next = Visit<S<Index>>;
}

impl<P, Size> Origin<Size> for FilterArranger<P> {
    type Cursor = Visit<Z>;
}

/// Keep every element, last to first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ReverseArranger;

impl<Index: Back, Size, Elem> Arranger<Index, Size, Elem> for ReverseArranger {
    type Keep = True;
    type Next = Index::Cursor;
}

impl<Size: Back> Origin<Size> for ReverseArranger {
    type Cursor = Size::Cursor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::Vacant;
    use crate::unary::UnaryOf;
    use static_assertions::assert_type_eq_all;

    type Abc = (u8, (u16, (u32, ())));

    assert_type_eq_all!(
        <Abc as ArrangeList<SliceArranger<UnaryOf<1>, UnaryOf<3>>>>::Output,
        (u16, (u32, ()))
    );
    assert_type_eq_all!(
        <Abc as ArrangeList<SliceArranger<UnaryOf<1>, UnaryOf<3>>>>::Rest,
        (u8, (Vacant, (Vacant, ())))
    );
    assert_type_eq_all!(<Abc as ArrangeList<ReverseArranger>>::Output, (u32, (u16, (u8, ()))));
    assert_type_eq_all!(<() as ArrangeList<ReverseArranger>>::Output, ());

    #[test]
    fn slices_clamp_at_the_end() {
        let (kept, rest) =
            ArrangeList::<SliceArranger<UnaryOf<2>, UnaryOf<9>>>::arrange_list((1, (2, (3, ()))));
        assert_eq!(kept, (3, ()));
        assert_eq!(rest, (1, (2, (Vacant, ()))));
    }

    #[test]
    fn slices_past_the_end_are_empty() {
        let ((), rest) =
            ArrangeList::<SliceArranger<UnaryOf<4>, End>>::arrange_list((1, (2, (3, ()))));
        assert_eq!(rest, (1, (2, (3, ()))));
    }

    #[test]
    fn inverted_bounds_are_empty() {
        let ((), rest) =
            ArrangeList::<SliceArranger<UnaryOf<2>, UnaryOf<1>>>::arrange_list((1, (2, (3, ()))));
        assert_eq!(rest, (1, (2, (3, ()))));
    }

    #[test]
    fn reversal_moves_every_element() {
        let (kept, rest) = ArrangeList::<ReverseArranger>::arrange_list(('a', ("b", (3, ()))));
        assert_eq!(kept, (3, ("b", ('a', ()))));
        assert_eq!(rest, (Vacant, (Vacant, (Vacant, ()))));
    }

    #[test]
    fn arranging_into_another_factory() {
        use crate::tuple_like::TupleFactory;
        let reversed = ArrangeInto::<ReverseArranger, TupleFactory>::arrange_into([1, 2, 3]);
        assert_eq!(reversed, (3, 2, 1));
    }
}
