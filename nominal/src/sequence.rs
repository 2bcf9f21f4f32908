//! Method syntax for the tuple algebra.
//!
//! Every operation comes in two forms: one building the result with the sequence's own factory,
//! so that slicing an array makes an array, and an `_into` form naming the factory to use
//! instead. Positions are ordinary `const` generics.
//!
//! # Examples
//!
//! ```
//! use nominal::{Sequence, TupleFactory};
//! use nominal::predicate::{Bind1st, IsSame, Not};
//!
//! let t = (1u8, 'a', 2.5f64, "b");
//! assert_eq!(t.slice::<1, 3>(), ('a', 2.5));
//! assert_eq!(t.slice_from::<2>(), (2.5, "b"));
//! assert_eq!(t.filter::<Not<Bind1st<IsSame, char>>>(), (1, 2.5, "b"));
//! assert_eq!(t.reverse(), ("b", 2.5, 'a', 1));
//! assert_eq!(t.insert::<2, _>((true, false)), (1, 'a', true, false, 2.5, "b"));
//! assert_eq!(t.erase::<0>(), ('a', 2.5, "b"));
//! assert_eq!(t.erase_range::<1, 3>(), (1, "b"));
//!
//! let a = [1u8, 2, 3, 4];
//! assert_eq!(a.slice::<1, 9>(), [2, 3, 4]);
//! assert_eq!(a.reverse_into::<TupleFactory>(), (4, 3, 2, 1));
//! ```

use crate::{
    arrange::{ArrangeInto, End, FilterArranger, ReverseArranger, SliceArranger},
    concat::{EraseInto, Insert, InsertInto},
    tuple_like::TupleLike,
    unary::{Number, ToUnary, UnaryOf, S},
};

type Slice<const FROM: usize, const TO: usize> = SliceArranger<UnaryOf<FROM>, UnaryOf<TO>>;

type SliceFrom<const FROM: usize> = SliceArranger<UnaryOf<FROM>, End>;

/// The operations of the tuple algebra, as methods on every tuple-like sequence.
pub trait Sequence: TupleLike {
    /// Arrange the sequence with the arranger `A`.
    fn arrange<A>(self) -> <Self as ArrangeInto<A, <Self as TupleLike>::Factory>>::Output
    where
        Self: ArrangeInto<A, <Self as TupleLike>::Factory>,
    {
        <Self as ArrangeInto<A, <Self as TupleLike>::Factory>>::arrange_into(self)
    }

    /// Arrange the sequence with the arranger `A`, into a sequence made by `F`.
    fn arrange_into<F, A>(self) -> <Self as ArrangeInto<A, F>>::Output
    where
        Self: ArrangeInto<A, F>,
    {
        <Self as ArrangeInto<A, F>>::arrange_into(self)
    }

    /// The elements at positions `FROM` up to (but not including) `TO`.
    ///
    /// `TO` is clamped to the length of the sequence. If `FROM` is at or past the end, or past
    /// `TO`, the slice is empty.
    fn slice<const FROM: usize, const TO: usize>(
        self,
    ) -> <Self as ArrangeInto<Slice<FROM, TO>, <Self as TupleLike>::Factory>>::Output
    where
        Number<FROM>: ToUnary,
        Number<TO>: ToUnary,
        Self: ArrangeInto<Slice<FROM, TO>, <Self as TupleLike>::Factory>,
    {
        <Self as ArrangeInto<Slice<FROM, TO>, <Self as TupleLike>::Factory>>::arrange_into(self)
    }

    /// [`slice`](Sequence::slice), into a sequence made by `F`.
    fn slice_into<F, const FROM: usize, const TO: usize>(
        self,
    ) -> <Self as ArrangeInto<Slice<FROM, TO>, F>>::Output
    where
        Number<FROM>: ToUnary,
        Number<TO>: ToUnary,
        Self: ArrangeInto<Slice<FROM, TO>, F>,
    {
        <Self as ArrangeInto<Slice<FROM, TO>, F>>::arrange_into(self)
    }

    /// The elements from position `FROM` onwards.
    fn slice_from<const FROM: usize>(
        self,
    ) -> <Self as ArrangeInto<SliceFrom<FROM>, <Self as TupleLike>::Factory>>::Output
    where
        Number<FROM>: ToUnary,
        Self: ArrangeInto<SliceFrom<FROM>, <Self as TupleLike>::Factory>,
    {
        <Self as ArrangeInto<SliceFrom<FROM>, <Self as TupleLike>::Factory>>::arrange_into(self)
    }

    /// [`slice_from`](Sequence::slice_from), into a sequence made by `F`.
    fn slice_from_into<F, const FROM: usize>(
        self,
    ) -> <Self as ArrangeInto<SliceFrom<FROM>, F>>::Output
    where
        Number<FROM>: ToUnary,
        Self: ArrangeInto<SliceFrom<FROM>, F>,
    {
        <Self as ArrangeInto<SliceFrom<FROM>, F>>::arrange_into(self)
    }

    /// The elements satisfying the predicate `P`, in order.
    fn filter<P>(self) -> <Self as ArrangeInto<FilterArranger<P>, <Self as TupleLike>::Factory>>::Output
    where
        Self: ArrangeInto<FilterArranger<P>, <Self as TupleLike>::Factory>,
    {
        <Self as ArrangeInto<FilterArranger<P>, <Self as TupleLike>::Factory>>::arrange_into(self)
    }

    /// [`filter`](Sequence::filter), into a sequence made by `F`.
    fn filter_into<F, P>(self) -> <Self as ArrangeInto<FilterArranger<P>, F>>::Output
    where
        Self: ArrangeInto<FilterArranger<P>, F>,
    {
        <Self as ArrangeInto<FilterArranger<P>, F>>::arrange_into(self)
    }

    /// The elements, last to first.
    fn reverse(self) -> <Self as ArrangeInto<ReverseArranger, <Self as TupleLike>::Factory>>::Output
    where
        Self: ArrangeInto<ReverseArranger, <Self as TupleLike>::Factory>,
    {
        <Self as ArrangeInto<ReverseArranger, <Self as TupleLike>::Factory>>::arrange_into(self)
    }

    /// [`reverse`](Sequence::reverse), into a sequence made by `F`.
    fn reverse_into<F>(self) -> <Self as ArrangeInto<ReverseArranger, F>>::Output
    where
        Self: ArrangeInto<ReverseArranger, F>,
    {
        <Self as ArrangeInto<ReverseArranger, F>>::arrange_into(self)
    }

    /// Insert `x` before position `POS`, flattening it if it is tuple-like.
    ///
    /// The result is made by the factory common to the sequence and `x`.
    fn insert<const POS: usize, X>(self, x: X) -> <Self as Insert<UnaryOf<POS>, X>>::Output
    where
        Number<POS>: ToUnary,
        Self: Insert<UnaryOf<POS>, X>,
    {
        <Self as Insert<UnaryOf<POS>, X>>::insert(self, x)
    }

    /// [`insert`](Sequence::insert), into a sequence made by `F`.
    fn insert_into<F, const POS: usize, X>(
        self,
        x: X,
    ) -> <Self as InsertInto<UnaryOf<POS>, X, F>>::Output
    where
        Number<POS>: ToUnary,
        Self: InsertInto<UnaryOf<POS>, X, F>,
    {
        <Self as InsertInto<UnaryOf<POS>, X, F>>::insert_into(self, x)
    }

    /// Remove the element at position `IX`. Past the end, this does nothing.
    fn erase<const IX: usize>(
        self,
    ) -> <Self as EraseInto<UnaryOf<IX>, S<UnaryOf<IX>>, <Self as TupleLike>::Factory>>::Output
    where
        Number<IX>: ToUnary,
        Self: EraseInto<UnaryOf<IX>, S<UnaryOf<IX>>, <Self as TupleLike>::Factory>,
    {
        <Self as EraseInto<UnaryOf<IX>, S<UnaryOf<IX>>, <Self as TupleLike>::Factory>>::erase_into(self)
    }

    /// [`erase`](Sequence::erase), into a sequence made by `F`.
    fn erase_into<F, const IX: usize>(
        self,
    ) -> <Self as EraseInto<UnaryOf<IX>, S<UnaryOf<IX>>, F>>::Output
    where
        Number<IX>: ToUnary,
        Self: EraseInto<UnaryOf<IX>, S<UnaryOf<IX>>, F>,
    {
        <Self as EraseInto<UnaryOf<IX>, S<UnaryOf<IX>>, F>>::erase_into(self)
    }

    /// Remove the elements at positions `FROM` up to (but not including) `TO`.
    fn erase_range<const FROM: usize, const TO: usize>(
        self,
    ) -> <Self as EraseInto<UnaryOf<FROM>, UnaryOf<TO>, <Self as TupleLike>::Factory>>::Output
    where
        Number<FROM>: ToUnary,
        Number<TO>: ToUnary,
        Self: EraseInto<UnaryOf<FROM>, UnaryOf<TO>, <Self as TupleLike>::Factory>,
    {
        <Self as EraseInto<UnaryOf<FROM>, UnaryOf<TO>, <Self as TupleLike>::Factory>>::erase_into(self)
    }

    /// [`erase_range`](Sequence::erase_range), into a sequence made by `F`.
    fn erase_range_into<F, const FROM: usize, const TO: usize>(
        self,
    ) -> <Self as EraseInto<UnaryOf<FROM>, UnaryOf<TO>, F>>::Output
    where
        Number<FROM>: ToUnary,
        Number<TO>: ToUnary,
        Self: EraseInto<UnaryOf<FROM>, UnaryOf<TO>, F>,
    {
        <Self as EraseInto<UnaryOf<FROM>, UnaryOf<TO>, F>>::erase_into(self)
    }
}

impl<T: TupleLike> Sequence for T {}
