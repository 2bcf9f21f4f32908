//! Concatenation of tuple-like sequences and scalars, and the insertion and erasure built on it.
//!
//! A concatenation takes a tuple of *segments*. A tuple-like segment is flattened into its
//! elements; anything else is a scalar and is kept as a single element in its place. To keep a
//! tuple-like value whole, wrap it in [`Atom`].
//!
//! The kind of sequence produced is the common factory of the tuple-like segments, so
//! concatenating two arrays makes an array and concatenating a tuple with anything makes a tuple.
//! Segments of different kinds have no common factory, and neither does a concatenation of only
//! scalars; both are type errors unless the factory is named with [`concat_into`].
//!
//! Insertion and erasure are not separate algorithms: both split the sequence with the
//! [arrangement engine](crate::arrange) and join the pieces back up with [`Splice`].
//!
//! # Examples
//!
//! ```
//! use nominal::concat::{concat, concat_into, Atom};
//! use nominal::TupleFactory;
//!
//! assert_eq!(concat(("a", (1, 2.0), "b")), ("a", 1, 2.0, "b"));
//! assert_eq!(concat(([1, 2], [3])), [1, 2, 3]);
//! assert_eq!(concat(((), 3u8)), (3,));
//! assert_eq!(concat_into::<TupleFactory, _>(([1, 2], 'x')), (1, 2, 'x'));
//! assert_eq!(concat(((1, 2), Atom((3, 4)))), (1, 2, (3, 4)));
//! ```
//!
//! Mixing kinds of sequence without naming the result is rejected:
//!
//! ```compile_fail
//! use nominal::concat::concat;
//!
//! let _ = concat(((1, 2), [3, 4]));
//! ```

use std::{marker::PhantomData, rc::Rc, sync::Arc};

use crate::{
    arrange::{ArrangeList, End, SliceArranger},
    named::{NamedArgs, NamedValue},
    tuple::{Append, Tuple},
    tuple_like::{Meet, Rebuild, Scalar, TupleLike},
    unary::{Cmp, Max, Unary, Z},
};

/// One argument of a concatenation: either the elements of a tuple-like value, or a single scalar.
///
/// Tuples and arrays are segments contributing their elements. The standard library's scalars,
/// references, and smart pointers are segments contributing themselves, and so is every type
/// deriving [`Identified`](crate::Identified). Any other sequence registered as [`TupleLike`]
/// should implement this too, to be flattened when concatenated.
pub trait Segment {
    /// The elements contributed, as an inductive list.
    type Items;

    /// The factory of this segment, or [`Scalar`] if it is not tuple-like.
    type Factory;

    /// Take the segment apart.
    fn into_items(self) -> Self::Items;
}

/// A value kept whole by concatenation, even if it is tuple-like.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Atom<T>(pub T);

impl<T> Segment for Atom<T> {
    type Items = (T, ());
    type Factory = Scalar;

    fn into_items(self) -> Self::Items {
        (self.0, ())
    }
}

/// A list of elements already taken apart from a sequence made by the factory `F`.
#[derive(Derivative)]
#[derivative(
    Debug(bound = "L: std::fmt::Debug"),
    Clone(bound = "L: Clone"),
    Copy(bound = "L: Copy"),
    PartialEq(bound = "L: PartialEq")
)]
pub struct Run<L, F> {
    /// The elements.
    pub items: L,
    factory: PhantomData<fn() -> F>,
}

impl<L, F> Run<L, F> {
    /// A run of `items`, taken from a sequence made by `F`.
    pub fn new(items: L) -> Self {
        Run {
            items,
            factory: PhantomData,
        }
    }
}

impl<L, F> Segment for Run<L, F> {
    type Items = L;
    type Factory = F;

    fn into_items(self) -> L {
        self.items
    }
}

macro_rules! scalar_segments {
    ($($t:ty),* $(,)?) => {
        $(
            impl Segment for $t {
                type Items = (Self, ());
                type Factory = Scalar;

                fn into_items(self) -> Self::Items {
                    (self, ())
                }
            }
        )*
    };
}

macro_rules! generic_scalar_segments {
    ($([$($params:tt)*] $t:ty),* $(,)?) => {
        $(
            impl<$($params)*> Segment for $t {
                type Items = (Self, ());
                type Factory = Scalar;

                fn into_items(self) -> Self::Items {
                    (self, ())
                }
            }
        )*
    };
}

scalar_segments! {
    bool, char, String,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}

generic_scalar_segments! {
    ['a, T: ?Sized] &'a T,
    ['a, T: ?Sized] &'a mut T,
    [T: ?Sized] Box<T>,
    [T: ?Sized] Rc<T>,
    [T: ?Sized] Arc<T>,
    [T] Option<T>,
    [T, E] Result<T, E>,
    [T] Vec<T>,
    [K, T] NamedValue<K, T>,
    [K, A] NamedArgs<K, A>,
}

/// Join an inductive list of segments into one list of elements.
pub trait Splice {
    /// The joined elements.
    type Items;

    /// Join them.
    fn splice(self) -> Self::Items;
}

impl Splice for () {
    type Items = ();

    fn splice(self) {}
}

impl<S: Segment, Ss: Splice> Splice for (S, Ss)
where
    S::Items: Append<Ss::Items>,
{
    type Items = <S::Items as Append<Ss::Items>>::Output;

    fn splice(self) -> Self::Items {
        self.0.into_items().append(self.1.splice())
    }
}

/// The factory common to every segment in an inductive list of segments, [`Scalar`] if none is
/// tuple-like.
pub trait CommonFactory {
    /// The common factory.
    type Factory;
}

impl CommonFactory for () {
    type Factory = Scalar;
}

impl<S: Segment, Ss: CommonFactory> CommonFactory for (S, Ss)
where
    S::Factory: Meet<Ss::Factory>,
{
    type Factory = <S::Factory as Meet<Ss::Factory>>::Output;
}

/// Concatenate a tuple of segments into a sequence made by `F`.
pub trait ConcatInto<F> {
    /// The concatenated sequence.
    type Output;

    /// Concatenate.
    fn concat_into(self) -> Self::Output;
}

impl<T, F> ConcatInto<F> for T
where
    T: Tuple,
    T::AsList: Splice,
    F: Rebuild<<T::AsList as Splice>::Items>,
{
    type Output = F::Output;

    fn concat_into(self) -> F::Output {
        F::rebuild(self.into_list().splice())
    }
}

/// Concatenate a tuple of segments into a sequence made by their common factory.
pub trait Concat {
    /// The concatenated sequence.
    type Output;

    /// Concatenate.
    fn concat(self) -> Self::Output;
}

impl<T> Concat for T
where
    T: Tuple,
    T::AsList: Splice + CommonFactory,
    <T::AsList as CommonFactory>::Factory: Rebuild<<T::AsList as Splice>::Items>,
{
    type Output =
        <<T::AsList as CommonFactory>::Factory as Rebuild<<T::AsList as Splice>::Items>>::Output;

    fn concat(self) -> Self::Output {
        <<T::AsList as CommonFactory>::Factory as Rebuild<_>>::rebuild(self.into_list().splice())
    }
}

/// Concatenate a tuple of segments, flattening tuple-like ones, into a sequence of the kind
/// common to all of them.
pub fn concat<T: Concat>(segments: T) -> T::Output {
    segments.concat()
}

/// Concatenate a tuple of segments, flattening tuple-like ones, into a sequence made by `F`.
pub fn concat_into<F, T: ConcatInto<F>>(segments: T) -> T::Output {
    segments.concat_into()
}

/// Split a list into the elements before `From` and the elements from `To` onwards, dropping
/// those in between.
///
/// Both halves are slices: bounds past the end clamp, and if `To` is before `From` nothing is
/// dropped.
pub trait Split<From, To> {
    /// The elements before `From`.
    type Before;

    /// The elements from `To` (or `From`, if later) onwards.
    type After;

    /// Split the list.
    fn split(self) -> (Self::Before, Self::After);
}

impl<L, From, To> Split<From, To> for L
where
    To: Unary,
    From: Cmp<To, To, From, From>,
    L: ArrangeList<SliceArranger<Z, From>>,
    <L as ArrangeList<SliceArranger<Z, From>>>::Rest:
        ArrangeList<SliceArranger<Max<From, To>, End>>,
{
    type Before = <L as ArrangeList<SliceArranger<Z, From>>>::Output;
    type After = <<L as ArrangeList<SliceArranger<Z, From>>>::Rest as ArrangeList<
        SliceArranger<Max<From, To>, End>,
    >>::Output;

    fn split(self) -> (Self::Before, Self::After) {
        let (before, rest) = <L as ArrangeList<SliceArranger<Z, From>>>::arrange_list(self);
        let (after, _) = <<L as ArrangeList<SliceArranger<Z, From>>>::Rest as ArrangeList<
            SliceArranger<Max<From, To>, End>,
        >>::arrange_list(rest);
        (before, after)
    }
}

/// Remove the elements at positions `From` up to (but not including) `To` from a list.
pub trait Excise<From, To> {
    /// The remaining elements.
    type Output;

    /// Remove them.
    fn excise(self) -> Self::Output;
}

impl<L, From, To> Excise<From, To> for L
where
    L: Split<From, To>,
    (Run<L::Before, Scalar>, (Run<L::After, Scalar>, ())): Splice,
{
    type Output = <(Run<L::Before, Scalar>, (Run<L::After, Scalar>, ())) as Splice>::Items;

    fn excise(self) -> Self::Output {
        let (before, after) = self.split();
        (Run::new(before), (Run::new(after), ())).splice()
    }
}

/// The segments of a sequence `T` split at `Pos` with `X` inserted between the halves.
type Inserted<T, Pos, X> = (
    Run<<<T as TupleLike>::Elements as Split<Pos, Pos>>::Before, <T as TupleLike>::Factory>,
    (
        X,
        (
            Run<<<T as TupleLike>::Elements as Split<Pos, Pos>>::After, <T as TupleLike>::Factory>,
            (),
        ),
    ),
);

fn inserted<T, Pos, X>(seq: T, x: X) -> Inserted<T, Pos, X>
where
    T: TupleLike,
    T::Elements: Split<Pos, Pos>,
{
    let (before, after) = seq.into_elements().split();
    (Run::new(before), (x, (Run::new(after), ())))
}

/// Insert `X` at position `Pos`, building the result with the factory `F`.
pub trait InsertInto<Pos, X, F>: TupleLike {
    /// The sequence with `X` inserted.
    type Output;

    /// Insert it.
    fn insert_into(self, x: X) -> Self::Output;
}

impl<T, Pos, X, F> InsertInto<Pos, X, F> for T
where
    T: TupleLike,
    T::Elements: Split<Pos, Pos>,
    Inserted<T, Pos, X>: Splice,
    F: Rebuild<<Inserted<T, Pos, X> as Splice>::Items>,
{
    type Output = F::Output;

    fn insert_into(self, x: X) -> F::Output {
        F::rebuild(inserted::<T, Pos, X>(self, x).splice())
    }
}

/// Insert `X` at position `Pos`, building the result with the factory common to the sequence and
/// `X`.
pub trait Insert<Pos, X>: TupleLike {
    /// The sequence with `X` inserted.
    type Output;

    /// Insert it.
    fn insert(self, x: X) -> Self::Output;
}

impl<T, Pos, X> Insert<Pos, X> for T
where
    T: TupleLike,
    T::Elements: Split<Pos, Pos>,
    Inserted<T, Pos, X>: Splice + CommonFactory,
    <Inserted<T, Pos, X> as CommonFactory>::Factory:
        Rebuild<<Inserted<T, Pos, X> as Splice>::Items>,
{
    type Output = <<Inserted<T, Pos, X> as CommonFactory>::Factory as Rebuild<
        <Inserted<T, Pos, X> as Splice>::Items,
    >>::Output;

    fn insert(self, x: X) -> Self::Output {
        <<Inserted<T, Pos, X> as CommonFactory>::Factory as Rebuild<_>>::rebuild(
            inserted::<T, Pos, X>(self, x).splice(),
        )
    }
}

/// Erase the elements at positions `From` up to (but not including) `To`, building the result
/// with the factory `F`.
pub trait EraseInto<From, To, F>: TupleLike {
    /// The sequence with the range erased.
    type Output;

    /// Erase it.
    fn erase_into(self) -> Self::Output;
}

impl<T, From, To, F> EraseInto<From, To, F> for T
where
    T: TupleLike,
    T::Elements: Excise<From, To>,
    F: Rebuild<<T::Elements as Excise<From, To>>::Output>,
{
    type Output = F::Output;

    fn erase_into(self) -> F::Output {
        F::rebuild(<T::Elements as Excise<From, To>>::excise(self.into_elements()))
    }
}
