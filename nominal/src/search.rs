//! Predicate-driven search over tuple-like sequences.
//!
//! Every search is a left-to-right scan of the sequence's element types, performed by the trait
//! solver. The value-level functions are all `const fn`s that return a constant: there is nothing
//! left to do at runtime.
//!
//! # Examples
//!
//! ```
//! use nominal::predicate::{Bind1st, IsSame};
//! use nominal::search::*;
//!
//! type IsInt = Bind1st<IsSame, i32>;
//!
//! let t = (1.5f32, 2, 'c', 4);
//! assert!(contains::<IsInt, _>(&t));
//! assert_eq!(count_if::<IsInt, _>(&t), 2);
//! assert_eq!(find::<IsInt, _>(&t), 1);
//! assert_eq!(find_from::<IsInt, 2, _>(&t), 3);
//! assert_eq!(find_nth::<IsInt, 1, _>(&t), 3);
//! assert_eq!(find_nth::<IsInt, 2, _>(&t), NPOS);
//! ```

use std::marker::PhantomData;

use crate::{
    boolean::{Bool, False, True},
    predicate::Predicate,
    tuple::Extract,
    tuple_like::TupleLike,
    unary::{Cmp, Number, Reached, ToUnary, Unary, UnaryOf, S, Z},
};

/// The position reported when nothing matches.
pub const NPOS: usize = usize::MAX;

/// A type-level search result: a match at position `N`.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Found<N>(PhantomData<fn() -> N>);

/// A type-level search result: no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Missing;

/// The value-level index of a search result, [`NPOS`] if it is [`Missing`].
pub trait Position {
    /// The index.
    const INDEX: usize;
}

impl Position for Missing {
    const INDEX: usize = NPOS;
}

impl<N: Unary> Position for Found<N> {
    const INDEX: usize = N::VALUE;
}

/// Scan a list for the first element satisfying `P`, at or after position `Start`, where the
/// head of the list is at position `Here`.
pub trait Scan<P, Here, Start> {
    /// [`Found`] or [`Missing`].
    type Result;
}

impl<P, Here, Start> Scan<P, Here, Start> for () {
    type Result = Missing;
}

impl<P, H, T, Here, Start> Scan<P, Here, Start> for (H, T)
where
    P: Predicate<H>,
    Start: Unary,
    Here: Cmp<Start, False, True, True>,
    Reached<Here, Start>: Bool,
    T: Scan<P, S<Here>, Start>,
{
    type Result =
        <<Reached<Here, Start> as Bool>::And<P::Output> as Bool>::If<Found<Here>, T::Result>;
}

/// Find the `N`th (counting from zero) element satisfying `P`.
pub trait FindNth<P, N> {
    /// [`Found`] or [`Missing`].
    type Result;
}

impl<P, L: Scan<P, Z, Z>> FindNth<P, Z> for L {
    type Result = L::Result;
}

impl<P, N, L> FindNth<P, S<N>> for L
where
    L: FindNth<P, N>,
    L: Resume<P, <L as FindNth<P, N>>::Result>,
{
    type Result = <L as Resume<P, <L as FindNth<P, N>>::Result>>::Result;
}

/// Continue a search just after a previous result.
pub trait Resume<P, Prev> {
    /// [`Found`] or [`Missing`].
    type Result;
}

impl<P, L> Resume<P, Missing> for L {
    type Result = Missing;
}

impl<P, I: Unary, L: Scan<P, Z, S<I>>> Resume<P, Found<I>> for L {
    type Result = L::Result;
}

/// The number of elements of a list satisfying `P`.
pub trait CountIf<P> {
    /// The count.
    const COUNT: usize;
}

impl<P> CountIf<P> for () {
    const COUNT: usize = 0;
}

impl<P: Predicate<H>, H, T: CountIf<P>> CountIf<P> for (H, T) {
    const COUNT: usize = <P::Output as Bool>::VALUE as usize + T::COUNT;
}

/// The number of elements of `seq` satisfying `P`.
pub const fn count_if<P, T>(_seq: &T) -> usize
where
    T: TupleLike,
    T::Elements: CountIf<P>,
{
    <T::Elements as CountIf<P>>::COUNT
}

/// Whether any element of `seq` satisfies `P`.
pub const fn contains<P, T>(_seq: &T) -> bool
where
    T: TupleLike,
    T::Elements: Scan<P, Z, Z>,
    <T::Elements as Scan<P, Z, Z>>::Result: Position,
{
    <<T::Elements as Scan<P, Z, Z>>::Result as Position>::INDEX != NPOS
}

/// The index of the first element of `seq` satisfying `P`, or [`NPOS`].
pub const fn find<P, T>(_seq: &T) -> usize
where
    T: TupleLike,
    T::Elements: Scan<P, Z, Z>,
    <T::Elements as Scan<P, Z, Z>>::Result: Position,
{
    <<T::Elements as Scan<P, Z, Z>>::Result as Position>::INDEX
}

/// The index of the first element of `seq` at or after `START` satisfying `P`, or [`NPOS`].
pub const fn find_from<P, const START: usize, T>(_seq: &T) -> usize
where
    Number<START>: ToUnary,
    T: TupleLike,
    T::Elements: Scan<P, Z, UnaryOf<START>>,
    <T::Elements as Scan<P, Z, UnaryOf<START>>>::Result: Position,
{
    <<T::Elements as Scan<P, Z, UnaryOf<START>>>::Result as Position>::INDEX
}

/// The index of the `N`th (counting from zero) element of `seq` satisfying `P`, or [`NPOS`].
pub const fn find_nth<P, const N: usize, T>(_seq: &T) -> usize
where
    Number<N>: ToUnary,
    T: TupleLike,
    T::Elements: FindNth<P, UnaryOf<N>>,
    <T::Elements as FindNth<P, UnaryOf<N>>>::Result: Position,
{
    <<T::Elements as FindNth<P, UnaryOf<N>>>::Result as Position>::INDEX
}

/// Pick the element at a search result, or fall back to a default when the result is
/// [`Missing`].
pub trait PickOr<D, At> {
    /// The element's type, or the default's.
    type Output;

    /// Pick it.
    fn pick_or(self, default: D) -> Self::Output;
}

impl<L, D> PickOr<D, Missing> for L {
    type Output = D;

    fn pick_or(self, default: D) -> D {
        default
    }
}

impl<L: Extract<N>, D, N> PickOr<D, Found<N>> for L {
    type Output = L::Elem;

    fn pick_or(self, _default: D) -> L::Elem {
        self.extract().0
    }
}

/// The first element of `seq` satisfying `P`, or `default` if there is none.
///
/// The result's type is decided by the search: the matching element's type if there is one,
/// otherwise `D`.
///
/// ```
/// use nominal::predicate::{Bind1st, IsSame};
/// use nominal::search::first_or;
///
/// type IsInt = Bind1st<IsSame, i32>;
///
/// assert_eq!(first_or::<IsInt, _, _>(1, (3.0f32, 4)), 4);
/// assert_eq!(first_or::<IsInt, _, _>("none", (3.0f32, 'x')), "none");
/// ```
pub fn first_or<P, D, T>(
    default: D,
    seq: T,
) -> <T::Elements as PickOr<D, <T::Elements as Scan<P, Z, Z>>::Result>>::Output
where
    T: TupleLike,
    T::Elements: Scan<P, Z, Z> + PickOr<D, <T::Elements as Scan<P, Z, Z>>::Result>,
{
    seq.into_elements().pick_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Bind1st, IsSame, Not};
    use static_assertions::{assert_type_eq_all, const_assert_eq};

    type IsInt = Bind1st<IsSame, i32>;
    type List = (f32, (i32, (char, (i32, ()))));

    assert_type_eq_all!(<List as Scan<IsInt, Z, Z>>::Result, Found<S<Z>>);
    assert_type_eq_all!(<List as Scan<IsInt, Z, S<S<Z>>>>::Result, Found<S<S<S<Z>>>>);
    assert_type_eq_all!(<List as FindNth<IsInt, S<S<Z>>>>::Result, Missing);
    assert_type_eq_all!(<() as Scan<IsInt, Z, Z>>::Result, Missing);
    const_assert_eq!(<List as CountIf<Not<IsInt>>>::COUNT, 2);

    const T1: (i32, f32) = (1, 2.0);
    const T2: (f32, i32) = (3.0, 4);
    const A1: [i32; 3] = [5, 6, 7];

    #[test]
    fn searches_over_tuples_and_arrays() {
        assert!(contains::<IsInt, _>(&T2));
        assert_eq!(count_if::<IsInt, _>(&A1), 3);
        assert_eq!(find::<IsInt, _>(&T1), 0);
        assert_eq!(find::<IsInt, _>(&T2), 1);
        assert_eq!(find_nth::<IsInt, 0, _>(&T2), 1);
        assert_eq!(find_nth::<IsInt, 1, _>(&T2), NPOS);
        assert_eq!(find_nth::<IsInt, 2, _>(&A1), 2);
        assert_eq!(find_from::<IsInt, 1, _>(&T1), NPOS);
    }

    #[test]
    fn searches_are_constant() {
        const COUNT: usize = count_if::<IsInt, _>(&A1);
        const_assert_eq!(COUNT, 3);
        assert!(!contains::<IsInt, _>(&()));
        assert_eq!(find::<IsInt, _>(&()), NPOS);
    }

    #[test]
    fn first_or_picks_or_falls_back() {
        assert_eq!(first_or::<IsInt, _, _>(1, T2), 4);
        assert_eq!(first_or::<IsInt, _, _>(1, ()), 1);
        assert_eq!(first_or::<Not<IsInt>, _, _>(0.0f32, A1), 0.0);
    }
}
