//! Natural numbers at the type level: [`Z`] is zero and [`S<N>`](S) is one more than `N`.
//!
//! Every position and length the tuple algebra handles is one of these, so indexing, slicing and
//! searching are settled while type checking. User-facing methods still take ordinary `const`
//! generic indices; [`UnaryOf`] turns such an index into its unary form.
//!
//! The walks over a sequence only ever need to ask one question of a position: how does it
//! compare to a bound? [`Cmp`] answers it, and [`Below`], [`Reached`] and [`Max`] name the
//! answers the walks use.

use crate::boolean::{False, True};

/// Zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// One more than `N`.
///
/// ```
/// use nominal::unary::{Unary, S, Z};
///
/// assert_eq!(<S<S<Z>>>::VALUE, 2);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// The unary number for the constant `N`, defined for `N` from 0 to 64.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// A type-level natural number.
///
/// ```
/// use nominal::unary::{Unary, UnaryOf};
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<17>>::VALUE, 17);
/// assert_eq!(<UnaryOf<64>>::VALUE, 64);
/// ```
pub trait Unary: sealed::Natural + Copy + Default + Send + Sync + 'static {
    /// The number as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Compare `Self` with `M`, choosing `IfLess`, `IfEqual` or `IfGreater` accordingly.
///
/// The number being compared is always `Self`. While it is still unknown the comparison stays
/// pending rather than being unfolded, so it can be used in bounds over positions that are only
/// settled later, such as `UnaryOf<FROM>` inside a generic method.
///
/// ```
/// use nominal::unary::{Cmp, UnaryOf};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<UnaryOf<3> as Cmp<UnaryOf<5>, u8, u16, u32>>::Result, u8);
/// assert_type_eq_all!(<UnaryOf<5> as Cmp<UnaryOf<5>, u8, u16, u32>>::Result, u16);
/// assert_type_eq_all!(<UnaryOf<6> as Cmp<UnaryOf<5>, u8, u16, u32>>::Result, u32);
/// ```
pub trait Cmp<M, IfLess, IfEqual, IfGreater>: Unary {
    /// The chosen branch.
    type Result;
}

impl<IfLess, IfEqual, IfGreater> Cmp<Z, IfLess, IfEqual, IfGreater> for Z {
    type Result = IfEqual;
}

impl<M: Unary, IfLess, IfEqual, IfGreater> Cmp<S<M>, IfLess, IfEqual, IfGreater> for Z {
    type Result = IfLess;
}

impl<N: Unary, IfLess, IfEqual, IfGreater> Cmp<Z, IfLess, IfEqual, IfGreater> for S<N> {
    type Result = IfGreater;
}

impl<N, M, IfLess, IfEqual, IfGreater> Cmp<S<M>, IfLess, IfEqual, IfGreater> for S<N>
where
    N: Cmp<M, IfLess, IfEqual, IfGreater>,
{
    type Result = N::Result;
}

/// [`True`] if the position `N` lies before the bound `M`.
pub type Below<N, M> = <N as Cmp<M, True, False, False>>::Result;

/// [`True`] if the position `N` has reached the bound `M`.
pub type Reached<N, M> = <N as Cmp<M, False, True, True>>::Result;

/// The later of the positions `N` and `M`.
pub type Max<N, M> = <N as Cmp<M, M, N, N>>::Result;

/// A `usize` constant lifted into a type, so that it can be converted with [`ToUnary`].
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

/// The unary form of a lifted constant.
pub trait ToUnary {
    /// The unary number.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// The lifted constant of a unary number.
pub trait ToConstant: Unary {
    /// The lifted constant.
    type AsConstant: ToUnary<AsUnary = Self>;
}

nominal_macro::generate_unary_conversion_impls!(64);

mod sealed {
    pub trait Natural {}
    impl Natural for super::Z {}
    impl<N: Natural> Natural for super::S<N> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_type_eq_all, const_assert_eq};

    assert_type_eq_all!(Below<UnaryOf<2>, UnaryOf<3>>, True);
    assert_type_eq_all!(Below<UnaryOf<3>, UnaryOf<3>>, False);
    assert_type_eq_all!(Reached<UnaryOf<3>, UnaryOf<3>>, True);
    assert_type_eq_all!(Reached<Z, UnaryOf<1>>, False);
    assert_type_eq_all!(Max<UnaryOf<4>, UnaryOf<1>>, UnaryOf<4>);
    assert_type_eq_all!(Max<UnaryOf<1>, UnaryOf<4>>, UnaryOf<4>);
    assert_type_eq_all!(<UnaryOf<2> as ToConstant>::AsConstant, Number<2>);
    const_assert_eq!(<Max<UnaryOf<9>, UnaryOf<9>>>::VALUE, 9);

    fn bound_of<const TO: usize, N>() -> bool
    where
        Number<TO>: ToUnary,
        N: Cmp<UnaryOf<TO>, True, False, False>,
        Below<N, UnaryOf<TO>>: crate::boolean::Bool,
    {
        <Below<N, UnaryOf<TO>> as crate::boolean::Bool>::VALUE
    }

    #[test]
    fn comparisons_against_constant_bounds() {
        assert!(bound_of::<4, UnaryOf<0>>());
        assert!(bound_of::<4, UnaryOf<3>>());
        assert!(!bound_of::<4, UnaryOf<4>>());
        assert!(!bound_of::<0, Z>());
    }
}
