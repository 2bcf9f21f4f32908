//! Compile-time identities for types, and their comparison.
//!
//! Rust offers no way to ask "are these two types equal?" and get back a type-level answer, so
//! types that need to be compared opt in by implementing [`Identified`], giving themselves a
//! *label*: a type-level spelling of their name, produced by the [`label!`](crate::label) macro.
//! [`SameLabel`] then compares two labels structurally and answers with a
//! [`Bool`](crate::boolean::Bool).
//!
//! Labels are lists of unary nibbles, so two identities are the same exactly when they were
//! spelled the same way. Generic types pair their own label with the identities of their
//! parameters, which is how `Option<u8>` and `Option<u16>` are told apart.

use crate::{
    boolean::{Bool, False, True},
    label,
    unary::{S, Z},
};

/// A type with a compile-time identity.
///
/// Implement this with `#[derive(Identified)]`, or by hand using [`label!`](crate::label).
///
/// # Examples
///
/// ```
/// use nominal::{Identified, SameLabel, boolean::{True, False}};
/// use static_assertions::assert_type_eq_all;
///
/// #[derive(Identified)]
/// struct Meters(f64);
///
/// #[derive(Identified)]
/// struct Wrapper<T>(T);
///
/// type Same<A, B> = <<A as Identified>::Identity as SameLabel<<B as Identified>::Identity>>::Output;
///
/// assert_type_eq_all!(Same<Meters, Meters>, True);
/// assert_type_eq_all!(Same<Meters, f64>, False);
/// assert_type_eq_all!(Same<Wrapper<u8>, Wrapper<u8>>, True);
/// assert_type_eq_all!(Same<Wrapper<u8>, Wrapper<u16>>, False);
/// ```
pub trait Identified {
    /// The type-level label identifying this type.
    type Identity;
}

/// Structural equality of labels, as a type-level boolean.
pub trait SameLabel<Other> {
    /// [`True`] if the labels are the same, [`False`] otherwise.
    type Output: Bool;
}

impl SameLabel<Z> for Z {
    type Output = True;
}

impl<N> SameLabel<S<N>> for Z {
    type Output = False;
}

impl<N> SameLabel<Z> for S<N> {
    type Output = False;
}

impl<N: SameLabel<M>, M> SameLabel<S<M>> for S<N> {
    type Output = N::Output;
}

impl SameLabel<()> for () {
    type Output = True;
}

impl<H, T> SameLabel<(H, T)> for () {
    type Output = False;
}

impl<H, T> SameLabel<()> for (H, T) {
    type Output = False;
}

impl<H1, T1, H2, T2> SameLabel<(H2, T2)> for (H1, T1)
where
    H1: SameLabel<H2>,
    T1: SameLabel<T2>,
{
    type Output = <H1::Output as Bool>::And<T1::Output>;
}

// A nibble is never the same as a list.
impl SameLabel<()> for Z {
    type Output = False;
}

impl<H, T> SameLabel<(H, T)> for Z {
    type Output = False;
}

impl<N> SameLabel<()> for S<N> {
    type Output = False;
}

impl<N, H, T> SameLabel<(H, T)> for S<N> {
    type Output = False;
}

impl SameLabel<Z> for () {
    type Output = False;
}

impl<N> SameLabel<S<N>> for () {
    type Output = False;
}

impl<H, T> SameLabel<Z> for (H, T) {
    type Output = False;
}

impl<N, H, T> SameLabel<S<N>> for (H, T) {
    type Output = False;
}

macro_rules! identify {
    ($($t:tt),* $(,)?) => {
        $(
            impl Identified for $t {
                type Identity = label!($t);
            }
        )*
    };
}

identify! {
    bool, char, str, String, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}

macro_rules! identify_generic {
    ($($name:literal => $t:ty),* $(,)?) => {
        $(
            impl<T: Identified + ?Sized> Identified for $t {
                type Identity = (label!($name), (T::Identity, ()));
            }
        )*
    };
}

identify_generic! {
    "&" => &T,
    "&mut" => &mut T,
    "Box" => Box<T>,
}

macro_rules! identify_sized_generic {
    ($($name:literal => $t:ty),* $(,)?) => {
        $(
            impl<T: Identified> Identified for $t {
                type Identity = (label!($name), (T::Identity, ()));
            }
        )*
    };
}

identify_sized_generic! {
    "Option" => Option<T>,
    "Vec" => Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    type Same<A, B> =
        <<A as Identified>::Identity as SameLabel<<B as Identified>::Identity>>::Output;

    assert_type_eq_all!(Same<i32, i32>, True);
    assert_type_eq_all!(Same<i32, i64>, False);
    assert_type_eq_all!(Same<u8, u16>, False);
    assert_type_eq_all!(Same<&'static str, &'static str>, True);
    assert_type_eq_all!(Same<&'static str, String>, False);
    assert_type_eq_all!(Same<Option<u8>, Option<u8>>, True);
    assert_type_eq_all!(Same<Option<u8>, Vec<u8>>, False);
    assert_type_eq_all!(Same<Option<u8>, u8>, False);
    assert_type_eq_all!(Same<(), ()>, True);

    // Prefixes are not equal to the labels they prefix.
    assert_type_eq_all!(<label!("ab") as SameLabel<label!("abc")>>::Output, False);
    assert_type_eq_all!(<label!("abc") as SameLabel<label!("ab")>>::Output, False);
}
