//! Type predicates: functions from types to type-level booleans.
//!
//! A predicate is a zero-sized type implementing [`Predicate<T>`] for the types `T` it can judge.
//! Predicates never exist at runtime; they are only ever named as type parameters of the search and
//! arrangement operations, for example `contains::<Bind1st<IsSame, i32>, _>(&t)`.
//!
//! Binary predicates such as [`IsSame`] become unary by fixing one side with [`Bind1st`] or
//! [`Bind2nd`], and predicates combine with [`Not`], [`And`], and [`Or`].
//!
//! # Examples
//!
//! ```
//! use nominal::predicate::*;
//! use nominal::boolean::{True, False};
//! use static_assertions::assert_type_eq_all;
//!
//! type IsInt = Bind1st<IsSame, i32>;
//! type IsFloat = Bind1st<IsSame, f32>;
//!
//! assert_type_eq_all!(<IsInt as Predicate<i32>>::Output, True);
//! assert_type_eq_all!(<Not<IsInt> as Predicate<i32>>::Output, False);
//! assert_type_eq_all!(<Or<(IsInt, IsFloat)> as Predicate<f32>>::Output, True);
//! assert_type_eq_all!(<And<(IsInt, Not<IsFloat>)> as Predicate<f32>>::Output, False);
//! ```

use std::marker::PhantomData;

use crate::{
    boolean::{Bool, False, True},
    identity::{Identified, SameLabel},
    named::Named,
    tuple::Tuple,
};

/// A judgment about a type `T`.
pub trait Predicate<T> {
    /// [`True`] if `T` satisfies the predicate, [`False`] otherwise.
    type Output: Bool;
}

/// A judgment about a pair of types.
pub trait BinaryPredicate<L, R> {
    /// [`True`] if the pair satisfies the predicate, [`False`] otherwise.
    type Output: Bool;
}

/// The negation of the predicate `P`.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Not<P>(PhantomData<fn() -> P>);

impl<T, P: Predicate<T>> Predicate<T> for Not<P> {
    type Output = <P::Output as Bool>::Not;
}

/// The conjunction of a tuple of predicates. `And<()>` is always true.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct And<Ps>(PhantomData<fn() -> Ps>);

impl<T, Ps: Tuple> Predicate<T> for And<Ps>
where
    Ps::AsList: AllOf<T>,
{
    type Output = <Ps::AsList as AllOf<T>>::Output;
}

/// The disjunction of a tuple of predicates. `Or<()>` is always false.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Or<Ps>(PhantomData<fn() -> Ps>);

impl<T, Ps: Tuple> Predicate<T> for Or<Ps>
where
    Ps::AsList: AnyOf<T>,
{
    type Output = <Ps::AsList as AnyOf<T>>::Output;
}

/// Whether every predicate in a list holds for `T`.
pub trait AllOf<T> {
    /// The conjunction.
    type Output: Bool;
}

impl<T> AllOf<T> for () {
    type Output = True;
}

impl<T, P: Predicate<T>, Ps: AllOf<T>> AllOf<T> for (P, Ps) {
    type Output = <P::Output as Bool>::And<Ps::Output>;
}

/// Whether any predicate in a list holds for `T`.
pub trait AnyOf<T> {
    /// The disjunction.
    type Output: Bool;
}

impl<T> AnyOf<T> for () {
    type Output = False;
}

impl<T, P: Predicate<T>, Ps: AnyOf<T>> AnyOf<T> for (P, Ps) {
    type Output = <P::Output as Bool>::Or<Ps::Output>;
}

/// The binary predicate `P` with its first argument fixed to `L`.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Bind1st<P, L>(PhantomData<fn() -> (P, L)>);

impl<T, P: BinaryPredicate<L, T>, L> Predicate<T> for Bind1st<P, L> {
    type Output = P::Output;
}

/// The binary predicate `P` with its second argument fixed to `R`.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Bind2nd<P, R>(PhantomData<fn() -> (P, R)>);

impl<T, P: BinaryPredicate<T, R>, R> Predicate<T> for Bind2nd<P, R> {
    type Output = P::Output;
}

/// Type equality, for [`Identified`] types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IsSame;

impl<L: Identified, R: Identified> BinaryPredicate<L, R> for IsSame
where
    L::Identity: SameLabel<R::Identity>,
{
    type Output = <L::Identity as SameLabel<R::Identity>>::Output;
}

/// Whether a [`Named`] thing carries the tag `K`.
///
/// This is the predicate the binder and [`get`](crate::get) search with.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct NamedAs<K>(PhantomData<fn() -> K>);

impl<X: Named, K: Identified> Predicate<X> for NamedAs<K>
where
    <X::Tag as Identified>::Identity: SameLabel<K::Identity>,
{
    type Output = <<X::Tag as Identified>::Identity as SameLabel<K::Identity>>::Output;
}
