//! Binding actual arguments to declared parameters, by name.
//!
//! The binder consumes the declared parameters one at a time. For each, it searches what remains
//! of the actual arguments for one carrying the same tag. If there is one, it is taken out of the
//! arguments and the declared type is built from it; otherwise the declared default stands. Once
//! every parameter is bound, no arguments may remain: an argument naming no declared parameter is
//! a type error.
//!
//! The result has one [`NamedValue`] per declared parameter, in declaration order, whatever order
//! the arguments were given in. Its type depends only on the declared parameters.
//!
//! # Examples
//!
//! ```
//! use nominal::prelude::*;
//!
//! tags! {
//!     pub first;
//!     pub second;
//!     pub loud;
//! }
//!
//! let bound = bind_parameters(
//!     (loud, first.equals(1u8)),
//!     (first.equals(0i64), second.equals("Hopp"), loud.equals(false)),
//! );
//! assert_eq!(bound.0.value, 1i64);
//! assert_eq!(bound.1.value, "Hopp");
//! assert!(bound.2.value);
//! ```
//!
//! An argument which matches nothing does not compile:
//!
//! ```compile_fail
//! use nominal::prelude::*;
//!
//! tags! {
//!     pub first;
//!     pub second;
//! }
//!
//! let _ = bind_parameters((second.equals(2),), (first.equals(0),));
//! ```

use crate::{
    concat::Excise,
    named::{Accept, Argument, NamedValue, Parameter},
    predicate::NamedAs,
    search::{Found, Missing, Scan},
    tuple::{Extract, Tuple},
    unary::{Unary, S, Z},
};

/// An inductive list of declared parameters.
pub trait ParameterList {
    /// The bound values, as an inductive list of named values.
    type Bound;
}

impl ParameterList for () {
    type Bound = ();
}

impl<P: Parameter, Ps: ParameterList> ParameterList for (P, Ps) {
    type Bound = (NamedValue<P::Tag, P::Value>, Ps::Bound);
}

/// A tuple of declared parameters.
pub trait Parameters: Sized {
    /// The parameters as an inductive list.
    type List: ParameterList;

    /// The tuple of bound values, one named value per parameter.
    type Bound;

    /// Convert the parameters into a list.
    fn into_parameter_list(self) -> Self::List;

    /// Convert the list of bound values back into a tuple.
    fn finish(bound: <Self::List as ParameterList>::Bound) -> Self::Bound;
}

/// The remaining actual arguments once binding is complete: implemented only for the empty list.
///
/// When this bound is unsatisfied, the type it is missing for lists the arguments which matched no
/// declared parameter.
pub trait Exhausted {}

impl Exhausted for () {}

/// Bind an inductive list of actual arguments to an inductive list of declared parameters.
pub trait Bind<Ps: ParameterList> {
    /// Bind them.
    fn bind_list(self, params: Ps) -> Ps::Bound;
}

impl<Args: Exhausted> Bind<()> for Args {
    fn bind_list(self, (): ()) {}
}

impl<Args, P, Ps> Bind<(P, Ps)> for Args
where
    P: Parameter,
    Ps: ParameterList,
    Args: Scan<NamedAs<P::Tag>, Z, Z>,
    Args: Match<P, <Args as Scan<NamedAs<P::Tag>, Z, Z>>::Result>,
    <Args as Match<P, <Args as Scan<NamedAs<P::Tag>, Z, Z>>::Result>>::Remaining: Bind<Ps>,
{
    fn bind_list(self, (param, params): (P, Ps)) -> <(P, Ps) as ParameterList>::Bound {
        let (value, remaining) =
            <Args as Match<P, <Args as Scan<NamedAs<P::Tag>, Z, Z>>::Result>>::match_param(
                self, param,
            );
        (NamedValue::new(value), remaining.bind_list(params))
    }
}

/// Bind one declared parameter, given where (if anywhere) its argument was found.
pub trait Match<P: Parameter, At> {
    /// The actual arguments left over.
    type Remaining;

    /// Bind the parameter.
    fn match_param(self, param: P) -> (P::Value, Self::Remaining);
}

impl<Args, P: Parameter> Match<P, Missing> for Args {
    type Remaining = Args;

    fn match_param(self, param: P) -> (P::Value, Args) {
        (param.into_default(), self)
    }
}

impl<Args, P, N> Match<P, Found<N>> for Args
where
    N: Unary,
    Args: Extract<N>,
    <Args as Extract<N>>::Elem: Argument,
    <Args as Extract<N>>::Rest: Excise<N, S<N>>,
    P: Accept<<<Args as Extract<N>>::Elem as Argument>::Source>,
{
    type Remaining = <<Args as Extract<N>>::Rest as Excise<N, S<N>>>::Output;

    fn match_param(self, _default: P) -> (P::Value, Self::Remaining) {
        let (arg, rest) = <Args as Extract<N>>::extract(self);
        let value = P::accept(arg.into_source());
        (value, <<Args as Extract<N>>::Rest as Excise<N, S<N>>>::excise(rest))
    }
}

/// A tuple of actual arguments which can be bound to the declared parameters `P`.
pub trait Binds<P: Parameters> {
    /// Bind them.
    fn bind(self, params: P) -> P::Bound;
}

impl<A, P> Binds<P> for A
where
    A: Tuple,
    P: Parameters,
    A::AsList: Bind<P::List>,
{
    fn bind(self, params: P) -> P::Bound {
        P::finish(self.into_list().bind_list(params.into_parameter_list()))
    }
}

/// Bind the tuple of actual arguments `args` to the tuple of declared parameters `params`.
///
/// Each declared parameter takes its value from the first argument with the same tag, built into
/// the declared type, or keeps its default if there is none. Every argument must be consumed.
pub fn bind_parameters<A: Binds<P>, P: Parameters>(args: A, params: P) -> P::Bound {
    args.bind(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tags, Tag};
    use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

    tags! {
        alpha;
        beta;
        gamma;
    }

    mod elsewhere {
        crate::tags! {
            pub alpha;
        }
    }

    type Declared = (NamedValue<alpha, u32>, NamedValue<beta, String>);

    assert_type_eq_all!(
        <Declared as Parameters>::Bound,
        (NamedValue<alpha, u32>, NamedValue<beta, String>)
    );
    assert_impl_all!((NamedValue<beta, &'static str>,): Binds<Declared>);
    assert_impl_all!((beta, alpha): Binds<(NamedValue<alpha, bool>, NamedValue<beta, bool>)>);
    assert_not_impl_any!((NamedValue<gamma, u32>,): Binds<Declared>);
    assert_not_impl_any!((u32,): Binds<Declared>);
    assert_not_impl_any!((NamedValue<elsewhere::alpha, u32>,): Binds<Declared>);
    assert_not_impl_any!((elsewhere::alpha,): Binds<(NamedValue<alpha, bool>,)>);
    assert_impl_all!((): Exhausted);
    assert_not_impl_any!((gamma, ()): Exhausted);

    #[test]
    fn unmatched_parameters_keep_their_defaults() {
        let bound = bind_parameters((), (alpha.equals(0u32), beta.equals("Hopp")));
        assert_eq!(bound.0.value, 0);
        assert_eq!(bound.1.value, "Hopp");
    }

    #[test]
    fn matched_argument_replaces_the_default() {
        let bound = bind_parameters((alpha.equals(1u8),), (alpha.equals(0u32),));
        assert_eq!(bound.0.value, 1);
    }

    #[test]
    fn arguments_are_converted_to_the_declared_type() {
        let bound = bind_parameters(
            (beta.equals("converted"), alpha.call((1u8, 'x'))),
            (alpha.equals((0u64, 'a')), beta.equals(String::new())),
        );
        assert_eq!(bound.0.value, (1, 'x'));
        assert_eq!(bound.1.value, "converted");
    }

    #[test]
    fn binding_is_order_independent() {
        let declared = || (alpha.equals(0u16), beta.equals(false), gamma.optional::<char>());
        let one = bind_parameters((gamma.equals('g'), alpha.equals(5u16), beta), declared());
        let two = bind_parameters((beta, gamma.equals('g'), alpha.equals(5u16)), declared());
        assert_eq!(one, two);
        assert_eq!(one.2.value, Some('g'));
    }
}
