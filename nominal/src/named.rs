//! Tags, named values, and the declarators which make them.
//!
//! A *tag* is a zero-sized type declared with [`tags!`](crate::tags), whose identity is its label.
//! The tag value is also its own *declarator*: its methods produce the named values exchanged
//! between caller and callee.
//!
//! On the caller's side:
//!
//! - `tag.equals(v)` is an argument holding `v` as given (so `tag.equals(&x)` holds a reference);
//!   a scalar `v` is converted into the declared type with [`From`], while a tuple or array is
//!   unpacked and built element by element;
//! - `tag.call((a, b))` is an argument holding constructor arguments, from which the callee builds
//!   the declared type element by element;
//! - `tag` on its own is the flag `true`, and `!tag` the flag `false`.
//!
//! On the callee's side, each declared parameter pairs a tag with a default:
//!
//! - `tag.equals(d)` declares a parameter of type `D` defaulting to `d`;
//! - `tag.optional::<T>()` declares a parameter of type `Option<T>` defaulting to `None`;
//! - `tag.variant::<E, _>(v)` declares a parameter of type `E` defaulting to `E::from(v)`, and
//!   `tag.variant_unset::<E>()` one of type `Option<E>` defaulting to `None`;
//! - `tag.any(v)` declares a parameter accepting any `'static` value, boxed as
//!   `Option<Box<dyn Any>>`, and `tag.any_unset()` one defaulting to `None`;
//! - `tag.default_for::<T>(d)` declares a parameter of type `T`, which binds like a plain default.
//!
//! # Examples
//!
//! ```
//! use nominal::prelude::*;
//!
//! tags! {
//!     pub width;
//!     pub origin;
//!     pub verbose;
//! }
//!
//! let w = width.equals(3u32);
//! assert_eq!(w.value, 3);
//! assert_eq!(format!("{:?}", w), "width = 3");
//!
//! let o = origin.call((1, 2));
//! assert_eq!(o.args, (1, 2));
//!
//! let quiet = !verbose;
//! assert!(!quiet.value);
//! ```

use std::{
    any::Any,
    fmt::{self, Debug},
    marker::PhantomData,
};

use static_assertions::assert_eq_size;

use crate::{
    concat::Segment,
    identity::Identified,
    tuple::List,
    tuple_like::{Factory, Scalar, TupleLike},
};

/// A parameter tag. Declare tags with [`tags!`](crate::tags) rather than implementing this by
/// hand.
pub trait Tag: Identified + Debug + Copy + Default + 'static {
    /// The label identifying this tag.
    const LABEL: &'static str;

    /// The named value `self = value`.
    fn equals<T>(self, value: T) -> NamedValue<Self, T> {
        NamedValue::new(value)
    }

    /// The named constructor arguments `self(args...)`, from which a value will be built element by
    /// element.
    fn call<A>(self, args: A) -> NamedArgs<Self, A> {
        NamedArgs::new(args)
    }

    /// Declare a parameter of type `Option<T>`, defaulting to `None`.
    fn optional<T>(self) -> Optional<Self, T> {
        Optional::new()
    }

    /// Declare a parameter of type `E`, defaulting to `E::from(value)`.
    fn variant<E: From<V>, V>(self, value: V) -> NamedValue<Self, E> {
        NamedValue::new(E::from(value))
    }

    /// Declare a parameter of type `Option<E>`, with no default alternative.
    fn variant_unset<E>(self) -> Optional<Self, E> {
        Optional::new()
    }

    /// Declare a parameter accepting a value of any type, defaulting to `value`.
    fn any<V: Any>(self, value: V) -> AnyValue<Self> {
        AnyValue::new(Some(Box::new(value)))
    }

    /// Declare a parameter accepting a value of any type, defaulting to `None`.
    fn any_unset(self) -> AnyValue<Self> {
        AnyValue::new(None)
    }

    /// Declare a parameter of type `T`, defaulting to `value`.
    fn default_for<T>(self, value: T) -> DefaultFor<Self, T> {
        DefaultFor::new(value)
    }

    /// Declare a parameter of type `T`, defaulting to `T::default()`.
    fn default_for_unset<T: Default>(self) -> DefaultFor<Self, T> {
        DefaultFor::new(T::default())
    }
}

/// A value named by the tag `K`.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone"),
    Copy(bound = "T: Copy"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq"),
    Hash(bound = "T: std::hash::Hash"),
    Default(bound = "T: Default")
)]
pub struct NamedValue<K, T> {
    /// The value.
    pub value: T,
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    tag: PhantomData<fn() -> K>,
}

assert_eq_size!(NamedValue<(), u64>, u64);

impl<K, T> NamedValue<K, T> {
    /// Name `value` with the tag `K`.
    pub const fn new(value: T) -> Self {
        NamedValue {
            value,
            tag: PhantomData,
        }
    }

    /// Forget the name.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<K: Tag, T: Debug> Debug for NamedValue<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {:?}", K::LABEL, self.value)
    }
}

/// Constructor arguments named by the tag `K`.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "A: Clone"),
    Copy(bound = "A: Copy"),
    PartialEq(bound = "A: PartialEq")
)]
pub struct NamedArgs<K, A> {
    /// The arguments.
    pub args: A,
    #[derivative(PartialEq = "ignore")]
    tag: PhantomData<fn() -> K>,
}

impl<K, A> NamedArgs<K, A> {
    /// Name the constructor arguments `args` with the tag `K`.
    pub const fn new(args: A) -> Self {
        NamedArgs {
            args,
            tag: PhantomData,
        }
    }
}

impl<K: Tag, A: Debug> Debug for NamedArgs<K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", K::LABEL, self.args)
    }
}

/// A declared parameter of type `Option<T>`, unset by default.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Clone(bound = ""), Copy(bound = ""), Default(bound = ""))]
pub struct Optional<K, T>(PhantomData<fn() -> (K, T)>);

impl<K, T> Optional<K, T> {
    /// Declare it.
    pub const fn new() -> Self {
        Optional(PhantomData)
    }
}

/// A declared parameter accepting a value of any `'static` type.
#[derive(Derivative)]
#[derivative(Debug(bound = ""), Default(bound = ""))]
pub struct AnyValue<K> {
    /// The default value, if any.
    pub value: Option<Box<dyn Any>>,
    #[derivative(Debug = "ignore")]
    tag: PhantomData<fn() -> K>,
}

impl<K> AnyValue<K> {
    /// Declare it, with the given default.
    pub fn new(value: Option<Box<dyn Any>>) -> Self {
        AnyValue {
            value,
            tag: PhantomData,
        }
    }
}

/// A declared parameter of type `T` which would adopt an unnamed argument of that type.
///
/// Unnamed arguments are not accepted by the binder, so this binds exactly like a plain
/// [`NamedValue`] default.
#[derive(Derivative)]
#[derivative(
    Debug(bound = "T: Debug"),
    Clone(bound = "T: Clone"),
    Copy(bound = "T: Copy"),
    Default(bound = "T: Default")
)]
pub struct DefaultFor<K, T> {
    /// The default value.
    pub value: T,
    #[derivative(Debug = "ignore")]
    tag: PhantomData<fn() -> K>,
}

impl<K, T> DefaultFor<K, T> {
    /// Declare it, with the given default.
    pub const fn new(value: T) -> Self {
        DefaultFor {
            value,
            tag: PhantomData,
        }
    }
}

/// Anything carrying a tag: tags themselves, named values, and declared parameters.
pub trait Named {
    /// The tag.
    type Tag: Tag;
}

impl<K: Tag, T> Named for NamedValue<K, T> {
    type Tag = K;
}

impl<K: Tag, A> Named for NamedArgs<K, A> {
    type Tag = K;
}

impl<K: Tag, T> Named for Optional<K, T> {
    type Tag = K;
}

impl<K: Tag> Named for AnyValue<K> {
    type Tag = K;
}

impl<K: Tag, T> Named for DefaultFor<K, T> {
    type Tag = K;
}

/// A value from which to construct a parameter's declared type by conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Single<V>(pub V);

/// A tuple of constructor arguments from which to construct a parameter's declared type element by
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elements<A>(pub A);

/// An actual argument at a call site.
pub trait Argument: Named {
    /// What the argument supplies: a [`Single`] value or [`Elements`].
    type Source;

    /// Unwrap the argument.
    fn into_source(self) -> Self::Source;
}

impl<K: Tag, T> Argument for NamedValue<K, T> {
    type Source = Single<T>;

    fn into_source(self) -> Single<T> {
        Single(self.value)
    }
}

impl<K: Tag, A> Argument for NamedArgs<K, A> {
    type Source = Elements<A>;

    fn into_source(self) -> Elements<A> {
        Elements(self.args)
    }
}

/// Construction of a value from its arguments, one by one.
///
/// Implemented for tuples element-wise (each element of the tuple is built with [`From`] from the
/// corresponding argument); implement it for your own types to let callers build them from a
/// `tag(a, b, ...)` argument.
///
/// # Examples
///
/// ```
/// use nominal::FromElements;
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i32, i32);
///
/// impl FromElements<(i32, i32)> for Point {
///     fn from_elements((x, y): (i32, i32)) -> Self {
///         Point(x, y)
///     }
/// }
///
/// assert_eq!(Point::from_elements((3, 4)), Point(3, 4));
/// assert_eq!(<(i64, String)>::from_elements((1, "one")), (1, "one".to_owned()));
/// ```
pub trait FromElements<A>: Sized {
    /// Build it.
    fn from_elements(args: A) -> Self;
}

/// Construction of a value from a single value `V` of the kind made by the factory `F`.
///
/// A scalar is converted with [`From`]. A tuple-like value is unpacked, and its elements are
/// passed to [`FromElements`] as a tuple.
pub trait FromValue<V, F>: Sized {
    /// Build it.
    fn from_value(value: V) -> Self;
}

impl<T: From<V>, V> FromValue<V, Scalar> for T {
    fn from_value(value: V) -> T {
        T::from(value)
    }
}

impl<T, V, F> FromValue<V, F> for T
where
    F: Factory,
    V: TupleLike,
    V::Elements: List,
    T: FromElements<<V::Elements as List>::AsTuple>,
{
    fn from_value(value: V) -> T {
        T::from_elements(value.into_elements().into_tuple())
    }
}

/// Construction of a value from an argument source: by [`FromValue`] for a [`Single`] value, and
/// by [`FromElements`] for [`Elements`].
pub trait Construct<Src>: Sized {
    /// Build it.
    fn construct(src: Src) -> Self;
}

impl<T, V> Construct<Single<V>> for T
where
    V: Segment,
    T: FromValue<V, V::Factory>,
{
    fn construct(Single(value): Single<V>) -> T {
        T::from_value(value)
    }
}

impl<T: FromElements<A>, A> Construct<Elements<A>> for T {
    fn construct(Elements(args): Elements<A>) -> T {
        T::from_elements(args)
    }
}

/// A declared parameter, which knows its bound type and default.
pub trait Parameter: Named {
    /// The type of the bound value.
    type Value;

    /// The default, used when no argument matches.
    fn into_default(self) -> Self::Value;
}

impl<K: Tag, T> Parameter for NamedValue<K, T> {
    type Value = T;

    fn into_default(self) -> T {
        self.value
    }
}

impl<K: Tag, T> Parameter for Optional<K, T> {
    type Value = Option<T>;

    fn into_default(self) -> Option<T> {
        None
    }
}

impl<K: Tag> Parameter for AnyValue<K> {
    type Value = Option<Box<dyn Any>>;

    fn into_default(self) -> Self::Value {
        self.value
    }
}

impl<K: Tag, T> Parameter for DefaultFor<K, T> {
    type Value = T;

    fn into_default(self) -> T {
        self.value
    }
}

/// A declared parameter which can be bound from an argument source.
pub trait Accept<Src>: Parameter {
    /// Build the bound value from the source.
    fn accept(src: Src) -> Self::Value;
}

impl<K: Tag, T: Construct<Src>, Src> Accept<Src> for NamedValue<K, T> {
    fn accept(src: Src) -> T {
        T::construct(src)
    }
}

impl<K: Tag, T: Construct<Src>, Src> Accept<Src> for Optional<K, T> {
    fn accept(src: Src) -> Option<T> {
        Some(T::construct(src))
    }
}

impl<K: Tag, T: Construct<Src>, Src> Accept<Src> for DefaultFor<K, T> {
    fn accept(src: Src) -> T {
        T::construct(src)
    }
}

impl<K: Tag, V: Any> Accept<Single<V>> for AnyValue<K> {
    fn accept(Single(value): Single<V>) -> Self::Value {
        Some(Box::new(value))
    }
}

impl<K: Tag, A: Any> Accept<Elements<A>> for AnyValue<K> {
    fn accept(Elements(args): Elements<A>) -> Self::Value {
        Some(Box::new(args))
    }
}

/// A named thing holding a value which can be looked up.
pub trait Valued: Named {
    /// The value's type.
    type Value;

    /// Borrow the value.
    fn value_ref(&self) -> &Self::Value;

    /// Mutably borrow the value.
    fn value_mut(&mut self) -> &mut Self::Value;

    /// Move the value out.
    fn into_value(self) -> Self::Value;
}

impl<K: Tag, T> Valued for NamedValue<K, T> {
    type Value = T;

    fn value_ref(&self) -> &T {
        &self.value
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    fn into_value(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags;

    tags! {
        size;
        caption = "named::tests::caption";
        anything;
    }

    #[derive(Debug, PartialEq, crate::Identified)]
    enum Shape {
        Circle(u32),
        Square(u32),
    }

    impl From<u32> for Shape {
        fn from(side: u32) -> Self {
            Shape::Square(side)
        }
    }

    #[test]
    fn bare_tags_are_flags() {
        assert_eq!(size.into_source(), Single(true));
        assert!(!(!size).value);
    }

    #[test]
    fn named_values_debug_with_their_label() {
        assert_eq!(format!("{:?}", caption.equals("x")), "named::tests::caption = \"x\"");
        assert_eq!(format!("{:?}", size.call((1, 2))), "size(1, 2)");
    }

    #[test]
    fn construction_by_conversion_and_by_elements() {
        assert_eq!(<u64 as Construct<_>>::construct(Single(3u8)), 3u64);
        assert_eq!(
            <(u64, String) as Construct<_>>::construct(Elements((3u8, "x"))),
            (3, "x".to_owned())
        );
    }

    #[test]
    fn tuple_like_values_are_unpacked() {
        assert_eq!(
            <(u64, String) as Construct<_>>::construct(Single((3u8, "x"))),
            (3, "x".to_owned())
        );
        assert_eq!(<(u16, u16) as Construct<_>>::construct(Single([1u8, 2])), (1, 2));
        assert_eq!(<[u32; 2] as Construct<_>>::construct(Single((1u8, 2u16))), [1, 2]);
        assert_eq!(<Shape as Construct<_>>::construct(Single(5u32)), Shape::Square(5));
    }

    #[test]
    fn declared_defaults() {
        assert_eq!(size.equals(7).into_default(), 7);
        assert_eq!(size.optional::<u8>().into_default(), None);
        assert_eq!(size.variant::<Shape, _>(2u32).into_default(), Shape::Square(2));
        assert_eq!(size.variant_unset::<Shape>().into_default(), None);
        assert_eq!(size.default_for_unset::<u16>().into_default(), 0);
        assert!(anything.any_unset().into_default().is_none());
        let any = anything.any(5i8).into_default();
        assert_eq!(any.and_then(|v| v.downcast_ref::<i8>().copied()), Some(5));
    }

    #[test]
    fn accepting_arguments() {
        assert_eq!(
            <Optional<size, Shape> as Accept<_>>::accept(Single(Shape::Circle(1))),
            Some(Shape::Circle(1))
        );
        assert_eq!(<NamedValue<size, u32> as Accept<_>>::accept(Single(9u16)), 9);
        let boxed = <AnyValue<anything> as Accept<_>>::accept(Elements((1u8, 'c')));
        assert_eq!(
            boxed.and_then(|v| v.downcast_ref::<(u8, char)>().copied()),
            Some((1, 'c'))
        );
    }
}
