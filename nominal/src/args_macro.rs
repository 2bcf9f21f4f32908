/// Build a tuple of named arguments with call-site syntax.
///
/// Each comma-separated argument is one of:
///
/// - `tag = value`, the named value `tag.equals(value)`;
/// - `tag(value)`, the same thing;
/// - `tag(a, b, ...)`, the named constructor arguments `tag.call((a, b, ...))`;
/// - `tag`, the flag `true`;
/// - `!tag`, the flag `false`.
///
/// # Examples
///
/// ```
/// use nominal::prelude::*;
///
/// tags! {
///     pub first;
///     pub second;
///     pub third;
///     pub fourth;
/// }
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
/// let bound = args![first = 1, third(3, 4), !fourth].bind((
///     second.equals("Hopp"),
///     third.equals(Point(0, 0)),
///     first.equals(0),
///     fourth.equals(true),
/// ));
/// assert_eq!(bound.0.value, "Hopp");
/// assert_eq!(bound.1.value, Point(3, 4));
/// assert_eq!(bound.2.value, 1);
/// assert!(!bound.3.value);
/// ```
#[macro_export]
macro_rules! args {
    (@acc [$($acc:expr,)*]) => {
        ($($acc,)*)
    };
    (@acc [$($acc:expr,)*] ! $tag:ident $(, $($rest:tt)*)?) => {
        $crate::args!(@acc [$($acc,)* !$tag,] $($($rest)*)?)
    };
    (@acc [$($acc:expr,)*] $tag:ident = $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@acc [$($acc,)* $crate::Tag::equals($tag, $value),] $($($rest)*)?)
    };
    (@acc [$($acc:expr,)*] $tag:ident ($value:expr $(,)?) $(, $($rest:tt)*)?) => {
        $crate::args!(@acc [$($acc,)* $crate::Tag::equals($tag, $value),] $($($rest)*)?)
    };
    (@acc [$($acc:expr,)*] $tag:ident ($($value:expr),+ $(,)?) $(, $($rest:tt)*)?) => {
        $crate::args!(@acc [$($acc,)* $crate::Tag::call($tag, ($($value,)+)),] $($($rest)*)?)
    };
    (@acc [$($acc:expr,)*] $tag:ident $(, $($rest:tt)*)?) => {
        $crate::args!(@acc [$($acc,)* $tag,] $($($rest)*)?)
    };
    (@acc [$($acc:expr,)*] $($unexpected:tt)+) => {
        compile_error!(concat!(
            "expected `tag = value`, `tag(args...)`, `tag`, or `!tag`, found `",
            stringify!($($unexpected)+),
            "`",
        ))
    };
    ($($args:tt)*) => {
        $crate::args!(@acc [] $($args)*)
    };
}
