//! Looking values up by tag.
//!
//! [`get`], [`get_mut`], and [`take`] find the entry named by a tag in a sequence of named values,
//! such as the result of [`bind_parameters`](crate::bind_parameters), and fail to compile if there
//! is none. [`get_or`] falls back to a default instead, consuming the sequence like [`take`].
//!
//! # Examples
//!
//! ```
//! use nominal::prelude::*;
//!
//! tags! {
//!     pub name;
//!     pub size;
//!     pub color;
//! }
//!
//! let mut entries = (name.equals("box"), size.equals(3u8));
//! assert_eq!(*get(name, &entries), "box");
//! *get_mut(size, &mut entries) += 1;
//! assert_eq!(get_or(size.equals(0u32), entries), 4);
//! assert_eq!(get_or(color.equals("red"), entries), "red");
//! assert_eq!(take(size, entries), 4);
//! ```
//!
//! Looking up a missing tag without a default does not compile:
//!
//! ```compile_fail
//! use nominal::prelude::*;
//!
//! tags! {
//!     pub name;
//!     pub size;
//! }
//!
//! let entries = (name.equals("box"),);
//! let _ = get(size, &entries);
//! ```

use crate::{
    named::{Argument, Construct, NamedValue, Tag, Valued},
    predicate::NamedAs,
    search::{Found, Missing, Scan},
    tuple_like::{TupleAt, TupleLike},
    unary::{Unary, Z},
};

/// A search result which found something. Not implemented for [`Missing`].
pub trait Present {
    /// Where it was found.
    type Index: Unary;
}

impl<N: Unary> Present for Found<N> {
    type Index = N;
}

/// A sequence containing an entry named by the tag `K`.
pub trait Lookup<K>: TupleLike {
    /// The entry.
    type Entry: Valued;

    /// Borrow the entry.
    fn entry(&self) -> &Self::Entry;

    /// Mutably borrow the entry.
    fn entry_mut(&mut self) -> &mut Self::Entry;

    /// Move the entry out, dropping the rest.
    fn into_entry(self) -> Self::Entry;
}

type Index<T, K> =
    <<<T as TupleLike>::Elements as Scan<NamedAs<K>, Z, Z>>::Result as Present>::Index;

impl<T, K> Lookup<K> for T
where
    T: TupleLike,
    T::Elements: Scan<NamedAs<K>, Z, Z>,
    <T::Elements as Scan<NamedAs<K>, Z, Z>>::Result: Present,
    T: TupleAt<Index<T, K>>,
    <T as TupleAt<Index<T, K>>>::Elem: Valued,
{
    type Entry = <T as TupleAt<Index<T, K>>>::Elem;

    fn entry(&self) -> &Self::Entry {
        <T as TupleAt<Index<T, K>>>::at(self)
    }

    fn entry_mut(&mut self) -> &mut Self::Entry {
        <T as TupleAt<Index<T, K>>>::at_mut(self)
    }

    fn into_entry(self) -> Self::Entry {
        <T as TupleAt<Index<T, K>>>::into_at(self)
    }
}

/// The value named by `tag` in `seq`.
pub fn get<K: Tag, T: Lookup<K>>(_tag: K, seq: &T) -> &<T::Entry as Valued>::Value {
    seq.entry().value_ref()
}

/// The value named by `tag` in `seq`, mutably.
pub fn get_mut<K: Tag, T: Lookup<K>>(_tag: K, seq: &mut T) -> &mut <T::Entry as Valued>::Value {
    seq.entry_mut().value_mut()
}

/// The value named by `tag` in `seq`, moved out.
pub fn take<K: Tag, T: Lookup<K>>(_tag: K, seq: T) -> <T::Entry as Valued>::Value {
    seq.into_entry().into_value()
}

/// Build a value of type `D` from the entry at a search result, or fall back to a default if the
/// result is [`Missing`].
pub trait Resolve<D, At> {
    /// Build it.
    fn resolve(self, default: D) -> D;
}

impl<T, D> Resolve<D, Missing> for T {
    fn resolve(self, default: D) -> D {
        default
    }
}

impl<T, D, N> Resolve<D, Found<N>> for T
where
    T: TupleAt<N>,
    T::Elem: Argument,
    D: Construct<<T::Elem as Argument>::Source>,
{
    fn resolve(self, _default: D) -> D {
        D::construct(self.into_at().into_source())
    }
}

/// The value named by the default's tag in `seq`, built into the default's type, or the default
/// itself if there is none.
///
/// The entry is moved out of `seq` and converted as the binder would convert it, so nothing is
/// cloned. Sequences of copyable entries, like most bound parameters, can be passed again
/// afterwards.
pub fn get_or<K, D, T>(default: NamedValue<K, D>, seq: T) -> D
where
    K: Tag,
    T: TupleLike,
    T::Elements: Scan<NamedAs<K>, Z, Z>,
    T: Resolve<D, <T::Elements as Scan<NamedAs<K>, Z, Z>>::Result>,
{
    <T as Resolve<D, <T::Elements as Scan<NamedAs<K>, Z, Z>>::Result>>::resolve(
        seq,
        default.into_value(),
    )
}
