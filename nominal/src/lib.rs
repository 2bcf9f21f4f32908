/*!
> **nominal (adjective):** Existing in name only.
>
> **nominal (crate):** Named parameters and a tuple algebra, resolved entirely at compile time.

Rust functions take their arguments by position. This crate lets a function take them by *name*
instead: callers pass any subset of the function's parameters, in any order, each tagged with the
name of the parameter it is for, and the function receives a tuple with one value for each of its
declared parameters, in the order it declared them, with defaults filled in for anything not
given.

```
use nominal::prelude::*;

tags! {
    pub width;
    pub height;
    pub title;
}

fn window<A>(args: A) -> String
where
    A: Binds<(
        NamedValue<width, u32>,
        NamedValue<height, u32>,
        NamedValue<title, &'static str>,
    )>,
{
    let bound = args.bind((width.equals(640), height.equals(480), title.equals("untitled")));
    format!("{} ({}x{})", get(title, &bound), get(width, &bound), get(height, &bound))
}

assert_eq!(window(()), "untitled (640x480)");
assert_eq!(window(args![title = "editor", height = 900u32]), "editor (640x900)");
```

All of the matching happens in the trait solver: the bound tuple is laid out exactly as if the
function had been called positionally, no names survive to runtime, and passing an argument the
function does not declare is a type error.

```compile_fail
use nominal::prelude::*;

tags! {
    pub width;
    pub depth;
}

let _ = args![depth = 3].bind((width.equals(640u32),));
```

# The tuple algebra

Matching by name is built on a general toolkit for taking apart and rebuilding fixed-length
heterogeneous sequences (tuples and arrays, or any type registered with [`TupleLike`]):

- [`search`]: [`count_if`](search::count_if), [`contains`](search::contains),
  [`find`](search::find), and [`find_nth`](search::find_nth) over the element types, driven by
  the type-level [`predicate`]s;
- [`arrange`]: a single engine walking a sequence under the control of a type-level rule, from
  which [`slice`](Sequence::slice), [`filter`](Sequence::filter), and
  [`reverse`](Sequence::reverse) are derived;
- [`concat`]: flattening concatenation, from which [`insert`](Sequence::insert) and
  [`erase`](Sequence::erase) are derived.

```
use nominal::prelude::*;
use nominal::predicate::{Bind1st, IsSame};
use nominal::search::find;

type IsInt = Bind1st<IsSame, i32>;

let t = (1.0f32, 2i32, "three");
assert_eq!(find::<IsInt, _>(&t), 1);
assert_eq!(t.reverse(), ("three", 2, 1.0));
assert_eq!(concat((t, (4u8, 5u8))), (1.0, 2, "three", 4, 5));
```

# Features

- `wide`: implement the algebra for tuples and arrays of up to 32 elements, instead of 16.
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate derivative;

// Generated code names this crate as `nominal`, which must resolve from inside it too.
extern crate self as nominal;

pub mod arrange;
pub mod boolean;
pub mod concat;
pub mod identity;
pub mod predicate;
pub mod search;
pub mod tuple;
pub mod unary;

mod args_macro;
mod bind;
mod lookup;
mod named;
mod sequence;
mod tuple_like;

#[cfg(test)]
mod laws;

pub use bind::{bind_parameters, Bind, Binds, Exhausted, Match, ParameterList, Parameters};
pub use concat::{concat, concat_into, Atom};
pub use identity::{Identified, SameLabel};
pub use lookup::{get, get_mut, get_or, take, Lookup, Present, Resolve};
pub use named::{
    Accept, AnyValue, Argument, Construct, DefaultFor, Elements, FromElements, FromValue, Named,
    NamedArgs, NamedValue, Optional, Parameter, Single, Tag, Valued,
};
pub use nominal_macro::{label, tags, Identified};
pub use sequence::Sequence;
pub use tuple_like::{
    ArrayFactory, Factory, Meet, Rebuild, Scalar, TupleAt, TupleFactory, TupleLike,
};

/// The prelude module for quickly getting started with named parameters.
///
/// This module is designed to be imported as `use nominal::prelude::*;`, which brings into scope
/// the macros, the declarator methods, binding and lookup, and the tuple algebra's methods.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        args, bind_parameters, concat, concat_into, get, get_mut, get_or, take, Atom, Binds,
        FromElements, NamedValue, Sequence, Tag,
    };
    #[doc(no_inline)]
    pub use nominal_macro::{tags, Identified};
}
