//! Code generation for the procedural macros of the `nominal` crate.
//!
//! Each macro is split into a parser for its input and a function producing a [`TokenStream`]
//! from the parsed form. Keeping both here, outside of the `proc-macro` crate, means the
//! expansions can be unit tested directly.
//!
//! [`TokenStream`]: proc_macro2::TokenStream

#![warn(missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]

pub mod error;
pub mod identified;
pub mod label;
pub mod tags;
pub mod target;
pub mod tuples;
pub mod unary;

pub use error::{CompileError, Spanned};
