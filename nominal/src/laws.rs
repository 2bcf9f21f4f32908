//! Laws relating the operations of the tuple algebra, checked exhaustively over small sequences by
//! tests generated in the build script.

include!(concat!(env!("OUT_DIR"), "/tuple_laws.rs"));
