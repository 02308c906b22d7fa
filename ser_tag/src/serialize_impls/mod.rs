//! `Save`/`Load` implementations for primitives and std types.

mod maps;
mod primitives;
mod ptrs;
mod sequences;
mod tuples;

pub(crate) use sequences::{load_len, save_len};
