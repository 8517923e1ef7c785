//! Matching engine core for a single-instrument central limit order book.
//!
//! This crate is deliberately I/O-free: it has no notion of stdin, stdout,
//! sockets, or files. The `clob-cli` crate wires a line-oriented reader and a
//! snapshot printer around [`engine::engine::CentralLimitOrderBook`].

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub mod engine;

pub mod prelude {
    pub use crate::engine::prelude::*;
}
