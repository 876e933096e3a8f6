//! Variadic argument collectors.
//!
//! [`ArityLadder`] builds an `n`-ary "collect into an array" adapter for any
//! `n` up to the configured cap out of a handful of base shapes, and
//! layers list and typed-array collectors on top of it. Everything it
//! builds lands in a [`CollectorCache`].

mod cache;
mod ladder;
mod producers;

pub use cache::{CacheStats, CollectorCache};
pub use ladder::ArityLadder;
