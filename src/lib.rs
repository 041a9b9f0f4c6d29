#![warn(unreachable_pub)]
// missing_docs
#![deny(missing_debug_implementations, macro_use_extern_crate)]

//! Signals and slots: ordered multicast callbacks with revocable connections.
//!
//! It is recommended to read the [tutorial], which explains every concept with examples.

pub mod signal;
pub mod combiner;

mod error;
pub use crate::error::SignalError;

mod function;
pub use crate::function::Function;

pub mod tutorial;
