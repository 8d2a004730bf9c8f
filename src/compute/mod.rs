//! Core computation logic.
//!
//! Everything here is safe Rust and can be called without going through
//! the C ABI. The FFI layer in `ffi/` calls these functions.

pub mod arith;
pub mod heavy;

pub use arith::add_wrapping;
pub use heavy::{accumulate, block_caller, run};
