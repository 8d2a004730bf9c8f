//! Native Stub - two demonstration functions with a C ABI
//!
//! `native_add` is plain wraparound addition. `heavy_computation` burns CPU
//! in a loop and then blocks its calling thread for two seconds, to show
//! what a long synchronous native call does to the thread that makes it.

pub mod compute;
pub mod config;
pub mod ffi;


pub use ffi::{heavy_computation, native_add};
