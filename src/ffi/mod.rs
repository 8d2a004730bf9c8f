//! C FFI layer.
//!
//! This module exports C ABI functions for hosts that bind native symbols
//! by name (LuaJIT FFI, Dart FFI, ctypes and the like).
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `compute` module. Arguments and results are
//! plain `i32` by value, so these wrappers carry no pointer handling.

pub mod heavy;
pub mod simple;

pub use heavy::heavy_computation;
pub use simple::native_add;
