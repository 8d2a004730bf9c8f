//! Integer addition over the C ABI.

use log::trace;

use crate::compute;

/// Adds two 32-bit signed integers with two's-complement wraparound.
///
/// Never traps: `native_add(i32::MAX, 1)` is `i32::MIN`.
#[no_mangle]
pub extern "C" fn native_add(x: i32, y: i32) -> i32 {
    trace!("native_add({x}, {y})");
    compute::add_wrapping(x, y)
}
