//! Blocking heavy computation over the C ABI.

use crate::compute;

/// Runs the synthetic accumulation loop, then blocks the caller for
/// 2 seconds if `iterations > 0`.
///
/// # Returns
/// The accumulated sum, or 0 when `iterations <= 0`.
///
/// The call is synchronous and cannot be cancelled. Hosts that must stay
/// responsive should call it from a worker thread.
#[no_mangle]
pub extern "C" fn heavy_computation(iterations: i32) -> i32 {
    compute::run(iterations)
}
