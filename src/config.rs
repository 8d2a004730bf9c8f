//! Fixed behavior constants. Nothing here is read at runtime.

use std::time::Duration;

/// How long `heavy_computation` holds the calling thread after its loop.
pub const FREEZE_DELAY: Duration = Duration::from_millis(2000);

/// Loop counters divisible by this get XOR-folded into the accumulator.
pub const XOR_STRIDE: i32 = 1000;
