//! Fixed-width integer arithmetic.

/// Adds two `i32` with two's-complement wraparound.
#[inline]
pub fn add_wrapping(x: i32, y: i32) -> i32 {
    x.wrapping_add(y)
}
