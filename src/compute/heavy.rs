//! Synthetic CPU work followed by a fixed blocking delay.

use std::hint::black_box;
use std::thread;

use log::debug;

use crate::config::{FREEZE_DELAY, XOR_STRIDE};

/// Runs the accumulation loop and returns the sum. Does not sleep.
///
/// For each `i` in `0..iterations` the counter is added with wraparound,
/// and counters that are multiples of [`XOR_STRIDE`] (including 0) are
/// then XORed into the sum. Non-positive `iterations` yield 0.
pub fn accumulate(iterations: i32) -> i32 {
    let mut sum: i32 = 0;
    for i in 0..iterations {
        let i = black_box(i);
        sum = sum.wrapping_add(i);
        if i % XOR_STRIDE == 0 {
            sum ^= i;
        }
    }
    sum
}

/// Blocks the calling thread for [`FREEZE_DELAY`] when `iterations > 0`.
///
/// This is a real thread sleep. It must stay blocking even when the loop
/// was trivially short.
pub fn block_caller(iterations: i32) {
    if iterations <= 0 {
        debug!("heavy_computation: iterations={iterations}, delay skipped");
        return;
    }

    debug!("heavy_computation: blocking caller for {:?}", FREEZE_DELAY);
    thread::sleep(FREEZE_DELAY);
    debug!("heavy_computation: delay finished");
}

/// Full heavy computation: the loop, then the gated delay.
pub fn run(iterations: i32) -> i32 {
    debug!("heavy_computation: start, iterations={iterations}");
    let sum = accumulate(iterations);
    debug!("heavy_computation: loop done, sum={sum}");
    block_caller(iterations);
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    /// Straightforward reference loop with no shared constants.
    fn reference(iterations: i32) -> i32 {
        let mut sum = 0i32;
        let mut i = 0i32;
        while i < iterations {
            sum = sum.wrapping_add(i);
            if i % 1000 == 0 {
                sum ^= i;
            }
            i += 1;
        }
        sum
    }

    #[test]
    fn test_accumulate_non_positive() {
        assert_eq!(accumulate(0), 0);
        assert_eq!(accumulate(-5), 0);
        assert_eq!(accumulate(i32::MIN), 0);
    }

    #[test]
    fn test_accumulate_single_iteration() {
        // i = 0: sum = 0 + 0, then 0 ^ 0
        assert_eq!(accumulate(1), 0);
    }

    #[test]
    fn test_accumulate_below_first_stride() {
        // Only i = 0 is a multiple of 1000, and XOR with 0 is a no-op.
        assert_eq!(accumulate(10), 45);
        assert_eq!(accumulate(1000), 499_500);
    }

    #[test]
    fn test_accumulate_two_thousand() {
        // 0..=999 sums to 499500, +1000 gives 500500, ^1000 gives 499964,
        // then 1001..=1999 adds 1498500.
        assert_eq!(accumulate(2000), 1_998_464);
        assert_eq!(accumulate(2000), reference(2000));
    }

    #[test]
    fn test_accumulate_wraps_instead_of_panicking() {
        // The plain sum of 0..100_000 exceeds i32::MAX.
        assert!((0i64..100_000).sum::<i64>() > i32::MAX as i64);
        assert_eq!(accumulate(100_000), reference(100_000));
    }

    #[test]
    fn test_block_caller_skips_when_non_positive() {
        let start = Instant::now();
        block_caller(0);
        block_caller(-1);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_run_blocks_for_freeze_delay() {
        let start = Instant::now();
        let sum = run(10);
        assert_eq!(sum, 45);
        assert!(start.elapsed() >= FREEZE_DELAY);
    }
}
