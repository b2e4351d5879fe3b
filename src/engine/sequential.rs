// ============================================================================
// Sequential Strategy
// Iterative multiplication into a single accumulator on the calling thread
// ============================================================================

use crate::errors::FactorialResult;
use crate::interfaces::FactorialStrategy;
use num_bigint::BigUint;
use num_traits::One;

/// Product of every integer in `[start, end]`, multiplied in increasing order.
///
/// Factors below 2 are skipped; an empty range yields 1.
///
/// # Example
/// ```
/// use factorial_fanout::engine::sequential_product;
/// use num_bigint::BigUint;
///
/// assert_eq!(sequential_product(1, 5), BigUint::from(120u32));
/// assert_eq!(sequential_product(4, 5), BigUint::from(20u32));
/// ```
pub fn sequential_product(start: u64, end: u64) -> BigUint {
    let mut product = BigUint::one();
    for factor in start.max(2)..=end {
        product *= factor;
    }
    product
}

/// Naive sequential factorial
///
/// No concurrency and no failure modes.
///
/// # Example
/// ```text
/// n = 5
/// acc = 1 -> 2 -> 6 -> 24 -> 120
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl Sequential {
    pub fn new() -> Self {
        Self
    }
}

impl FactorialStrategy for Sequential {
    fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        if n <= 1 {
            return Ok(BigUint::one());
        }

        Ok(sequential_product(2, n))
    }

    fn name(&self) -> &str {
        "sequential"
    }
}
