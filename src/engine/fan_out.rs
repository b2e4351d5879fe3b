// ============================================================================
// Per-Element Fan-Out Strategy
// One worker per multiplicand, fanned in over a rendezvous channel
// ============================================================================

use crate::engine::fan_in::{fan_in, rendezvous, spawn_producer};
use crate::errors::FactorialResult;
use crate::interfaces::FactorialStrategy;
use num_bigint::BigUint;
use num_traits::One;

/// Per-element fan-out factorial
///
/// Spawns one thread for every integer in `1..=n`. Each thread sends its
/// integer through an unbuffered channel and the calling thread multiplies
/// the values in arrival order.
///
/// Thread count grows linearly with `n` and nothing bounds it. This strategy
/// exists to show the cost of one worker per unit of work; use
/// [`BatchedFanOut`](crate::engine::BatchedFanOut) for real inputs.
///
/// # Example
/// ```text
/// n = 4
/// workers:  [1] [2] [3] [4]   (any arrival order)
/// consumer: 1 * 3 * 4 * 2 = 24
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FanOut;

impl FanOut {
    pub fn new() -> Self {
        Self
    }
}

impl FactorialStrategy for FanOut {
    fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        if n <= 1 {
            return Ok(BigUint::one());
        }

        tracing::debug!(workers = n, "fan-out: spawning one worker per multiplicand");

        let (sender, receiver) = rendezvous();
        for multiplicand in 1..=n {
            let sender = sender.clone();
            spawn_producer(format!("fan-out-{}", multiplicand), move || {
                // Fails only when the consumer already gave up
                let _ = sender.send(BigUint::from(multiplicand));
            })?;
        }
        drop(sender);

        fan_in(&receiver, n)
    }

    fn name(&self) -> &str {
        "fan-out"
    }
}
