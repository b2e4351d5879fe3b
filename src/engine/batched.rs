// ============================================================================
// Batched Fan-Out Strategy
// One worker per contiguous chunk of multiplicands
// ============================================================================

use crate::domain::{ExecutionPlan, DEFAULT_BATCH_SIZE};
use crate::engine::fan_in::{fan_in, rendezvous, spawn_producer};
use crate::engine::sequential::{sequential_product, Sequential};
use crate::errors::FactorialResult;
use crate::interfaces::FactorialStrategy;
use num_bigint::BigUint;

/// Batched fan-out factorial
///
/// Inputs at or below the batch size are handed to [`Sequential`] and spawn
/// nothing. Larger inputs are split into contiguous chunks of at most
/// `batch_size` multiplicands; each chunk's partial product is computed on
/// its own thread and sent through an unbuffered channel.
///
/// # Example
/// ```text
/// n = 200, batch_size = 80
/// chunks:   [1..=80] [81..=160] [161..=200]
/// consumer: p(81..=160) * p(1..=80) * p(161..=200)
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchedFanOut {
    batch_size: u64,
}

impl BatchedFanOut {
    /// A zero batch size is raised to one
    pub fn new(batch_size: u64) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// How `n` would be evaluated, without doing any work
    pub fn plan(&self, n: u64) -> ExecutionPlan {
        ExecutionPlan::for_input(n, self.batch_size)
    }
}

impl Default for BatchedFanOut {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}

impl FactorialStrategy for BatchedFanOut {
    fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        let chunks = match self.plan(n) {
            ExecutionPlan::Sequential => return Sequential.factorial(n),
            ExecutionPlan::Chunked(chunks) => chunks,
        };

        tracing::debug!(
            workers = chunks.len(),
            batch_size = self.batch_size,
            "batched fan-out: spawning one worker per chunk"
        );

        let (sender, receiver) = rendezvous();
        for chunk in &chunks {
            let chunk = *chunk;
            let sender = sender.clone();
            spawn_producer(format!("batch-{}-{}", chunk.start, chunk.end), move || {
                let partial = sequential_product(chunk.start, chunk.end);
                tracing::trace!(start = chunk.start, end = chunk.end, "chunk done");
                let _ = sender.send(partial);
            })?;
        }
        drop(sender);

        fan_in(&receiver, chunks.len() as u64)
    }

    fn name(&self) -> &str {
        "batched"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChunkRange;
    use num_traits::One;

    #[test]
    fn test_base_cases() {
        let strategy = BatchedFanOut::default();
        assert_eq!(strategy.factorial(0).unwrap(), BigUint::one());
        assert_eq!(strategy.factorial(1).unwrap(), BigUint::one());
    }

    #[test]
    fn test_known_values() {
        let strategy = BatchedFanOut::default();
        assert_eq!(strategy.factorial(5).unwrap(), BigUint::from(120u32));
        assert_eq!(strategy.factorial(10).unwrap(), BigUint::from(3_628_800u32));
    }

    #[test]
    fn test_batch_boundary_plan() {
        let strategy = BatchedFanOut::default();
        assert_eq!(strategy.batch_size(), 80);
        assert!(strategy.plan(80).is_sequential());
        assert_eq!(
            strategy.plan(81),
            ExecutionPlan::Chunked(vec![ChunkRange::new(1, 80), ChunkRange::new(81, 81)])
        );
    }

    #[test]
    fn test_81_factorial() {
        let strategy = BatchedFanOut::default();
        let expected = sequential_product(1, 81);
        assert_eq!(strategy.factorial(81).unwrap(), expected);
        assert_eq!(
            expected.to_string(),
            "5797126020747367985879734231578109105412357244731625958745865049716390179693892056256184534249745940480000000000000000000"
        );
    }

    #[test]
    fn test_small_batches() {
        let strategy = BatchedFanOut::new(3);
        assert_eq!(strategy.plan(10).worker_count(), 4);
        assert_eq!(strategy.factorial(10).unwrap(), BigUint::from(3_628_800u32));
    }

    #[test]
    fn test_zero_batch_size_is_raised() {
        let strategy = BatchedFanOut::new(0);
        assert_eq!(strategy.batch_size(), 1);
        assert_eq!(strategy.factorial(6).unwrap(), BigUint::from(720u32));
    }

    #[test]
    fn test_large_input() {
        let strategy = BatchedFanOut::default();
        assert_eq!(strategy.plan(1000).worker_count(), 13);
        assert_eq!(strategy.factorial(1000).unwrap(), sequential_product(1, 1000));
    }
}
