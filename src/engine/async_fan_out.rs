// ============================================================================
// Async Fan-Out Strategies
// Tokio task variants of the per-element and batched strategies
// ============================================================================

use crate::domain::{ExecutionPlan, DEFAULT_BATCH_SIZE};
use crate::engine::sequential::sequential_product;
use crate::errors::{FactorialError, FactorialResult};
use num_bigint::BigUint;
use num_traits::One;
use tokio::sync::mpsc;

/// Tokio allows no zero-capacity channel; one slot is the closest hand-off
const HANDOFF_CAPACITY: usize = 1;

async fn fan_in(
    receiver: &mut mpsc::Receiver<BigUint>,
    expected: u64,
) -> FactorialResult<BigUint> {
    let mut result = BigUint::one();

    for received in 0..expected {
        match receiver.recv().await {
            Some(value) => result *= value,
            None => return Err(FactorialError::WorkerDisconnected { expected, received }),
        }
    }

    Ok(result)
}

/// One tokio task per multiplicand
///
/// Must be awaited inside a tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncFanOut;

impl AsyncFanOut {
    pub fn new() -> Self {
        Self
    }

    pub async fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        if n <= 1 {
            return Ok(BigUint::one());
        }

        let (sender, mut receiver) = mpsc::channel(HANDOFF_CAPACITY);
        for multiplicand in 1..=n {
            let sender = sender.clone();
            tokio::spawn(async move {
                let _ = sender.send(BigUint::from(multiplicand)).await;
            });
        }
        drop(sender);

        fan_in(&mut receiver, n).await
    }
}

/// One tokio task per chunk of multiplicands
#[derive(Debug, Clone, Copy)]
pub struct AsyncBatchedFanOut {
    batch_size: u64,
}

impl AsyncBatchedFanOut {
    pub fn new(batch_size: u64) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn plan(&self, n: u64) -> ExecutionPlan {
        ExecutionPlan::for_input(n, self.batch_size)
    }

    pub async fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        let chunks = match self.plan(n) {
            ExecutionPlan::Sequential => return Ok(sequential_product(1, n)),
            ExecutionPlan::Chunked(chunks) => chunks,
        };

        let (sender, mut receiver) = mpsc::channel(HANDOFF_CAPACITY);
        for chunk in &chunks {
            let chunk = *chunk;
            let sender = sender.clone();
            tokio::spawn(async move {
                let partial = sequential_product(chunk.start, chunk.end);
                let _ = sender.send(partial).await;
            });
        }
        drop(sender);

        fan_in(&mut receiver, chunks.len() as u64).await
    }
}

impl Default for AsyncBatchedFanOut {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE)
    }
}
