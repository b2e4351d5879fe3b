// ============================================================================
// Chunk Domain Model
// Contiguous multiplicand ranges and the batched execution plan
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of consecutive multiplicands handled by one batch worker
pub const DEFAULT_BATCH_SIZE: u64 = 80;

// ============================================================================
// Chunk Range
// ============================================================================

/// Inclusive range of multiplicands `[start, end]` owned by one worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChunkRange {
    pub start: u64,
    pub end: u64,
}

impl ChunkRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start >= 1 && start <= end, "empty chunk {}..={}", start, end);
        Self { start, end }
    }

    /// Number of multiplicands in the chunk
    pub fn len(&self) -> u64 {
        (self.end + 1).saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, value: u64) -> bool {
        (self.start..=self.end).contains(&value)
    }
}

/// Split `[1, n]` into contiguous chunks of at most `batch_size` values.
///
/// The last chunk may be shorter. Returns no chunks for `n == 0`.
/// A `batch_size` of zero is treated as one so the partition always terminates.
///
/// # Example
/// ```
/// use factorial_fanout::domain::{partition_chunks, ChunkRange};
///
/// let chunks = partition_chunks(81, 80);
/// assert_eq!(chunks, vec![ChunkRange::new(1, 80), ChunkRange::new(81, 81)]);
/// ```
pub fn partition_chunks(n: u64, batch_size: u64) -> Vec<ChunkRange> {
    let batch_size = batch_size.max(1);
    let mut chunks = Vec::with_capacity(n.div_ceil(batch_size) as usize);

    let mut start = 1;
    while start <= n {
        let end = start.saturating_add(batch_size - 1).min(n);
        chunks.push(ChunkRange::new(start, end));
        if end == n {
            break;
        }
        start = end + 1;
    }

    chunks
}

// ============================================================================
// Execution Plan
// ============================================================================

/// How the batched strategy will evaluate a given input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionPlan {
    /// Input fits in one batch; multiply in place, spawn nothing
    Sequential,
    /// One worker per chunk
    Chunked(Vec<ChunkRange>),
}

impl ExecutionPlan {
    /// Decide the plan for `n` with the given batch size
    pub fn for_input(n: u64, batch_size: u64) -> Self {
        if n <= batch_size {
            ExecutionPlan::Sequential
        } else {
            ExecutionPlan::Chunked(partition_chunks(n, batch_size))
        }
    }

    /// Number of workers the plan spawns
    pub fn worker_count(&self) -> usize {
        match self {
            ExecutionPlan::Sequential => 0,
            ExecutionPlan::Chunked(chunks) => chunks.len(),
        }
    }

    pub fn is_sequential(&self) -> bool {
        matches!(self, ExecutionPlan::Sequential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_partition_exact_multiple() {
        let chunks = partition_chunks(160, 80);
        assert_eq!(chunks, vec![ChunkRange::new(1, 80), ChunkRange::new(81, 160)]);
    }

    #[test]
    fn test_partition_with_remainder() {
        let chunks = partition_chunks(81, 80);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].len(), 1);
    }

    #[test]
    fn test_partition_zero() {
        assert!(partition_chunks(0, 80).is_empty());
    }

    #[test]
    fn test_plan_boundary() {
        assert!(ExecutionPlan::for_input(80, DEFAULT_BATCH_SIZE).is_sequential());

        let plan = ExecutionPlan::for_input(81, DEFAULT_BATCH_SIZE);
        assert_eq!(plan.worker_count(), 2);
        assert_eq!(
            plan,
            ExecutionPlan::Chunked(vec![ChunkRange::new(1, 80), ChunkRange::new(81, 81)])
        );
    }

    #[test]
    fn test_chunk_contains() {
        let chunk = ChunkRange::new(81, 160);
        assert!(chunk.contains(81));
        assert!(chunk.contains(160));
        assert!(!chunk.contains(80));
        assert_eq!(chunk.len(), 80);
    }

    quickcheck! {
        fn prop_chunks_cover_range(n: u16, batch: u8) -> bool {
            let n = u64::from(n);
            let batch = u64::from(batch).max(1);
            let chunks = partition_chunks(n, batch);

            let sizes_ok = chunks.iter().all(|c| c.len() <= batch && c.start <= c.end);
            let covered: u64 = chunks.iter().map(ChunkRange::len).sum();
            let contiguous = chunks.windows(2).all(|w| w[0].end + 1 == w[1].start);
            let bounds_ok = match (chunks.first(), chunks.last()) {
                (Some(first), Some(last)) => first.start == 1 && last.end == n,
                _ => n == 0,
            };
            let count_ok = chunks.len() as u64 == n.div_ceil(batch);

            sizes_ok && covered == n && contiguous && bounds_ok && count_ok
        }
    }
}
