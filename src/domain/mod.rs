// ============================================================================
// Domain Models Module
// Contains chunk partitioning, execution plans and configuration
// ============================================================================

pub mod chunk;
pub mod config;

pub use chunk::{partition_chunks, ChunkRange, ExecutionPlan, DEFAULT_BATCH_SIZE};
pub use config::{
    FactorialConfig, NegativeInputPolicy, ResultRendering, StrategyType, BATCHED_PREFIX,
    FAN_OUT_PREFIX, RESULT_PLACEHOLDER, SEQUENTIAL_PREFIX,
};
