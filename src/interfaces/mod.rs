// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod factorial_strategy;
mod timing_sink;

pub use factorial_strategy::{FactorialStrategy, FnStrategy};
pub use timing_sink::{
    MemorySink, NoOpSink, StdoutSink, TimingOutcome, TimingRecord, TimingSink, TracingSink,
    TIMESTAMP_FORMAT,
};
