// ============================================================================
// Factorial Fan-Out Library
// Interchangeable factorial strategies behind a timing decorator
// ============================================================================

//! # Factorial Fan-Out
//!
//! Three ways of computing `n!` over arbitrary-precision integers, all
//! sharing the [`FactorialStrategy`](interfaces::FactorialStrategy) signature.
//!
//! ## Strategies
//!
//! - **Sequential**: iterative multiplication on the calling thread
//! - **Fan-out**: one worker thread per multiplicand, fanned in over an
//!   unbuffered channel (a deliberate anti-pattern, kept for comparison)
//! - **Batched fan-out**: one worker per chunk of 80 multiplicands; inputs
//!   of 80 or less run sequentially
//!
//! Any strategy can be wrapped in [`Timed`](engine::Timed), which reports
//! elapsed time, input and result through a [`TimingSink`](interfaces::TimingSink)
//! without touching the returned value.
//!
//! ## Example
//!
//! ```rust
//! use factorial_fanout::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new(BATCHED_PREFIX));
//! let batched = Timed::new(BatchedFanOut::default(), sink.clone());
//!
//! let value = batched.factorial(10).unwrap();
//! assert_eq!(value.to_string(), "3628800");
//!
//! // One line per call
//! println!("{}", sink.lines()[0]);
//!
//! // Run every strategy once, printing to stdout
//! FactorialRunner::stdout().run(100);
//! ```

pub mod domain;
pub mod engine;
pub mod errors;
pub mod interfaces;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        partition_chunks, ChunkRange, ExecutionPlan, FactorialConfig, NegativeInputPolicy,
        ResultRendering, StrategyType, BATCHED_PREFIX, DEFAULT_BATCH_SIZE, FAN_OUT_PREFIX,
        SEQUENTIAL_PREFIX,
    };
    #[cfg(feature = "async")]
    pub use crate::engine::{AsyncBatchedFanOut, AsyncFanOut};
    pub use crate::engine::{
        create_from_config, sequential_product, timed, BatchedFanOut, FactorialRunner,
        FactorialStrategyBuilder, FanOut, Sequential, Timed, TimedStrategy,
    };
    pub use crate::errors::{FactorialError, FactorialResult};
    pub use crate::interfaces::{
        FactorialStrategy, FnStrategy, MemorySink, NoOpSink, StdoutSink, TimingOutcome,
        TimingRecord, TimingSink, TracingSink,
    };
}
