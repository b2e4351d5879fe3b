// ============================================================================
// Engine Module
// Contains the factorial strategies, the timing decorator and the runner
// ============================================================================

mod batched;
mod fan_in;
mod fan_out;
mod runner;
mod sequential;
mod timed;

#[cfg(feature = "async")]
mod async_fan_out;

pub mod factory;

#[cfg(feature = "async")]
pub use async_fan_out::{AsyncBatchedFanOut, AsyncFanOut};
pub use batched::BatchedFanOut;
pub use factory::{create_from_config, FactorialStrategyBuilder, TimedStrategy};
pub use fan_out::FanOut;
pub use runner::FactorialRunner;
pub use sequential::{sequential_product, Sequential};
pub use timed::{timed, Timed};
