// ============================================================================
// Logging Setup
// Installs a global tracing subscriber for binaries and demos
// ============================================================================

use crate::errors::{FactorialError, FactorialResult};
use tracing::Level;

/// Install a `fmt` subscriber writing to stdout at `level`.
///
/// Worker thread names (`fan-out-7`, `batch-81-160`) are included so chunk
/// events can be traced back to their worker.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(level: Level) -> FactorialResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_thread_names(true)
        .with_target(false)
        .try_init()
        .map_err(|e| FactorialError::LoggingInit(e.to_string()))
}

/// Parse a level name (`trace`, `debug`, `info`, `warn`, `error`)
pub fn parse_level(name: &str) -> FactorialResult<Level> {
    name.parse::<Level>()
        .map_err(|_| FactorialError::InvalidConfig(format!("unknown log level: {}", name)))
}
