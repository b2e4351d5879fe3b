// ============================================================================
// Factorial Errors
// Error types for strategy execution, configuration and input validation
// ============================================================================

use std::fmt;

/// Errors that can occur while configuring or running a factorial strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FactorialError {
    /// Signed input was negative and the policy rejects it
    NegativeInput(i64),
    /// Configuration failed validation
    InvalidConfig(String),
    /// The OS refused to create a worker thread
    Spawn(String),
    /// Every producer hung up before all values were received
    WorkerDisconnected { expected: u64, received: u64 },
    /// A global tracing subscriber could not be installed
    LoggingInit(String),
}

impl fmt::Display for FactorialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorialError::NegativeInput(n) => {
                write!(f, "invalid input: factorial is undefined for n={}", n)
            },
            FactorialError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            FactorialError::Spawn(reason) => write!(f, "failed to spawn worker: {}", reason),
            FactorialError::WorkerDisconnected { expected, received } => write!(
                f,
                "workers disconnected after {} of {} values were received",
                received, expected
            ),
            FactorialError::LoggingInit(reason) => {
                write!(f, "failed to initialise logging: {}", reason)
            },
        }
    }
}

impl std::error::Error for FactorialError {}

/// Result type alias for factorial operations
pub type FactorialResult<T> = Result<T, FactorialError>;
