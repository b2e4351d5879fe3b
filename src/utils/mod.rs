// ============================================================================
// Utilities Module
// Helper functions for binaries and demos
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, parse_level};
