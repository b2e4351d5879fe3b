// ============================================================================
// Strategy Factory
// Creates decorated factorial strategies with proper configuration
// ============================================================================

use crate::domain::config::{
    FactorialConfig, NegativeInputPolicy, ResultRendering, StrategyType,
};
use crate::domain::DEFAULT_BATCH_SIZE;
use crate::engine::{BatchedFanOut, FanOut, Sequential, Timed};
use crate::errors::FactorialResult;
use crate::interfaces::{FactorialStrategy, StdoutSink, TimingSink};
use std::sync::Arc;

/// A configured strategy behind the timing decorator
pub type TimedStrategy = Timed<Box<dyn FactorialStrategy>>;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a decorated strategy from configuration
///
/// # Arguments
/// * `config` - Strategy configuration
/// * `sink` - Sink receiving one timing record per call
///
/// # Returns
/// * `FactorialResult<TimedStrategy>` - Configured strategy or error
///
/// # Example
/// ```
/// use factorial_fanout::prelude::*;
/// use factorial_fanout::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let strategy = create_from_config(FactorialConfig::batched(), Arc::new(NoOpSink)).unwrap();
/// assert_eq!(strategy.factorial(5).unwrap().to_string(), "120");
/// ```
pub fn create_from_config(
    config: FactorialConfig,
    sink: Arc<dyn TimingSink>,
) -> FactorialResult<TimedStrategy> {
    // Validate configuration first
    config.validate()?;

    Ok(build_timed(&config, sink))
}

/// Creates a decorated strategy writing to stdout under the configured prefix
pub fn create_stdout_from_config(config: FactorialConfig) -> FactorialResult<TimedStrategy> {
    let sink = Arc::new(StdoutSink::new(config.prefix()));
    create_from_config(config, sink)
}

/// Creates the undecorated strategy for a strategy type
pub fn create_strategy(strategy: &StrategyType) -> Box<dyn FactorialStrategy> {
    match strategy {
        StrategyType::Sequential => Box::new(Sequential::new()),
        StrategyType::FanOut => Box::new(FanOut::new()),
        StrategyType::Batched { batch_size } => Box::new(BatchedFanOut::new(*batch_size)),
    }
}

/// Assembles the decorator without validating; callers own validation
pub(crate) fn build_timed(config: &FactorialConfig, sink: Arc<dyn TimingSink>) -> TimedStrategy {
    Timed::new(create_strategy(&config.strategy), sink)
        .with_result_rendering(config.result_rendering)
        .with_negative_input(config.negative_input)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating decorated strategies with fluent API
///
/// # Example
/// ```
/// use factorial_fanout::prelude::*;
/// use std::sync::Arc;
///
/// let strategy = FactorialStrategyBuilder::new()
///     .batched(16)
///     .render_values()
///     .build(Arc::new(NoOpSink))
///     .unwrap();
///
/// assert_eq!(strategy.name(), "batched");
/// ```
pub struct FactorialStrategyBuilder {
    config: FactorialConfig,
}

impl FactorialStrategyBuilder {
    /// Create a new builder for the sequential strategy
    pub fn new() -> Self {
        Self {
            config: FactorialConfig::sequential(),
        }
    }

    // ========================================================================
    // Strategy Configuration
    // ========================================================================

    /// Multiply on the calling thread
    pub fn sequential(mut self) -> Self {
        self.config.strategy = StrategyType::Sequential;
        self
    }

    /// One worker per multiplicand
    pub fn fan_out(mut self) -> Self {
        self.config.strategy = StrategyType::FanOut;
        self
    }

    /// One worker per chunk of `batch_size` multiplicands
    pub fn batched(mut self, batch_size: u64) -> Self {
        self.config.strategy = StrategyType::Batched { batch_size };
        self
    }

    /// Batched with the default batch size
    pub fn batched_default(self) -> Self {
        self.batched(DEFAULT_BATCH_SIZE)
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Print computed values instead of the placeholder
    pub fn render_values(mut self) -> Self {
        self.config.result_rendering = ResultRendering::Value;
        self
    }

    /// Set negative input policy
    pub fn with_negative_input(mut self, policy: NegativeInputPolicy) -> Self {
        self.config.negative_input = policy;
        self
    }

    /// Override the sink prefix
    pub fn with_sink_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.sink_prefix = Some(prefix.into());
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the decorated strategy
    pub fn build(self, sink: Arc<dyn TimingSink>) -> FactorialResult<TimedStrategy> {
        create_from_config(self.config, sink)
    }

    /// Build the decorated strategy with a stdout sink
    pub fn build_stdout(self) -> FactorialResult<TimedStrategy> {
        create_stdout_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FactorialConfig {
        &self.config
    }
}

impl Default for FactorialStrategyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FactorialError;
    use crate::interfaces::{MemorySink, NoOpSink};
    use num_bigint::BigUint;

    #[test]
    fn test_create_each_strategy() {
        for config in FactorialConfig::runner_presets() {
            let strategy = create_from_config(config, Arc::new(NoOpSink)).unwrap();
            assert_eq!(strategy.factorial(10).unwrap(), BigUint::from(3_628_800u32));
        }
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = FactorialConfig::new(StrategyType::Batched { batch_size: 0 });
        assert!(matches!(
            create_from_config(config, Arc::new(NoOpSink)),
            Err(FactorialError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(create_strategy(&StrategyType::Sequential).name(), "sequential");
        assert_eq!(create_strategy(&StrategyType::FanOut).name(), "fan-out");
        assert_eq!(
            create_strategy(&StrategyType::Batched { batch_size: 8 }).name(),
            "batched"
        );
    }

    #[test]
    fn test_builder_pattern() {
        let sink = Arc::new(MemorySink::new("b: "));
        let strategy = FactorialStrategyBuilder::new()
            .fan_out()
            .render_values()
            .with_negative_input(NegativeInputPolicy::Identity)
            .build(sink.clone())
            .unwrap();

        assert_eq!(strategy.factorial_signed(-1).unwrap(), BigUint::from(1u32));
        assert_eq!(strategy.factorial(6).unwrap(), BigUint::from(720u32));
        assert_eq!(sink.records()[1].result_field(), "720");
    }

    #[test]
    fn test_builder_config_inspection() {
        let builder = FactorialStrategyBuilder::new()
            .batched_default()
            .with_sink_prefix("custom: ");

        assert_eq!(
            builder.get_config().strategy,
            StrategyType::Batched { batch_size: 80 }
        );
        assert_eq!(builder.get_config().prefix(), "custom: ");
    }
}
