// ============================================================================
// Strategy Configuration
// Configuration for strategy selection, input policy and log rendering
// ============================================================================

use crate::domain::chunk::DEFAULT_BATCH_SIZE;
use crate::errors::{FactorialError, FactorialResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Log prefix of the sequential strategy sink
pub const SEQUENTIAL_PREFIX: &str = "Factorial without go routine: ";

/// Log prefix of the per-element fan-out strategy sink
pub const FAN_OUT_PREFIX: &str = "Factorial with go routine: ";

/// Log prefix of the batched fan-out strategy sink
pub const BATCHED_PREFIX: &str = "Factorial with batching approach: ";

/// Literal printed in place of the result when rendering is `Placeholder`
pub const RESULT_PLACEHOLDER: &str = "factFunc(n)";

// ============================================================================
// Strategy Type
// ============================================================================

/// Defines which execution strategy computes the factorial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StrategyType {
    /// Iterative multiplication on the calling thread
    Sequential,

    /// One worker per multiplicand, fanned in over a rendezvous channel
    /// - Spawns n threads for input n
    /// - Kept for contrast; not a performance strategy
    FanOut,

    /// One worker per contiguous chunk of multiplicands
    /// - Inputs at or below `batch_size` run sequentially
    Batched {
        /// Maximum number of multiplicands per chunk
        batch_size: u64,
    },
}

impl StrategyType {
    /// Log prefix conventionally bound to this strategy
    pub fn default_prefix(&self) -> &'static str {
        match self {
            StrategyType::Sequential => SEQUENTIAL_PREFIX,
            StrategyType::FanOut => FAN_OUT_PREFIX,
            StrategyType::Batched { .. } => BATCHED_PREFIX,
        }
    }
}

// ============================================================================
// Policies
// ============================================================================

/// What to do with a negative signed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NegativeInputPolicy {
    /// Fail with `FactorialError::NegativeInput`
    #[default]
    Reject,
    /// Treat the input as zero and return the multiplicative identity
    Identity,
}

impl NegativeInputPolicy {
    /// Convert a signed input into the unsigned domain of the strategies
    pub fn apply(&self, n: i64) -> FactorialResult<u64> {
        match u64::try_from(n) {
            Ok(n) => Ok(n),
            Err(_) => match self {
                NegativeInputPolicy::Reject => Err(FactorialError::NegativeInput(n)),
                NegativeInputPolicy::Identity => Ok(0),
            },
        }
    }
}

/// How the `result=` field of a timing line is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResultRendering {
    /// Print the fixed `factFunc(n)` literal
    #[default]
    Placeholder,
    /// Print the decimal digits of the computed value
    Value,
}

// ============================================================================
// Complete Strategy Configuration
// ============================================================================

/// Configuration for building one decorated strategy
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactorialConfig {
    /// Execution strategy
    pub strategy: StrategyType,

    /// Handling of negative signed inputs
    pub negative_input: NegativeInputPolicy,

    /// Rendering of the result in timing lines
    pub result_rendering: ResultRendering,

    /// Optional: Sink prefix override
    /// None means the strategy's default prefix
    pub sink_prefix: Option<String>,
}

impl FactorialConfig {
    /// Create a new configuration with default policies
    pub fn new(strategy: StrategyType) -> Self {
        Self {
            strategy,
            negative_input: NegativeInputPolicy::default(),
            result_rendering: ResultRendering::default(),
            sink_prefix: None,
        }
    }

    /// Builder method: Set negative input policy
    pub fn with_negative_input(mut self, policy: NegativeInputPolicy) -> Self {
        self.negative_input = policy;
        self
    }

    /// Builder method: Set result rendering
    pub fn with_result_rendering(mut self, rendering: ResultRendering) -> Self {
        self.result_rendering = rendering;
        self
    }

    /// Builder method: Set sink prefix
    pub fn with_sink_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.sink_prefix = Some(prefix.into());
        self
    }

    /// Prefix the sink should use
    pub fn prefix(&self) -> &str {
        self.sink_prefix
            .as_deref()
            .unwrap_or_else(|| self.strategy.default_prefix())
    }

    /// Validate the configuration
    pub fn validate(&self) -> FactorialResult<()> {
        if let StrategyType::Batched { batch_size } = self.strategy {
            if batch_size == 0 {
                return Err(FactorialError::InvalidConfig(
                    "Batch size must be positive".to_string(),
                ));
            }
        }

        if let Some(prefix) = &self.sink_prefix {
            if prefix.trim().is_empty() {
                return Err(FactorialError::InvalidConfig(
                    "Sink prefix cannot be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FactorialConfig {
    /// Sequential multiplication, default prefix
    pub fn sequential() -> Self {
        Self::new(StrategyType::Sequential)
    }

    /// One worker per multiplicand, default prefix
    pub fn fan_out() -> Self {
        Self::new(StrategyType::FanOut)
    }

    /// Batched fan-out with the default batch size of 80
    pub fn batched() -> Self {
        Self::new(StrategyType::Batched {
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    /// The three configurations the runner drives, in run order
    pub fn runner_presets() -> [Self; 3] {
        [Self::sequential(), Self::fan_out(), Self::batched()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = FactorialConfig::new(StrategyType::Sequential);

        assert_eq!(config.strategy, StrategyType::Sequential);
        assert_eq!(config.negative_input, NegativeInputPolicy::Reject);
        assert_eq!(config.result_rendering, ResultRendering::Placeholder);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FactorialConfig::batched()
            .with_negative_input(NegativeInputPolicy::Identity)
            .with_result_rendering(ResultRendering::Value)
            .with_sink_prefix("batch: ");

        assert_eq!(config.negative_input, NegativeInputPolicy::Identity);
        assert_eq!(config.result_rendering, ResultRendering::Value);
        assert_eq!(config.prefix(), "batch: ");
    }

    #[test]
    fn test_validation() {
        let config = FactorialConfig::new(StrategyType::Batched { batch_size: 0 });
        assert!(matches!(
            config.validate(),
            Err(FactorialError::InvalidConfig(_))
        ));

        let config = FactorialConfig::sequential().with_sink_prefix("   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        for config in FactorialConfig::runner_presets() {
            assert!(config.validate().is_ok());
        }

        assert_eq!(FactorialConfig::sequential().prefix(), SEQUENTIAL_PREFIX);
        assert_eq!(FactorialConfig::fan_out().prefix(), FAN_OUT_PREFIX);
        assert_eq!(FactorialConfig::batched().prefix(), BATCHED_PREFIX);
    }

    #[test]
    fn test_negative_input_policy() {
        assert_eq!(NegativeInputPolicy::Reject.apply(5), Ok(5));
        assert_eq!(
            NegativeInputPolicy::Reject.apply(-2),
            Err(FactorialError::NegativeInput(-2))
        );
        assert_eq!(NegativeInputPolicy::Identity.apply(-2), Ok(0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "strategy": { "Batched": { "batch_size": 16 } },
            "negative_input": "Identity",
            "result_rendering": "Value",
            "sink_prefix": null
        }"#;
        let config: FactorialConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.strategy, StrategyType::Batched { batch_size: 16 });
        assert_eq!(config.negative_input, NegativeInputPolicy::Identity);
        assert_eq!(config.prefix(), BATCHED_PREFIX);
    }
}
