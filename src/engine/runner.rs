// ============================================================================
// Runner
// Drives every decorated strategy once for a given input
// ============================================================================

use crate::domain::config::{FactorialConfig, NegativeInputPolicy};
use crate::engine::factory::{build_timed, TimedStrategy};
use crate::errors::FactorialResult;
use crate::interfaces::{FactorialStrategy, StdoutSink, TimingSink};
use std::sync::Arc;

/// Runs the sequential, fan-out and batched strategies in that order.
///
/// Results are discarded; each strategy reports through its own sink.
pub struct FactorialRunner {
    strategies: Vec<TimedStrategy>,
    negative_input: NegativeInputPolicy,
}

impl FactorialRunner {
    /// Runner over the three preset strategies, one sink per strategy
    pub fn with_sinks(
        sequential: Arc<dyn TimingSink>,
        fan_out: Arc<dyn TimingSink>,
        batched: Arc<dyn TimingSink>,
    ) -> Self {
        let [sequential_config, fan_out_config, batched_config] =
            FactorialConfig::runner_presets();

        Self {
            strategies: vec![
                build_timed(&sequential_config, sequential),
                build_timed(&fan_out_config, fan_out),
                build_timed(&batched_config, batched),
            ],
            negative_input: NegativeInputPolicy::default(),
        }
    }

    /// Runner printing each strategy's timing line to stdout
    pub fn stdout() -> Self {
        let presets = FactorialConfig::runner_presets();
        let strategies = presets
            .iter()
            .map(|config| build_timed(config, Arc::new(StdoutSink::new(config.prefix()))))
            .collect();

        Self {
            strategies,
            negative_input: NegativeInputPolicy::default(),
        }
    }

    /// Runner over arbitrary configurations, run in the given order
    pub fn from_configs<F>(configs: Vec<FactorialConfig>, make_sink: F) -> FactorialResult<Self>
    where
        F: Fn(&FactorialConfig) -> Arc<dyn TimingSink>,
    {
        let mut strategies = Vec::with_capacity(configs.len());
        for config in &configs {
            config.validate()?;
            strategies.push(build_timed(config, make_sink(config)));
        }

        Ok(Self {
            strategies,
            negative_input: NegativeInputPolicy::default(),
        })
    }

    /// Builder method: Set negative input policy for `run_signed`
    pub fn with_negative_input(mut self, policy: NegativeInputPolicy) -> Self {
        self.negative_input = policy;
        self
    }

    /// Names of the driven strategies, in run order
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Invoke every strategy exactly once with `n`
    pub fn run(&self, n: u64) {
        for strategy in &self.strategies {
            if let Err(e) = strategy.factorial(n) {
                tracing::warn!(strategy = strategy.name(), n, error = %e, "strategy failed");
            }
        }
    }

    /// Apply the negative input policy, then run
    pub fn run_signed(&self, n: i64) -> FactorialResult<()> {
        let n = self.negative_input.apply(n)?;
        self.run(n);
        Ok(())
    }
}
