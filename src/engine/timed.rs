// ============================================================================
// Timing Decorator
// Wraps any strategy and reports one timing record per call
// ============================================================================

use crate::domain::{NegativeInputPolicy, ResultRendering, RESULT_PLACEHOLDER};
use crate::errors::FactorialResult;
use crate::interfaces::{FactorialStrategy, FnStrategy, TimingOutcome, TimingRecord, TimingSink};
use chrono::Local;
use num_bigint::BigUint;
use std::sync::Arc;
use std::time::Instant;

/// Decorator measuring wall-clock time around a wrapped strategy
///
/// The wrapped value is returned unchanged. The record is emitted by a drop
/// guard, so errors and panics in the wrapped call are still reported.
///
/// # Example
/// ```
/// use factorial_fanout::prelude::*;
/// use num_bigint::BigUint;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new("Factorial without go routine: "));
/// let timed = Timed::new(Sequential::new(), sink.clone());
///
/// assert_eq!(timed.factorial(5).unwrap(), BigUint::from(120u32));
/// assert_eq!(sink.len(), 1);
/// ```
pub struct Timed<S> {
    inner: S,
    sink: Arc<dyn TimingSink>,
    result_rendering: ResultRendering,
    negative_input: NegativeInputPolicy,
}

impl<S: FactorialStrategy> Timed<S> {
    pub fn new(inner: S, sink: Arc<dyn TimingSink>) -> Self {
        Self {
            inner,
            sink,
            result_rendering: ResultRendering::default(),
            negative_input: NegativeInputPolicy::default(),
        }
    }

    /// Builder method: Set result rendering
    pub fn with_result_rendering(mut self, rendering: ResultRendering) -> Self {
        self.result_rendering = rendering;
        self
    }

    /// Builder method: Set negative input policy
    pub fn with_negative_input(mut self, policy: NegativeInputPolicy) -> Self {
        self.negative_input = policy;
        self
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn negative_input(&self) -> NegativeInputPolicy {
        self.negative_input
    }

    /// Timed call on a signed input.
    ///
    /// Rejected inputs never reach the wrapped strategy and produce no record.
    pub fn factorial_signed(&self, n: i64) -> FactorialResult<BigUint> {
        let n = self.negative_input.apply(n)?;
        self.factorial(n)
    }

    fn render(&self, result: &FactorialResult<BigUint>) -> TimingOutcome {
        match result {
            Ok(value) => match self.result_rendering {
                ResultRendering::Placeholder => {
                    TimingOutcome::Completed(RESULT_PLACEHOLDER.to_string())
                },
                ResultRendering::Value => TimingOutcome::Completed(value.to_string()),
            },
            Err(e) => TimingOutcome::Failed(e.to_string()),
        }
    }
}

impl<S: FactorialStrategy> FactorialStrategy for Timed<S> {
    fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        let mut guard = TimingGuard::start(self.inner.name(), n, &*self.sink);
        let result = self.inner.factorial(n);
        guard.finish(self.render(&result));
        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Wrap a plain function; the returned closure has the same signature.
///
/// # Example
/// ```
/// use factorial_fanout::engine::{sequential_product, timed};
/// use factorial_fanout::interfaces::NoOpSink;
/// use std::sync::Arc;
///
/// let fact = timed(|n| Ok(sequential_product(1, n)), Arc::new(NoOpSink));
/// assert_eq!(fact(4).unwrap().to_string(), "24");
/// ```
pub fn timed<F>(
    func: F,
    sink: Arc<dyn TimingSink>,
) -> impl Fn(u64) -> FactorialResult<BigUint> + Send + Sync
where
    F: Fn(u64) -> FactorialResult<BigUint> + Send + Sync,
{
    let decorated = Timed::new(FnStrategy::new("fn", func), sink);
    move |n| decorated.factorial(n)
}

/// Emits exactly one record when dropped
struct TimingGuard<'a> {
    strategy: &'a str,
    n: u64,
    sink: &'a dyn TimingSink,
    started: Instant,
    outcome: Option<TimingOutcome>,
}

impl<'a> TimingGuard<'a> {
    fn start(strategy: &'a str, n: u64, sink: &'a dyn TimingSink) -> Self {
        Self {
            strategy,
            n,
            sink,
            started: Instant::now(),
            outcome: None,
        }
    }

    fn finish(&mut self, outcome: TimingOutcome) {
        self.outcome = Some(outcome);
    }
}

impl Drop for TimingGuard<'_> {
    fn drop(&mut self) {
        let record = TimingRecord {
            strategy: self.strategy.to_string(),
            n: self.n,
            elapsed: self.started.elapsed(),
            finished_at: Local::now(),
            // No outcome means the wrapped call unwound
            outcome: self.outcome.take().unwrap_or(TimingOutcome::Panicked),
        };
        self.sink.on_timing(&record);
    }
}
