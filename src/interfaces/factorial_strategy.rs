// ============================================================================
// Factorial Strategy Interface
// Defines the contract shared by every factorial execution strategy
// ============================================================================

use crate::errors::FactorialResult;
use num_bigint::BigUint;
use std::sync::Arc;

/// Strategy pattern interface for factorial computation
/// Implementations: Sequential, FanOut, BatchedFanOut, and the Timed decorator
pub trait FactorialStrategy: Send + Sync {
    /// Compute `n!`
    ///
    /// # Arguments
    /// * `n` - The input; `0! == 1! == 1`
    ///
    /// # Returns
    /// The factorial, or an error if the concurrent machinery failed
    fn factorial(&self, n: u64) -> FactorialResult<BigUint>;

    /// Get the strategy name for logging
    fn name(&self) -> &str;
}

/// Adapter turning a plain function or closure into a named strategy
pub struct FnStrategy<F> {
    name: String,
    func: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(u64) -> FactorialResult<BigUint> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> FactorialStrategy for FnStrategy<F>
where
    F: Fn(u64) -> FactorialResult<BigUint> + Send + Sync,
{
    fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        (self.func)(n)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl FactorialStrategy for Box<dyn FactorialStrategy> {
    fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        (**self).factorial(n)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<S: FactorialStrategy + ?Sized> FactorialStrategy for Arc<S> {
    fn factorial(&self, n: u64) -> FactorialResult<BigUint> {
        (**self).factorial(n)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn test_fn_strategy() {
        let identity = FnStrategy::new("identity", |_n: u64| Ok(BigUint::one()));
        assert_eq!(identity.factorial(42).unwrap(), BigUint::one());
        assert_eq!(identity.name(), "identity");
    }

    #[test]
    fn test_boxed_strategy_delegates() {
        let boxed: Box<dyn FactorialStrategy> =
            Box::new(FnStrategy::new("echo", |n: u64| Ok(BigUint::from(n))));
        assert_eq!(boxed.factorial(7).unwrap(), BigUint::from(7u32));
        assert_eq!(boxed.name(), "echo");

        let shared = Arc::new(boxed);
        assert_eq!(shared.factorial(3).unwrap(), BigUint::from(3u32));
    }
}
