// ============================================================================
// Fan-In
// Rendezvous hand-off point and the consumer side of every fan-out strategy
// ============================================================================

use crate::errors::{FactorialError, FactorialResult};
use crossbeam::channel::{self, Receiver, Sender};
use num_bigint::BigUint;
use num_traits::One;
use std::thread;

/// Unbuffered channel: every send blocks until the consumer receives it
pub(crate) fn rendezvous() -> (Sender<BigUint>, Receiver<BigUint>) {
    channel::bounded(0)
}

/// Spawn a detached, named producer thread
pub(crate) fn spawn_producer<F>(name: String, producer: F) -> FactorialResult<()>
where
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name(name)
        .spawn(producer)
        .map(|_detached| ())
        .map_err(|e| FactorialError::Spawn(e.to_string()))
}

/// Receive exactly `expected` values in arrival order and multiply them together.
///
/// The caller must have dropped its own sender; otherwise a lost producer
/// blocks forever instead of surfacing `WorkerDisconnected`.
pub(crate) fn fan_in(receiver: &Receiver<BigUint>, expected: u64) -> FactorialResult<BigUint> {
    let mut result = BigUint::one();

    for received in 0..expected {
        match receiver.recv() {
            Ok(value) => result *= value,
            Err(_) => {
                return Err(FactorialError::WorkerDisconnected { expected, received });
            },
        }
    }

    Ok(result)
}
