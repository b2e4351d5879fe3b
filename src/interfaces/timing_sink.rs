// ============================================================================
// Timing Sink Interface
// Defines the contract for consuming timing records from decorated strategies
// ============================================================================

use crate::domain::RESULT_PLACEHOLDER;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::io::Write;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timestamp layout of a timing line (`2009/11/10 23:00:00`)
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// How a decorated call ended
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimingOutcome {
    /// Call returned a value; carries the rendered `result=` field
    Completed(String),
    /// Call returned an error
    Failed(String),
    /// Call unwound before returning
    Panicked,
}

/// One timed invocation of a strategy
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingRecord {
    /// Name of the wrapped strategy
    pub strategy: String,

    /// Input of the call
    pub n: u64,

    /// Wall-clock time spent in the wrapped call
    pub elapsed: Duration,

    /// When the call finished
    pub finished_at: DateTime<Local>,

    /// How the call ended
    pub outcome: TimingOutcome,
}

impl TimingRecord {
    /// Text printed after `result=`
    pub fn result_field(&self) -> &str {
        match &self.outcome {
            TimingOutcome::Completed(rendered) => rendered,
            TimingOutcome::Failed(_) | TimingOutcome::Panicked => RESULT_PLACEHOLDER,
        }
    }

    /// Format as `<prefix><timestamp> took=<duration>, n=<input>, result=<result>`
    pub fn format_line(&self, prefix: &str) -> String {
        let mut line = format!(
            "{}{} took={:?}, n={}, result={}",
            prefix,
            self.finished_at.format(TIMESTAMP_FORMAT),
            self.elapsed,
            self.n,
            self.result_field()
        );

        match &self.outcome {
            TimingOutcome::Failed(reason) => {
                line.push_str(", error=");
                line.push_str(reason);
            },
            TimingOutcome::Panicked => line.push_str(", panicked=true"),
            TimingOutcome::Completed(_) => {},
        }

        line
    }
}

/// Sink trait for timing records emitted by the timing decorator
/// Implementations can print, trace, or collect records
pub trait TimingSink: Send + Sync {
    /// Handle one timing record
    fn on_timing(&self, record: &TimingRecord);
}

/// No-op sink for testing
pub struct NoOpSink;

impl TimingSink for NoOpSink {
    fn on_timing(&self, _record: &TimingRecord) {
        // Do nothing
    }
}

/// Prefixed line writer on standard output
pub struct StdoutSink {
    prefix: String,
}

impl StdoutSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl TimingSink for StdoutSink {
    fn on_timing(&self, record: &TimingRecord) {
        let line = record.format_line(&self.prefix);
        let mut stdout = std::io::stdout().lock();
        // Write failures are not surfaced to the caller
        let _ = writeln!(stdout, "{}", line);
    }
}

/// Structured tracing sink
pub struct TracingSink {
    prefix: String,
}

impl TracingSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl TimingSink for TracingSink {
    fn on_timing(&self, record: &TimingRecord) {
        tracing::info!(
            prefix = %self.prefix.trim_end(),
            strategy = %record.strategy,
            n = record.n,
            took = ?record.elapsed,
            result = %record.result_field(),
            "factorial timing"
        );
    }
}

/// In-memory sink that keeps every record
pub struct MemorySink {
    prefix: String,
    records: Mutex<Vec<TimingRecord>>,
}

impl MemorySink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the collected records
    pub fn records(&self) -> Vec<TimingRecord> {
        self.records.lock().clone()
    }

    /// Collected records rendered as log lines
    pub fn lines(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.format_line(&self.prefix))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl TimingSink for MemorySink {
    fn on_timing(&self, record: &TimingRecord) {
        self.records.lock().push(record.clone());
    }
}
