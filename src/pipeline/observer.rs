//! Batch observer: hooks for logging, progress and timing.
//!
//! Observers receive notifications at batch boundaries and once per
//! document, always in input order, without coupling to scoring logic.
//! Documents may be scored in parallel; notifications are replayed
//! sequentially once the batch is collected.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::pipeline::assembler::DocumentOutcome;
use crate::types::MetricsRecord;

/// Counts and timing for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub analyzed: usize,
    pub missing: usize,
    pub rejected: usize,
    pub elapsed: Duration,
}

impl BatchSummary {
    /// Documents that received a zero-filled record
    pub fn skipped(&self) -> usize {
        self.missing + self.rejected
    }
}

/// Wall-clock timer for a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchClock {
    started: Instant,
}

impl BatchClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Receives batch progress notifications.
///
/// Every method has an empty default body; implement only what you need.
pub trait BatchObserver {
    fn on_batch_start(&mut self, _total: usize) {}

    fn on_document(&mut self, _index: usize, _record: &MetricsRecord, _outcome: &DocumentOutcome) {}

    fn on_batch_end(&mut self, _summary: &BatchSummary) {}
}

/// Ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// Emits one `tracing` event per document and a summary at the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl BatchObserver for TracingObserver {
    fn on_batch_start(&mut self, total: usize) {
        info!(documents = total, "Batch started");
    }

    fn on_document(&mut self, index: usize, record: &MetricsRecord, outcome: &DocumentOutcome) {
        match outcome {
            DocumentOutcome::Analyzed => {
                debug!(index, id = %record.id, "Analyzed document");
            }
            DocumentOutcome::Missing => {
                warn!(index, id = %record.id, "Missing text, filling zeros");
            }
            DocumentOutcome::Rejected { reason } => {
                warn!(index, id = %record.id, %reason, "Document rejected, filling zeros");
            }
        }
    }

    fn on_batch_end(&mut self, summary: &BatchSummary) {
        info!(
            total = summary.total,
            analyzed = summary.analyzed,
            missing = summary.missing,
            rejected = summary.rejected,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Batch finished"
        );
    }
}
