//! Consumers of the progress and outcome streams

use credsim_errors::VerifyError;
use credsim_events::{BatchEvent, EventEmitter, EventSender, FailureContext};
use credsim_types::{BatchReport, BatchStatus, VerificationOutcome};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Receives the two ordered notification streams of one batch.
///
/// `on_progress` and `on_outcome` are each called exactly once per record,
/// progress first. The lifecycle hooks default to no-ops.
pub trait BatchSink {
    /// Percentage of records processed so far, `floor(processed * 100 / total)`
    fn on_progress(&mut self, percent: u8);

    /// Outcome of the record just processed, in input order
    fn on_outcome(&mut self, outcome: &VerificationOutcome);

    /// Input parsed into `total` records; called before any record
    fn on_start(&mut self, _total: usize) {}

    /// Classification of record `index` failed; its outcome follows
    fn on_fault(&mut self, _index: usize, _error: &VerifyError) {}

    /// Run finished or was cancelled
    fn on_finish(&mut self, _report: &BatchReport) {}
}

/// One item of either stream, for channel or collection consumers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchUpdate {
    Progress(u8),
    Outcome(VerificationOutcome),
}

impl BatchSink for Vec<BatchUpdate> {
    fn on_progress(&mut self, percent: u8) {
        self.push(BatchUpdate::Progress(percent));
    }

    fn on_outcome(&mut self, outcome: &VerificationOutcome) {
        self.push(BatchUpdate::Outcome(outcome.clone()));
    }
}

impl BatchSink for UnboundedSender<BatchUpdate> {
    fn on_progress(&mut self, percent: u8) {
        // receiver gone means nobody is listening; the run still completes
        let _ = self.send(BatchUpdate::Progress(percent));
    }

    fn on_outcome(&mut self, outcome: &VerificationOutcome) {
        let _ = self.send(BatchUpdate::Outcome(outcome.clone()));
    }
}

/// Discards everything
impl BatchSink for () {
    fn on_progress(&mut self, _percent: u8) {}

    fn on_outcome(&mut self, _outcome: &VerificationOutcome) {}
}

/// Sink built from a progress closure and an outcome closure
pub struct FnSink<P, O> {
    progress: P,
    outcome: O,
}

/// Build a sink from two callbacks
pub fn sink_fn<P, O>(progress: P, outcome: O) -> FnSink<P, O>
where
    P: FnMut(u8),
    O: FnMut(&VerificationOutcome),
{
    FnSink { progress, outcome }
}

impl<P, O> BatchSink for FnSink<P, O>
where
    P: FnMut(u8),
    O: FnMut(&VerificationOutcome),
{
    fn on_progress(&mut self, percent: u8) {
        (self.progress)(percent);
    }

    fn on_outcome(&mut self, outcome: &VerificationOutcome) {
        (self.outcome)(outcome);
    }
}

/// Forwards a batch onto the application event channel
pub struct EventSink {
    tx: EventSender,
    batch_id: String,
    total: usize,
    processed: usize,
}

impl EventSink {
    #[must_use]
    pub fn new(tx: EventSender) -> Self {
        Self::with_batch_id(tx, uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn with_batch_id(tx: EventSender, batch_id: impl Into<String>) -> Self {
        Self {
            tx,
            batch_id: batch_id.into(),
            total: 0,
            processed: 0,
        }
    }

    #[must_use]
    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }
}

impl EventEmitter for EventSink {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(&self.tx)
    }
}

impl BatchSink for EventSink {
    fn on_start(&mut self, total: usize) {
        self.total = total;
        self.processed = 0;
        self.emit_batch(BatchEvent::Started {
            batch_id: self.batch_id.clone(),
            total,
        });
        self.emit_progress_started(&self.batch_id, "verify", total as u64);
    }

    fn on_progress(&mut self, percent: u8) {
        self.processed += 1;
        self.emit_progress_updated(
            &self.batch_id,
            self.processed as u64,
            self.total as u64,
            percent,
        );
    }

    fn on_outcome(&mut self, outcome: &VerificationOutcome) {
        self.emit_batch(BatchEvent::OutcomeRecorded {
            batch_id: self.batch_id.clone(),
            index: self.processed.saturating_sub(1),
            identifier: outcome.identifier().to_string(),
            is_working: outcome.is_working(),
            message: outcome.message(),
        });
    }

    fn on_fault(&mut self, index: usize, error: &VerifyError) {
        self.emit_batch(BatchEvent::RecordFaulted {
            batch_id: self.batch_id.clone(),
            index,
            failure: FailureContext::from_error(error),
        });
    }

    fn on_finish(&mut self, report: &BatchReport) {
        match report.status {
            BatchStatus::Complete => {
                self.emit_progress_completed(
                    &self.batch_id,
                    Duration::from_millis(report.duration_ms),
                );
                self.emit_batch(BatchEvent::Completed {
                    batch_id: self.batch_id.clone(),
                    summary: report.summary,
                    duration_ms: report.duration_ms,
                });
            }
            BatchStatus::Cancelled { processed } => {
                self.emit_batch(BatchEvent::Cancelled {
                    batch_id: self.batch_id.clone(),
                    processed,
                    total: report.total,
                });
            }
        }
    }
}
