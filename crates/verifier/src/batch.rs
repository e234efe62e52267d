//! Sequential batch evaluation

use crate::classify::{Classifier, HeuristicClassifier};
use crate::pacing::{pacer_from_config, PaceStage, Pacer};
use crate::parse::parse_records;
use crate::sink::{BatchSink, BatchUpdate};
use credsim_config::Config;
use credsim_errors::{Error, VerifyError};
use credsim_types::{
    BatchReport, BatchStatus, CredentialRecord, OutcomeMessage, VerificationOutcome,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Where a single run stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
    Complete,
}

/// Per-run bookkeeping. Owned by one `run` call, never shared.
#[derive(Debug)]
struct BatchRun {
    records: Vec<CredentialRecord>,
    outcomes: Vec<VerificationOutcome>,
    state: BatchState,
    started: Instant,
}

impl BatchRun {
    fn new(input: &str) -> Self {
        Self {
            records: parse_records(input),
            outcomes: Vec::new(),
            state: BatchState::Idle,
            started: Instant::now(),
        }
    }

    fn transition(&mut self, next: BatchState) {
        debug!(from = ?self.state, to = ?next, "batch state");
        self.state = next;
    }

    fn total(&self) -> usize {
        self.records.len()
    }

    fn processed(&self) -> usize {
        self.outcomes.len()
    }

    /// `floor(processed * 100 / total)`, 100 once every record is in
    fn percent(&self) -> u8 {
        match self.total() {
            0 => 100,
            total => u8::try_from(self.processed() * 100 / total).unwrap_or(100),
        }
    }

    fn finish(self, status: BatchStatus) -> BatchReport {
        let total = self.total();
        let duration_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        BatchReport::new(self.outcomes, total, status, duration_ms)
    }
}

/// Runs batches one record at a time.
///
/// Holds no per-run state, so one verifier can serve several concurrent
/// batches; each `run` owns its own counters and outcome list.
pub struct BatchVerifier {
    classifier: Box<dyn Classifier>,
    pacer: Box<dyn Pacer>,
}

impl BatchVerifier {
    #[must_use]
    pub fn new(classifier: Box<dyn Classifier>, pacer: Box<dyn Pacer>) -> Self {
        Self { classifier, pacer }
    }

    /// Heuristic classifier and pacer built from `config`
    ///
    /// With a `seed`, classification and pacing are reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if the heuristic settings are invalid.
    pub fn from_config(config: &Config, seed: Option<u64>) -> Result<Self, Error> {
        let classifier = match seed {
            Some(seed) => HeuristicClassifier::seeded(&config.heuristic, seed)?,
            None => HeuristicClassifier::new(&config.heuristic)?,
        };
        let pacer = pacer_from_config(&config.pacing, seed);
        Ok(Self::new(Box::new(classifier), pacer))
    }

    /// Evaluate every record of `input`, reporting to `sink` as it goes
    pub async fn run<S>(&self, input: &str, sink: &mut S) -> BatchReport
    where
        S: BatchSink + ?Sized,
    {
        self.execute(input, sink, None).await
    }

    /// Like [`run`](Self::run), but stops before the next record once
    /// `cancel` fires. Outcomes already reported are kept in the report.
    pub async fn run_with_cancellation<S>(
        &self,
        input: &str,
        sink: &mut S,
        cancel: &CancellationToken,
    ) -> BatchReport
    where
        S: BatchSink + ?Sized,
    {
        self.execute(input, sink, Some(cancel)).await
    }

    /// Run on a background task, streaming updates over a channel
    ///
    /// The receiver sees every progress value and outcome in order and
    /// closes once the run ends.
    pub fn spawn_with_updates(
        self: Arc<Self>,
        input: String,
    ) -> (JoinHandle<BatchReport>, UnboundedReceiver<BatchUpdate>) {
        let (mut tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move { self.run(&input, &mut tx).await });
        (handle, rx)
    }

    async fn execute<S>(
        &self,
        input: &str,
        sink: &mut S,
        cancel: Option<&CancellationToken>,
    ) -> BatchReport
    where
        S: BatchSink + ?Sized,
    {
        let mut run = BatchRun::new(input);
        let total = run.total();
        if total == 0 {
            debug!("no records in input");
            run.transition(BatchState::Complete);
            return run.finish(BatchStatus::Complete);
        }

        info!(total, "batch started");
        run.transition(BatchState::Running);
        sink.on_start(total);

        let mut status = BatchStatus::Complete;
        for (index, record) in run.records.iter().enumerate() {
            if is_cancelled(cancel) {
                status = BatchStatus::Cancelled {
                    processed: run.processed(),
                };
                break;
            }

            let well_formed = record.is_well_formed();
            let stage = if well_formed {
                PaceStage::Network
            } else {
                PaceStage::Malformed
            };
            if !self.pause(stage, cancel).await {
                status = BatchStatus::Cancelled {
                    processed: run.processed(),
                };
                break;
            }

            let message = if well_formed {
                self.classify(index, record, sink)
            } else {
                OutcomeMessage::InvalidFormat
            };
            debug!(index, message = message.as_str(), "record evaluated");

            run.outcomes.push(VerificationOutcome::new(record, message));
            sink.on_progress(run.percent());
            if let Some(outcome) = run.outcomes.last() {
                sink.on_outcome(outcome);
            }

            let is_last = index + 1 == total;
            if well_formed && !is_last && !self.pause(PaceStage::InterRecord, cancel).await {
                status = BatchStatus::Cancelled {
                    processed: run.processed(),
                };
                break;
            }
        }

        run.transition(BatchState::Complete);
        let report = run.finish(status);
        match report.status {
            BatchStatus::Complete => info!(
                total,
                working = report.summary.working,
                duration_ms = report.duration_ms,
                "batch complete"
            ),
            BatchStatus::Cancelled { processed } => {
                warn!(total, processed, "batch cancelled");
            }
        }
        sink.on_finish(&report);
        report
    }

    fn classify<S>(&self, index: usize, record: &CredentialRecord, sink: &mut S) -> OutcomeMessage
    where
        S: BatchSink + ?Sized,
    {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.classifier.classify(record)))
            .unwrap_or_else(|payload| {
                Err(VerifyError::EvaluationFailed {
                    message: format!("classifier panicked: {}", panic_message(payload.as_ref())),
                })
            });
        match result {
            Ok(message) => message,
            Err(error) => {
                warn!(index, error = %error, "record evaluation failed");
                sink.on_fault(index, &error);
                OutcomeMessage::CheckFailed
            }
        }
    }

    /// Wait out the stage's delay. Returns `false` if cancelled first.
    async fn pause(&self, stage: PaceStage, cancel: Option<&CancellationToken>) -> bool {
        let delay = self.pacer.delay(stage);
        if delay.is_zero() {
            return !is_cancelled(cancel);
        }
        match cancel {
            Some(token) => {
                tokio::select! {
                    () = token.cancelled() => false,
                    () = tokio::time::sleep(delay) => true,
                }
            }
            None => {
                tokio::time::sleep(delay).await;
                true
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

fn is_cancelled(cancel: Option<&CancellationToken>) -> bool {
    cancel.is_some_and(CancellationToken::is_cancelled)
}
