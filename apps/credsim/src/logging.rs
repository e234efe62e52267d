//! Structured logging integration for events
//!
//! Re-logs every `EventMessage` through tracing with structured fields so the
//! JSON log file written under `--debug` carries the full event stream.
//! Secrets never appear here; batch events only name identifiers.

use credsim_events::{AppEvent, BatchEvent, EventMessage, GeneralEvent, ProgressEvent};
use tracing::{debug, info, warn};

/// Log an `EventMessage` at its recorded level with structured fields
pub fn log_event_with_tracing(message: &EventMessage) {
    let meta = &message.meta;
    match &message.event {
        AppEvent::Batch(event) => match event {
            BatchEvent::Started { batch_id, total } => {
                info!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    batch_id = %batch_id,
                    total = total,
                    "Batch started"
                );
            }
            BatchEvent::OutcomeRecorded {
                batch_id,
                index,
                identifier,
                is_working,
                message,
            } => {
                debug!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    batch_id = %batch_id,
                    index = index,
                    identifier = %identifier,
                    is_working = is_working,
                    outcome = message.as_str(),
                    "Outcome recorded"
                );
            }
            BatchEvent::RecordFaulted {
                batch_id,
                index,
                failure,
            } => {
                warn!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    batch_id = %batch_id,
                    index = index,
                    retryable = failure.retryable,
                    code = ?failure.code,
                    message = %failure.message,
                    hint = ?failure.hint,
                    "Record evaluation failed"
                );
            }
            BatchEvent::Completed {
                batch_id,
                summary,
                duration_ms,
            } => {
                info!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    batch_id = %batch_id,
                    total = summary.total,
                    working = summary.working,
                    not_working = summary.not_working,
                    duration_ms = duration_ms,
                    "Batch completed"
                );
            }
            BatchEvent::Cancelled {
                batch_id,
                processed,
                total,
            } => {
                warn!(
                    source = meta.source.as_str(),
                    event_id = %meta.event_id,
                    batch_id = %batch_id,
                    processed = processed,
                    total = total,
                    "Batch cancelled"
                );
            }
        },

        AppEvent::Progress(event) => match event {
            ProgressEvent::Started {
                id,
                operation,
                total,
            } => {
                debug!(
                    source = meta.source.as_str(),
                    id = %id,
                    operation = %operation,
                    total = total,
                    "Progress started"
                );
            }
            ProgressEvent::Updated {
                id,
                current,
                total,
                percent,
            } => {
                debug!(
                    source = meta.source.as_str(),
                    id = %id,
                    current = current,
                    total = total,
                    percent = percent,
                    "Progress updated"
                );
            }
            ProgressEvent::Completed { id, duration } => {
                debug!(
                    source = meta.source.as_str(),
                    id = %id,
                    duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
                    "Progress completed"
                );
            }
        },

        AppEvent::General(event) => match event {
            GeneralEvent::Warning { message } => {
                warn!(source = meta.source.as_str(), event_id = %meta.event_id, "{message}");
            }
            GeneralEvent::OperationStarted { operation } => {
                info!(source = meta.source.as_str(), operation = %operation, "Operation started");
            }
            GeneralEvent::OperationCompleted { operation, success } => {
                info!(
                    source = meta.source.as_str(),
                    operation = %operation,
                    success = success,
                    "Operation completed"
                );
            }
        },
    }
}
