#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for async communication in credsim
//!
//! Library crates never print; they emit `AppEvent`s through an
//! `EventSender` and the CLI decides how to render and log them.
//!
//! ## Architecture
//!
//! - **Domain-driven events**: `General`, `Batch` and `Progress`
//! - **Unified `EventEmitter` trait**: one API whether you hold a raw sender
//!   or a struct that owns one
//! - **Metadata envelope**: every event travels as an `EventMessage` with an
//!   id, timestamp, level and source for tracing integration

pub mod meta;
pub use meta::{EventLevel, EventMeta, EventSource};

pub mod events;
pub use events::{AppEvent, BatchEvent, FailureContext, GeneralEvent, ProgressEvent};

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Event plus the metadata captured when it was emitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    pub meta: EventMeta,
    pub event: AppEvent,
}

impl EventMessage {
    #[must_use]
    pub fn new(meta: EventMeta, event: AppEvent) -> Self {
        Self { meta, event }
    }

    /// Wrap an event, deriving level, source and correlation id from it
    #[must_use]
    pub fn from_event(event: AppEvent) -> Self {
        let mut meta = EventMeta::new(event.log_level(), event.event_source());
        if let Some(correlation_id) = event.correlation_id() {
            meta = meta.with_correlation_id(correlation_id);
        }
        Self::new(meta, event)
    }
}

/// Type alias for event sender
pub type EventSender = UnboundedSender<EventMessage>;

/// Type alias for event receiver
pub type EventReceiver = UnboundedReceiver<EventMessage>;

/// Create a new event channel
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// The unified trait for emitting events throughout credsim
///
/// This trait provides a single, consistent API for emitting events regardless of
/// whether you have a raw `EventSender` or a struct that contains one.
pub trait EventEmitter {
    /// Get the event sender for this emitter
    fn event_sender(&self) -> Option<&EventSender>;

    /// Emit an event through this emitter
    fn emit(&self, event: AppEvent) {
        if let Some(sender) = self.event_sender() {
            // Ignore send errors - if receiver is dropped, we just continue
            let _ = sender.send(EventMessage::from_event(event));
        }
    }

    /// Emit a warning event
    fn emit_warning(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::warning(message)));
    }

    /// Emit an operation started event
    fn emit_operation_started(&self, operation: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::OperationStarted {
            operation: operation.into(),
        }));
    }

    /// Emit an operation completed event
    fn emit_operation_completed(&self, operation: impl Into<String>, success: bool) {
        self.emit(AppEvent::General(GeneralEvent::OperationCompleted {
            operation: operation.into(),
            success,
        }));
    }

    /// Emit a batch lifecycle event
    fn emit_batch(&self, event: BatchEvent) {
        self.emit(AppEvent::Batch(event));
    }

    /// Emit a progress started event
    fn emit_progress_started(&self, id: impl Into<String>, operation: impl Into<String>, total: u64) {
        self.emit(AppEvent::Progress(ProgressEvent::started(
            id, operation, total,
        )));
    }

    /// Emit a progress update event
    fn emit_progress_updated(&self, id: impl Into<String>, current: u64, total: u64, percent: u8) {
        self.emit(AppEvent::Progress(ProgressEvent::updated(
            id, current, total, percent,
        )));
    }

    /// Emit a progress completed event
    fn emit_progress_completed(&self, id: impl Into<String>, duration: std::time::Duration) {
        self.emit(AppEvent::Progress(ProgressEvent::completed(id, duration)));
    }
}

/// Implementation of `EventEmitter` for the raw `EventSender`
/// This allows `EventSender` to be used directly where `EventEmitter` is expected
impl EventEmitter for EventSender {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self)
    }
}
