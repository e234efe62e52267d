//! Event handling and progress display

use crate::logging::log_event_with_tracing;
use console::Style;
use credsim_events::{AppEvent, BatchEvent, EventMessage, GeneralEvent, ProgressEvent};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}";
const PLAIN_BAR_TEMPLATE: &str = "[{elapsed_precise}] [{wide_bar}] {pos}/{len} {msg}";

/// Renders batch events as a live progress bar plus one status line per
/// record, all on stderr so stdout stays clean for results
pub struct EventHandler {
    multi_progress: MultiProgress,
    /// Bar for the batch in flight
    bar: Option<ProgressBar>,
    colors_enabled: bool,
    /// Suppress terminal output entirely (JSON mode)
    quiet: bool,
}

impl EventHandler {
    pub fn new(colors_enabled: bool, quiet: bool) -> Self {
        let target = if quiet {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        Self::with_draw_target(target, colors_enabled, quiet)
    }

    fn with_draw_target(target: ProgressDrawTarget, colors_enabled: bool, quiet: bool) -> Self {
        Self {
            multi_progress: MultiProgress::with_draw_target(target),
            bar: None,
            colors_enabled,
            quiet,
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, message: EventMessage) {
        log_event_with_tracing(&message);
        if self.quiet {
            return;
        }

        match message.event {
            AppEvent::Batch(event) => self.handle_batch_event(event),
            AppEvent::Progress(event) => self.handle_progress_event(&event),
            AppEvent::General(event) => self.handle_general_event(event),
        }
    }

    fn handle_batch_event(&mut self, event: BatchEvent) {
        match event {
            BatchEvent::Started { total, .. } => {
                self.show_status(&format!("Verifying {total} records"));
            }
            BatchEvent::OutcomeRecorded {
                index,
                identifier,
                is_working,
                message,
                ..
            } => {
                let (mark, style) = if is_working {
                    ("✓", Style::new().green())
                } else {
                    ("✗", Style::new().red())
                };
                let line = format!(
                    "{:>4}  {} {identifier}  {message}",
                    index + 1,
                    self.paint(&style, mark)
                );
                self.show_status(&line);
            }
            BatchEvent::RecordFaulted { index, failure, .. } => {
                self.show_warning(&format!(
                    "Record {} could not be checked: {}",
                    index + 1,
                    failure.message
                ));
            }
            BatchEvent::Completed { summary, .. } => {
                self.finish_progress();
                self.show_status(&format!(
                    "Done: {} working, {} not working",
                    summary.working, summary.not_working
                ));
            }
            BatchEvent::Cancelled { processed, total, .. } => {
                self.finish_progress();
                self.show_warning(&format!("Cancelled after {processed} of {total} records"));
            }
        }
    }

    fn handle_progress_event(&mut self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { total, .. } => {
                self.finish_progress();
                let pb = ProgressBar::new(*total);
                pb.set_style(self.bar_style());
                self.bar = Some(self.multi_progress.add(pb));
            }
            ProgressEvent::Updated {
                current,
                total,
                percent,
                ..
            } => {
                if let Some(pb) = &self.bar {
                    pb.set_length(*total);
                    pb.set_position(*current);
                    pb.set_message(format!("{percent}%"));
                }
            }
            ProgressEvent::Completed { .. } => self.finish_progress(),
        }
    }

    fn handle_general_event(&mut self, event: GeneralEvent) {
        match event {
            GeneralEvent::Warning { message } => self.show_warning(&message),
            GeneralEvent::OperationStarted { .. } | GeneralEvent::OperationCompleted { .. } => {}
        }
    }

    fn bar_style(&self) -> ProgressStyle {
        let template = if self.colors_enabled {
            BAR_TEMPLATE
        } else {
            PLAIN_BAR_TEMPLATE
        };
        ProgressStyle::default_bar()
            .template(template)
            .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("#>-"))
    }

    fn finish_progress(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
            self.multi_progress.remove(&pb);
        }
    }

    /// Print a line above the progress bar without disturbing it
    fn show_status(&self, message: &str) {
        self.multi_progress.println(message).unwrap_or(());
    }

    fn show_warning(&self, message: &str) {
        let line = format!("{} {message}", self.paint(&Style::new().yellow(), "warning:"));
        self.show_status(&line);
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        if self.colors_enabled {
            style.apply_to(text).force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }
}
