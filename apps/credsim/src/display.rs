//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use credsim_types::{BatchReport, BatchStatus, ColorChoice, OutcomeMessage};
use std::io;
use std::path::PathBuf;

/// Final result of a command, rendered once it returns
#[derive(Debug)]
pub enum CommandOutput {
    Report {
        report: BatchReport,
        exported: Option<PathBuf>,
    },
    Validated {
        path: PathBuf,
        accepted: usize,
    },
    Sample(String),
    Written {
        path: PathBuf,
        lines: usize,
    },
}

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            term: Term::stdout(),
        }
    }

    /// Render command result
    pub fn render_result(&self, output: &CommandOutput) -> io::Result<()> {
        if self.json_output {
            self.render_json(output)
        } else {
            self.render_text(output)
        }
    }

    fn render_json(&self, output: &CommandOutput) -> io::Result<()> {
        let value = match output {
            CommandOutput::Report { report, exported } => serde_json::json!({
                "report": report,
                "exported": exported,
            }),
            CommandOutput::Validated { path, accepted } => serde_json::json!({
                "valid": true,
                "path": path,
                "accepted": accepted,
            }),
            CommandOutput::Sample(text) => serde_json::json!({
                "lines": text.lines().collect::<Vec<_>>(),
            }),
            CommandOutput::Written { path, lines } => serde_json::json!({
                "path": path,
                "lines": lines,
            }),
        };
        let json = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
        self.term.write_line(&json)
    }

    fn render_text(&self, output: &CommandOutput) -> io::Result<()> {
        match output {
            CommandOutput::Report { report, exported } => {
                self.render_report(report)?;
                if let Some(path) = exported {
                    let working = report.summary.working;
                    self.term.write_line(&format!(
                        "Exported {working} working record(s) to {}",
                        path.display()
                    ))?;
                }
                Ok(())
            }
            CommandOutput::Validated { path, accepted } => {
                let ok = self.style(&Style::new().green().bold(), "[OK]");
                self.term.write_line(&format!(
                    "{ok} {}: {accepted} record(s) accepted",
                    path.display()
                ))
            }
            CommandOutput::Sample(text) => self.term.write_line(text),
            CommandOutput::Written { path, lines } => self
                .term
                .write_line(&format!("Wrote {lines} line(s) to {}", path.display())),
        }
    }

    fn render_report(&self, report: &BatchReport) -> io::Result<()> {
        if report.total == 0 {
            return self.term.write_line("No records in input.");
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Result").add_attribute(Attribute::Bold),
            Cell::new("Records").add_attribute(Attribute::Bold),
        ]);

        for message in [
            OutcomeMessage::AccountActive,
            OutcomeMessage::InvalidCredentials,
            OutcomeMessage::PasswordTooShort,
            OutcomeMessage::InvalidEmailFormat,
            OutcomeMessage::InvalidFormat,
            OutcomeMessage::CheckFailed,
        ] {
            let count = report
                .outcomes
                .iter()
                .filter(|o| o.message() == message)
                .count();
            if count == 0 {
                continue;
            }
            let mut label = Cell::new(message.as_str());
            if self.supports_color() {
                label = label.fg(if message.is_working() {
                    Color::Green
                } else {
                    Color::Red
                });
            }
            table.add_row(vec![label, Cell::new(count)]);
        }

        self.term.write_line(&table.to_string())?;

        let status = match report.status {
            BatchStatus::Complete => "complete".to_string(),
            BatchStatus::Cancelled { processed } => {
                format!("cancelled after {processed} of {}", report.total)
            }
        };
        self.term.write_line(&format!(
            "{} working, {} not working, {} total ({status}, {} ms)",
            self.style(&Style::new().green().bold(), &report.summary.working.to_string()),
            report.summary.not_working,
            report.total,
            report.duration_ms
        ))
    }

    fn style(&self, style: &Style, text: &str) -> String {
        if self.supports_color() {
            style.apply_to(text).force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}
