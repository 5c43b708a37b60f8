//! Presentation capability handed to the dispatcher.

use std::io::Write;

use tracing::warn;

use crate::models::{Outcome, Warning};
use crate::output;

pub trait Reporter {
    /// A list could not be used; raised at the moment it happens.
    fn warn(&mut self, warning: &Warning);

    /// One task line has been processed.
    fn outcome(&mut self, _outcome: &Outcome) {}

    fn info(&mut self, title: &str, message: &str);

    fn error(&mut self, title: &str, message: &str);
}

/// Batch mode: one plain line per warning and outcome, in processing order.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "failed to write report line");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn warn(&mut self, warning: &Warning) {
        self.line(&output::text::warning_line(warning));
    }

    fn outcome(&mut self, outcome: &Outcome) {
        self.line(&output::text::outcome_line(outcome));
    }

    fn info(&mut self, _title: &str, message: &str) {
        self.line(message);
    }

    fn error(&mut self, _title: &str, message: &str) {
        self.line(&format!("Error: {message}"));
    }
}

/// Batch `--json` mode: nothing is printed while running.
#[derive(Debug, Default)]
pub struct JsonReporter {
    pub warnings: Vec<Warning>,
}

impl Reporter for JsonReporter {
    fn warn(&mut self, warning: &Warning) {
        self.warnings.push(warning.clone());
    }

    fn info(&mut self, _title: &str, _message: &str) {}

    fn error(&mut self, _title: &str, _message: &str) {}
}
