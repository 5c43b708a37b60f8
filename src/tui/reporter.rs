use std::io;

use ratatui::{backend::Backend, Terminal};

use super::events::EventSource;
use super::view::{Dialog, DialogKind};
use super::{show_dialog, App};
use crate::models::Warning;
use crate::report::Reporter;

/// Shows each report as a modal dialog, blocking until it is dismissed.
///
/// Terminal errors cannot be returned through [`Reporter`]; the first one is
/// kept and later dialogs are skipped.
pub struct TuiReporter<'a, B: Backend, E: EventSource> {
    terminal: &'a mut Terminal<B>,
    events: &'a mut E,
    app: &'a App,
    failure: Option<io::Error>,
}

impl<'a, B: Backend, E: EventSource> TuiReporter<'a, B, E> {
    pub fn new(terminal: &'a mut Terminal<B>, events: &'a mut E, app: &'a App) -> Self {
        Self {
            terminal,
            events,
            app,
            failure: None,
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn show(&mut self, dialog: Dialog) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = show_dialog(self.terminal, self.events, self.app, &dialog) {
            self.failure = Some(e);
        }
    }
}

impl<B: Backend, E: EventSource> Reporter for TuiReporter<'_, B, E> {
    fn warn(&mut self, warning: &Warning) {
        self.show(Dialog::new(DialogKind::Warning, warning.title(), warning.message()));
    }

    fn info(&mut self, title: &str, message: &str) {
        self.show(Dialog::new(DialogKind::Info, title, message));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.show(Dialog::new(DialogKind::Error, title, message));
    }
}
