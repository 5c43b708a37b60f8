//! Interactive front-end: a full-screen entry window with modal dialogs.

pub mod editor;
pub mod events;
pub mod input;
pub mod reporter;
pub mod view;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::debug;

use crate::config::ImportSettings;
use crate::dispatch;
use crate::models::ImportSummary;
use crate::report::Reporter;
use crate::service::ReminderService;

use editor::TextEntry;
use events::{EventSource, TerminalEvents};
use input::{handle_key, Action};
use reporter::TuiReporter;
use view::{draw, Dialog, DialogKind};

/// Window state.
pub struct App {
    pub entry: TextEntry,
    pub instructions: String,
    pub working: bool,
}

impl App {
    pub fn new(settings: &ImportSettings) -> Self {
        Self {
            entry: TextEntry::default(),
            instructions: instructions(settings),
            working: false,
        }
    }
}

fn instructions(settings: &ImportSettings) -> String {
    format!(
        "Paste your tasks below, one per line.\n\n\
         To organize reminders into categories/lists, start a line with:\n  \
         {} Your Category Name\n\n\
         Tasks not under a category will go into the '{}' list.",
        settings.category_marker, settings.default_list
    )
}

/// Runs the window until the user submits or closes it. Returns the exit code.
pub fn run(settings: &ImportSettings, service: &dyn ReminderService) -> Result<i32> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    Ok(run_app(&mut terminal, &mut TerminalEvents, settings, service)?)
}

/// The window's event loop. A completed import returns `0` even when some
/// tasks failed; the summary dialog reports those.
pub fn run_app<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    settings: &ImportSettings,
    service: &dyn ReminderService,
) -> io::Result<i32> {
    let mut app = App::new(settings);
    loop {
        terminal.draw(|f| draw(f, &app, None))?;

        let action = match events.next_event()? {
            Event::Key(key) => handle_key(&mut app, key),
            Event::Paste(text) => {
                app.entry.insert_str(&text);
                Action::Continue
            }
            _ => Action::Continue,
        };

        match action {
            Action::Continue => {}
            Action::Quit => {
                debug!("window closed without importing");
                return Ok(0);
            }
            Action::Submit if app.entry.is_blank() => {
                let dialog = Dialog::new(DialogKind::Info, "No Input", "Please enter some tasks.");
                show_dialog(terminal, events, &app, &dialog)?;
            }
            Action::Submit => {
                app.working = true;
                terminal.draw(|f| draw(f, &app, None))?;

                let text = app.entry.text();
                let mut reporter = TuiReporter::new(terminal, events, &app);
                let summary = dispatch::import_tasks(&text, settings, service, &mut reporter);
                show_summary(&mut reporter, &summary);
                reporter.finish()?;

                return Ok(0);
            }
        }
    }
}

fn show_summary(reporter: &mut dyn Reporter, summary: &ImportSummary) {
    if summary.has_failures() {
        reporter.error(summary.title(), &summary.message());
    } else {
        reporter.info(summary.title(), &summary.message());
    }
}

/// Draws `dialog` over the window and blocks until Enter, Esc or Space.
pub fn show_dialog<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    events: &mut E,
    app: &App,
    dialog: &Dialog,
) -> io::Result<()> {
    debug!(title = %dialog.title, "showing dialog");
    events.dialog_opened(dialog);
    loop {
        terminal.draw(|f| draw(f, app, Some(dialog)))?;
        if let Event::Key(key) = events.next_event()? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
            {
                return Ok(());
            }
        }
    }
}

/// Restores the terminal on drop (even if we return early)
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
