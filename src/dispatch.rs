//! Walks input lines, tracks the current list and routes every task line.

use tracing::{debug, info};

use crate::config::ImportSettings;
use crate::models::{ImportSummary, Outcome, Warning};
use crate::parser::{self, LineKind};
use crate::report::Reporter;
use crate::service::ReminderService;

/// Destination for the next task line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentList {
    Default,
    Named(String),
    NoList,
}

impl CurrentList {
    pub fn name<'a>(&'a self, settings: &'a ImportSettings) -> Option<&'a str> {
        match self {
            Self::Default => Some(&settings.default_list),
            Self::Named(name) => Some(name),
            Self::NoList => None,
        }
    }
}

/// Runs one import over `text`. Never fails: every service error becomes a
/// warning or a failed outcome.
pub fn import_tasks(
    text: &str,
    settings: &ImportSettings,
    service: &dyn ReminderService,
    reporter: &mut dyn Reporter,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    let default_ok = match service.ensure_list(&settings.default_list) {
        Ok(status) => {
            debug!(list = %settings.default_list, status = status.as_str(), "default list ready");
            true
        }
        Err(e) => {
            info!(list = %settings.default_list, error = %e, "default list unavailable");
            reporter.warn(&Warning::DefaultListUnavailable {
                list: settings.default_list.clone(),
                reason: e.message,
            });
            false
        }
    };
    let fallback = if default_ok {
        CurrentList::Default
    } else {
        CurrentList::NoList
    };
    let fallback_name = fallback.name(settings).map(str::to_string);

    let mut current = fallback.clone();

    for line in parser::parse_lines(text, &settings.category_marker) {
        match line.kind {
            LineKind::Blank => {}
            LineKind::Category("") => {
                current = fallback.clone();
                info!(line = line.number, "empty category name");
                reporter.warn(&Warning::EmptyCategory {
                    line: line.number,
                    fallback: fallback_name.clone(),
                });
            }
            LineKind::Category(name) => match service.ensure_list(name) {
                Ok(status) => {
                    debug!(list = name, status = status.as_str(), "switched list");
                    current = CurrentList::Named(name.to_string());
                }
                Err(e) => {
                    current = fallback.clone();
                    info!(line = line.number, list = name, error = %e, "category unavailable");
                    reporter.warn(&Warning::CategoryUnavailable {
                        line: line.number,
                        category: name.to_string(),
                        fallback: fallback_name.clone(),
                        reason: e.message,
                    });
                }
            },
            LineKind::Task(task) => {
                let outcome = match current.name(settings) {
                    None => Outcome::NoList {
                        task: task.to_string(),
                    },
                    Some(list) => match service.add_item(task, list) {
                        Ok(()) => Outcome::Added {
                            task: task.to_string(),
                            list: list.to_string(),
                        },
                        Err(e) => Outcome::Failed {
                            task: task.to_string(),
                            list: list.to_string(),
                            reason: e.message,
                        },
                    },
                };
                reporter.outcome(&outcome);
                summary.outcomes.push(outcome);
            }
        }
    }

    info!(
        added = summary.added_count(),
        failed = summary.failed_count(),
        "import finished"
    );
    summary
}
