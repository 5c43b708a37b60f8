use super::Outcome;

/// Number of successful entries shown in the end-of-run summary.
pub const PREVIEW_LEN: usize = 5;

/// Everything one import run produced, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub outcomes: Vec<Outcome>,
}

impl ImportSummary {
    pub fn added(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn added_count(&self) -> usize {
        self.added().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_success())
    }

    pub fn preview(&self) -> Vec<&Outcome> {
        self.added().take(PREVIEW_LEN).collect()
    }

    pub fn title(&self) -> &'static str {
        if self.has_failures() {
            "Reminders Added (with Errors)"
        } else {
            "Reminders Added"
        }
    }

    pub fn message(&self) -> String {
        let added = self.added_count();
        let mut message = format!("Successfully added {added} reminders.\n");

        let preview = self.preview();
        if !preview.is_empty() {
            message.push_str("\nExamples:\n");
            let lines: Vec<String> = preview
                .iter()
                .map(|o| format!("'{}' in '{}'", o.task(), o.list().unwrap_or_default()))
                .collect();
            message.push_str(&lines.join("\n"));
            if added > PREVIEW_LEN {
                message.push_str("\n...");
            }
        }

        if self.has_failures() {
            message.push_str(&format!(
                "\n\nFailed to add {} reminders:\n",
                self.failed_count()
            ));
            let lines: Vec<String> = self.failed().map(failure_line).collect();
            message.push_str(&lines.join("\n"));
        }

        message
    }
}

fn failure_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Failed { task, list, reason } => format!("'{task}' to '{list}' (Error: {reason})"),
        Outcome::NoList { task } => format!("'{task}' (No valid reminder list available for this task)"),
        Outcome::Added { task, list } => format!("'{task}' in '{list}'"),
    }
}
