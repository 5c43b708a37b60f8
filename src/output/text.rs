use crate::models::{fallback_label, Outcome, Warning, NO_LIST_REASON};

pub fn outcome_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added { task, list } => format!("Added: '{task}' to '{list}'"),
        Outcome::Failed { task, list, reason } => format!("Failed to add '{task}' to '{list}': {reason}"),
        Outcome::NoList { task } => format!("Skipping task '{task}': {NO_LIST_REASON}."),
    }
}

pub fn warning_line(warning: &Warning) -> String {
    match warning {
        Warning::DefaultListUnavailable { list, reason } => format!(
            "Warning: Couldn't ensure the default list '{list}' exists: {}. Tasks might not be added.",
            sentence(reason)
        ),
        Warning::CategoryUnavailable {
            category,
            fallback,
            reason,
            ..
        } => format!(
            "Warning: Couldn't use category '{category}': {}. Falling back to '{}'.",
            sentence(reason),
            fallback_label(fallback)
        ),
        Warning::EmptyCategory { fallback, .. } => format!(
            "Warning: Empty category name provided. Tasks will go to '{}'.",
            fallback_label(fallback)
        ),
    }
}

/// Strip the trailing period so the reason can sit mid-sentence.
fn sentence(reason: &str) -> &str {
    reason.trim_end().trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_lines() {
        let added = Outcome::Added {
            task: "Buy milk".into(),
            list: "Reminders".into(),
        };
        assert_eq!(outcome_line(&added), "Added: 'Buy milk' to 'Reminders'");

        let failed = Outcome::Failed {
            task: "Buy milk".into(),
            list: "Work".into(),
            reason: "AppleScript command failed: nope".into(),
        };
        assert_eq!(
            outcome_line(&failed),
            "Failed to add 'Buy milk' to 'Work': AppleScript command failed: nope"
        );

        let skipped = Outcome::NoList { task: "Task A".into() };
        assert_eq!(outcome_line(&skipped), "Skipping task 'Task A': No valid list available.");
    }

    #[test]
    fn warning_lines_name_the_fallback() {
        let w = Warning::CategoryUnavailable {
            line: 1,
            category: "Errands".into(),
            fallback: Some("Reminders".into()),
            reason: "denied".into(),
        };
        assert_eq!(
            warning_line(&w),
            "Warning: Couldn't use category 'Errands': denied. Falling back to 'Reminders'."
        );

        let w = Warning::EmptyCategory { line: 3, fallback: None };
        assert_eq!(
            warning_line(&w),
            "Warning: Empty category name provided. Tasks will go to 'no list'."
        );
    }
}
