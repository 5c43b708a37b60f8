use serde::Serialize;

/// Non-fatal conditions raised while switching lists.
///
/// `fallback` is the list that subsequent tasks go to, or `None` when the
/// default list could not be ensured either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    DefaultListUnavailable {
        list: String,
        reason: String,
    },
    CategoryUnavailable {
        line: usize,
        category: String,
        fallback: Option<String>,
        reason: String,
    },
    EmptyCategory {
        line: usize,
        fallback: Option<String>,
    },
}

impl Warning {
    pub fn title(&self) -> &'static str {
        match self {
            Self::DefaultListUnavailable { .. } => "Default List Issue",
            Self::CategoryUnavailable { .. } => "Category Issue",
            Self::EmptyCategory { .. } => "Invalid Category",
        }
    }

    /// Dialog wording, multi-line allowed.
    pub fn message(&self) -> String {
        match self {
            Self::DefaultListUnavailable { list, reason } => format!(
                "Couldn't ensure the default list '{list}' exists.\n{reason}\n\
                 Tasks might not be added correctly without a valid list."
            ),
            Self::CategoryUnavailable {
                line,
                category,
                fallback,
                reason,
            } => format!(
                "Line {line}: Couldn't use category '{category}'.\n{reason}\n\
                 Falling back to '{}' for subsequent tasks.",
                fallback_label(fallback)
            ),
            Self::EmptyCategory { line, fallback } => format!(
                "Line {line}: Empty category name provided.\n\
                 Tasks will be added to '{}' until a new category is defined.",
                fallback_label(fallback)
            ),
        }
    }
}

pub fn fallback_label(fallback: &Option<String>) -> &str {
    fallback.as_deref().unwrap_or("no list")
}
