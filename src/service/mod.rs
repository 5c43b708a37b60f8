//! Seam between the dispatcher and the external task-list service.

pub mod applescript;

pub use applescript::AppleScriptService;

use crate::error::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Exists,
    Created,
}

impl ListStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::Created => "created",
        }
    }
}

/// A task-list backend. Each call is a single blocking attempt; no retries.
pub trait ReminderService {
    /// Make sure a list named exactly `name` exists, creating it if absent.
    fn ensure_list(&self, name: &str) -> Result<ListStatus, ImportError>;

    /// Append an item named `text` to the list `list`.
    fn add_item(&self, text: &str, list: &str) -> Result<(), ImportError>;
}
