use crate::error::ImportError;

pub const DEFAULT_CATEGORY_MARKER: &str = "CATEGORY:";
pub const DEFAULT_LIST_NAME: &str = "Reminders";
pub const DEFAULT_OSASCRIPT: &str = "osascript";

/// Per-run parsing settings shared by both front-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    pub category_marker: String,
    pub default_list: String,
}

impl ImportSettings {
    /// Validate and normalize. The marker is kept verbatim apart from
    /// surrounding whitespace; the default list name is trimmed.
    pub fn new(category_marker: &str, default_list: &str) -> Result<Self, ImportError> {
        let category_marker = category_marker.trim();
        if category_marker.is_empty() {
            return Err(ImportError::invalid_settings("Category marker must not be empty"));
        }
        let default_list = default_list.trim();
        if default_list.is_empty() {
            return Err(ImportError::invalid_settings("Default list name must not be empty"));
        }
        Ok(Self {
            category_marker: category_marker.to_string(),
            default_list: default_list.to_string(),
        })
    }
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            category_marker: DEFAULT_CATEGORY_MARKER.to_string(),
            default_list: DEFAULT_LIST_NAME.to_string(),
        }
    }
}
