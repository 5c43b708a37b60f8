use serde::{Deserialize, Serialize};

/// Result of processing one task line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Added { task: String, list: String },
    Failed { task: String, list: String, reason: String },
    NoList { task: String },
}

impl Outcome {
    pub fn task(&self) -> &str {
        match self {
            Self::Added { task, .. } | Self::Failed { task, .. } | Self::NoList { task } => task,
        }
    }

    pub fn list(&self) -> Option<&str> {
        match self {
            Self::Added { list, .. } | Self::Failed { list, .. } => Some(list),
            Self::NoList { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

pub const NO_LIST_REASON: &str = "No valid list available";
