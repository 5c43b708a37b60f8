use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    EmptyListName,
    ScriptFailed,
    UnexpectedResponse,
    ListCreationFailed,
    InvalidSettings,
    IoError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyListName => "EMPTY_LIST_NAME",
            Self::ScriptFailed => "SCRIPT_FAILED",
            Self::UnexpectedResponse => "UNEXPECTED_RESPONSE",
            Self::ListCreationFailed => "LIST_CREATION_FAILED",
            Self::InvalidSettings => "INVALID_SETTINGS",
            Self::IoError => "IO_ERROR",
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ImportError {
    pub code: ErrorCode,
    pub message: String,
}

impl ImportError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn empty_list_name() -> Self {
        Self::new(ErrorCode::EmptyListName, "Cannot ensure a list with an empty name")
    }

    pub fn script_failed(detail: impl AsRef<str>) -> Self {
        let detail = detail.as_ref().trim();
        let message = if detail.is_empty() {
            "AppleScript command failed".to_string()
        } else {
            format!("AppleScript command failed: {detail}")
        };
        Self::new(ErrorCode::ScriptFailed, message)
    }

    pub fn unexpected_response(reply: &str) -> Self {
        Self::new(
            ErrorCode::UnexpectedResponse,
            format!("Unexpected reply from Reminders: '{}'", reply.trim()),
        )
    }

    pub fn list_creation_failed(list: &str, detail: &str) -> Self {
        Self::new(
            ErrorCode::ListCreationFailed,
            format!("Couldn't create list '{list}': {}", detail.trim()),
        )
    }

    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidSettings, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::IoError, message)
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}
