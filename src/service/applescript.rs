use std::ffi::OsString;
use std::process::{Command, Output};

use tracing::debug;

use super::{ListStatus, ReminderService};
use crate::error::ImportError;

const ENSURE_LIST_SCRIPT: &str = r#"on run argv
    set listName to item 1 of argv
    tell application "Reminders"
        if exists list listName then
            return "exists"
        end if
        try
            make new list with properties {name:listName}
            return "created"
        on error errMsg
            return "error:" & errMsg
        end try
    end tell
end run"#;

const ADD_ITEM_SCRIPT: &str = r#"on run argv
    set listName to item 1 of argv
    set taskName to item 2 of argv
    tell application "Reminders"
        make new reminder at end of list listName with properties {name:taskName}
    end tell
end run"#;

/// Talks to Apple Reminders through `osascript`.
///
/// User text is handed to the script as run-handler arguments, never spliced
/// into the script source. They follow `--` so a leading `-` is not read as
/// an osascript option.
#[derive(Debug, Clone)]
pub struct AppleScriptService {
    program: OsString,
}

impl AppleScriptService {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, script: &str, args: &[&str]) -> Result<String, ImportError> {
        debug!(program = ?self.program, ?args, "running osascript");
        let output = Command::new(&self.program)
            .arg("-e")
            .arg(script)
            .arg("--")
            .args(args)
            .output()
            .map_err(|e| {
                ImportError::script_failed(format!(
                    "could not run {}: {e}",
                    self.program.to_string_lossy()
                ))
            })?;
        check_output(output)
    }
}

impl Default for AppleScriptService {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_OSASCRIPT)
    }
}

impl ReminderService for AppleScriptService {
    fn ensure_list(&self, name: &str) -> Result<ListStatus, ImportError> {
        if name.is_empty() {
            return Err(ImportError::empty_list_name());
        }
        let reply = self.run(ENSURE_LIST_SCRIPT, &[name])?;
        parse_ensure_reply(name, &reply)
    }

    fn add_item(&self, text: &str, list: &str) -> Result<(), ImportError> {
        self.run(ADD_ITEM_SCRIPT, &[list, text]).map(|_| ())
    }
}

fn check_output(output: Output) -> Result<String, ImportError> {
    if !output.status.success() {
        return Err(ImportError::script_failed(String::from_utf8_lossy(&output.stderr)));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn parse_ensure_reply(name: &str, reply: &str) -> Result<ListStatus, ImportError> {
    match reply {
        "exists" => Ok(ListStatus::Exists),
        "created" => Ok(ListStatus::Created),
        other => match other.strip_prefix("error:") {
            Some(detail) => Err(ImportError::list_creation_failed(name, detail)),
            None => Err(ImportError::unexpected_response(other)),
        },
    }
}
