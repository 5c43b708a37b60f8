use std::ffi::OsString;

use clap::Parser;

use crate::config::{self, ImportSettings};
use crate::error::ImportError;

const VERSION: &str = env!("REMINDERS_IMPORT_VERSION");

#[derive(Parser, Debug)]
#[command(
    name = "reminders-import",
    version = VERSION,
    about = "Turn pasted text into reminders, one task per line",
    after_help = "\
INPUT FORMAT:
  One task per line. Blank lines are ignored.
  A line starting with the category marker (case-insensitive, default `CATEGORY:`)
  switches the destination list for the lines below it; the list is created if missing.
  Tasks before any category go to the default list (default `Reminders`).

MODES:
  (no flag)        Open the interactive editor. Ctrl+S or F2 adds the reminders, Esc quits.
  --from-shortcut  Read all of stdin and print one line per task (for Shortcuts/automation).

FALLBACK RULES:
  If a category list cannot be created, its tasks go to the default list.
  If the default list itself cannot be ensured, such tasks are skipped and reported.

EXIT CODES:
  0  Run completed (failed tasks are reported per line, or as `success: false` with --json)
  1  Error (invalid settings, unreadable stdin, terminal failure)"
)]
pub struct Cli {
    /// Read tasks from stdin instead of opening the editor
    #[arg(long = "from-shortcut", visible_alias = "stdin")]
    pub from_shortcut: bool,

    /// Output as JSON (batch mode only)
    #[arg(long, requires = "from_shortcut")]
    pub json: bool,

    /// Line prefix that starts a new category
    #[arg(
        long,
        env = "REMINDERS_IMPORT_MARKER",
        default_value = config::DEFAULT_CATEGORY_MARKER
    )]
    pub marker: String,

    /// List used for tasks outside any category
    #[arg(
        long,
        env = "REMINDERS_IMPORT_DEFAULT_LIST",
        default_value = config::DEFAULT_LIST_NAME
    )]
    pub default_list: String,

    /// Program used to talk to Reminders
    #[arg(
        long,
        env = "REMINDERS_IMPORT_OSASCRIPT",
        default_value = config::DEFAULT_OSASCRIPT
    )]
    pub osascript: OsString,
}

impl Cli {
    pub fn settings(&self) -> Result<ImportSettings, ImportError> {
        ImportSettings::new(&self.marker, &self.default_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_means_interactive() {
        let cli = Cli::try_parse_from(["reminders-import"]).unwrap();
        assert!(!cli.from_shortcut);
        assert!(!cli.json);
    }

    #[test]
    fn batch_flag_and_alias() {
        let cli = Cli::try_parse_from(["reminders-import", "--from-shortcut"]).unwrap();
        assert!(cli.from_shortcut);
        let cli = Cli::try_parse_from(["reminders-import", "--stdin", "--json"]).unwrap();
        assert!(cli.from_shortcut && cli.json);
    }

    #[test]
    fn json_requires_batch_mode() {
        assert!(Cli::try_parse_from(["reminders-import", "--json"]).is_err());
    }

    #[test]
    fn overrides() {
        let cli = Cli::try_parse_from([
            "reminders-import",
            "--from-shortcut",
            "--marker",
            "LIST:",
            "--default-list",
            "Inbox",
            "--osascript",
            "/usr/local/bin/fake",
        ])
        .unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(settings.category_marker, "LIST:");
        assert_eq!(settings.default_list, "Inbox");
        assert_eq!(cli.osascript, OsString::from("/usr/local/bin/fake"));
    }
}
