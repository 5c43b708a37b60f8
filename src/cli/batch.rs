use std::io::{self, Read};

use crate::cli::commands::Cli;
use crate::config::ImportSettings;
use crate::dispatch;
use crate::error::ImportError;
use crate::output;
use crate::report::{ConsoleReporter, JsonReporter, Reporter};
use crate::service::{AppleScriptService, ReminderService};

pub fn run(cli: &Cli) -> i32 {
    let json_output = cli.json;
    match run_inner(cli) {
        Ok(code) => code,
        Err(e) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&output::json::error(&e)).unwrap());
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

fn run_inner(cli: &Cli) -> Result<i32, ImportError> {
    let settings = cli.settings()?;
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| ImportError::io(format!("Failed to read stdin: {e}")))?;

    let service = AppleScriptService::new(cli.osascript.clone());
    if cli.json {
        Ok(run_json(&text, &settings, &service))
    } else {
        let stdout = io::stdout();
        let mut reporter = ConsoleReporter::new(stdout.lock());
        Ok(run_text(&text, &settings, &service, &mut reporter))
    }
}

pub fn run_text(
    text: &str,
    settings: &ImportSettings,
    service: &dyn ReminderService,
    reporter: &mut dyn Reporter,
) -> i32 {
    if text.trim().is_empty() {
        reporter.info("No Input", "No tasks entered.");
        return 0;
    }
    dispatch::import_tasks(text, settings, service, reporter);
    0
}

fn run_json(text: &str, settings: &ImportSettings, service: &dyn ReminderService) -> i32 {
    if text.trim().is_empty() {
        println!("{}", serde_json::to_string_pretty(&output::json::no_tasks()).unwrap());
        return 0;
    }
    let mut reporter = JsonReporter::default();
    let summary = dispatch::import_tasks(text, settings, service, &mut reporter);
    println!(
        "{}",
        serde_json::to_string_pretty(&output::json::run_report(&summary, &reporter.warnings)).unwrap()
    );
    0
}
