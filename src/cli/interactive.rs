use tracing::error;

use crate::cli::commands::Cli;
use crate::service::AppleScriptService;
use crate::tui;

pub fn run(cli: &Cli) -> i32 {
    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e.message);
            return 1;
        }
    };
    let service = AppleScriptService::new(cli.osascript.clone());
    match tui::run(&settings, &service) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "interactive window failed");
            eprintln!("Error: {e:#}");
            1
        }
    }
}
