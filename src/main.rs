//! Libris CLI - library catalog, membership and lending
//!
//! Usage: libris [OPTIONS] [COMMAND]
//!
//! Commands:
//!   demo    Run the sample session (default)
//!   fine    Show the fine for a return date
//!   policy  Show the loan period and fine rate

mod commands;

use anyhow::Result;
use clap::Parser;

use libris::config::load_resolved;
use libris::domain::ports::Clock;
use libris::infrastructure::SystemClock;
use libris::presentation::{Cli, Commands};
use libris::ui::theme::Icon;
use libris::ui::UiContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = load_resolved(cli.config.as_deref(), &cwd)?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    for warning in &warnings {
        eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
    }

    let today = cli.today.unwrap_or_else(|| SystemClock.today());

    match cli.command_or_default() {
        Commands::Demo => commands::cmd_demo(&config, &ui, today),
        Commands::Fine { return_date } => commands::cmd_fine(&config, &ui, today, return_date),
        Commands::Policy => commands::cmd_policy(&config, &ui),
    }
}
