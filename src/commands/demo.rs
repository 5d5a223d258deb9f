use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use libris::application::run_demo;
use libris::config::Config;
use libris::domain::ports::LibraryEventSink;
use libris::infrastructure::{ConsoleEventSink, ConsoleStyle, FixedClock, JsonEventSink};

use libris::ui::views::demo::{demo_summary_json, render_demo_report};
use libris::ui::views::render_banner;
use libris::ui::UiContext;

pub fn cmd_demo(config: &Config, ui: &UiContext, today: NaiveDate) -> Result<()> {
    let sink: Arc<dyn LibraryEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        println!(
            "{}",
            render_banner("LIBRARY MANAGEMENT SYSTEM", ui.color, ui.unicode)
        );
        Arc::new(ConsoleEventSink::stdout(ConsoleStyle {
            color: ui.color,
            unicode: ui.unicode,
            currency: config.output.currency.clone(),
            verbose: ui.verbose,
        }))
    };

    let summary = run_demo(config.loan_policy(), FixedClock(today), sink)?;

    if ui.json {
        libris::ui::json::emit(demo_summary_json(&summary))?;
    } else {
        println!();
        println!(
            "{}",
            render_demo_report(&summary, &config.output.currency, ui.color, ui.unicode)
        );
    }
    Ok(())
}
