use anyhow::Result;
use chrono::NaiveDate;

use libris::config::Config;

use libris::ui::views::policy::{fine_json, render_fine, FineQuote};
use libris::ui::UiContext;

pub fn cmd_fine(
    config: &Config,
    ui: &UiContext,
    today: NaiveDate,
    return_date: NaiveDate,
) -> Result<()> {
    let quote = FineQuote::new(&config.loan_policy(), today, return_date);

    if ui.json {
        libris::ui::json::emit(fine_json(&quote))?;
    } else {
        println!("{}", render_fine(&quote, &config.output.currency));
    }
    Ok(())
}
