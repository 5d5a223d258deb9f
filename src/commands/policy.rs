use anyhow::Result;

use libris::config::Config;

use libris::ui::views::policy::{policy_json, render_policy};
use libris::ui::UiContext;

pub fn cmd_policy(config: &Config, ui: &UiContext) -> Result<()> {
    let policy = config.loan_policy();

    if ui.json {
        libris::ui::json::emit(policy_json(&policy))?;
    } else {
        println!("{}", render_policy(&policy, &config.output.currency));
    }
    Ok(())
}
