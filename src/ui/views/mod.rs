//! Text views for CLI commands

pub mod demo;
pub mod policy;

use crossterm::style::Stylize;

use crate::ui::theme::{self, colors, Icon};

/// Width of section rules
pub const RULE_WIDTH: usize = 60;

/// Banner framed by heavy rules
pub fn render_banner(title: &str, supports_color: bool, supports_unicode: bool) -> String {
    let rule = theme::rule(RULE_WIDTH, true, supports_unicode);
    let icon = Icon::Book.colored(supports_color, supports_unicode);
    format!("{rule}\n  {icon} {title}\n{rule}")
}

/// Section title followed by a light rule
pub fn render_section(title: &str, supports_color: bool, supports_unicode: bool) -> String {
    let heading = if supports_color {
        format!("{}", title.with(colors::INFO).bold())
    } else {
        title.to_string()
    };
    format!(
        "{heading}\n{}",
        theme::rule(RULE_WIDTH, false, supports_unicode)
    )
}
