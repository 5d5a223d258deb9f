use crate::application::DemoSummary;
use crate::ui::table::render_rows;

use super::render_section;

/// Everything printed after the demo's event stream
pub fn render_demo_report(
    summary: &DemoSummary,
    currency: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let section = |title: &str| render_section(title, supports_color, supports_unicode);
    let mut out = Vec::new();

    out.push(section("Returns"));
    let rows: Vec<Vec<String>> = summary
        .returns
        .iter()
        .map(|r| {
            vec![
                r.loan.isbn.to_string(),
                r.loan.patron.to_string(),
                r.returned_on.to_string(),
                format!("{}{}", currency, r.fine),
                format!("(from due date: {}{})", currency, r.anchored_fine),
            ]
        })
        .collect();
    out.extend(render_rows(&rows, &[3]));

    out.push(String::new());
    out.push(section("Books"));
    for book in summary.catalog.list() {
        out.push(book.to_string());
    }
    out.push(format!("Total books: {}", summary.total_books()));
    out.push(format!(
        "Total available copies: {}",
        summary.total_available_copies()
    ));

    out.push(String::new());
    out.push(section("Patrons"));
    for patron in summary.membership.list() {
        out.push(patron.to_string());
        let held: Vec<&str> = patron.borrowed_books().iter().map(|i| i.as_str()).collect();
        out.push(format!("  borrowed: [{}]", held.join(", ")));
    }
    out.push(format!("Total patrons: {}", summary.total_patrons()));
    out.push(format!("Active patrons: {}", summary.active_patrons()));

    out.push(String::new());
    out.push(section("Outstanding fines"));
    let owing = summary.outstanding_fines();
    if owing.is_empty() {
        out.push("none".to_string());
    } else {
        let rows: Vec<Vec<String>> = owing
            .iter()
            .map(|(patron, fine)| vec![patron.name().to_string(), format!("{}{}", currency, fine)])
            .collect();
        out.extend(render_rows(&rows, &[1]));
    }

    out.join("\n")
}

pub fn demo_summary_json(summary: &DemoSummary) -> serde_json::Value {
    let fines: Vec<serde_json::Value> = summary
        .outstanding_fines()
        .iter()
        .map(|(patron, fine)| {
            serde_json::json!({
                "patron": patron.id(),
                "name": patron.name(),
                "fine": fine.to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "event": "demo_summary",
        "today": summary.today.to_string(),
        "total_books": summary.total_books(),
        "total_available_copies": summary.total_available_copies(),
        "total_patrons": summary.total_patrons(),
        "active_patrons": summary.active_patrons(),
        "outstanding_fines": fines,
    })
}
