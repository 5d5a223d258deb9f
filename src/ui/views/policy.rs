use chrono::NaiveDate;

use crate::domain::policies::LoanPolicy;
use crate::domain::value_objects::Money;

pub fn render_policy(policy: &LoanPolicy, currency: &str) -> String {
    format!(
        "Loan period:  {} days\nFine per day: {}{}",
        policy.loan_period_days(),
        currency,
        policy.fine_per_day()
    )
}

pub fn policy_json(policy: &LoanPolicy) -> serde_json::Value {
    serde_json::json!({
        "event": "policy",
        "loan_period_days": policy.loan_period_days(),
        "fine_per_day": policy.fine_per_day().to_string(),
    })
}

/// A fine quote: what a return on `return_date` would cost today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FineQuote {
    pub today: NaiveDate,
    pub return_date: NaiveDate,
    /// Date fines are counted from (`today - loan period`)
    pub counted_from: NaiveDate,
    pub fine: Money,
}

impl FineQuote {
    pub fn new(policy: &LoanPolicy, today: NaiveDate, return_date: NaiveDate) -> Self {
        Self {
            today,
            return_date,
            counted_from: policy.rolling_due_date(today),
            fine: policy.rolling_fine(today, return_date),
        }
    }
}

pub fn render_fine(quote: &FineQuote, currency: &str) -> String {
    format!(
        "Return on {}: fine {}{} (counted from {}, today {})",
        quote.return_date, currency, quote.fine, quote.counted_from, quote.today
    )
}

pub fn fine_json(quote: &FineQuote) -> serde_json::Value {
    serde_json::json!({
        "event": "fine_quote",
        "today": quote.today.to_string(),
        "return_date": quote.return_date.to_string(),
        "counted_from": quote.counted_from.to_string(),
        "fine": quote.fine.to_string(),
    })
}
