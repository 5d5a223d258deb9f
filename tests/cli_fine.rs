mod common;

use common::*;

#[test]
fn fine_uses_rolling_window() {
    let env = TestEnv::new();
    let result = env.run(&["fine", "2024-05-24"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stdout.trim(),
        "Return on 2024-05-24: fine Rs.60.00 (counted from 2024-05-18, today 2024-06-01)"
    );
}

#[test]
fn fine_json() {
    let env = TestEnv::new();
    let result = env.run(&["fine", "2024-05-10", "--json"]);

    let lines = result.json_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["event"], "fine_quote");
    assert_eq!(lines[0]["fine"], "0.00");
}

#[test]
fn fine_honors_env_overrides() {
    let env = TestEnv::new();
    let result = env.run_with_env(
        &["fine", "2024-05-28", "--json"],
        &[("LIBRIS_LOAN_PERIOD_DAYS", "7"), ("LIBRIS_FINE_PER_DAY", "5")],
    );

    let lines = result.json_lines();
    assert_eq!(lines[0]["counted_from"], "2024-05-25");
    assert_eq!(lines[0]["fine"], "15.00");
}

#[test]
fn fine_rejects_bad_date() {
    let env = TestEnv::new();
    let result = env.run(&["fine", "tomorrow"]);
    assert!(!result.success);
}
