//! Scenario: the sample session
//!
//! Journey: the scripted demo adds books and patrons, lends, takes returns
//! and ends with two patrons owing fines.

use std::sync::Arc;

use libris::infrastructure::RecordingEventSink;
use libris::{run_demo, FixedClock, LibraryEvent, LoanPolicy, Money, PatronId};

use crate::common::*;

/// SCENARIO: demo summary matches the sample session's totals
#[test]
fn scenario_demo_summary() {
    let sink = Arc::new(RecordingEventSink::detailed());
    let summary = run_demo(
        LoanPolicy::default(),
        FixedClock(day(2024, 6, 1)),
        sink.clone(),
    )
    .unwrap();

    assert_eq!(summary.total_books(), 4);
    assert_eq!(summary.total_available_copies(), 10);
    assert_eq!(summary.total_patrons(), 3);
    assert_eq!(summary.active_patrons(), 3);
    assert_eq!(summary.fine_of(&PatronId::from("P001")), Money::from_units(530));
    assert_eq!(summary.fine_of(&PatronId::from("P003")), Money::from_units(140));
    assert_eq!(summary.loans[3].due_date, day(2024, 5, 26));

    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, LibraryEvent::SearchResult { matches, .. } if matches.len() == 1)));
}

/// SCENARIO: a shorter loan period and lower rate change every fine
#[test]
fn scenario_demo_with_custom_policy() {
    let policy = LoanPolicy::new(7, Money::from_units(2));
    let summary = run_demo(
        policy,
        FixedClock(day(2024, 6, 1)),
        Arc::new(RecordingEventSink::new()),
    )
    .unwrap();

    // Rolling due date is 2024-05-25: returns are 12, 27 and 7 days past it.
    assert_eq!(summary.fine_of(&PatronId::from("P001")), Money::from_units(78));
    assert_eq!(summary.fine_of(&PatronId::from("P003")), Money::from_units(14));
}
