//! Scenario: a popular title circulates
//!
//! Journey: three copies go out, a fourth request is turned away, copies
//! come back late and fines accrue.

use std::sync::Arc;

use chrono::Days;
use libris::application::demo::{checkout, return_book};
use libris::infrastructure::RecordingEventSink;
use libris::{
    BookStatus, Catalog, ErrorKind, FixedClock, Isbn, LendingService, LibraryEvent, LoanPolicy,
    Membership, Money, Patron, PatronId,
};

use crate::common::*;

/// SCENARIO: every copy checked out, the next request is rejected
#[test]
fn scenario_last_copy_then_rejection() {
    let today = day(2024, 6, 1);
    let service = LendingService::new(LoanPolicy::default(), FixedClock(today));
    let mut book = gatsby(3);
    let mut patrons = vec![
        raj(),
        priya(),
        Patron::new("P003", "Amit Patel", "", ""),
        Patron::new("P004", "Meera Iyer", "", ""),
    ];

    for patron in patrons.iter_mut().take(3) {
        service.checkout(&mut book, patron, today).unwrap();
    }
    assert_eq!(book.available_copies(), 0);
    assert_eq!(book.status(), BookStatus::Borrowed);

    let err = service
        .checkout(&mut book, &mut patrons[3], today)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert_eq!(book.available_copies(), 0);
    assert_eq!(patrons[3].borrowed_count(), 0);

    service
        .return_book(&mut book, &mut patrons[0], day(2024, 5, 1))
        .unwrap();
    assert_eq!(book.status(), BookStatus::Available);
    service.checkout(&mut book, &mut patrons[3], today).unwrap();
}

/// SCENARIO: a return 6 days past `today - 14` costs 60
#[test]
fn scenario_overdue_fine_of_sixty() {
    let today = day(2024, 6, 1);
    let service = LendingService::new(LoanPolicy::default(), FixedClock(today));
    let mut book = gatsby(1);
    let mut patron = raj();

    service
        .checkout(&mut book, &mut patron, day(2024, 5, 1))
        .unwrap();
    let return_date = day(2024, 5, 18) + Days::new(6);
    let receipt = service
        .return_book(&mut book, &mut patron, return_date)
        .unwrap();

    assert_eq!(receipt.fine, Money::from_units(60));
    assert_eq!(patron.fine_balance(), Money::from_units(60));
    assert!(!patron.has_borrowed(book.isbn()));
}

/// SCENARIO: fines are measured from the rolling window, not the checkout.
///
/// A loan taken today and returned today is charged 14 days, while the
/// checkout-anchored figure is zero. Pinning both catches a policy change.
#[test]
fn scenario_rolling_and_anchored_fines_differ() {
    let today = day(2024, 6, 1);
    let policy = LoanPolicy::default();
    let service = LendingService::new(policy, FixedClock(today));
    let mut book = gatsby(1);
    let mut patron = raj();

    let loan = service.checkout(&mut book, &mut patron, today).unwrap();
    let receipt = service.return_book(&mut book, &mut patron, today).unwrap();

    assert_eq!(receipt.fine, Money::from_units(140));
    assert_eq!(loan.fine_if_returned_on(today, &policy), Money::ZERO);
}

/// SCENARIO: a patron borrows two copies of the same title
#[test]
fn scenario_duplicate_copies_tracked_per_copy() {
    let today = day(2024, 6, 1);
    let service = LendingService::new(LoanPolicy::default(), FixedClock(today));
    let mut book = gatsby(2);
    let mut patron = raj();

    service.checkout(&mut book, &mut patron, today).unwrap();
    service.checkout(&mut book, &mut patron, today).unwrap();
    assert_eq!(patron.borrowed_count(), 2);
    assert_eq!(patron.borrowing_history().len(), 2);

    service
        .return_book(&mut book, &mut patron, day(2024, 5, 1))
        .unwrap();
    assert!(patron.has_borrowed(book.isbn()));
    assert_eq!(book.available_copies(), 1);
}

/// SCENARIO: keyed operations over the managers report every outcome
#[test]
fn scenario_keyed_circulation_reports_events() {
    let today = day(2024, 6, 1);
    let sink = Arc::new(RecordingEventSink::new());
    let service = LendingService::new(LoanPolicy::default(), FixedClock(today))
        .with_event_sink(sink.clone());
    let mut catalog = Catalog::new().with_event_sink(sink.clone());
    let mut membership = Membership::new().with_event_sink(sink.clone());

    catalog.add(nineteen_eighty_four()).unwrap();
    membership.register(priya()).unwrap();

    let isbn = Isbn::from("ISBN003");
    let id = PatronId::from("P002");
    checkout(&service, &mut catalog, &mut membership, &isbn, &id, today).unwrap();
    let fine = return_book(
        &service,
        &mut catalog,
        &mut membership,
        &isbn,
        &id,
        day(2024, 5, 20),
    )
    .unwrap();
    assert_eq!(fine, Money::from_units(20));

    let err = return_book(&service, &mut catalog, &mut membership, &isbn, &id, today)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotBorrowed);

    let events = sink.events();
    assert!(matches!(events[2], LibraryEvent::CheckedOut { .. }));
    assert!(matches!(events[3], LibraryEvent::FineAssessed { .. }));
    assert!(matches!(events[4], LibraryEvent::Returned { .. }));
    assert!(matches!(
        events[5],
        LibraryEvent::ReturnRejected {
            reason: ErrorKind::NotBorrowed,
            ..
        }
    ));
    assert_eq!(catalog.total_available_copies(), 4);
}
