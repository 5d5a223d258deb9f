//! Scenario: membership lifecycle
//!
//! Journey: a patron registers, is suspended and reinstated, settles a
//! fine, and finally leaves.

use libris::{
    AccountStatus, ErrorKind, FixedClock, LendingService, LoanPolicy, Membership, Money, PatronId,
};

use crate::common::*;

/// SCENARIO: suspension blocks checkout until the account is reactivated
#[test]
fn scenario_suspend_then_activate() {
    let today = day(2024, 6, 1);
    let service = LendingService::new(LoanPolicy::default(), FixedClock(today));
    let mut membership = Membership::new();
    membership.register(raj()).unwrap();
    let id = PatronId::from("P001");
    let mut book = gatsby(2);

    membership.suspend(&id).unwrap();
    let patron = membership.find_by_id_mut(&id).unwrap();
    let err = service.checkout(&mut book, patron, today).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AccountSuspended);
    assert_eq!(book.available_copies(), 2);

    membership.activate(&id).unwrap();
    let patron = membership.find_by_id_mut(&id).unwrap();
    assert_eq!(patron.status(), AccountStatus::Active);
    service.checkout(&mut book, patron, today).unwrap();
    assert_eq!(book.available_copies(), 1);
}

/// SCENARIO: register, look up, update, pay, remove
#[test]
fn scenario_register_find_remove_round_trip() {
    let mut membership = Membership::new();
    membership.register(raj()).unwrap();
    membership.register(priya()).unwrap();
    let id = PatronId::from("P002");

    assert_eq!(membership.find_by_id(&id), Some(&priya()));
    assert_eq!(membership.find_by_name("sharma").len(), 1);

    membership
        .update_contact(&id, "priya.s@example.org", "9000000001")
        .unwrap();
    membership
        .find_by_id_mut(&id)
        .unwrap()
        .add_fine(Money::from_units(25));

    let err = membership.pay_fine(&id, Money::from_units(30)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PaymentExceedsBalance);
    assert_eq!(
        membership.pay_fine(&id, Money::from_minor(2_450)).unwrap(),
        Money::from_minor(50)
    );

    let removed = membership.remove(&id).unwrap();
    assert_eq!(removed.email(), "priya.s@example.org");
    assert!(membership.find_by_id(&id).is_none());
    assert_eq!(membership.remove(&id).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(membership.count(), 1);
}
