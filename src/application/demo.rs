//! Demo session
//!
//! A scripted run over a fresh catalog and membership: four books, three
//! patrons, a title search, four checkouts (one backdated 20 days) and
//! three returns. Everything is reported through the event sink; the final
//! state comes back as a [`DemoSummary`].

use std::sync::Arc;

use chrono::{Days, NaiveDate};

use crate::domain::entities::{Book, Patron};
use crate::domain::policies::LoanPolicy;
use crate::domain::ports::{Clock, LibraryEventSink};
use crate::domain::services::LendingService;
use crate::domain::value_objects::{Isbn, Loan, Money, PatronId};
use crate::error::{LibraryError, LibraryResult};

use super::{Catalog, Membership};

/// Title searched for during the demo
pub const DEMO_SEARCH: &str = "1984";

/// One processed return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReturn {
    pub loan: Loan,
    pub returned_on: NaiveDate,
    /// Fine the engine charged
    pub fine: Money,
    /// Fine counted from the loan's own due date, for comparison
    pub anchored_fine: Money,
}

#[derive(Debug)]
pub struct DemoSummary {
    pub today: NaiveDate,
    pub catalog: Catalog,
    pub membership: Membership,
    /// ISBN found by the title search, if any
    pub search_hit: Option<Isbn>,
    pub loans: Vec<Loan>,
    pub returns: Vec<DemoReturn>,
}

impl DemoSummary {
    pub fn total_books(&self) -> usize {
        self.catalog.count()
    }

    pub fn total_available_copies(&self) -> u64 {
        self.catalog.total_available_copies()
    }

    pub fn total_patrons(&self) -> usize {
        self.membership.count()
    }

    pub fn active_patrons(&self) -> usize {
        self.membership.active_count()
    }

    /// Fine balance of a patron, zero when unknown
    pub fn fine_of(&self, id: &PatronId) -> Money {
        self.membership
            .find_by_id(id)
            .map(Patron::fine_balance)
            .unwrap_or(Money::ZERO)
    }

    /// Patrons with a positive balance, in registration order
    pub fn outstanding_fines(&self) -> Vec<(&Patron, Money)> {
        self.membership
            .with_outstanding_fines()
            .into_iter()
            .map(|p| (p, p.fine_balance()))
            .collect()
    }
}

fn demo_books() -> Vec<Book> {
    vec![
        Book::new("ISBN001", "The Great Gatsby", "F. Scott Fitzgerald", 3)
            .with_publisher("Scribner")
            .with_year(1925),
        Book::new("ISBN002", "To Kill a Mockingbird", "Harper Lee", 2)
            .with_publisher("Lippincott")
            .with_year(1960),
        Book::new("ISBN003", "1984", "George Orwell", 4)
            .with_publisher("Secker & Warburg")
            .with_year(1949),
        Book::new("ISBN004", "Pride and Prejudice", "Jane Austen", 2)
            .with_publisher("T. Egerton")
            .with_year(1813),
    ]
}

fn demo_patrons() -> Vec<Patron> {
    vec![
        Patron::new("P001", "Raj Kumar", "raj@email.com", "9876543210"),
        Patron::new("P002", "Priya Sharma", "priya@email.com", "9876543211"),
        Patron::new("P003", "Amit Patel", "amit@email.com", "9876543212"),
    ]
}

/// Run the scripted session under `policy`, dated by `clock`.
///
/// Catalog, membership and lending all report to `sink`.
pub fn run_demo<C: Clock>(
    policy: LoanPolicy,
    clock: C,
    sink: Arc<dyn LibraryEventSink>,
) -> LibraryResult<DemoSummary> {
    let today = clock.today();
    let service = LendingService::new(policy, clock).with_event_sink(Arc::clone(&sink));
    let mut catalog = Catalog::new().with_event_sink(Arc::clone(&sink));
    let mut membership = Membership::new().with_event_sink(sink);

    for book in demo_books() {
        catalog.add(book)?;
    }
    for patron in demo_patrons() {
        membership.register(patron)?;
    }

    let search_hit = catalog
        .find_by_title(DEMO_SEARCH)
        .map(|b| b.isbn().clone());

    let backdated = today
        .checked_sub_days(Days::new(20))
        .unwrap_or(NaiveDate::MIN);
    let checkouts = [
        ("ISBN001", "P001", today),
        ("ISBN002", "P001", today),
        ("ISBN003", "P002", today),
        ("ISBN004", "P003", backdated),
    ];

    let mut loans = Vec::with_capacity(checkouts.len());
    for (isbn, patron, date) in checkouts {
        loans.push(checkout(
            &service,
            &mut catalog,
            &mut membership,
            &Isbn::from(isbn),
            &PatronId::from(patron),
            date,
        )?);
    }

    let returns_plan = [
        (0, today.checked_add_days(Days::new(5))),
        (1, today.checked_add_days(Days::new(20))),
        (3, Some(today)),
    ];

    let mut returns = Vec::with_capacity(returns_plan.len());
    for (index, date) in returns_plan {
        let loan = loans[index].clone();
        let returned_on = date.unwrap_or(NaiveDate::MAX);
        let fine = return_book(
            &service,
            &mut catalog,
            &mut membership,
            &loan.isbn,
            &loan.patron,
            returned_on,
        )?;
        returns.push(DemoReturn {
            anchored_fine: loan.fine_if_returned_on(returned_on, service.policy()),
            loan,
            returned_on,
            fine,
        });
    }

    Ok(DemoSummary {
        today,
        catalog,
        membership,
        search_hit,
        loans,
        returns,
    })
}

/// Look both records up by key and check out one copy
pub fn checkout<C: Clock>(
    service: &LendingService<C>,
    catalog: &mut Catalog,
    membership: &mut Membership,
    isbn: &Isbn,
    patron_id: &PatronId,
    date: NaiveDate,
) -> LibraryResult<Loan> {
    let book = catalog
        .find_by_isbn_mut(isbn)
        .ok_or_else(|| LibraryError::book_not_found(isbn))?;
    let patron = membership
        .find_by_id_mut(patron_id)
        .ok_or_else(|| LibraryError::patron_not_found(patron_id))?;
    service.checkout(book, patron, date)
}

/// Look both records up by key and return one copy; yields the fine charged
pub fn return_book<C: Clock>(
    service: &LendingService<C>,
    catalog: &mut Catalog,
    membership: &mut Membership,
    isbn: &Isbn,
    patron_id: &PatronId,
    date: NaiveDate,
) -> LibraryResult<Money> {
    let book = catalog
        .find_by_isbn_mut(isbn)
        .ok_or_else(|| LibraryError::book_not_found(isbn))?;
    let patron = membership
        .find_by_id_mut(patron_id)
        .ok_or_else(|| LibraryError::patron_not_found(patron_id))?;
    service
        .return_book(book, patron, date)
        .map(|receipt| receipt.fine)
}
