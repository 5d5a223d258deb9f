//! Property tests for checkout and return.

use chrono::NaiveDate;
use proptest::prelude::*;

use libris::{AccountStatus, Book, ErrorKind, FixedClock, LendingService, LoanPolicy, Patron};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn service() -> LendingService<FixedClock> {
    LendingService::new(LoanPolicy::default(), FixedClock(today()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: checkout either fails without mutation or takes exactly one copy.
    #[test]
    fn property_checkout_all_or_nothing(
        total in 0u32..4,
        pre_borrowed in 0u32..4,
        suspended in any::<bool>(),
    ) {
        let service = service();
        let mut book = Book::new("ISBN001", "Title", "Author", total);
        for _ in 0..pre_borrowed {
            book.borrow();
        }
        let mut patron = Patron::new("P001", "Name", "", "");
        if suspended {
            patron.set_status(AccountStatus::Suspended);
        }

        let book_before = book.clone();
        let patron_before = patron.clone();
        let result = service.checkout(&mut book, &mut patron, today());

        if book_before.available_copies() == 0 {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::Unavailable);
            prop_assert_eq!(&book, &book_before);
            prop_assert_eq!(&patron, &patron_before);
        } else if suspended {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::AccountSuspended);
            prop_assert_eq!(&book, &book_before);
            prop_assert_eq!(&patron, &patron_before);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(book.available_copies() + 1, book_before.available_copies());
            prop_assert!(patron.has_borrowed(book.isbn()));
            prop_assert_eq!(patron.borrowing_history().len(), 1);
        }
    }

    /// PROPERTY: n checkouts then k returns leave n - k copies held.
    #[test]
    fn property_return_removes_one_occurrence(copies in 1u32..6, returns in 0u32..8) {
        let service = service();
        let mut book = Book::new("ISBN001", "Title", "Author", copies);
        let mut patron = Patron::new("P001", "Name", "", "");

        for _ in 0..copies {
            service.checkout(&mut book, &mut patron, today()).unwrap();
        }
        prop_assert_eq!(patron.copies_held(book.isbn()), copies);

        for i in 0..returns {
            let book_before = book.clone();
            let patron_before = patron.clone();
            let result = service.return_book(&mut book, &mut patron, today());

            if i < copies {
                prop_assert!(result.is_ok());
                prop_assert_eq!(book.available_copies(), book_before.available_copies() + 1);
                prop_assert_eq!(patron.copies_held(book.isbn()) + 1, patron_before.copies_held(book.isbn()));
            } else {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::NotBorrowed);
                prop_assert_eq!(&book, &book_before);
                prop_assert_eq!(&patron, &patron_before);
            }
        }

        prop_assert_eq!(patron.borrowing_history().len(), copies as usize);
    }
}
