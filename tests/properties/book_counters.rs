//! Property tests for book copy counters.

use proptest::prelude::*;

use libris::{Book, BookStatus};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: 0 <= available <= total after any sequence of borrow/return.
    #[test]
    fn property_available_stays_in_range(
        total in 0u32..8,
        ops in proptest::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut book = Book::new("ISBN", "Title", "Author", total);
        for borrow in ops {
            if borrow {
                book.borrow();
            } else {
                book.return_copy();
            }
            prop_assert!(book.available_copies() <= book.total_copies());
            prop_assert_eq!(
                book.status() == BookStatus::Borrowed,
                book.available_copies() == 0
            );
        }
    }

    /// PROPERTY: borrow on an empty shelf and return on a full shelf are no-ops.
    #[test]
    fn property_boundary_operations_do_not_change_state(total in 0u32..8) {
        let mut full = Book::new("ISBN", "Title", "Author", total);
        let before = full.clone();
        prop_assert!(!full.return_copy());
        prop_assert_eq!(&full, &before);

        let mut empty = Book::new("ISBN", "Title", "Author", total);
        while empty.borrow() {}
        let before = empty.clone();
        prop_assert!(!empty.borrow());
        prop_assert_eq!(&empty, &before);
        prop_assert_eq!(empty.available_copies(), 0);
    }
}
