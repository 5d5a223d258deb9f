//! Sample records shared by tests.

use chrono::NaiveDate;
use libris::{Book, Patron};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn gatsby(copies: u32) -> Book {
    Book::new("ISBN001", "The Great Gatsby", "F. Scott Fitzgerald", copies)
        .with_publisher("Scribner")
        .with_year(1925)
}

pub fn nineteen_eighty_four() -> Book {
    Book::new("ISBN003", "1984", "George Orwell", 4)
}

pub fn raj() -> Patron {
    Patron::new("P001", "Raj Kumar", "raj@email.com", "9876543210")
}

pub fn priya() -> Patron {
    Patron::new("P002", "Priya Sharma", "priya@email.com", "9876543211")
}
