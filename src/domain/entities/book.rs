//! Book entity - a catalog entry with copy counters
//!
//! Copy counters are the only mutable state. `available_copies` is kept
//! within `0..=total_copies` by `borrow` and `return_copy`; nothing else
//! writes it.

use std::fmt;

use crate::domain::value_objects::{BookStatus, Isbn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Catalog key
    isbn: Isbn,
    title: String,
    author: String,
    publisher: String,
    /// Publication year
    year: i32,
    total_copies: u32,
    available_copies: u32,
}

impl Book {
    /// Create a new Book with every copy on the shelf
    pub fn new(
        isbn: impl Into<Isbn>,
        title: impl Into<String>,
        author: impl Into<String>,
        total_copies: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            publisher: String::new(),
            year: 0,
            total_copies,
            available_copies: total_copies,
        }
    }

    /// Builder: set the publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    /// Builder: set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    // --- Getters ---

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    /// Derived from the available count
    pub fn status(&self) -> BookStatus {
        BookStatus::from_available(self.available_copies)
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    // --- Mutations ---

    /// Take one copy off the shelf.
    ///
    /// Does nothing when no copy is available. Returns whether a copy was taken.
    pub fn borrow(&mut self) -> bool {
        if self.available_copies == 0 {
            return false;
        }
        self.available_copies -= 1;
        true
    }

    /// Put one copy back on the shelf.
    ///
    /// Does nothing when every copy is already on the shelf. Returns whether
    /// a copy was put back.
    pub fn return_copy(&mut self) -> bool {
        if self.available_copies >= self.total_copies {
            return false;
        }
        self.available_copies += 1;
        true
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book{{isbn='{}', title='{}', author='{}', available={}/{}, status='{}'}}",
            self.isbn,
            self.title,
            self.author,
            self.available_copies,
            self.total_copies,
            self.status()
        )
    }
}
