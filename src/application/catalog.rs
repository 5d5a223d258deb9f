//! Catalog manager
//!
//! Owns the library's books. Lookups are linear scans in insertion order.

use std::sync::Arc;

use crate::domain::entities::Book;
use crate::domain::ports::{emit, LibraryEvent, LibraryEventSink, NoopEventSink};
use crate::domain::value_objects::Isbn;
use crate::error::{LibraryError, LibraryResult, RecordKind};

pub struct Catalog {
    books: Vec<Book>,
    events: Arc<dyn LibraryEventSink>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Builder: report outcomes to `sink`
    pub fn with_event_sink(mut self, sink: Arc<dyn LibraryEventSink>) -> Self {
        self.events = sink;
        self
    }

    /// Add a book. Rejected with `DuplicateKey` if the ISBN is taken.
    pub fn add(&mut self, book: Book) -> LibraryResult<()> {
        if self.find_by_isbn(book.isbn()).is_some() {
            let err = LibraryError::DuplicateKey {
                kind: RecordKind::Book,
                key: book.isbn().to_string(),
            };
            emit(
                self.events.as_ref(),
                LibraryEvent::BookRejected {
                    isbn: book.isbn().clone(),
                    reason: err.kind(),
                },
            );
            return Err(err);
        }

        emit(
            self.events.as_ref(),
            LibraryEvent::BookAdded {
                isbn: book.isbn().clone(),
                title: book.title().to_string(),
            },
        );
        self.books.push(book);
        Ok(())
    }

    /// First book whose title contains `query`, ignoring case
    pub fn find_by_title(&self, query: &str) -> Option<&Book> {
        let needle = query.to_lowercase();
        let found = self
            .books
            .iter()
            .find(|b| b.title().to_lowercase().contains(&needle));

        emit(
            self.events.as_ref(),
            LibraryEvent::SearchResult {
                query: query.to_string(),
                matches: found.map(|b| b.isbn().clone()).into_iter().collect(),
            },
        );
        found
    }

    pub fn find_by_isbn(&self, isbn: &Isbn) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    pub fn find_by_isbn_mut(&mut self, isbn: &Isbn) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.isbn() == isbn)
    }

    /// Every book whose author contains `query`, ignoring case
    pub fn find_by_author(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.author().to_lowercase().contains(&needle))
            .collect()
    }

    /// All books in insertion order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    /// Remove and return the book with `isbn`
    pub fn remove(&mut self, isbn: &Isbn) -> LibraryResult<Book> {
        let position = self.books.iter().position(|b| b.isbn() == isbn);
        emit(
            self.events.as_ref(),
            LibraryEvent::BookRemoved {
                isbn: isbn.clone(),
                removed: position.is_some(),
            },
        );

        match position {
            Some(index) => Ok(self.books.remove(index)),
            None => Err(LibraryError::book_not_found(isbn)),
        }
    }

    /// True when the book exists and has a copy on the shelf
    pub fn is_available(&self, isbn: &Isbn) -> bool {
        self.find_by_isbn(isbn).is_some_and(Book::is_available)
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn total_available_copies(&self) -> u64 {
        self.books
            .iter()
            .map(|b| u64::from(b.available_copies()))
            .sum()
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog").field("books", &self.books).finish()
    }
}
