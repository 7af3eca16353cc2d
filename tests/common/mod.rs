//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use bookshelf::application::service::BookService;
use bookshelf::domain::model::book::Book;
use bookshelf::domain::repository::BookRepository;

// =============================================================================
// InMemoryRepo — repository without file I/O
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// Keeps the serialized document in memory, so encode/decode still run.
pub struct InMemoryRepo {
    store: Mutex<Option<String>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(None),
        }
    }

    pub fn with_books(books: &[Book]) -> Self {
        let repo = Self::new();
        repo.save(books).unwrap();
        repo
    }
}

impl BookRepository for InMemoryRepo {
    type Error = InMemoryError;

    fn load(&self) -> Result<Option<Vec<Book>>, Self::Error> {
        let store = self.store.lock().map_err(|_| InMemoryError)?;
        match store.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json).map_err(|_| InMemoryError)?)),
            None => Ok(None),
        }
    }

    fn save(&self, books: &[Book]) -> Result<(), Self::Error> {
        let json = serde_json::to_string(books).map_err(|_| InMemoryError)?;
        *self.store.lock().map_err(|_| InMemoryError)? = Some(json);
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn book(id: &str, title: &str, description: &str) -> Book {
    Book {
        id: id.into(),
        author_id: format!("author-{id}"),
        publisher_id: format!("publisher-{id}"),
        title: title.into(),
        publication_date: "2020-01-01".into(),
        isbn: format!("978000000{id}"),
        pages: 100,
        genre: "Fiction".into(),
        description: description.into(),
        price: 9.99,
        quantity: 1,
    }
}

/// The two records the catalogue shipped with.
pub fn classics() -> Vec<Book> {
    vec![
        Book {
            id: "a1b2c3d4-5678-90ab-cdef-1234567890ab".into(),
            author_id: "b2c3d4e5-6789-0ab1-cdef-234567890abc".into(),
            publisher_id: "c3d4e5f6-7890-ab12-cdef-34567890abcd".into(),
            title: "To Kill a Mockingbird".into(),
            publication_date: "1960-07-11".into(),
            isbn: "9780061120084".into(),
            pages: 281,
            genre: "Fiction".into(),
            description:
                "A story of racial injustice in the Deep South, seen through the eyes of a young girl."
                    .into(),
            price: 8.99,
            quantity: 10,
        },
        Book {
            id: "d4e5f6a7-890b-cdef-1234-567890abcdef".into(),
            author_id: "e5f6a7b8-90bc-def1-2345-67890abcdef1".into(),
            publisher_id: "f6a7b8c9-0bc1-def2-3456-7890abcdef12".into(),
            title: "1984".into(),
            publication_date: "1949-06-08".into(),
            isbn: "9780451524935".into(),
            pages: 328,
            genre: "Dystopian".into(),
            description: "A chilling portrayal of perpetual war, omnipresent government surveillance, and public manipulation.".into(),
            price: 12.99,
            quantity: 7,
        },
    ]
}

/// `n` records with ids "0".."n-1".
pub fn numbered(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| book(&i.to_string(), &format!("Title {i}"), "numbered"))
        .collect()
}

pub fn service_with_books(books: &[Book]) -> BookService<InMemoryRepo> {
    BookService::new(InMemoryRepo::with_books(books))
}

pub fn ids(books: &[Book]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// Asserts the result is Err and its message contains `expected`.
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
