use crate::domain::error::DomainError;
use crate::domain::model::book::Book;
use crate::domain::model::page::{BookPage, Pagination};
use crate::domain::repository::BookRepository;

use super::error::AppError;
use super::search;
use super::store::BookStore;

/// Result of an update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Replaced,
    /// No record carried the id; the collection was saved unchanged.
    NoMatch,
}

/// Catalogue use cases. Each write is a single load → mutate → save cycle
/// under the store's exclusive lock.
pub struct BookService<R: BookRepository> {
    store: BookStore<R>,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            store: BookStore::new(repo),
        }
    }

    /// Whole collection in stored order.
    pub fn list_all(&self) -> Result<Vec<Book>, AppError> {
        self.store.snapshot()
    }

    /// One page of the collection. Arguments are validated before any I/O.
    pub fn paginate(&self, page: i64, limit: i64) -> Result<BookPage, AppError> {
        let pagination = Pagination::new(page, limit)?;
        let books = self.store.snapshot()?;
        Ok(BookPage::from_books(books, pagination))
    }

    /// First record whose id matches.
    pub fn get(&self, id: &str) -> Result<Book, AppError> {
        require_id(id)?;
        self.store
            .snapshot()?
            .into_iter()
            .find(|book| book.id == id)
            .ok_or_else(|| DomainError::BookNotFound(id.to_string()).into())
    }

    /// Appends the record. Duplicate ids are accepted.
    pub fn create(&self, book: Book) -> Result<(), AppError> {
        book.validate()?;
        let id = book.id.clone();
        let total = self.store.modify(|books| {
            books.push(book);
            Ok(books.len())
        })?;
        tracing::info!(book_id = %id, total, "book created");
        Ok(())
    }

    /// Replaces every field of the first record with a matching id.
    ///
    /// A missing id is not an error: the collection is saved unchanged and
    /// `UpdateOutcome::NoMatch` is returned.
    pub fn update(&self, id: &str, book: Book) -> Result<UpdateOutcome, AppError> {
        require_id(id)?;
        book.validate()?;
        let outcome = self.store.modify(|books| {
            Ok(match books.iter_mut().find(|b| b.id == id) {
                Some(slot) => {
                    *slot = book;
                    UpdateOutcome::Replaced
                }
                None => UpdateOutcome::NoMatch,
            })
        })?;
        match outcome {
            UpdateOutcome::Replaced => tracing::info!(book_id = %id, "book replaced"),
            UpdateOutcome::NoMatch => {
                tracing::warn!(book_id = %id, "update matched no book, collection unchanged")
            }
        }
        Ok(outcome)
    }

    /// Removes the first record with a matching id and returns it.
    pub fn delete(&self, id: &str) -> Result<Book, AppError> {
        require_id(id)?;
        let removed = self.store.modify_existing(|books| {
            let pos = books
                .iter()
                .position(|b| b.id == id)
                .ok_or_else(|| DomainError::BookNotFound(id.to_string()))?;
            Ok(books.remove(pos))
        })?;
        tracing::info!(book_id = %id, "book deleted");
        Ok(removed)
    }

    /// Keyword search over a snapshot taken under the shared lock.
    /// The scan itself runs after the lock is released.
    pub fn search(&self, keyword: &str) -> Result<Vec<Book>, AppError> {
        if keyword.is_empty() {
            return Err(DomainError::InvalidArgument("missing search keyword".into()).into());
        }
        let books = self.store.snapshot()?;
        let found = search::search(&books, keyword);
        tracing::debug!(keyword, matches = found.len(), "search finished");
        Ok(found)
    }
}

fn require_id(id: &str) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::InvalidArgument("book id must not be empty".into()));
    }
    Ok(())
}
