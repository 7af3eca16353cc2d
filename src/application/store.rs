use std::sync::RwLock;

use crate::domain::model::book::Book;
use crate::domain::repository::BookRepository;

use super::error::AppError;

/// How a write treats a store that has never been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnMissing {
    /// Persist an empty collection first, then continue.
    Init,
    /// Fail with `AppError::StoreMissing`.
    Fail,
}

/// Sole gateway to the persisted collection.
///
/// The repository sits behind a readers-writer lock held across each whole
/// logical operation: snapshots share it, read-modify-write cycles own it
/// exclusively, so concurrent writers never lose updates and readers only
/// ever see a fully saved collection.
pub struct BookStore<R: BookRepository> {
    repo: RwLock<R>,
}

impl<R: BookRepository> BookStore<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: RwLock::new(repo),
        }
    }

    /// Full collection as currently persisted.
    pub fn snapshot(&self) -> Result<Vec<Book>, AppError> {
        let repo = self.repo.read().map_err(|_| AppError::LockPoisoned)?;
        repo.load()
            .map_err(AppError::storage)?
            .ok_or(AppError::StoreMissing)
    }

    /// Read-modify-write, initialising an absent store to `[]` first.
    pub fn modify<T>(
        &self,
        f: impl FnOnce(&mut Vec<Book>) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        self.modify_with(OnMissing::Init, f)
    }

    /// Read-modify-write on a store that must already exist.
    pub fn modify_existing<T>(
        &self,
        f: impl FnOnce(&mut Vec<Book>) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        self.modify_with(OnMissing::Fail, f)
    }

    // --- private ---

    /// Nothing is saved when `f` fails.
    fn modify_with<T>(
        &self,
        on_missing: OnMissing,
        f: impl FnOnce(&mut Vec<Book>) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let repo = self.repo.write().map_err(|_| AppError::LockPoisoned)?;
        let mut books = match repo.load().map_err(AppError::storage)? {
            Some(books) => books,
            None if on_missing == OnMissing::Init => {
                tracing::info!("book store absent, initialising empty collection");
                repo.save(&[]).map_err(AppError::storage)?;
                repo.load()
                    .map_err(AppError::storage)?
                    .ok_or(AppError::StoreMissing)?
            }
            None => return Err(AppError::StoreMissing),
        };
        let out = f(&mut books)?;
        repo.save(&books).map_err(AppError::storage)?;
        Ok(out)
    }
}
