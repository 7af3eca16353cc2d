use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::book::Book;
use crate::domain::error::DomainError;

/// Validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    limit: usize,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Result<Self, DomainError> {
        if page <= 0 || limit <= 0 {
            return Err(DomainError::InvalidArgument(
                "page and limit must be greater than zero".into(),
            ));
        }
        let page = usize::try_from(page)
            .map_err(|_| DomainError::InvalidArgument(format!("page {page} is too large")))?;
        let limit = usize::try_from(limit)
            .map_err(|_| DomainError::InvalidArgument(format!("limit {limit} is too large")))?;
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Index window `[(page-1)*limit, min(page*limit, total))`.
    /// A page past the end yields an empty range at `total`.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.limit).min(total);
        let end = start.saturating_add(self.limit).min(total);
        start..end
    }
}

/// Response view over one page of the collection. Never persisted.
///
/// Keys keep the casing existing API clients already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookPage {
    pub total_num_of_books: usize,
    pub page: usize,
    pub limit: usize,
    pub book_list: Vec<Book>,
}

impl BookPage {
    pub fn from_books(mut books: Vec<Book>, pagination: Pagination) -> Self {
        let total = books.len();
        let window = pagination.window(total);
        books.truncate(window.end);
        let book_list = books.split_off(window.start);
        Self {
            total_num_of_books: total,
            page: pagination.page(),
            limit: pagination.limit(),
            book_list,
        }
    }
}
