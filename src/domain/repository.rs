use super::model::book::Book;

/// Persistence seam for the whole collection. Implemented by the infra layer.
///
/// Implementations do no locking of their own; `BookStore` serializes access.
pub trait BookRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    /// `None` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<Vec<Book>>, Self::Error>;
    fn save(&self, books: &[Book]) -> Result<(), Self::Error>;
}
