use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// One catalogue entry.
///
/// The id is opaque and caller-supplied; uniqueness is expected but not
/// enforced, so lookups always act on the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    #[serde(rename = "bookId")]
    pub id: String,
    pub author_id: String,
    pub publisher_id: String,
    pub title: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub publication_date: String,
    pub isbn: String,
    pub pages: u32,
    pub genre: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
}

impl Book {
    /// Checks the constraints the type system does not already carry.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::InvalidArgument(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        if !self.publication_date.is_empty()
            && NaiveDate::parse_from_str(&self.publication_date, "%Y-%m-%d").is_err()
        {
            return Err(DomainError::InvalidArgument(format!(
                "publicationDate must be YYYY-MM-DD, got '{}'",
                self.publication_date
            )));
        }
        Ok(())
    }

    /// Case-insensitive substring match on title or description.
    /// `needle` must already be lowercase.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
