//! Fan-out/fan-in keyword search over an in-memory snapshot.
//!
//! The snapshot is split into contiguous chunks, each chunk is filtered on the
//! rayon pool, and the per-chunk results are concatenated in chunk order, so
//! the output keeps collection order regardless of which worker finishes
//! first. Workers only read the snapshot; no locking happens here.

use std::ops::Range;

use rayon::prelude::*;

use crate::domain::model::book::Book;

/// Upper bound on workers spawned per search.
pub const MAX_WORKERS: usize = 4;

/// Splits `len` items into at most `workers` contiguous ranges.
///
/// Chunk size is `max(1, len / workers)` and the last range absorbs the
/// remainder, so every index lands in exactly one range. An empty collection
/// yields no ranges.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = (len / workers).max(1);
    let count = workers.min(len);
    (0..count)
        .map(|i| {
            let start = i * chunk;
            let end = if i + 1 == count { len } else { start + chunk };
            start..end
        })
        .collect()
}

/// Case-insensitive match on title or description, using up to
/// [`MAX_WORKERS`] workers.
pub fn search(books: &[Book], keyword: &str) -> Vec<Book> {
    search_with_workers(books, keyword, MAX_WORKERS)
}

pub fn search_with_workers(books: &[Book], keyword: &str, workers: usize) -> Vec<Book> {
    let needle = keyword.to_lowercase();
    let ranges = partition(books.len(), workers.min(MAX_WORKERS));

    tracing::debug!(
        keyword,
        records = books.len(),
        chunks = ranges.len(),
        "searching"
    );

    // indexed collect keeps chunk order
    let per_chunk: Vec<Vec<Book>> = ranges
        .into_par_iter()
        .map(|range| scan(&books[range], &needle))
        .collect();

    per_chunk.into_iter().flatten().collect()
}

fn scan(chunk: &[Book], needle: &str) -> Vec<Book> {
    chunk
        .iter()
        .filter(|book| book.matches_keyword(needle))
        .cloned()
        .collect()
}
