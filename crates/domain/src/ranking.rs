//! Popularity ranking over films.

use std::cmp::Reverse;

use filmorate_core::{AppError, AppResult};

use crate::Film;

/// Number of films returned when the caller does not ask for a count.
pub const DEFAULT_POPULAR_FILMS_LIMIT: usize = 10;

/// Positive upper bound on the number of ranked films.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopularityLimit(usize);

impl PopularityLimit {
    /// Validates a requested count.
    pub fn new(count: i64) -> AppResult<Self> {
        if count <= 0 {
            return Err(AppError::Validation(format!(
                "count must be positive, got {count}"
            )));
        }

        Ok(Self(usize::try_from(count).unwrap_or(usize::MAX)))
    }

    /// Returns the limit.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for PopularityLimit {
    fn default() -> Self {
        Self(DEFAULT_POPULAR_FILMS_LIMIT)
    }
}

/// Orders films by like count, most liked first, and keeps at most `limit`.
///
/// The sort is stable: films with equal like counts keep their input order.
#[must_use]
pub fn rank_by_likes(mut films: Vec<Film>, limit: PopularityLimit) -> Vec<Film> {
    films.sort_by_key(|film| Reverse(film.like_count()));
    films.truncate(limit.get());
    films
}
