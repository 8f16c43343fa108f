//! Film lifecycle, likes and popularity ranking.

use std::sync::Arc;

use filmorate_core::{AppError, AppResult};
use filmorate_domain::{Film, FilmDraft, FilmId, FilmPatch};
use tokio::sync::Mutex;

use crate::{CreateFilmInput, FilmRepository, UpdateFilmInput, UserRepository};

const FILM_KIND: &str = "Film";

/// Application service for films.
#[derive(Clone)]
pub struct FilmService {
    film_repository: Arc<dyn FilmRepository>,
    user_repository: Arc<dyn UserRepository>,
    mutation_gate: Arc<Mutex<()>>,
}

impl FilmService {
    /// Creates a new film service.
    #[must_use]
    pub fn new(
        film_repository: Arc<dyn FilmRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            film_repository,
            user_repository,
            mutation_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Validates and stores a new film.
    pub async fn create(&self, input: CreateFilmInput) -> AppResult<Film> {
        let draft = FilmDraft::new(
            input.name,
            input.description,
            input.release_date,
            input.duration_minutes,
        )?;

        self.film_repository.create(draft).await
    }

    /// Merges the present fields of `input` into the stored film.
    ///
    /// The patch is validated before the lookup, so an invalid payload is
    /// rejected even for an unknown identifier. Likes are never touched.
    pub async fn update(&self, input: UpdateFilmInput) -> AppResult<Film> {
        let film_id = FilmId::new(input.id);
        let patch = FilmPatch::new(
            input.name,
            input.description,
            input.release_date,
            input.duration_minutes,
        )?;

        let _gate = self.mutation_gate.lock().await;
        let stored = self.find_by_id(film_id).await?;
        self.film_repository.update(stored.apply_patch(patch)).await
    }

    /// Returns a film or `NotFound`.
    pub async fn find_by_id(&self, film_id: FilmId) -> AppResult<Film> {
        self.film_repository
            .find_by_id(film_id)
            .await?
            .ok_or_else(|| film_not_found(film_id))
    }

    /// Lists all films in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<Film>> {
        self.film_repository.find_all().await
    }
}

pub(crate) fn film_not_found(film_id: FilmId) -> AppError {
    AppError::entity_not_found(FILM_KIND, film_id)
}

mod likes;
mod ranking;

#[cfg(test)]
mod tests;
