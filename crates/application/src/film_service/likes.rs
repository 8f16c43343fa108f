use filmorate_core::AppResult;
use filmorate_domain::{Film, FilmId, UserId};

use crate::user_service::user_not_found;

use super::FilmService;

impl FilmService {
    /// Records a like from `user_id`. Liking twice is a no-op.
    pub async fn add_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        let _gate = self.mutation_gate.lock().await;
        let film = self.film_for_user_action(film_id, user_id).await?;
        self.film_repository.update(film.with_like(user_id)).await
    }

    /// Removes a like from `user_id`. Removing a missing like is a no-op.
    pub async fn remove_like(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        let _gate = self.mutation_gate.lock().await;
        let film = self.film_for_user_action(film_id, user_id).await?;
        self.film_repository.update(film.without_like(user_id)).await
    }

    /// Resolves the film, then checks that the acting user exists.
    async fn film_for_user_action(&self, film_id: FilmId, user_id: UserId) -> AppResult<Film> {
        let film = self.find_by_id(film_id).await?;
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(user_not_found(user_id));
        }

        Ok(film)
    }
}
