use std::sync::Arc;

use filmorate_application::{FilmService, UserService};
use filmorate_core::AppError;
use filmorate_infrastructure::{IdSequence, InMemoryFilmRepository, InMemoryUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub film_service: FilmService,
    pub user_service: UserService,
}

impl AppState {
    /// Wires both services over fresh in-memory stores whose sequences start at `id_seed`.
    pub fn in_memory(id_seed: i64) -> Result<Self, AppError> {
        let film_repository = Arc::new(InMemoryFilmRepository::with_sequence(
            IdSequence::starting_at(id_seed)?,
        ));
        let user_repository = Arc::new(InMemoryUserRepository::with_sequence(
            IdSequence::starting_at(id_seed)?,
        ));

        Ok(Self {
            film_service: FilmService::new(film_repository, user_repository.clone()),
            user_service: UserService::new(user_repository),
        })
    }
}
