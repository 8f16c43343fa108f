//! Repository ports and service inputs for films and users.

mod inputs;
mod repositories;

pub use inputs::{CreateFilmInput, CreateUserInput, UpdateFilmInput, UpdateUserInput};
pub use repositories::{FilmRepository, UserRepository};
