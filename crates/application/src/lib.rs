//! Application services and ports.

#![forbid(unsafe_code)]

mod catalog_ports;
mod film_service;
mod user_service;

#[cfg(test)]
mod test_support;

pub use catalog_ports::{
    CreateFilmInput, CreateUserInput, FilmRepository, UpdateFilmInput, UpdateUserInput,
    UserRepository,
};
pub use film_service::FilmService;
pub use user_service::UserService;
