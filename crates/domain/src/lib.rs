//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod film;
mod ranking;
mod user;

pub use film::{
    DESCRIPTION_MAX_LENGTH, Film, FilmDescription, FilmDraft, FilmDuration, FilmId, FilmPatch,
    ReleaseDate, earliest_release_date,
};
pub use ranking::{DEFAULT_POPULAR_FILMS_LIMIT, PopularityLimit, rank_by_likes};
pub use user::{
    Birthday, EMAIL_MAX_LENGTH, EmailAddress, Login, User, UserDraft, UserId, UserPatch,
};
