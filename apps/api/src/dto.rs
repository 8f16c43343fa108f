mod common;
mod films;
mod users;

pub use common::HealthResponse;
pub use films::{CreateFilmRequest, FilmResponse, PopularFilmsQuery, UpdateFilmRequest};
pub use users::{CreateUserRequest, UpdateUserRequest, UserIdResponse, UserResponse};

#[cfg(test)]
mod tests {
    use super::{
        CreateFilmRequest, CreateUserRequest, FilmResponse, HealthResponse, UpdateFilmRequest,
        UpdateUserRequest, UserIdResponse, UserResponse,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        CreateFilmRequest::export(&config)?;
        UpdateFilmRequest::export(&config)?;
        FilmResponse::export(&config)?;
        CreateUserRequest::export(&config)?;
        UpdateUserRequest::export(&config)?;
        UserResponse::export(&config)?;
        UserIdResponse::export(&config)?;
        ErrorResponse::export(&config)?;
        HealthResponse::export(&config)?;

        Ok(())
    }
}
