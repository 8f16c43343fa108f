use chrono::NaiveDate;
use filmorate_application::{CreateFilmInput, UpdateFilmInput};
use filmorate_core::AppError;
use filmorate_domain::Film;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for film creation.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-film-request.ts"
)]
pub struct CreateFilmRequest {
    pub name: String,
    pub description: String,
    #[ts(type = "string")]
    pub release_date: NaiveDate,
    #[ts(type = "number")]
    pub duration: i64,
}

/// Incoming payload for film update. Omitted fields keep their stored value.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-film-request.ts"
)]
pub struct UpdateFilmRequest {
    #[ts(type = "number | null")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[ts(type = "string | null")]
    pub release_date: Option<NaiveDate>,
    #[ts(type = "number | null")]
    pub duration: Option<i64>,
}

/// Query string of the popular films listing.
#[derive(Debug, Deserialize)]
pub struct PopularFilmsQuery {
    pub count: Option<i64>,
}

/// API representation of a film.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/film-response.ts"
)]
pub struct FilmResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    pub description: String,
    #[ts(type = "string")]
    pub release_date: NaiveDate,
    pub duration: u32,
    #[ts(type = "Array<number>")]
    pub liked_by: Vec<i64>,
}

impl From<CreateFilmRequest> for CreateFilmInput {
    fn from(request: CreateFilmRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            release_date: request.release_date,
            duration_minutes: request.duration,
        }
    }
}

impl TryFrom<UpdateFilmRequest> for UpdateFilmInput {
    type Error = AppError;

    fn try_from(request: UpdateFilmRequest) -> Result<Self, Self::Error> {
        let id = request
            .id
            .ok_or_else(|| AppError::Validation("film id is required for update".to_owned()))?;

        Ok(Self {
            id,
            name: request.name,
            description: request.description,
            release_date: request.release_date,
            duration_minutes: request.duration,
        })
    }
}

impl From<Film> for FilmResponse {
    fn from(film: Film) -> Self {
        Self {
            id: film.id().value(),
            name: film.name().to_owned(),
            description: film.description().to_owned(),
            release_date: film.release_date(),
            duration: film.duration().minutes(),
            liked_by: film.liked_by().iter().map(|user_id| user_id.value()).collect(),
        }
    }
}
