use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use filmorate_application::UpdateFilmInput;
use filmorate_domain::{FilmId, PopularityLimit, UserId};
use tracing::info;

use crate::dto::{CreateFilmRequest, FilmResponse, PopularFilmsQuery, UpdateFilmRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_films_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FilmResponse>>> {
    let films = state
        .film_service
        .find_all()
        .await?
        .into_iter()
        .map(FilmResponse::from)
        .collect();

    Ok(Json(films))
}

pub async fn create_film_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateFilmRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<FilmResponse>)> {
    let Json(payload) = payload?;
    let film = state.film_service.create(payload.into()).await?;

    info!(film_id = %film.id(), name = film.name(), "film created");
    Ok((StatusCode::CREATED, Json(FilmResponse::from(film))))
}

pub async fn update_film_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdateFilmRequest>, JsonRejection>,
) -> ApiResult<Json<FilmResponse>> {
    let Json(payload) = payload?;
    let film = state
        .film_service
        .update(UpdateFilmInput::try_from(payload)?)
        .await?;

    info!(film_id = %film.id(), "film updated");
    Ok(Json(FilmResponse::from(film)))
}

pub async fn get_film_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<FilmResponse>> {
    let Path(film_id) = path?;
    let film = state.film_service.find_by_id(FilmId::new(film_id)).await?;

    Ok(Json(FilmResponse::from(film)))
}

pub async fn add_like_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Json<FilmResponse>> {
    let Path((film_id, user_id)) = path?;
    let film = state
        .film_service
        .add_like(FilmId::new(film_id), UserId::new(user_id))
        .await?;

    info!(%film_id, %user_id, likes = film.like_count(), "film liked");
    Ok(Json(FilmResponse::from(film)))
}

pub async fn remove_like_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Json<FilmResponse>> {
    let Path((film_id, user_id)) = path?;
    let film = state
        .film_service
        .remove_like(FilmId::new(film_id), UserId::new(user_id))
        .await?;

    info!(%film_id, %user_id, likes = film.like_count(), "film like removed");
    Ok(Json(FilmResponse::from(film)))
}

pub async fn popular_films_handler(
    State(state): State<AppState>,
    query: Result<Query<PopularFilmsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<FilmResponse>>> {
    let Query(query) = query?;
    let limit = match query.count {
        Some(count) => PopularityLimit::new(count)?,
        None => PopularityLimit::default(),
    };

    let films = state
        .film_service
        .most_popular(limit)
        .await?
        .into_iter()
        .map(FilmResponse::from)
        .collect();

    Ok(Json(films))
}
