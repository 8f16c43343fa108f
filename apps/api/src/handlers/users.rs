use std::collections::BTreeSet;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use filmorate_application::UpdateUserInput;
use filmorate_domain::UserId;
use tracing::info;

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserIdResponse, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .find_all()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(payload) = payload?;
    let user = state.user_service.create(payload.into()).await?;

    info!(user_id = %user.id(), login = user.login().as_str(), "user created");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Json(payload) = payload?;
    let user = state
        .user_service
        .update(UpdateUserInput::try_from(payload)?)
        .await?;

    info!(user_id = %user.id(), "user updated");
    Ok(Json(UserResponse::from(user)))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path(user_id) = path?;
    let user = state.user_service.find_by_id(UserId::new(user_id)).await?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn add_friend_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path((user_id, friend_id)) = path?;
    let user = state
        .user_service
        .add_friend(UserId::new(user_id), UserId::new(friend_id))
        .await?;

    info!(%user_id, %friend_id, "friend added");
    Ok(Json(UserResponse::from(user)))
}

pub async fn remove_friend_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Path((user_id, friend_id)) = path?;
    let user = state
        .user_service
        .remove_friend(UserId::new(user_id), UserId::new(friend_id))
        .await?;

    info!(%user_id, %friend_id, "friend removed");
    Ok(Json(UserResponse::from(user)))
}

pub async fn list_friends_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<UserIdResponse>>> {
    let Path(user_id) = path?;
    let friends = state.user_service.list_friends(UserId::new(user_id)).await?;

    Ok(Json(id_responses(friends)))
}

pub async fn common_friends_handler(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> ApiResult<Json<Vec<UserIdResponse>>> {
    let Path((user_id, other_id)) = path?;
    let common = state
        .user_service
        .common_friends(UserId::new(user_id), UserId::new(other_id))
        .await?;

    Ok(Json(id_responses(common)))
}

fn id_responses(ids: BTreeSet<UserId>) -> Vec<UserIdResponse> {
    ids.into_iter().map(UserIdResponse::from).collect()
}
