use chrono::NaiveDate;
use filmorate_application::{CreateUserInput, UpdateUserInput};
use filmorate_core::AppError;
use filmorate_domain::{User, UserId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for user registration.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-user-request.ts"
)]
pub struct CreateUserRequest {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    #[ts(type = "string")]
    pub birthday: NaiveDate,
}

/// Incoming payload for user update. Omitted fields keep their stored value.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-user-request.ts"
)]
pub struct UpdateUserRequest {
    #[ts(type = "number | null")]
    pub id: Option<i64>,
    pub email: Option<String>,
    pub login: Option<String>,
    pub name: Option<String>,
    #[ts(type = "string | null")]
    pub birthday: Option<NaiveDate>,
}

/// API representation of a user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    #[ts(type = "string")]
    pub birthday: NaiveDate,
    #[ts(type = "Array<number>")]
    pub friends: Vec<i64>,
}

/// Bare user reference used by the friend listings.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-id-response.ts"
)]
pub struct UserIdResponse {
    #[ts(type = "number")]
    pub id: i64,
}

impl From<CreateUserRequest> for CreateUserInput {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            email: request.email,
            login: request.login,
            name: request.name,
            birthday: request.birthday,
        }
    }
}

impl TryFrom<UpdateUserRequest> for UpdateUserInput {
    type Error = AppError;

    fn try_from(request: UpdateUserRequest) -> Result<Self, Self::Error> {
        let id = request
            .id
            .ok_or_else(|| AppError::Validation("user id is required for update".to_owned()))?;

        Ok(Self {
            id,
            email: request.email,
            login: request.login,
            name: request.name,
            birthday: request.birthday,
        })
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().value(),
            email: user.email().as_str().to_owned(),
            login: user.login().as_str().to_owned(),
            name: user.name().to_owned(),
            birthday: user.birthday(),
            friends: user.friends().iter().map(|friend_id| friend_id.value()).collect(),
        }
    }
}

impl From<UserId> for UserIdResponse {
    fn from(user_id: UserId) -> Self {
        Self {
            id: user_id.value(),
        }
    }
}
