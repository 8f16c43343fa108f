//! User lifecycle and friendship operations.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use filmorate_core::{AppError, AppResult};
use filmorate_domain::{User, UserDraft, UserId, UserPatch};
use tokio::sync::Mutex;

use crate::{CreateUserInput, UpdateUserInput, UserRepository};

const USER_KIND: &str = "User";

/// Application service for users and their friend links.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    mutation_gate: Arc<Mutex<()>>,
}

impl UserService {
    /// Creates a new user service.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repository,
            mutation_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Validates and stores a new user.
    pub async fn create(&self, input: CreateUserInput) -> AppResult<User> {
        let draft = UserDraft::new(
            input.email,
            input.login,
            input.name,
            input.birthday,
            today(),
        )?;

        self.user_repository.create(draft).await
    }

    /// Merges the present fields of `input` into the stored user.
    ///
    /// The patch is validated before the lookup. Friends are never touched.
    pub async fn update(&self, input: UpdateUserInput) -> AppResult<User> {
        let user_id = UserId::new(input.id);
        let patch = UserPatch::new(
            input.email,
            input.login,
            input.name,
            input.birthday,
            today(),
        )?;

        let _gate = self.mutation_gate.lock().await;
        let stored = self.find_by_id(user_id).await?;
        self.user_repository.update(stored.apply_patch(patch)).await
    }

    /// Returns a user or `NotFound`.
    pub async fn find_by_id(&self, user_id: UserId) -> AppResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| user_not_found(user_id))
    }

    /// Lists all users in creation order.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.user_repository.find_all().await
    }
}

pub(crate) fn user_not_found(user_id: UserId) -> AppError {
    AppError::entity_not_found(USER_KIND, user_id)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

mod friends;
