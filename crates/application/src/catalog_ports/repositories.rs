use async_trait::async_trait;
use filmorate_core::AppResult;
use filmorate_domain::{Film, FilmDraft, FilmId, User, UserDraft, UserId};

/// Repository port for film persistence.
///
/// Implementations hand out owned copies; callers write changes back through
/// [`FilmRepository::update`].
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Stores a draft under a freshly generated identifier.
    async fn create(&self, draft: FilmDraft) -> AppResult<Film>;

    /// Finds a film by identifier.
    async fn find_by_id(&self, film_id: FilmId) -> AppResult<Option<Film>>;

    /// Lists all films in creation order.
    async fn find_all(&self) -> AppResult<Vec<Film>>;

    /// Replaces an existing film. Fails with `NotFound` for unknown identifiers.
    async fn update(&self, film: Film) -> AppResult<Film>;
}

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a draft under a freshly generated identifier.
    async fn create(&self, draft: UserDraft) -> AppResult<User>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Lists all users in creation order.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Replaces an existing user. Fails with `NotFound` for unknown identifiers.
    async fn update(&self, user: User) -> AppResult<User>;

    /// Replaces two existing users in a single write.
    ///
    /// Neither user is written unless both exist.
    async fn update_pair(&self, first: User, second: User) -> AppResult<(User, User)>;
}
