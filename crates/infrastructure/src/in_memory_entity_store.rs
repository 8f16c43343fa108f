use std::collections::BTreeMap;
use std::fmt::{self, Display};

use async_trait::async_trait;
use filmorate_application::{FilmRepository, UserRepository};
use filmorate_core::{AppError, AppResult};
use filmorate_domain::{Film, FilmDraft, FilmId, User, UserDraft, UserId};
use tokio::sync::RwLock;
use tracing::debug;

use crate::IdSequence;

/// Entity that can live in an [`InMemoryEntityStore`].
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// Identifier type.
    type Id: Copy + Ord + Display + Send + Sync + 'static;
    /// Validated, not yet stored, form of the entity.
    type Draft: Send + 'static;

    /// Entity name used in not-found messages.
    const KIND: &'static str;

    /// Wraps a raw sequence value as an identifier.
    fn id_from_sequence(value: i64) -> Self::Id;

    /// Materializes a draft under an assigned identifier.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// In-memory table of entities keyed by generated identifiers.
///
/// Identifiers are drawn while the write lock is held, so ascending-id order
/// is also insertion order.
pub struct InMemoryEntityStore<T: StoredEntity> {
    entries: RwLock<BTreeMap<T::Id, T>>,
    ids: IdSequence,
}

impl<T: StoredEntity> InMemoryEntityStore<T> {
    /// Creates an empty store whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sequence(IdSequence::new())
    }

    /// Creates an empty store drawing identifiers from `ids`.
    #[must_use]
    pub fn with_sequence(ids: IdSequence) -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            ids,
        }
    }

    /// Stores a draft under the next identifier.
    pub async fn insert_draft(&self, draft: T::Draft) -> AppResult<T> {
        let mut entries = self.entries.write().await;
        let id = T::id_from_sequence(self.ids.next_id()?);
        let entity = T::from_draft(id, draft);
        entries.insert(id, entity.clone());

        debug!(kind = T::KIND, %id, "entity created");
        Ok(entity)
    }

    /// Returns a copy of the entity, if present.
    pub async fn get(&self, id: T::Id) -> Option<T> {
        self.entries.read().await.get(&id).cloned()
    }

    /// Returns copies of all entities in ascending identifier order.
    pub async fn list(&self) -> Vec<T> {
        self.entries.read().await.values().cloned().collect()
    }

    /// Overwrites an existing entity wholesale.
    pub async fn replace(&self, entity: T) -> AppResult<T> {
        let mut entries = self.entries.write().await;
        let slot = entries
            .get_mut(&entity.id())
            .ok_or_else(|| AppError::entity_not_found(T::KIND, entity.id()))?;
        *slot = entity.clone();

        debug!(kind = T::KIND, id = %entity.id(), "entity replaced");
        Ok(entity)
    }

    /// Overwrites two existing entities under one write lock.
    pub async fn replace_pair(&self, first: T, second: T) -> AppResult<(T, T)> {
        let mut entries = self.entries.write().await;
        for id in [first.id(), second.id()] {
            if !entries.contains_key(&id) {
                return Err(AppError::entity_not_found(T::KIND, id));
            }
        }

        entries.insert(first.id(), first.clone());
        entries.insert(second.id(), second.clone());

        debug!(
            kind = T::KIND,
            first_id = %first.id(),
            second_id = %second.id(),
            "entity pair replaced"
        );
        Ok((first, second))
    }
}

impl<T: StoredEntity> fmt::Debug for InMemoryEntityStore<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InMemoryEntityStore")
            .field("kind", &T::KIND)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl<T: StoredEntity> Default for InMemoryEntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl StoredEntity for Film {
    type Id = FilmId;
    type Draft = FilmDraft;

    const KIND: &'static str = "Film";

    fn id_from_sequence(value: i64) -> Self::Id {
        FilmId::new(value)
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Film::from_draft(id, draft)
    }

    fn id(&self) -> Self::Id {
        Film::id(self)
    }
}

impl StoredEntity for User {
    type Id = UserId;
    type Draft = UserDraft;

    const KIND: &'static str = "User";

    fn id_from_sequence(value: i64) -> Self::Id {
        UserId::new(value)
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        User::from_draft(id, draft)
    }

    fn id(&self) -> Self::Id {
        User::id(self)
    }
}

/// In-memory film repository.
pub type InMemoryFilmRepository = InMemoryEntityStore<Film>;

/// In-memory user repository.
pub type InMemoryUserRepository = InMemoryEntityStore<User>;

#[async_trait]
impl FilmRepository for InMemoryEntityStore<Film> {
    async fn create(&self, draft: FilmDraft) -> AppResult<Film> {
        self.insert_draft(draft).await
    }

    async fn find_by_id(&self, film_id: FilmId) -> AppResult<Option<Film>> {
        Ok(self.get(film_id).await)
    }

    async fn find_all(&self) -> AppResult<Vec<Film>> {
        Ok(self.list().await)
    }

    async fn update(&self, film: Film) -> AppResult<Film> {
        self.replace(film).await
    }
}

#[async_trait]
impl UserRepository for InMemoryEntityStore<User> {
    async fn create(&self, draft: UserDraft) -> AppResult<User> {
        self.insert_draft(draft).await
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.get(user_id).await)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.list().await)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        self.replace(user).await
    }

    async fn update_pair(&self, first: User, second: User) -> AppResult<(User, User)> {
        self.replace_pair(first, second).await
    }
}
