use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use filmorate_core::{AppError, AppResult};
use filmorate_domain::{Film, FilmDraft, FilmId, User, UserDraft, UserId};

use crate::{FilmRepository, UserRepository};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| panic!("invalid test date"))
}

#[derive(Default)]
pub(crate) struct FakeFilmRepository {
    films: Mutex<BTreeMap<FilmId, Film>>,
    next_id: Mutex<i64>,
    pub(crate) update_calls: Mutex<usize>,
}

#[async_trait]
impl FilmRepository for FakeFilmRepository {
    async fn create(&self, draft: FilmDraft) -> AppResult<Film> {
        let mut next_id = self.next_id.lock().await;
        *next_id += 1;
        let film = Film::from_draft(FilmId::new(*next_id), draft);
        self.films.lock().await.insert(film.id(), film.clone());
        Ok(film)
    }

    async fn find_by_id(&self, film_id: FilmId) -> AppResult<Option<Film>> {
        Ok(self.films.lock().await.get(&film_id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Film>> {
        Ok(self.films.lock().await.values().cloned().collect())
    }

    async fn update(&self, film: Film) -> AppResult<Film> {
        *self.update_calls.lock().await += 1;
        let mut films = self.films.lock().await;
        if !films.contains_key(&film.id()) {
            return Err(AppError::NotFound(format!("film {}", film.id())));
        }

        films.insert(film.id(), film.clone());
        Ok(film)
    }
}

#[derive(Default)]
pub(crate) struct FakeUserRepository {
    users: Mutex<BTreeMap<UserId, User>>,
    next_id: Mutex<i64>,
    pub(crate) written_ids: Mutex<Vec<UserId>>,
}

#[async_trait]
impl UserRepository for FakeUserRepository {
    async fn create(&self, draft: UserDraft) -> AppResult<User> {
        let mut next_id = self.next_id.lock().await;
        *next_id += 1;
        let user = User::from_draft(UserId::new(*next_id), draft);
        self.users.lock().await.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.lock().await.get(&user_id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.lock().await.values().cloned().collect())
    }

    async fn update(&self, user: User) -> AppResult<User> {
        self.written_ids.lock().await.push(user.id());
        let mut users = self.users.lock().await;
        if !users.contains_key(&user.id()) {
            return Err(AppError::NotFound(format!("user {}", user.id())));
        }

        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn update_pair(&self, first: User, second: User) -> AppResult<(User, User)> {
        let first = self.update(first).await?;
        let second = self.update(second).await?;
        Ok((first, second))
    }
}

pub(crate) fn repositories() -> (Arc<FakeFilmRepository>, Arc<FakeUserRepository>) {
    (
        Arc::new(FakeFilmRepository::default()),
        Arc::new(FakeUserRepository::default()),
    )
}
