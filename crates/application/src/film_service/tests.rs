use std::collections::BTreeSet;
use std::sync::Arc;

use filmorate_core::AppError;
use filmorate_domain::{Film, FilmId, PopularityLimit, User, UserId};

use crate::test_support::{FakeFilmRepository, FakeUserRepository, date, repositories};
use crate::{CreateFilmInput, CreateUserInput, FilmService, UpdateFilmInput, UserService};

struct Fixture {
    films: Arc<FakeFilmRepository>,
    film_service: FilmService,
    user_service: UserService,
}

fn fixture() -> Fixture {
    let (films, users): (Arc<FakeFilmRepository>, Arc<FakeUserRepository>) = repositories();
    Fixture {
        films: films.clone(),
        film_service: FilmService::new(films, users.clone()),
        user_service: UserService::new(users),
    }
}

fn star_wars() -> CreateFilmInput {
    CreateFilmInput {
        name: "Star Wars".to_owned(),
        description: "Science Fiction".to_owned(),
        release_date: date(1999, 8, 19),
        duration_minutes: 90,
    }
}

async fn create_film(fixture: &Fixture, name: &str) -> Film {
    fixture
        .film_service
        .create(CreateFilmInput {
            name: name.to_owned(),
            ..star_wars()
        })
        .await
        .unwrap_or_else(|error| panic!("film should be created: {error}"))
}

async fn create_user(fixture: &Fixture, login: &str) -> User {
    fixture
        .user_service
        .create(CreateUserInput {
            email: format!("{login}@test.com"),
            login: login.to_owned(),
            name: None,
            birthday: date(1990, 4, 1),
        })
        .await
        .unwrap_or_else(|error| panic!("user should be created: {error}"))
}

#[tokio::test]
async fn create_assigns_increasing_ids() {
    let fixture = fixture();

    let first = create_film(&fixture, "First").await;
    let second = create_film(&fixture, "Second").await;

    assert_eq!(first.id(), FilmId::new(1));
    assert!(second.id() > first.id());
}

#[tokio::test]
async fn create_rejects_release_date_before_cinema() {
    let fixture = fixture();

    let result = fixture
        .film_service
        .create(CreateFilmInput {
            release_date: date(1799, 8, 19),
            ..star_wars()
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(fixture.film_service.find_all().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn update_unknown_film_is_not_found_and_does_not_create() {
    let fixture = fixture();

    let result = fixture
        .film_service
        .update(UpdateFilmInput {
            id: 42,
            name: Some("Ghost".to_owned()),
            ..UpdateFilmInput::default()
        })
        .await;

    assert_eq!(
        result,
        Err(AppError::NotFound("Film with id '42' not found".to_owned()))
    );
    assert!(fixture.film_service.find_all().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn update_merges_fields_and_keeps_likes() {
    let fixture = fixture();
    let film = create_film(&fixture, "Star Wars").await;
    let user = create_user(&fixture, "luke").await;
    let liked = fixture.film_service.add_like(film.id(), user.id()).await;
    assert!(liked.is_ok());

    let updated = fixture
        .film_service
        .update(UpdateFilmInput {
            id: film.id().value(),
            name: Some("Some film".to_owned()),
            description: Some("Some description".to_owned()),
            ..UpdateFilmInput::default()
        })
        .await
        .unwrap_or_else(|error| panic!("update should succeed: {error}"));

    assert_eq!(updated.name(), "Some film");
    assert_eq!(updated.description(), "Some description");
    assert_eq!(updated.release_date(), date(1999, 8, 19));
    assert_eq!(updated.liked_by(), &BTreeSet::from([user.id()]));
}

#[tokio::test]
async fn update_with_invalid_field_is_rejected_as_a_whole() {
    let fixture = fixture();
    let film = create_film(&fixture, "Star Wars").await;

    let result = fixture
        .film_service
        .update(UpdateFilmInput {
            id: film.id().value(),
            name: Some("Renamed".to_owned()),
            duration_minutes: Some(0),
            ..UpdateFilmInput::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    let stored = fixture.film_service.find_by_id(film.id()).await;
    assert_eq!(stored.map(|film| film.name().to_owned()), Ok("Star Wars".to_owned()));
}

#[tokio::test]
async fn find_by_id_reports_missing_film() {
    let fixture = fixture();

    let result = fixture.film_service.find_by_id(FilmId::new(1)).await;

    assert_eq!(
        result.map_err(|error| error.message().to_owned()),
        Err("Film with id '1' not found".to_owned())
    );
}

#[tokio::test]
async fn add_like_is_idempotent() {
    let fixture = fixture();
    let film = create_film(&fixture, "Star Wars").await;
    let user = create_user(&fixture, "luke").await;

    let first = fixture.film_service.add_like(film.id(), user.id()).await;
    let second = fixture.film_service.add_like(film.id(), user.id()).await;

    assert!(first.is_ok());
    let second = second.unwrap_or_else(|error| panic!("second like: {error}"));
    assert_eq!(second.liked_by(), &BTreeSet::from([user.id()]));
    assert_eq!(*fixture.films.update_calls.lock().await, 2);
}

#[tokio::test]
async fn like_requires_known_film_and_user() {
    let fixture = fixture();
    let film = create_film(&fixture, "Star Wars").await;
    let user = create_user(&fixture, "luke").await;

    let missing_film = fixture
        .film_service
        .add_like(FilmId::new(99), user.id())
        .await;
    let missing_user = fixture
        .film_service
        .remove_like(film.id(), UserId::new(99))
        .await;

    assert_eq!(
        missing_film.map_err(|error| error.message().to_owned()),
        Err("Film with id '99' not found".to_owned())
    );
    assert_eq!(
        missing_user.map_err(|error| error.message().to_owned()),
        Err("User with id '99' not found".to_owned())
    );
    assert_eq!(*fixture.films.update_calls.lock().await, 0);
}

#[tokio::test]
async fn remove_like_drops_the_user() {
    let fixture = fixture();
    let film = create_film(&fixture, "Star Wars").await;
    let user = create_user(&fixture, "luke").await;
    assert!(fixture.film_service.add_like(film.id(), user.id()).await.is_ok());

    let result = fixture
        .film_service
        .remove_like(film.id(), user.id())
        .await
        .unwrap_or_else(|error| panic!("remove like: {error}"));

    assert_eq!(result.like_count(), 0);
}

#[tokio::test]
async fn most_popular_orders_by_likes_and_truncates() {
    let fixture = fixture();
    let five = create_film(&fixture, "Five").await;
    let one = create_film(&fixture, "One").await;
    let three = create_film(&fixture, "Three").await;

    let mut users = Vec::new();
    for login in ["u1", "u2", "u3", "u4", "u5"] {
        users.push(create_user(&fixture, login).await);
    }
    for (film, likes) in [(&five, 5), (&one, 1), (&three, 3)] {
        for user in users.iter().take(likes) {
            assert!(fixture.film_service.add_like(film.id(), user.id()).await.is_ok());
        }
    }

    let limit = PopularityLimit::new(2).unwrap_or_else(|error| panic!("limit: {error}"));
    let ranked = fixture
        .film_service
        .most_popular(limit)
        .await
        .unwrap_or_default();

    let names: Vec<&str> = ranked.iter().map(Film::name).collect();
    assert_eq!(names, vec!["Five", "Three"]);
}

#[tokio::test]
async fn most_popular_returns_everything_under_a_large_limit() {
    let fixture = fixture();
    create_film(&fixture, "Only").await;

    let ranked = fixture
        .film_service
        .most_popular(PopularityLimit::default())
        .await
        .unwrap_or_default();

    assert_eq!(ranked.len(), 1);
}
