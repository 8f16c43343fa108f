mod cors;

use axum::Router;
use axum::routing::{get, put};
use filmorate_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

use self::cors::build_cors_layer;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let film_routes = Router::new()
        .route(
            "/films",
            get(handlers::films::list_films_handler)
                .post(handlers::films::create_film_handler)
                .put(handlers::films::update_film_handler),
        )
        .route(
            "/films/popular",
            get(handlers::films::popular_films_handler),
        )
        .route("/films/{id}", get(handlers::films::get_film_handler))
        .route(
            "/films/{id}/like/{user_id}",
            put(handlers::films::add_like_handler).delete(handlers::films::remove_like_handler),
        );

    let user_routes = Router::new()
        .route(
            "/users",
            get(handlers::users::list_users_handler)
                .post(handlers::users::create_user_handler)
                .put(handlers::users::update_user_handler),
        )
        .route("/users/{id}", get(handlers::users::get_user_handler))
        .route(
            "/users/{id}/friends",
            get(handlers::users::list_friends_handler),
        )
        .route(
            "/users/{id}/friends/{friend_id}",
            put(handlers::users::add_friend_handler).delete(handlers::users::remove_friend_handler),
        )
        .route(
            "/users/{id}/friends/common/{other_id}",
            get(handlers::users::common_friends_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(film_routes)
        .merge(user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(frontend_url)?)
        .with_state(app_state))
}
