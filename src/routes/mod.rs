mod health;
mod ingredients;
mod recipes;
mod shopping;
mod tags;
mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{config::Config, middleware::auth_middleware};

pub use health::{health, ready};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: sqlx::SqlitePool,
    pub user_command: foodgram_user::Command,
    pub user_query: foodgram_user::Query,
    pub recipe_command: foodgram_recipe::Command,
    pub recipe_query: foodgram_recipe::Query,
    pub shopping_command: foodgram_shopping::Command,
    pub shopping_query: foodgram_shopping::Query,
}

impl AppState {
    pub fn new(config: Config, state: foodgram_shared::State) -> Self {
        Self {
            config,
            pool: state.read_db.clone(),
            user_command: foodgram_user::Command::new(state.clone()),
            user_query: foodgram_user::Query(state.clone()),
            recipe_command: foodgram_recipe::Command::new(state.clone()),
            recipe_query: foodgram_recipe::Query(state.clone()),
            shopping_command: foodgram_shopping::Command(state.clone()),
            shopping_query: foodgram_shopping::Query(state),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/token/login", post(users::login))
        .route("/auth/token/logout", post(users::logout))
        .route("/users", get(users::list).post(users::register))
        .route("/users/me", get(users::me))
        .route("/users/set_password", post(users::set_password))
        .route("/users/subscriptions", get(users::subscriptions))
        .route("/users/{id}", get(users::detail))
        .route(
            "/users/{id}/subscribe",
            post(users::subscribe).delete(users::unsubscribe),
        )
        .route("/tags", get(tags::list))
        .route("/tags/{id}", get(tags::detail))
        .route("/ingredients", get(ingredients::list))
        .route("/ingredients/{id}", get(ingredients::detail))
        .route("/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/recipes/download_shopping_cart",
            get(shopping::download_shopping_cart),
        )
        .route(
            "/recipes/{id}",
            get(recipes::detail)
                .patch(recipes::update)
                .delete(recipes::delete),
        )
        .route(
            "/recipes/{id}/favorite",
            post(recipes::favorite).delete(recipes::unfavorite),
        )
        .route(
            "/recipes/{id}/shopping_cart",
            post(shopping::add).delete(shopping::remove),
        )
        .route("/recipes/{id}/get-link", get(recipes::get_link));

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .nest("/api", api)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}
