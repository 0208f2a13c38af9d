use crate::app::handlers;
use crate::app::state::SharedState;
use axum::routing::{get, post};
use axum::Router;

/// Builds the API router. Every route also answers other methods with the
/// 404 envelope instead of axum's bare 405.
pub fn router(state: SharedState, prefix: &str) -> Router {
    let api = Router::new()
        .route("/cards", get(handlers::list_cards).fallback(handlers::not_found))
        .route(
            "/major-arcana",
            get(handlers::list_major_arcana).fallback(handlers::not_found),
        )
        .route("/card/:id", get(handlers::get_card).fallback(handlers::not_found))
        .route(
            "/reading",
            post(handlers::perform_reading).fallback(handlers::not_found),
        )
        .route("/draw", get(handlers::draw_cards).fallback(handlers::not_found))
        .route("/deck", get(handlers::deck_info).fallback(handlers::not_found));

    let app = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(prefix, api)
    };

    app.fallback(handlers::not_found).with_state(state)
}
