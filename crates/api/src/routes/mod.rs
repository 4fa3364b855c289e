pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Every resource follows the same pattern:
///
/// ```text
/// /{resource}          GET list, POST create, PUT update, DELETE ?id={id}
/// /{resource}/{id}     GET by id
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/character",
            get(handlers::character::list)
                .post(handlers::character::create)
                .put(handlers::character::update)
                .delete(handlers::character::delete),
        )
        .route("/character/{id}", get(handlers::character::get_by_id))
        .route(
            "/employee",
            get(handlers::employee::list)
                .post(handlers::employee::create)
                .put(handlers::employee::update)
                .delete(handlers::employee::delete),
        )
        .route("/employee/{id}", get(handlers::employee::get_by_id))
        .route(
            "/funtest",
            get(handlers::funtest::list)
                .post(handlers::funtest::create)
                .put(handlers::funtest::update)
                .delete(handlers::funtest::delete),
        )
        .route("/funtest/{id}", get(handlers::funtest::get_by_id))
}
