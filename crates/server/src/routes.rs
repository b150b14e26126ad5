use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, Level};

use common::types::Health;

use crate::state::ServerState;

pub mod auth;
pub mod books;
pub mod reviews;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// A body that is missing, not JSON or the wrong shape counts as empty, so
/// the presence checks decide the response.
pub(crate) fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(v)) => v,
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "unusable request body treated as empty");
            T::default()
        }
    }
}

/// Build the full application router.
///
/// The `/auth/review` routes check nothing beyond the `username` field of
/// the body: login issues no token and none is required here.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(books::list_books))
        .route("/health", get(health))
        .route("/isbn/:isbn", get(books::book_by_isbn))
        .route("/author/:author", get(books::books_by_author))
        .route("/title/:title", get(books::books_by_title))
        .route("/review/:isbn", get(books::reviews_by_isbn));

    let users = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let review_routes = Router::new()
        .route("/auth/review/:isbn", put(reviews::put_review).delete(reviews::delete_review));

    public
        .merge(users)
        .merge(review_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
