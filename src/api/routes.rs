//! API route configuration.

use crate::api::handlers::{
    author_list_handler, author_quotes_handler, authors_by_name_handler,
    authors_by_surname_handler, create_author_handler, create_quote_handler,
    delete_author_handler, delete_quote_handler, deleted_author_list_handler,
    filter_quotes_handler, get_author_handler, get_quote_handler, quote_count_handler,
    quote_list_handler, random_quote_handler, rating_down_handler, rating_up_handler,
    restore_author_handler, update_author_handler, update_quote_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// All author and quote routes.
///
/// # Endpoints
///
/// - `GET    /authors`                - List live authors
/// - `POST   /authors`                - Create an author
/// - `GET    /authors/deleted`        - List soft-deleted authors
/// - `GET    /authors/name`           - List live authors ordered by name
/// - `GET    /authors/surname`        - List live authors ordered by surname
/// - `GET    /authors/{id}`           - Fetch an author
/// - `PUT    /authors/{id}`           - Update name/surname
/// - `DELETE /authors/{id}`           - Soft-delete an author and its quotes
/// - `PUT    /authors/restore/{id}`   - Restore an author and its quotes
/// - `GET    /authors/{id}/quotes`    - Author with its quotes
/// - `POST   /authors/{id}/quotes`    - Create a quote under an author
/// - `GET    /quotes`                 - List live quotes
/// - `GET    /quotes/count`           - Count live quotes
/// - `GET    /quotes/random`          - Random live quote
/// - `GET    /quotes/filter`          - Exact-match filter
/// - `GET    /quotes/{id}`            - Fetch a quote
/// - `PUT    /quotes/{id}`            - Update author_id/text/rating
/// - `DELETE /quotes/{id}`            - Hard-delete a quote
/// - `PUT    /quotes/{id}/up`         - Increment rating
/// - `PUT    /quotes/{id}/down`       - Decrement rating
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/authors",
            get(author_list_handler).post(create_author_handler),
        )
        .route("/authors/deleted", get(deleted_author_list_handler))
        .route("/authors/name", get(authors_by_name_handler))
        .route("/authors/surname", get(authors_by_surname_handler))
        .route(
            "/authors/{id}",
            get(get_author_handler)
                .put(update_author_handler)
                .delete(delete_author_handler),
        )
        .route("/authors/restore/{id}", put(restore_author_handler))
        .route(
            "/authors/{id}/quotes",
            get(author_quotes_handler).post(create_quote_handler),
        )
        .route("/quotes", get(quote_list_handler))
        .route("/quotes/count", get(quote_count_handler))
        .route("/quotes/random", get(random_quote_handler))
        .route("/quotes/filter", get(filter_quotes_handler))
        .route(
            "/quotes/{id}",
            get(get_quote_handler)
                .put(update_quote_handler)
                .delete(delete_quote_handler),
        )
        .route("/quotes/{id}/up", put(rating_up_handler))
        .route("/quotes/{id}/down", put(rating_down_handler))
}
