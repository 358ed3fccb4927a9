//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod authors;
pub mod health;
pub mod quotes;

pub use authors::{
    author_list_handler, author_quotes_handler, authors_by_name_handler,
    authors_by_surname_handler, create_author_handler, create_quote_handler,
    delete_author_handler, deleted_author_list_handler, get_author_handler,
    restore_author_handler, update_author_handler,
};
pub use health::health_handler;
pub use quotes::{
    delete_quote_handler, filter_quotes_handler, get_quote_handler, quote_count_handler,
    quote_list_handler, random_quote_handler, rating_down_handler, rating_up_handler,
    update_quote_handler,
};
