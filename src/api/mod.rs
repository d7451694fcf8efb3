//! HTTP API: health, food search and food detail

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::build_router;
