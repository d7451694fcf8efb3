//! Middleware components for request processing

pub mod cors;
pub mod validator;

pub use cors::setup_cors;
pub use validator::{InputValidator, ValidationError};
