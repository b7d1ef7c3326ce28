//! Telegram bot handler tree configuration
//!
//! The handlers are organized in a testable way, allowing integration tests
//! to use the same handler tree as production code.

mod commands;
mod location;
mod schema;
mod types;

pub use location::handle_location;
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
