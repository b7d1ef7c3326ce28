//! Core utilities: errors, logging, startup diagnostics

pub mod error;
pub mod logging;

pub use error::{AppError, AppResult};
pub use logging::{init_logger, log_gateway_configuration};
