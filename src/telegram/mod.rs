//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod menu;

pub use bot::{create_bot, Bot, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use menu::{main_menu_keyboard, tracking_keyboard};
