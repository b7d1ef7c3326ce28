//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_forms_tap, handle_start_command, handle_stop_tracking_tap, handle_tracking_tap};
use super::location::handle_location;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::menu::{BTN_FORMS, BTN_STOP_TRACKING, BTN_TRACKING};
use crate::telegram::Bot;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Returns a handler tree usable with teloxide's Dispatcher. The same schema
/// is used in production and in integration tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_location = deps.clone();
    let deps_menu = deps.clone();

    dptree::entry()
        // Location messages drive the whole dispatch
        .branch(location_handler(deps_location))
        // Menu taps arm / disarm the flow flags
        .branch(menu_tap_handler(deps_menu))
        // Command handler
        .branch(command_handler())
}

/// Handler for incoming location messages
fn location_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.location().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let Some(location) = msg.location() else {
                    return Ok(());
                };
                if let Err(e) = handle_location(&bot, msg.chat.id, location.latitude, location.longitude, &deps).await
                {
                    log::error!("Location handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for reply-keyboard taps (plain text matching a menu button)
fn menu_tap_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| {
            msg.text()
                .map(|text| matches!(text, BTN_FORMS | BTN_TRACKING | BTN_STOP_TRACKING))
                .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let result = match msg.text() {
                    Some(BTN_FORMS) => handle_forms_tap(&bot, &msg, &deps).await,
                    Some(BTN_TRACKING) => handle_tracking_tap(&bot, &msg, &deps).await,
                    Some(BTN_STOP_TRACKING) => handle_stop_tracking_tap(&bot, &msg, &deps).await,
                    _ => Ok(()),
                };
                if let Err(e) = result {
                    log::error!("Menu handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}

/// Handler for bot commands (/start)
fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        |bot: Bot, msg: Message, cmd: Command| async move {
            log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);
            match cmd {
                Command::Start => handle_start_command(&bot, &msg).await?,
            }
            Ok(())
        },
    ))
}
