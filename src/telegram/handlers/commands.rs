//! Command and menu-tap handlers: the entry points that arm the flow flags

use teloxide::prelude::*;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::menu::{form_location_keyboard, main_menu_keyboard, tracking_keyboard};
use crate::telegram::Bot;

/// /start — greet and show the main menu
pub async fn handle_start_command(bot: &Bot, msg: &Message) -> Result<(), HandlerError> {
    bot.send_message(
        msg.chat.id,
        "👋 Hola. Envía gastos operativos o comparte tu ubicación de conductor desde el menú.",
    )
    .reply_markup(main_menu_keyboard())
    .await?;
    Ok(())
}

/// "🧾 Formularios" — arm the form flow and prompt for the location
pub async fn handle_forms_tap(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    {
        let _guard = deps.session.lock_chat(msg.chat.id).await;
        deps.session.set_form_pending(msg.chat.id, true);
    }
    log::info!("Formulario armado para {}", msg.chat.id);
    bot.send_message(
        msg.chat.id,
        "🧾 Envía tu ubicación para asociarla al último formulario de gastos.",
    )
    .reply_markup(form_location_keyboard())
    .await?;
    Ok(())
}

/// "📍 Mandar ubicación" — toggle driver tracking
pub async fn handle_tracking_tap(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let enabled = {
        let _guard = deps.session.lock_chat(msg.chat.id).await;
        deps.session.toggle_tracking(msg.chat.id)
    };
    log::info!("Seguimiento {} para {}", if enabled { "activado" } else { "desactivado" }, msg.chat.id);

    if enabled {
        bot.send_message(msg.chat.id, "📍 Seguimiento activado. Comparte tu ubicación.")
            .reply_markup(tracking_keyboard())
            .await?;
    } else {
        bot.send_message(msg.chat.id, "Seguimiento desactivado.")
            .reply_markup(main_menu_keyboard())
            .await?;
    }
    Ok(())
}

/// "🛑 Detener seguimiento" — switch tracking off
pub async fn handle_stop_tracking_tap(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    {
        let _guard = deps.session.lock_chat(msg.chat.id).await;
        deps.session.set_tracking_enabled(msg.chat.id, false);
    }
    log::info!("Seguimiento desactivado para {}", msg.chat.id);
    bot.send_message(msg.chat.id, "Seguimiento desactivado.")
        .reply_markup(main_menu_keyboard())
        .await?;
    Ok(())
}
