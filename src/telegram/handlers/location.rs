//! Location dispatch: form association, driver tracking, or guidance
//!
//! A location message takes exactly one of three branches, first match wins:
//!
//! 1. `form_pending` — store in `ubicaciones_telegram`, push the coordinate
//!    to the gastos webhook, nudge the index sync, then consume the flag.
//! 2. `tracking_enabled` — store in `ubicacion_conductor` and index the
//!    point directly into Elasticsearch.
//! 3. neither — explain the two entry points, no side effects.
//!
//! Only the initial insert gates a branch; webhook and index failures
//! degrade to a reply and a log line.

use chrono::Utc;
use indoc::indoc;
use teloxide::prelude::*;

use super::types::{HandlerDeps, HandlerError};
use crate::config;
use crate::gastos::WebhookOutcome;
use crate::telegram::menu::{main_menu_keyboard, tracking_keyboard};
use crate::telegram::Bot;

const FORM_RETRY_TEXT: &str = "⚠️ Error asociando ubicación. Intenta de nuevo.";
const TRACKING_RETRY_TEXT: &str = "⚠️ Error guardando ubicación de conductor. Intenta de nuevo.";
const TRACKING_OK_TEXT: &str = "✅ Ubicación de conductor registrada.";

const INSTRUCTION_TEXT: &str = indoc! {"
    ¿Para qué es esta ubicación?

    • Si es para **Gastos Operativos**, primero entra a **🧾 Formularios** y luego toca Enviar ubicación.
    • Si es para **seguimiento de conductor**, activa **📍 Mandar ubicación**."};

/// Reply text for each webhook outcome.
///
/// The explicit table the branch degrades through; no outcome escalates past
/// its message.
pub(crate) fn form_reply(outcome: &WebhookOutcome) -> String {
    match outcome {
        WebhookOutcome::Updated { records_updated } => format!(
            "✅ Ubicación asociada al formulario correctamente.\nGastos actualizados: {}",
            records_updated
        ),
        WebhookOutcome::Rejected { error, hint } => match hint {
            Some(hint) => format!("⚠️ {}\n{}", error, hint),
            None => format!("⚠️ {}", error),
        },
        WebhookOutcome::TimedOut => {
            "⚠️ Tiempo de espera agotado. La ubicación se sincronizará automáticamente.".to_string()
        }
        WebhookOutcome::Failed(_) => {
            "⚠️ Ubicación guardada localmente, se sincronizará automáticamente en breve.".to_string()
        }
    }
}

/// Dispatch one incoming location.
///
/// Coordinates are passed through unvalidated; the tables take whatever the
/// platform delivered.
pub async fn handle_location(
    bot: &Bot,
    chat_id: ChatId,
    lat: f64,
    lon: f64,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    log::info!("📍 Ubicación de {}: {}, {}", chat_id, lat, lon);

    // Serializes the whole branch with menu taps for this chat: a re-arm
    // landing during the webhook call waits until the flag is consumed
    let _guard = deps.session.lock_chat(chat_id).await;
    let flags = deps.session.get(chat_id);

    // 1) FORMULARIO
    if flags.form_pending {
        if let Err(e) = deps.store.insert_form_location(chat_id.0, lat, lon).await {
            log::error!("Error procesando ubicación (FORMULARIO): {}", e);
            bot.send_message(chat_id, FORM_RETRY_TEXT).await?;
            return Ok(());
        }

        let outcome = deps.gastos.push_coordinates(chat_id.0, lat, lon).await;
        bot.send_message(chat_id, form_reply(&outcome))
            .reply_markup(main_menu_keyboard())
            .await?;

        // Redundant with the webhook's own indexing on the happy path, but
        // the cron sync leans on it when the webhook degraded
        if let Err(e) = deps
            .elastic
            .sync_gastos_window(chat_id.0, config::elastic_sync::WINDOW_MINUTES)
            .await
        {
            log::warn!("No se pudo sincronizar con ES (gastos): {}", e);
        }

        deps.session.clear_form_pending(chat_id);
        return Ok(());
    }

    // 2) CONDUCTOR
    if flags.tracking_enabled {
        if let Err(e) = deps.store.insert_driver_location(chat_id.0, lat, lon).await {
            log::error!("Error procesando ubicación (CONDUCTOR): {}", e);
            bot.send_message(chat_id, TRACKING_RETRY_TEXT).await?;
            return Ok(());
        }

        if let Err(e) = deps
            .elastic
            .index_driver_location(chat_id.0, lat, lon, Utc::now())
            .await
        {
            log::warn!("No se pudo indexar ubicacion_conductor en ES: {}", e);
        }

        bot.send_message(chat_id, TRACKING_OK_TEXT)
            .reply_markup(tracking_keyboard())
            .await?;
        return Ok(());
    }

    // 3) Sin contexto claro
    bot.send_message(chat_id, INSTRUCTION_TEXT)
        .reply_markup(main_menu_keyboard())
        .await?;
    Ok(())
}
