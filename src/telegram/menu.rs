//! Reply keyboards and menu button labels

use teloxide::types::{ButtonRequest, KeyboardButton, KeyboardMarkup};

/// Label of the form-flow entry button
pub const BTN_FORMS: &str = "🧾 Formularios";

/// Label of the tracking toggle button
pub const BTN_TRACKING: &str = "📍 Mandar ubicación";

/// Label of the stop button shown while tracking is on
pub const BTN_STOP_TRACKING: &str = "🛑 Detener seguimiento";

/// Main menu shown outside of tracking mode
pub fn main_menu_keyboard() -> KeyboardMarkup {
    let mut keyboard = KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(BTN_FORMS)],
        vec![KeyboardButton::new(BTN_TRACKING)],
    ]);
    keyboard.resize_keyboard = true;
    keyboard
}

/// Keyboard shown while driver tracking is enabled: a share-location button
/// plus the stop toggle
pub fn tracking_keyboard() -> KeyboardMarkup {
    let mut keyboard = KeyboardMarkup::new(vec![
        vec![KeyboardButton::new("📡 Enviar ubicación").request(ButtonRequest::Location)],
        vec![KeyboardButton::new(BTN_STOP_TRACKING)],
    ]);
    keyboard.resize_keyboard = true;
    keyboard
}

/// Keyboard prompting for the form location
pub fn form_location_keyboard() -> KeyboardMarkup {
    let mut keyboard = KeyboardMarkup::new(vec![vec![
        KeyboardButton::new("📡 Enviar ubicación").request(ButtonRequest::Location)
    ]]);
    keyboard.resize_keyboard = true;
    keyboard.one_time_keyboard = true;
    keyboard
}
