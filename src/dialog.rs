//! Browser Dialogs
//!
//! Blocking alert/confirm wrappers over the window natives.

/// Show a blocking notification
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask a yes/no question; an unavailable window counts as declined
pub fn confirm(message: &str) -> bool {
    match web_sys::window() {
        Some(window) => window.confirm_with_message(message).unwrap_or(false),
        None => false,
    }
}
