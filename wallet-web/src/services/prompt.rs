//! Browser implementations of the confirmation and reset capabilities.

use wallet_session::{ConfirmPrompt, ContextReset};

/// Native `window.confirm` dialog. Blocks until the user answers; an
/// unavailable window counts as a decline.
#[derive(Clone, Copy, Default)]
pub struct WindowConfirm;

impl ConfirmPrompt for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Full-context reset by page reload.
///
/// Everything rendered and cached is potentially chain-dependent, so a
/// chain change tears the whole page down and starts clean.
#[derive(Clone, Copy, Default)]
pub struct PageReload;

impl ContextReset for PageReload {
    fn reset(&self) {
        log::warn!("chain changed, reloading page for a clean state");
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                web_sys::console::error_1(&err);
            }
        }
    }
}
