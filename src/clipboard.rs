//! Best-effort clipboard sink.
//!
//! Measurement text is nice-to-have; a clipboard that cannot be acquired is
//! never a reason to disturb the overlay.

use arboard::Clipboard;

/// Put `text` on the system clipboard, ignoring failure.
pub fn set_text(text: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text.to_string()) {
                log::warn!("[clipboard] failed to set text: {e}");
            }
        }
        Err(e) => log::warn!("[clipboard] unavailable: {e}"),
    }
}
