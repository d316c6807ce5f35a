//! Handing resolved image URLs to the desktop.
//!
//! Self-contained: copies text to the system clipboard with `arboard` and
//! opens URLs with the platform opener. No coupling to UI or state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("failed to open {url}: {reason}")]
    Open { url: String, reason: String },
}

/// Copy `text` to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), DesktopError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| DesktopError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| DesktopError::Clipboard(e.to_string()))
}

/// Open `url` in the default browser or image viewer.
pub fn open_url(url: &str) -> Result<(), DesktopError> {
    open::that(url).map_err(|e| DesktopError::Open {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_error_message_names_url() {
        let err = DesktopError::Open {
            url: "http://x.test/a.jpg".to_string(),
            reason: "no opener".to_string(),
        };
        assert_eq!(err.to_string(), "failed to open http://x.test/a.jpg: no opener");
    }
}
