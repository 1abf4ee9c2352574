//! System clipboard backed by `arboard`.

use arboard::Clipboard;

use crate::error::ClipboardError;

use super::TextBuffer;

/// The desktop clipboard.
///
/// On X11/Wayland the written contents are served only while this value is
/// alive, so keep it around until the user has pasted the result.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl TextBuffer for SystemClipboard {
    fn clear(&mut self) -> Result<(), ClipboardError> {
        self.inner
            .set_text("")
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }

    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::ReadFailed(e.to_string())),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
