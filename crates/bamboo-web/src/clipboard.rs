//! Writing plain text to the system clipboard.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Destination of a copy action.
///
/// Writes are fire-and-forget: callers do not wait for the write and never
/// see its outcome.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str);
}

/// The clipboard of the environment the page runs in.
///
/// In the browser this is `navigator.clipboard`; during server rendering
/// there is no clipboard and writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostClipboard;

impl ClipboardWriter for HostClipboard {
    #[cfg(feature = "hydrate")]
    fn write_text(&self, text: &str) {
        let text = text.to_owned();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = write_to_navigator(&text).await {
                leptos::logging::warn!("[clipboard] {}", e);
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn write_text(&self, text: &str) {
        tracing::debug!(bytes = text.len(), "clipboard write ignored outside the browser");
    }
}

#[cfg(feature = "hydrate")]
async fn write_to_navigator(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Rejected(format!("{:?}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_readably() {
        assert_eq!(ClipboardError::NoWindow.to_string(), "no browser window available");
        assert_eq!(
            ClipboardError::Rejected("NotAllowedError".into()).to_string(),
            "clipboard write rejected: NotAllowedError"
        );
    }
}
