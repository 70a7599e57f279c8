//! Thin wrappers over the browser globals.
//!
//! Every helper degrades to `None`/`Err` off the web so components can be
//! rendered and tested natively. No `JsValue` is created outside wasm.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Storage, Window};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if there is no window, the fetch rejects, or the result is not a `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, DomError> {
    let win = window().ok_or(DomError::Unavailable("window"))?;
    #[cfg(target_arch = "wasm32")]
    {
        let resp_value = JsFuture::from(win.fetch_with_str(url)).await?;
        Ok(resp_value.dyn_into::<Response>()?)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (win, url);
        Err(DomError::Unavailable("fetch"))
    }
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, DomError> {
    let win = window().ok_or(DomError::Unavailable("window"))?;
    #[cfg(target_arch = "wasm32")]
    {
        win.local_storage()?
            .ok_or(DomError::Unavailable("localStorage"))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = win;
        Err(DomError::Unavailable("localStorage"))
    }
}

/// Whether the OS asks for a dark colour scheme.
#[must_use]
pub fn prefers_dark_scheme() -> bool {
    window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mql| mql.matches())
}

/// Write text to the system clipboard and wait for the browser's verdict.
///
/// # Errors
/// Returns an error if there is no window or the clipboard write is rejected.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn write_clipboard(text: &str) -> Result<(), DomError> {
    let win = window().ok_or(DomError::Unavailable("window"))?;
    #[cfg(target_arch = "wasm32")]
    {
        let promise = win.navigator().clipboard().write_text(text);
        JsFuture::from(promise).await?;
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (win, text);
        Err(DomError::Unavailable("clipboard"))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn helpers_degrade_without_browser() {
        assert!(window().is_none());
        assert!(document().is_none());
        assert!(!prefers_dark_scheme());
        assert_eq!(
            local_storage().unwrap_err(),
            DomError::Unavailable("window")
        );
        assert!(block_on(write_clipboard("x")).is_err());
        assert!(block_on(fetch_response("/days")).is_err());
    }
}
