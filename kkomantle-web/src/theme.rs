// Dark-mode styling helpers

use crate::dom;
use crate::storage::WebStore;
use kkomantle_game::{SettingName, Settings, SettingsStore};

pub const DARK_CLASS: &str = "dark";
pub const DARK_TOGGLE_ID: &str = "dark-mode";

/// Apply or remove dark styling right away
///
/// Adds or removes the `dark` class on the document root and syncs the
/// settings checkbox when it is already in the DOM. Persistence is the
/// caller's job; see [`set_dark_mode`].
pub fn apply_dark_mode(enabled: bool) {
    let Some(doc) = dom::document() else {
        return;
    };

    if let Some(root) = doc.document_element() {
        let result = if enabled {
            root.class_list().add_1(DARK_CLASS)
        } else {
            root.class_list().remove_1(DARK_CLASS)
        };
        if result.is_err() {
            log::warn!("could not toggle the {DARK_CLASS} class");
        }
    }

    // Runs before the dialog is mounted on first load.
    if let Some(toggle) = doc
        .get_element_by_id(DARK_TOGGLE_ID)
        .and_then(|el| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlInputElement>(el).ok())
    {
        toggle.set_checked(enabled);
    }
}

/// Persist the dark-mode choice and restyle the page.
pub fn set_dark_mode(enabled: bool) {
    if let Err(err) = SettingsStore::new(WebStore).set(SettingName::DarkMode, enabled) {
        log::warn!("dark mode not saved: {err}");
    }
    apply_dark_mode(enabled);
}

/// Settings for first load, dark mode resolved the same way as the first paint.
#[must_use]
pub fn initial_settings() -> Settings {
    SettingsStore::new(WebStore).load_effective(dom::prefers_dark_scheme())
}

/// Dark mode to style the first paint with.
///
/// The saved choice wins; without one the OS colour-scheme preference is used.
#[must_use]
pub fn initial_dark_mode() -> bool {
    initial_settings().dark_mode
}
