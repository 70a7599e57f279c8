//! Player preferences persisted in the key-value store.
//!
//! Values are typed booleans here; the string conventions of the stored page
//! state only exist in [`SettingName::decode`] and [`SettingName::encode`].

use crate::constants::{
    KEY_DARK_MODE, KEY_SHARE_GUESSES, KEY_SHARE_TIME, KEY_SHARE_TOP_GUESS, STORED_FALSE,
    STORED_TRUE,
};
use crate::store::{KeyValueStore, StorageError, read_lossy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingName {
    DarkMode,
    ShareGuesses,
    ShareTime,
    ShareTopGuess,
}

impl SettingName {
    pub const ALL: [Self; 4] = [
        Self::DarkMode,
        Self::ShareGuesses,
        Self::ShareTime,
        Self::ShareTopGuess,
    ];

    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::DarkMode => KEY_DARK_MODE,
            Self::ShareGuesses => KEY_SHARE_GUESSES,
            Self::ShareTime => KEY_SHARE_TIME,
            Self::ShareTopGuess => KEY_SHARE_TOP_GUESS,
        }
    }

    /// Value used when nothing is stored.
    #[must_use]
    pub const fn default_value(self) -> bool {
        !matches!(self, Self::DarkMode)
    }

    /// Dark mode is on only for `"true"`; share flags are off only for `"false"`.
    #[must_use]
    pub fn decode(self, stored: Option<&str>) -> bool {
        match self {
            Self::DarkMode => stored == Some(STORED_TRUE),
            _ => stored != Some(STORED_FALSE),
        }
    }

    #[must_use]
    pub const fn encode(value: bool) -> &'static str {
        if value { STORED_TRUE } else { STORED_FALSE }
    }
}

impl std::fmt::Display for SettingName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.storage_key())
    }
}

/// Snapshot of all four toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dark_mode: bool,
    pub share_guesses: bool,
    pub share_time: bool,
    pub share_top_guess: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: SettingName::DarkMode.default_value(),
            share_guesses: SettingName::ShareGuesses.default_value(),
            share_time: SettingName::ShareTime.default_value(),
            share_top_guess: SettingName::ShareTopGuess.default_value(),
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn get(&self, name: SettingName) -> bool {
        match name {
            SettingName::DarkMode => self.dark_mode,
            SettingName::ShareGuesses => self.share_guesses,
            SettingName::ShareTime => self.share_time,
            SettingName::ShareTopGuess => self.share_top_guess,
        }
    }

    pub const fn set(&mut self, name: SettingName, value: bool) {
        match name {
            SettingName::DarkMode => self.dark_mode = value,
            SettingName::ShareGuesses => self.share_guesses = value,
            SettingName::ShareTime => self.share_time = value,
            SettingName::ShareTopGuess => self.share_top_guess = value,
        }
    }
}

/// Reads and writes [`Settings`] through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Current value of one toggle. Unreadable storage falls back to the default.
    pub fn get(&self, name: SettingName) -> bool {
        name.decode(read_lossy(&self.store, name.storage_key()).as_deref())
    }

    /// Persist one toggle.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    pub fn set(&self, name: SettingName, value: bool) -> Result<(), StorageError> {
        log::debug!("setting {name} = {value}");
        self.store
            .set_item(name.storage_key(), SettingName::encode(value))
    }

    pub fn load(&self) -> Settings {
        let mut settings = Settings::default();
        for name in SettingName::ALL {
            settings.set(name, self.get(name));
        }
        settings
    }

    /// Whether an explicit dark-mode choice has been stored.
    pub fn dark_mode_chosen(&self) -> bool {
        read_lossy(&self.store, SettingName::DarkMode.storage_key()).is_some()
    }

    /// Dark mode for first-load styling: the stored choice wins, else the OS preference.
    pub fn effective_dark_mode(&self, prefers_dark_scheme: bool) -> bool {
        if self.dark_mode_chosen() {
            self.get(SettingName::DarkMode)
        } else {
            prefers_dark_scheme
        }
    }

    /// Settings as the page shows them on first load, with dark mode resolved
    /// against the OS preference so the toggle matches the styling.
    pub fn load_effective(&self, prefers_dark_scheme: bool) -> Settings {
        let mut settings = self.load();
        settings.dark_mode = self.effective_dark_mode(prefers_dark_scheme);
        settings
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn unset_flags_use_defaults() {
        let settings = SettingsStore::new(MemoryStore::new());
        assert!(!settings.get(SettingName::DarkMode));
        assert!(settings.get(SettingName::ShareGuesses));
        assert!(settings.get(SettingName::ShareTime));
        assert!(settings.get(SettingName::ShareTopGuess));
        assert_eq!(settings.load(), Settings::default());
    }

    #[test]
    fn round_trips_every_flag() {
        let settings = SettingsStore::new(MemoryStore::new());
        for name in SettingName::ALL {
            for value in [true, false, true] {
                settings.set(name, value).unwrap();
                assert_eq!(settings.get(name), value, "{name}");
            }
        }
    }

    #[test]
    fn only_false_sentinel_turns_share_flags_off() {
        let store = MemoryStore::with_items([
            ("shareGuesses", "0"),
            ("shareTime", "garbage"),
            ("shareTopGuess", "false"),
            ("darkMode", "1"),
        ]);
        let settings = SettingsStore::new(store).load();
        assert!(settings.share_guesses);
        assert!(settings.share_time);
        assert!(!settings.share_top_guess);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn writes_string_sentinels() {
        let store = MemoryStore::new();
        let settings = SettingsStore::new(store.clone());
        settings.set(SettingName::ShareTime, false).unwrap();
        settings.set(SettingName::DarkMode, true).unwrap();
        assert_eq!(store.get_item("shareTime").unwrap().as_deref(), Some("false"));
        assert_eq!(store.get_item("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn stored_dark_choice_beats_os_preference() {
        let store = MemoryStore::new();
        let settings = SettingsStore::new(store);
        assert!(settings.effective_dark_mode(true));
        settings.set(SettingName::DarkMode, false).unwrap();
        assert!(!settings.effective_dark_mode(true));
    }

    #[test]
    fn first_load_settings_follow_os_dark_preference() {
        let settings = SettingsStore::new(MemoryStore::new());
        assert!(settings.load_effective(true).dark_mode);
        assert!(!settings.load_effective(false).dark_mode);
        assert!(settings.load_effective(true).share_time);

        settings.set(SettingName::DarkMode, false).unwrap();
        assert!(!settings.load_effective(true).dark_mode);
    }
}
