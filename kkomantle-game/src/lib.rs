//! Kkomantle companion core
//!
//! Platform-agnostic session tracking, settings and share-text generation for
//! the Kkomantle daily word puzzle. This crate has no browser dependencies;
//! the web front-end supplies a [`KeyValueStore`] backed by `localStorage`.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod guess;
pub mod leaderboard;
pub mod numbers;
pub mod session;
pub mod settings;
pub mod store;
pub mod summary;

// Re-export commonly used types
pub use calendar::{PuzzleCalendar, daily_rollover_hour};
pub use config::{CompanionConfig, ConfigError};
pub use guess::{GuessLog, GuessRecord};
pub use leaderboard::{
    DayDirectory, DayEntry, DayRow, Leader, Leaderboard, SortDirection, day_row,
};
pub use session::{Session, SessionError, SessionState};
pub use settings::{SettingName, Settings, SettingsStore};
pub use store::{KeyValueStore, MemoryStore, StorageError};
pub use summary::{Outcome, ShareSummary, share_summary, summarize};

use chrono::{DateTime, Utc};

/// Entry point bundling a store with the configuration that interprets it.
#[derive(Debug, Clone)]
pub struct CompanionEngine<S>
where
    S: KeyValueStore,
{
    config: CompanionConfig,
    calendar: PuzzleCalendar,
    store: S,
}

impl<S> CompanionEngine<S>
where
    S: KeyValueStore + Clone,
{
    /// Create an engine over `store` using `config`
    pub fn new(config: CompanionConfig, store: S) -> Self {
        let calendar = config.calendar();
        Self {
            config,
            calendar,
            store,
        }
    }

    pub const fn config(&self) -> &CompanionConfig {
        &self.config
    }

    pub const fn calendar(&self) -> &PuzzleCalendar {
        &self.calendar
    }

    pub fn puzzle_number(&self, now: DateTime<Utc>) -> u32 {
        self.calendar.current_puzzle_number(&now)
    }

    pub fn settings(&self) -> SettingsStore<S> {
        SettingsStore::new(self.store.clone())
    }

    /// Open today's session, clearing one left over from an earlier day.
    ///
    /// # Errors
    ///
    /// Returns an error if a stale session cannot be cleared.
    pub fn session(&self, now: DateTime<Utc>) -> Result<Session<S>, SessionError> {
        Session::resume(self.store.clone(), self.puzzle_number(now))
    }

    /// Share text built from the frozen stored session.
    ///
    /// Reads the persisted log rather than any in-memory one so guesses made
    /// after the session ended never leak into the text.
    pub fn share_text(&self, puzzle_number: u32) -> String {
        let log = GuessLog::load(&self.store);
        let state = SessionState::load(&self.store);
        let settings = self.settings().load();
        share_summary(&log, &settings, &state, puzzle_number).render(&self.config.site_url)
    }

    /// Share text for the stored session, rejecting one that has not ended.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored session is still in progress.
    pub fn finished_share_text(&self, puzzle_number: u32) -> anyhow::Result<String> {
        let state = SessionState::load(&self.store);
        if !state.is_finished() {
            anyhow::bail!("session for puzzle {puzzle_number} has not ended");
        }
        Ok(self.share_text(puzzle_number))
    }
}
