//! Session timing, win flag and lifecycle.
use crate::constants::{
    KEY_END_TIME, KEY_GUESSES, KEY_PUZZLE_NUMBER, KEY_START_TIME, KEY_WIN_STATE, STORED_WON,
};
use crate::guess::{GuessLog, GuessRecord};
use crate::store::{KeyValueStore, StorageError, read_lossy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session already ended")]
    Finished,
    #[error("Cannot win without a guess")]
    NoGuesses,
    #[error("Word already guessed: {0}")]
    DuplicateWord(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Persisted timing and outcome of one session. Timestamps are epoch milliseconds.
///
/// A timestamp that is missing or unreadable in storage is `None`; summaries
/// render that as a degenerate time rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub won: bool,
    pub puzzle_number: Option<u32>,
}

impl SessionState {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// `end − start` in milliseconds, if both ends are known.
    #[must_use]
    pub const fn elapsed_ms(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self {
            start_time: read_lossy(store, KEY_START_TIME).and_then(|v| parse_number(&v)),
            end_time: read_lossy(store, KEY_END_TIME).and_then(|v| parse_number(&v)),
            won: read_lossy(store, KEY_WIN_STATE).as_deref() == Some(STORED_WON),
            puzzle_number: read_lossy(store, KEY_PUZZLE_NUMBER).and_then(|v| v.trim().parse().ok()),
        }
    }

    /// # Errors
    ///
    /// Returns an error if any write to the store fails.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StorageError> {
        put_or_remove(store, KEY_START_TIME, self.start_time.map(|v| v.to_string()))?;
        put_or_remove(store, KEY_END_TIME, self.end_time.map(|v| v.to_string()))?;
        put_or_remove(store, KEY_WIN_STATE, self.won.then(|| STORED_WON.to_string()))?;
        put_or_remove(
            store,
            KEY_PUZZLE_NUMBER,
            self.puzzle_number.map(|v| v.to_string()),
        )
    }
}

// Timestamps written by older pages may carry a fractional part.
fn parse_number(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| format!("{:.0}", v.trunc()))
            .and_then(|v| v.parse().ok())
    })
}

fn put_or_remove<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    value: Option<String>,
) -> Result<(), StorageError> {
    match value {
        Some(v) => store.set_item(key, &v),
        None => store.remove_item(key),
    }
}

/// A play session bound to a store. Every mutation is persisted immediately.
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
    state: SessionState,
    log: GuessLog,
}

impl<S: KeyValueStore> Session<S> {
    /// Read whatever session is stored, without touching it.
    pub fn load(store: S) -> Self {
        let state = SessionState::load(&store);
        let log = GuessLog::load(&store);
        Self { store, state, log }
    }

    /// Continue the stored session for `puzzle_number`, or start over when the
    /// stored one belongs to another day.
    ///
    /// # Errors
    ///
    /// Returns an error if clearing a stale session fails.
    pub fn resume(store: S, puzzle_number: u32) -> Result<Self, SessionError> {
        let mut session = Self::load(store);
        if session.state.puzzle_number != Some(puzzle_number) {
            log::debug!(
                "stored session for {:?} is stale, starting puzzle {puzzle_number}",
                session.state.puzzle_number
            );
            session.reset(puzzle_number)?;
        }
        Ok(session)
    }

    /// Discard the stored log and timing and begin `puzzle_number` afresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects a write.
    pub fn reset(&mut self, puzzle_number: u32) -> Result<(), SessionError> {
        self.state = SessionState {
            puzzle_number: Some(puzzle_number),
            ..SessionState::default()
        };
        self.log = GuessLog::new();
        self.store.remove_item(KEY_GUESSES)?;
        self.state.save(&self.store)?;
        Ok(())
    }

    /// Append a guess. The first guess starts the clock.
    ///
    /// # Errors
    ///
    /// Rejects guesses after the session ended and repeated words.
    pub fn record_guess(
        &mut self,
        record: GuessRecord,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        if self.state.is_finished() {
            return Err(SessionError::Finished);
        }
        if self.log.contains_word(record.word()) {
            return Err(SessionError::DuplicateWord(record.word().to_string()));
        }
        if self.state.start_time.is_none() {
            self.state.start_time = Some(now.timestamp_millis());
            self.state.save(&self.store)?;
        }
        self.log.append(record);
        self.log.save(&self.store)?;
        Ok(())
    }

    /// End the session as a win or a give-up, freezing the log and timing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Finished`] if the session already ended.
    pub fn finish(&mut self, won: bool, now: DateTime<Utc>) -> Result<(), SessionError> {
        if self.state.is_finished() {
            return Err(SessionError::Finished);
        }
        if won && self.log.is_empty() {
            return Err(SessionError::NoGuesses);
        }
        let end = now.timestamp_millis();
        self.state.start_time.get_or_insert(end);
        self.state.end_time = Some(end);
        self.state.won = won;
        self.state.save(&self.store)?;
        log::debug!("session ended, won={won}, entries={}", self.log.len());
        Ok(())
    }

    /// Guess number to assign to the next record.
    #[must_use]
    pub fn next_guess_number(&self) -> u32 {
        u32::try_from(self.log.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn log(&self) -> &GuessLog {
        &self.log
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn into_parts(self) -> (S, SessionState, GuessLog) {
        (self.store, self.state, self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn resume_clears_stale_day() {
        let store = MemoryStore::with_items([
            ("puzzleNumber", "10"),
            ("guesses", r#"[[1.0,"a","1000위 이상",1]]"#),
            ("winState", "1"),
            ("startTime", "5"),
            ("endTime", "9"),
        ]);
        let session = Session::resume(store.clone(), 11).unwrap();
        assert!(session.log().is_empty());
        assert_eq!(session.state().puzzle_number, Some(11));
        assert!(store.get_item("guesses").unwrap().is_none());
        assert!(store.get_item("winState").unwrap().is_none());
        assert_eq!(store.get_item("puzzleNumber").unwrap().as_deref(), Some("11"));
    }

    #[test]
    fn resume_keeps_same_day() {
        let store = MemoryStore::with_items([
            ("puzzleNumber", "10"),
            ("guesses", r#"[[1.0,"a","1000위 이상",1]]"#),
        ]);
        let session = Session::resume(store, 10).unwrap();
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.next_guess_number(), 2);
    }

    #[test]
    fn first_guess_starts_clock_and_persists() {
        let store = MemoryStore::new();
        let mut session = Session::resume(store.clone(), 3).unwrap();
        session
            .record_guess(GuessRecord::new(20.0, "하늘", "1000위 이상", 1), at(1_000))
            .unwrap();
        session
            .record_guess(GuessRecord::new(30.0, "바다", "500", 2), at(2_000))
            .unwrap();
        let reloaded = Session::load(store);
        assert_eq!(reloaded.state().start_time, Some(1_000));
        assert_eq!(reloaded.log().len(), 2);
    }

    #[test]
    fn finished_session_is_frozen() {
        let mut session = Session::resume(MemoryStore::new(), 3).unwrap();
        session
            .record_guess(GuessRecord::new(20.0, "하늘", "1000위 이상", 1), at(1_000))
            .unwrap();
        session.finish(true, at(61_000)).unwrap();
        assert_eq!(session.state().elapsed_ms(), Some(60_000));
        let err = session
            .record_guess(GuessRecord::new(40.0, "땅", "1000위 이상", 2), at(70_000))
            .unwrap_err();
        assert!(matches!(err, SessionError::Finished));
        assert!(matches!(
            session.finish(false, at(80_000)),
            Err(SessionError::Finished)
        ));
        assert_eq!(session.log().len(), 1);
        assert!(session.state().won);
    }

    #[test]
    fn duplicate_words_are_rejected() {
        let mut session = Session::resume(MemoryStore::new(), 3).unwrap();
        session
            .record_guess(GuessRecord::new(20.0, "하늘", "1000위 이상", 1), at(1_000))
            .unwrap();
        let err = session
            .record_guess(GuessRecord::new(20.0, "하늘", "1000위 이상", 2), at(2_000))
            .unwrap_err();
        assert_eq!(err.to_string(), "Word already guessed: 하늘");
    }

    #[test]
    fn giving_up_without_guesses_still_has_timing() {
        let mut session = Session::resume(MemoryStore::new(), 3).unwrap();
        session.finish(false, at(5_000)).unwrap();
        assert_eq!(session.state().elapsed_ms(), Some(0));
        assert!(!session.state().won);
    }

    #[test]
    fn win_needs_a_guess() {
        let mut session = Session::resume(MemoryStore::new(), 3).unwrap();
        assert!(matches!(
            session.finish(true, at(5_000)),
            Err(SessionError::NoGuesses)
        ));
        assert!(!session.is_finished());
        session.finish(false, at(6_000)).unwrap();
        assert!(!session.state().won);
    }

    #[test]
    fn unreadable_timing_loads_as_unknown() {
        let store = MemoryStore::with_items([
            ("startTime", "soon"),
            ("endTime", "1700000000000.7"),
            ("winState", "true"),
        ]);
        let state = SessionState::load(&store);
        assert_eq!(state.start_time, None);
        assert_eq!(state.end_time, Some(1_700_000_000_000));
        assert_eq!(state.elapsed_ms(), None);
        assert!(!state.won);
    }
}
