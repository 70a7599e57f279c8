//! Guess records and the per-session guess log.
use crate::constants::KEY_GUESSES;
use crate::store::{KeyValueStore, StorageError, read_lossy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One scored guess. Stored as `[similarity, word, rank label, guess number]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawGuess", into = "RawGuess")]
pub struct GuessRecord {
    similarity: f64,
    word: String,
    percentile: String,
    guess_number: u32,
}

impl GuessRecord {
    #[must_use]
    pub fn new(
        similarity: f64,
        word: impl Into<String>,
        percentile: impl Into<String>,
        guess_number: u32,
    ) -> Self {
        Self {
            similarity,
            word: word.into(),
            percentile: percentile.into(),
            guess_number,
        }
    }

    #[must_use]
    pub const fn similarity(&self) -> f64 {
        self.similarity
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Rank label as reported by the server, e.g. `"12"` or `"1000위 이상"`.
    #[must_use]
    pub fn percentile(&self) -> &str {
        &self.percentile
    }

    #[must_use]
    pub const fn guess_number(&self) -> u32 {
        self.guess_number
    }
}

// The server reports ranks inside the top thousand as numbers and everything
// else as text, and the page stored whichever it got.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RankLabel {
    Rank(u64),
    Text(String),
}

#[derive(Serialize, Deserialize)]
struct RawGuess(f64, String, RankLabel, u32);

impl From<RawGuess> for GuessRecord {
    fn from(RawGuess(similarity, word, label, guess_number): RawGuess) -> Self {
        let percentile = match label {
            RankLabel::Rank(rank) => rank.to_string(),
            RankLabel::Text(text) => text,
        };
        Self {
            similarity,
            word,
            percentile,
            guess_number,
        }
    }
}

impl From<GuessRecord> for RawGuess {
    fn from(record: GuessRecord) -> Self {
        let label = record
            .percentile
            .parse::<u64>()
            .map_or(RankLabel::Text(record.percentile), RankLabel::Rank);
        Self(record.similarity, record.word, label, record.guess_number)
    }
}

/// Guesses of the active or most recent session, in the order they were made.
///
/// The log holds one entry more than the player-visible guess count; see
/// [`GuessLog::count`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessLog {
    records: Vec<GuessRecord>,
}

impl GuessLog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    #[must_use]
    pub const fn from_records(records: Vec<GuessRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: GuessRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuessRecord> {
        self.records.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Player-visible guess count: one less than the number of entries.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.records.len().saturating_sub(1)
    }

    /// Second entry of the log ordered by descending similarity.
    ///
    /// The highest entry of a finished log is the revealed answer, so the
    /// runner-up is the player's best real guess. Ties keep log order.
    #[must_use]
    pub fn top_guess(&self) -> Option<&GuessRecord> {
        let mut ranked: Vec<&GuessRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        ranked.get(1).copied()
    }

    /// Highest similarity in the log, answer included.
    #[must_use]
    pub fn best_similarity(&self) -> Option<f64> {
        self.records
            .iter()
            .map(GuessRecord::similarity)
            .filter(|s| !s.is_nan())
            .reduce(f64::max)
    }

    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.records.iter().any(|r| r.word == word)
    }

    /// Load the persisted log. Missing or corrupt data yields an empty log.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let Some(raw) = read_lossy(store, KEY_GUESSES) else {
            return Self::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("discarding unreadable guess log: {err}");
            Self::new()
        })
    }

    /// Persist the whole log under the `guesses` key.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails.
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        store.set_item(KEY_GUESSES, &json)
    }
}

impl<'a> IntoIterator for &'a GuessLog {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<GuessRecord> for GuessLog {
    fn from_iter<I: IntoIterator<Item = GuessRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
