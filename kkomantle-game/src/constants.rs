//! Fixed strings and storage keys shared by the companion.
//!
//! The share-text fragments are pasted verbatim by players, so any edit here
//! changes the output of already-shared results. Treat them as a wire format.

// Storage keys -------------------------------------------------------------
pub const KEY_DARK_MODE: &str = "darkMode";
pub const KEY_SHARE_GUESSES: &str = "shareGuesses";
pub const KEY_SHARE_TIME: &str = "shareTime";
pub const KEY_SHARE_TOP_GUESS: &str = "shareTopGuess";
pub const KEY_GUESSES: &str = "guesses";
pub const KEY_WIN_STATE: &str = "winState";
pub const KEY_START_TIME: &str = "startTime";
pub const KEY_END_TIME: &str = "endTime";
pub const KEY_PUZZLE_NUMBER: &str = "puzzleNumber";

// Storage sentinels --------------------------------------------------------
pub(crate) const STORED_FALSE: &str = "false";
pub(crate) const STORED_TRUE: &str = "true";
pub(crate) const STORED_WON: &str = "1";

// Calendar -----------------------------------------------------------------
pub const NUM_PUZZLES: u32 = 4650;
pub const EPOCH_RFC3339: &str = "2022-04-01T00:00:00+09:00";
pub const PUZZLE_UTC_OFFSET_HOURS: i32 = 9;
pub(crate) const MS_PER_DAY: i64 = 86_400_000;

// Share text ---------------------------------------------------------------
pub const SITE_URL: &str = "https://semantle-ko.newsjel.ly/";
pub const DAYS_PATH: &str = "/days";
pub const UNRANKED_LABEL: &str = "1000위 이상";
pub(crate) const TIME_OVER_A_DAY: &str = "24시간 이상";
pub(crate) const NAN_TEXT: &str = "NaN";

// Notices ------------------------------------------------------------------
pub const NOTICE_COPIED: &str = "클립보드로 복사했습니다.";
pub const NOTICE_COPY_FAILED: &str = "클립보드에 복사할 수 없습니다.";

// Leaderboard --------------------------------------------------------------
pub const HEADER_DAY: &str = "회차";
pub const HEADER_LEADER: &str = "1등";
