//! Puzzle numbering.
//!
//! A new puzzle starts at midnight in Korea (UTC+9). Day arithmetic runs on
//! absolute instants, so every viewer sees the same number at the same moment
//! whatever their local timezone.

use crate::constants::{MS_PER_DAY, PUZZLE_UTC_OFFSET_HOURS};
use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleCalendar {
    epoch: DateTime<FixedOffset>,
    num_puzzles: u32,
}

impl Default for PuzzleCalendar {
    fn default() -> Self {
        crate::CompanionConfig::default().calendar()
    }
}

impl PuzzleCalendar {
    /// `num_puzzles` of zero is clamped to one so the modulo stays total.
    #[must_use]
    pub fn new(epoch: DateTime<FixedOffset>, num_puzzles: u32) -> Self {
        Self {
            epoch,
            num_puzzles: num_puzzles.max(1),
        }
    }

    #[must_use]
    pub const fn num_puzzles(&self) -> u32 {
        self.num_puzzles
    }

    #[must_use]
    pub const fn epoch(&self) -> DateTime<FixedOffset> {
        self.epoch
    }

    /// Whole days since the epoch, minus one, wrapped into the puzzle range.
    #[must_use]
    pub fn current_puzzle_number<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> u32 {
        let elapsed_ms = now.timestamp_millis() - self.epoch.timestamp_millis();
        let days = elapsed_ms.div_euclid(MS_PER_DAY) - 1;
        let wrapped = days.rem_euclid(i64::from(self.num_puzzles));
        u32::try_from(wrapped).unwrap_or_default()
    }

    #[must_use]
    pub fn previous_puzzle_number(&self, current: u32) -> u32 {
        let n = u64::from(self.num_puzzles);
        let prev = (u64::from(current) + n - 1) % n;
        u32::try_from(prev).unwrap_or_default()
    }
}

/// Hour on the viewer's clock at which the next puzzle unlocks.
///
/// Takes the UTC calendar date of `today`, pins it to 15:00 UTC (midnight in
/// UTC+9) and reads the hour in `local`.
#[must_use]
pub fn daily_rollover_hour<Tz: TimeZone>(today: &DateTime<Utc>, local: &Tz) -> u32 {
    today
        .date_naive()
        .and_hms_opt(rollover_utc_hour(), 0, 0)
        .map_or(0, |naive| naive.and_utc().with_timezone(local).hour())
}

const fn rollover_utc_hour() -> u32 {
    (24 - PUZZLE_UTC_OFFSET_HOURS).unsigned_abs()
}
