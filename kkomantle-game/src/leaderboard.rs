//! Past puzzle days and their leaders.
use crate::constants::{HEADER_DAY, HEADER_LEADER};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    pub nickname: String,
}

/// One row of the day directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: u32,
    #[serde(default, deserialize_with = "lenient_leader")]
    pub leader: Option<Leader>,
}

impl DayEntry {
    #[must_use]
    pub const fn new(day: u32) -> Self {
        Self { day, leader: None }
    }

    #[must_use]
    pub fn with_leader(mut self, nickname: impl Into<String>) -> Self {
        self.leader = Some(Leader {
            nickname: nickname.into(),
        });
        self
    }
}

// The server sends a placeholder string for days nobody has finished.
fn lenient_leader<'de, D>(deserializer: D) -> Result<Option<Leader>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Result of asking the day directory for its list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DayDirectory {
    Loaded(Vec<DayEntry>),
    /// The fetch failed or returned something unreadable.
    #[default]
    Unavailable,
}

impl DayDirectory {
    /// Decode a directory payload; anything but a list of days is `Unavailable`.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<DayEntry>>(json) {
            Ok(days) => Self::Loaded(days),
            Err(err) => {
                log::warn!("day directory payload rejected: {err}");
                Self::Unavailable
            }
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[DayEntry] {
        match self {
            Self::Loaded(days) => days,
            Self::Unavailable => &[],
        }
    }
}

impl From<Option<Vec<DayEntry>>> for DayDirectory {
    fn from(days: Option<Vec<DayEntry>>) -> Self {
        days.map_or(Self::Unavailable, Self::Loaded)
    }
}

/// Row order of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Order the directory supplied the days in (oldest first).
    #[default]
    Chronological,
    /// Newest day first.
    Reverse,
}

impl SortDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Chronological => Self::Reverse,
            Self::Reverse => Self::Chronological,
        }
    }
}

/// Display strings for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRow {
    pub day: u32,
    pub href: String,
    pub link_text: String,
    pub leader: String,
}

#[must_use]
pub fn day_row(entry: &DayEntry) -> DayRow {
    DayRow {
        day: entry.day,
        href: format!("/{}", entry.day),
        link_text: format!("{}번째 꼬맨틀", entry.day),
        leader: entry
            .leader
            .as_ref()
            .map(|l| l.nickname.clone())
            .unwrap_or_default(),
    }
}

/// Table rows for `days`, in the order given.
///
/// Total over an unavailable directory: pass `DayDirectory::entries()` and get
/// no rows back.
#[must_use]
pub fn render(days: &[DayEntry]) -> Vec<DayRow> {
    days.iter().map(day_row).collect()
}

#[must_use]
pub const fn headers() -> [&'static str; 2] {
    [HEADER_DAY, HEADER_LEADER]
}

/// Leaderboard view state. Owned by the view; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leaderboard {
    directory: DayDirectory,
    direction: SortDirection,
    days: Vec<DayEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new(directory: DayDirectory) -> Self {
        let days = directory.entries().to_vec();
        Self {
            directory,
            direction: SortDirection::default(),
            days,
        }
    }

    /// Flip the direction and rebuild the row order from the directory.
    pub fn toggle_sort(&mut self) {
        self.direction = self.direction.flipped();
        self.days = self.directory.entries().to_vec();
        if self.direction == SortDirection::Reverse {
            self.days.sort_by(|a, b| b.day.cmp(&a.day));
        }
        log::debug!("leaderboard sorted {:?}", self.direction);
    }

    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    #[must_use]
    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.directory, DayDirectory::Loaded(_))
    }

    /// Rows in display order. Empty when the directory was unavailable.
    #[must_use]
    pub fn rows(&self) -> Vec<DayRow> {
        render(&self.days)
    }
}
