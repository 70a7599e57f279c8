//! Share-text generation for a finished or abandoned session.
//!
//! The output is pasted verbatim into chats and compared against results
//! shared by older versions of the page, so every byte is fixed.

use crate::constants::{MS_PER_DAY, NAN_TEXT, SITE_URL, TIME_OVER_A_DAY, UNRANKED_LABEL};
use crate::guess::{GuessLog, GuessRecord};
use crate::numbers::{fmt_fixed2, wrap_ms};
use crate::session::SessionState;
use crate::settings::Settings;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// How the session ended, as far as the share text cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Won on the very first guess
    FirstGuessWin,
    /// Gave up before guessing anything
    GaveUpUntried,
    Solved,
    GaveUp,
}

impl Outcome {
    /// Terminal outcomes ignore every share flag.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::FirstGuessWin | Self::GaveUpUntried)
    }
}

/// Decided content of a share message, before it is laid out as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareSummary {
    pub outcome: Outcome,
    pub puzzle_number: u32,
    pub guess_count: usize,
    pub guess_line: Option<String>,
    pub time_line: Option<String>,
    pub top_guess_line: Option<String>,
}

/// Work out what a share message for this session contains.
#[must_use]
pub fn share_summary(
    log: &GuessLog,
    settings: &Settings,
    session: &SessionState,
    puzzle_number: u32,
) -> ShareSummary {
    // The winning entry replaces the log's extra one; an empty log counts zero.
    let guess_count = (log.len() + usize::from(session.won)).saturating_sub(1);

    let outcome = if session.won && guess_count == 1 {
        Outcome::FirstGuessWin
    } else if guess_count == 0 {
        Outcome::GaveUpUntried
    } else if session.won {
        Outcome::Solved
    } else {
        Outcome::GaveUp
    };

    let mut summary = ShareSummary {
        outcome,
        puzzle_number,
        guess_count,
        guess_line: None,
        time_line: None,
        top_guess_line: None,
    };
    if outcome.is_terminal() {
        return summary;
    }

    if settings.share_guesses {
        summary.guess_line = Some(format!("추측 횟수: {guess_count}"));
    }
    if settings.share_time {
        summary.time_line = Some(format!("소요 시간: {}", describe_elapsed(session.elapsed_ms())));
    }
    if settings.share_top_guess {
        // A log too short to have a runner-up has nothing worth sharing.
        summary.top_guess_line = log
            .top_guess()
            .map(|top| format!("최대 유사도: {}", describe_guess(top)));
    }
    summary
}

impl ShareSummary {
    /// Lay the summary out as share text ending in `site_url`.
    #[must_use]
    pub fn render(&self, site_url: &str) -> String {
        let n = self.puzzle_number;
        match self.outcome {
            Outcome::FirstGuessWin => {
                return format!(
                    "이럴 수가! 첫번째 추측에서 {n}번째 꼬맨틀 정답 단어를 맞혔습니다!\n{site_url}"
                );
            }
            Outcome::GaveUpUntried => {
                return format!("{n}번째 꼬맨틀을 시도하지 않고 바로 포기했어요.\n{site_url}");
            }
            Outcome::Solved | Outcome::GaveUp => {}
        }

        let mut text = if self.outcome == Outcome::Solved {
            format!("{n}번째 꼬맨틀을 풀었습니다!\n")
        } else {
            format!("저런… {n}번째 꼬맨틀을 포기했어요..ㅠ\n")
        };
        for line in [&self.guess_line, &self.time_line, &self.top_guess_line]
            .into_iter()
            .flatten()
        {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str(site_url);
        text
    }
}

/// Share text for a session, ending in the public site URL.
#[must_use]
pub fn summarize(
    log: &GuessLog,
    settings: &Settings,
    session: &SessionState,
    puzzle_number: u32,
) -> String {
    share_summary(log, settings, session, puzzle_number).render(SITE_URL)
}

/// `HH시간MM분SS초`, or the over-a-day phrase. Unknown timing becomes `NaN` fields.
fn describe_elapsed(elapsed_ms: Option<i64>) -> String {
    let Some(ms) = elapsed_ms else {
        return format!("{NAN_TEXT}시간{NAN_TEXT}분{NAN_TEXT}초");
    };
    if ms > MS_PER_DAY {
        return TIME_OVER_A_DAY.to_string();
    }
    let seconds = u32::try_from(wrap_ms(ms, MS_PER_DAY) / 1000).unwrap_or_default();
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).map_or_else(
        || format!("{NAN_TEXT}시간{NAN_TEXT}분{NAN_TEXT}초"),
        |clock| format!("{}초", clock.format("%H시간%M분%S")),
    )
}

fn describe_guess(guess: &GuessRecord) -> String {
    let similarity = fmt_fixed2(guess.similarity());
    if guess.percentile() == UNRANKED_LABEL {
        similarity
    } else {
        format!("{similarity} (순위 {})", guess.percentile())
    }
}
