//! Finished and running games as the standings see them.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::participants::Participant;
use crate::domain::rounds::RoundRecord;

pub type GameId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub rounds: Vec<RoundRecord>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
}

impl GameRecord {
    pub fn new(game_id: GameId, participants: Vec<Participant>) -> Self {
        Self {
            game_id,
            participants,
            rounds: Vec::new(),
            created_at: None,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }

    pub fn duration_label(&self) -> Option<String> {
        duration_label(self.started_at, self.ended_at)
    }

    /// When the game started, or when it was created if it never started.
    pub fn sort_time(&self) -> Option<OffsetDateTime> {
        self.started_at.or(self.created_at)
    }
}

/// Play time as `"{h}h {m}m"`, or `"{m}m"` under an hour.
///
/// `None` while either end is unknown or when the game ended before it began.
pub fn duration_label(
    started_at: Option<OffsetDateTime>,
    ended_at: Option<OffsetDateTime>,
) -> Option<String> {
    let elapsed = ended_at? - started_at?;
    if elapsed.is_negative() {
        return None;
    }
    let minutes = elapsed.whole_minutes();
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        Some(format!("{hours}h {mins}m"))
    } else {
        Some(format!("{mins}m"))
    }
}

/// Most recent first by [`GameRecord::sort_time`]; games with neither
/// timestamp go last in their given order.
pub fn sort_most_recent_first(games: &mut [GameRecord]) {
    games.sort_by(|a, b| b.sort_time().cmp(&a.sort_time()));
}
