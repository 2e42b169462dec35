//! Per-song scoring.
//!
//! A song is worth one point for the artist, one for the title, and a movie
//! bonus that only counts when at least one of the other two was right.
//! A stolen song goes to the stealer team instead of the players.

use serde::{Deserialize, Serialize};

use crate::domain::round_teams::TeamRole;
use crate::domain::rounds::{RoundRecord, RoundTeamId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    #[default]
    Standard,
    Steal,
}

/// What was guessed correctly for one song.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongGuess {
    pub correct_artist: bool,
    pub correct_song_title: bool,
    pub bonus_correct_movie: bool,
    #[serde(default)]
    pub score_type: ScoreType,
}

impl SongGuess {
    /// The movie bonus is only available after a correct artist or title.
    pub fn bonus_eligible(&self) -> bool {
        self.correct_artist || self.correct_song_title
    }

    /// Copy with an ineligible movie bonus cleared.
    pub fn normalized(self) -> Self {
        Self {
            bonus_correct_movie: self.bonus_correct_movie && self.bonus_eligible(),
            ..self
        }
    }

    pub fn points(&self) -> u32 {
        let normalized = self.normalized();
        u32::from(normalized.correct_artist)
            + u32::from(normalized.correct_song_title)
            + u32::from(normalized.bonus_correct_movie)
    }

    pub fn is_steal(&self) -> bool {
        self.score_type == ScoreType::Steal
    }
}

/// Team credited with a song of the given score type.
pub fn scoring_team_role(score_type: ScoreType) -> TeamRole {
    match score_type {
        ScoreType::Standard => TeamRole::Player,
        ScoreType::Steal => TeamRole::Stealer,
    }
}

/// Points credited to `round_team_id` in `round`. Unknown teams score 0.
pub fn team_score(round: &RoundRecord, round_team_id: RoundTeamId) -> u32 {
    round
        .songs
        .iter()
        .filter(|song| song.round_team_id == round_team_id)
        .map(|song| song.guess.points())
        .sum()
}
