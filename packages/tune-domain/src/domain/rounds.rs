//! Round records: the teams of a round and the songs scored against them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::participants::ParticipantId;
use crate::domain::round_teams::{RoundTeamPlan, TeamRole};
use crate::domain::scoring::{scoring_team_role, team_score, SongGuess};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

pub type RoundId = i64;
pub type RoundTeamId = i64;

/// Songs played in a round unless the gameplay settings say otherwise.
pub const SONGS_PER_ROUND: usize = 10;

/// A stored team of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTeam {
    pub round_team_id: RoundTeamId,
    pub role: TeamRole,
    pub participant_ids: Vec<ParticipantId>,
}

/// A scored song and the team it was credited to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSong {
    pub round_team_id: RoundTeamId,
    pub guess: SongGuess,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_id: RoundId,
    pub round_number: u32,
    pub teams: Vec<RoundTeam>,
    #[serde(default)]
    pub songs: Vec<RoundSong>,
}

impl RoundRecord {
    pub fn new(round_id: RoundId, round_number: u32, teams: Vec<RoundTeam>) -> Self {
        Self {
            round_id,
            round_number,
            teams,
            songs: Vec::new(),
        }
    }

    /// Build a round from planned teams, numbering them from `first_team_id`.
    pub fn from_plans(
        round_id: RoundId,
        round_number: u32,
        plans: Vec<RoundTeamPlan>,
        first_team_id: RoundTeamId,
    ) -> Self {
        let teams = plans
            .into_iter()
            .zip(first_team_id..)
            .map(|(plan, round_team_id)| RoundTeam {
                round_team_id,
                role: plan.role,
                participant_ids: plan.participant_ids,
            })
            .collect();
        Self::new(round_id, round_number, teams)
    }

    pub fn team(&self, role: TeamRole) -> Option<&RoundTeam> {
        self.teams.iter().find(|t| t.role == role)
    }

    pub fn team_by_id(&self, round_team_id: RoundTeamId) -> Option<&RoundTeam> {
        self.teams.iter().find(|t| t.round_team_id == round_team_id)
    }

    /// Score the next song, crediting the player team or, for a steal, the
    /// stealer team.
    ///
    /// Fails once the round already holds `songs_per_round` songs, for a steal
    /// in a round without a stealer, and when the player team is missing.
    pub fn record_song(
        &mut self,
        guess: SongGuess,
        songs_per_round: usize,
    ) -> Result<&RoundSong, DomainError> {
        if self.songs.len() >= songs_per_round {
            return Err(DomainError::invalid_input(
                ValidationKind::RoundFull,
                format!(
                    "round {} already has {} songs",
                    self.round_number, songs_per_round
                ),
            ));
        }

        let target_role = scoring_team_role(guess.score_type);
        let Some(team) = self.team(target_role) else {
            return Err(match target_role {
                TeamRole::Stealer => DomainError::invalid_input(
                    ValidationKind::NoStealerTeam,
                    format!("round {} has no stealer to steal", self.round_number),
                ),
                _ => DomainError::not_found(
                    NotFoundKind::RoundTeam,
                    format!("round {} has no {target_role:?} team", self.round_number),
                ),
            });
        };
        let round_team_id = team.round_team_id;

        let guess = guess.normalized();
        debug!(
            round_id = self.round_id,
            round_team_id,
            points = guess.points(),
            steal = guess.is_steal(),
            "song scored"
        );

        let index = self.songs.len();
        self.songs.push(RoundSong {
            round_team_id,
            guess,
        });
        Ok(&self.songs[index])
    }

    pub fn is_complete(&self, songs_per_round: usize) -> bool {
        self.songs.len() >= songs_per_round
    }

    /// Points per team, in team order.
    pub fn team_scores(&self) -> Vec<(RoundTeamId, u32)> {
        self.teams
            .iter()
            .map(|t| (t.round_team_id, team_score(self, t.round_team_id)))
            .collect()
    }
}
