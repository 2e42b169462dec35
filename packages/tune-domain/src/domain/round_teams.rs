//! Round teams: how a role assignment is grouped for storage.
//!
//! The DJ and the players always get a team (the player team may be empty
//! for a lone DJ). A stealer team only exists when someone steals.
//! Inactive participants are not on any team.

use serde::{Deserialize, Serialize};

use crate::domain::participants::ParticipantId;
use crate::domain::roles::{Role, RoleAssignment};

/// Role of a stored round team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Player,
    Dj,
    Stealer,
}

impl TeamRole {
    /// Team for a round role; inactive participants have none.
    pub fn for_role(role: Role) -> Option<TeamRole> {
        match role {
            Role::Dj => Some(TeamRole::Dj),
            Role::Player => Some(TeamRole::Player),
            Role::Stealer => Some(TeamRole::Stealer),
            Role::Inactive => None,
        }
    }
}

impl From<TeamRole> for Role {
    fn from(team: TeamRole) -> Self {
        match team {
            TeamRole::Dj => Role::Dj,
            TeamRole::Player => Role::Player,
            TeamRole::Stealer => Role::Stealer,
        }
    }
}

/// A team to create for a new round, before it has a storage id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTeamPlan {
    pub role: TeamRole,
    pub participant_ids: Vec<ParticipantId>,
}

/// Teams to create for a round, in creation order: DJ, players, stealer.
pub fn plan_round_teams(assignment: &RoleAssignment) -> Vec<RoundTeamPlan> {
    let mut teams = Vec::with_capacity(3);
    teams.push(RoundTeamPlan {
        role: TeamRole::Dj,
        participant_ids: vec![assignment.dj.participant_id],
    });
    teams.push(RoundTeamPlan {
        role: TeamRole::Player,
        participant_ids: assignment
            .players
            .iter()
            .map(|p| p.participant_id)
            .collect(),
    });
    if let Some(stealer) = &assignment.stealer {
        teams.push(RoundTeamPlan {
            role: TeamRole::Stealer,
            participant_ids: vec![stealer.participant_id],
        });
    }
    teams
}

/// Next round number for a game that already has `existing_rounds` rounds.
#[inline]
pub fn next_round_number(existing_rounds: usize) -> u32 {
    u32::try_from(existing_rounds)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}
