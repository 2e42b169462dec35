//! Role schedule across consecutive rounds.

use serde::Serialize;
use tune_domain::domain::{
    assign_roles_for_round, plan_round_teams, Participant, ParticipantId, RoleAssignment,
    RoundTeamPlan,
};
use tune_domain::DomainError;

#[derive(Debug, Clone, Serialize)]
pub struct ScheduledRound {
    pub round_number: u32,
    pub roles: RoleAssignment,
    pub teams: Vec<RoundTeamPlan>,
}

/// One row of the CSV summary.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub round_number: u32,
    pub dj: String,
    pub players: String,
    pub stealer: String,
    pub inactive: String,
}

fn names(participants: &[Participant]) -> String {
    participants
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(";")
}

impl From<&ScheduledRound> for CsvSummaryRow {
    fn from(round: &ScheduledRound) -> Self {
        Self {
            round_number: round.round_number,
            dj: round.roles.dj.name().to_string(),
            players: names(&round.roles.players),
            stealer: round
                .roles
                .stealer
                .as_ref()
                .map(|p| p.name().to_string())
                .unwrap_or_default(),
            inactive: names(&round.roles.inactive),
        }
    }
}

/// Rounds needed for everyone to rotate through every slot once.
pub fn full_rotation(participants: &[Participant], all_time_dj: Option<ParticipantId>) -> u32 {
    let pinned = all_time_dj
        .map(|id| participants.iter().any(|p| p.participant_id == id))
        .unwrap_or(false);
    let rotating = if pinned {
        participants.len().saturating_sub(1)
    } else {
        participants.len()
    };
    rotating.max(1) as u32
}

/// Assign roles for `rounds` rounds starting at `start_round`.
pub fn build_schedule(
    participants: &[Participant],
    start_round: u32,
    rounds: u32,
    all_time_dj: Option<ParticipantId>,
) -> Result<Vec<ScheduledRound>, DomainError> {
    (start_round..start_round.saturating_add(rounds))
        .map(|round_number| {
            let roles = assign_roles_for_round(participants, round_number, all_time_dj)?;
            let teams = plan_round_teams(&roles);
            Ok(ScheduledRound {
                round_number,
                roles,
                teams,
            })
        })
        .collect()
}
