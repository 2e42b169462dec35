//! Round role assignment.
//!
//! Each round one participant is the DJ, up to two guess as players, one may
//! steal, and everybody else sits the round out. Roles move one seat per
//! round in seat order. With an all-time DJ the DJ stays pinned and only the
//! other participants rotate.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::participants::{Participant, ParticipantId};
use crate::domain::seats::rotated_for_round;
use crate::errors::domain::{DomainError, ValidationKind};

/// Role a participant holds for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Picks and plays songs; does not guess.
    Dj,
    /// Guesses artist and title for points.
    Player,
    /// May steal a song's points from the players.
    Stealer,
    /// Sits this round out.
    Inactive,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Dj, Role::Player, Role::Stealer, Role::Inactive];

    pub fn display_name(self) -> &'static str {
        match self {
            Role::Dj => "DJ",
            Role::Player => "Player",
            Role::Stealer => "Stealer",
            Role::Inactive => "Inactive",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

/// Roles for one round. Every input participant appears in exactly one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub dj: Participant,
    /// At most two, in rotated seat order.
    pub players: Vec<Participant>,
    pub stealer: Option<Participant>,
    pub inactive: Vec<Participant>,
}

impl RoleAssignment {
    /// Role held by `participant_id`, or `None` if they are not in this round.
    pub fn role_of(&self, participant_id: ParticipantId) -> Option<Role> {
        self.labels()
            .find(|(p, _)| p.participant_id == participant_id)
            .map(|(_, role)| role)
    }

    /// Every participant with their role: DJ, players, stealer, then inactive.
    pub fn labels(&self) -> impl Iterator<Item = (&Participant, Role)> + '_ {
        std::iter::once((&self.dj, Role::Dj))
            .chain(self.players.iter().map(|p| (p, Role::Player)))
            .chain(self.stealer.iter().map(|p| (p, Role::Stealer)))
            .chain(self.inactive.iter().map(|p| (p, Role::Inactive)))
    }

    /// Number of participants covered by this assignment.
    pub fn participant_count(&self) -> usize {
        1 + self.players.len() + usize::from(self.stealer.is_some()) + self.inactive.len()
    }
}

/// The non-DJ slots of a round.
#[derive(Debug, Default)]
struct Slots {
    players: Vec<Participant>,
    stealer: Option<Participant>,
    inactive: Vec<Participant>,
}

impl Slots {
    fn with_dj(self, dj: Participant) -> RoleAssignment {
        RoleAssignment {
            dj,
            players: self.players,
            stealer: self.stealer,
            inactive: self.inactive,
        }
    }
}

/// Assign roles for a 1-based `round_number`.
///
/// `participants` must be sorted by seat number. When `fixed_dj` names a
/// participant that is not in the roster the regular seat rotation is used
/// and a warning is logged; the caller most likely passed a stale id.
///
/// Errors with `InvalidInput` for an empty roster, round 0, or an all-time
/// DJ who is the only participant.
pub fn assign_roles_for_round(
    participants: &[Participant],
    round_number: u32,
    fixed_dj: Option<ParticipantId>,
) -> Result<RoleAssignment, DomainError> {
    if participants.is_empty() {
        return Err(DomainError::invalid_input(
            ValidationKind::EmptyRoster,
            "cannot assign roles without participants",
        ));
    }
    if round_number == 0 {
        return Err(DomainError::invalid_input(
            ValidationKind::InvalidRoundNumber,
            "round numbers start at 1",
        ));
    }

    let assignment = match fixed_dj {
        None => assign_rotating(participants, round_number)?,
        Some(dj_id) => match participants.iter().find(|p| p.participant_id == dj_id) {
            Some(dj) => assign_with_fixed_dj(participants, dj, round_number)?,
            None => {
                warn!(
                    fixed_dj = dj_id,
                    participants = participants.len(),
                    round_number,
                    "all-time DJ is not in the roster; falling back to seat rotation"
                );
                assign_rotating(participants, round_number)?
            }
        },
    };

    let player_ids: Vec<ParticipantId> =
        assignment.players.iter().map(|p| p.participant_id).collect();
    let stealer_id = assignment.stealer.as_ref().map(|p| p.participant_id);
    debug!(
        round_number,
        dj = assignment.dj.participant_id,
        players = ?player_ids,
        stealer = ?stealer_id,
        inactive = assignment.inactive.len(),
        "roles assigned"
    );

    Ok(assignment)
}

/// Everybody rotates: the first seat after rotation is the DJ.
fn assign_rotating(
    participants: &[Participant],
    round_number: u32,
) -> Result<RoleAssignment, DomainError> {
    let rotated = rotated_for_round(participants, round_number);
    let Some((dj, rest)) = rotated.split_first() else {
        return Err(DomainError::invalid_input(
            ValidationKind::EmptyRoster,
            "cannot assign roles without participants",
        ));
    };
    Ok(rotating_slots(rest).with_dj(dj.clone()))
}

/// Slots by total table size N (DJ included); `rest` is rotated[1..].
fn rotating_slots(rest: &[Participant]) -> Slots {
    match rest {
        // N = 1: the DJ plays alone.
        [] => Slots::default(),
        // N = 2: one player, no stealer.
        [player] => Slots {
            players: vec![player.clone()],
            ..Slots::default()
        },
        // N = 3: one player, one stealer.
        [player, stealer] => Slots {
            players: vec![player.clone()],
            stealer: Some(stealer.clone()),
            ..Slots::default()
        },
        // N = 4: a team of two, one stealer.
        [first, second, stealer] => Slots {
            players: vec![first.clone(), second.clone()],
            stealer: Some(stealer.clone()),
            ..Slots::default()
        },
        // N >= 5: a team of two, one stealer, everyone else inactive.
        [first, second, stealer, inactive @ ..] => Slots {
            players: vec![first.clone(), second.clone()],
            stealer: Some(stealer.clone()),
            inactive: inactive.to_vec(),
        },
    }
}

/// The DJ is pinned; everyone else rotates through the remaining slots.
fn assign_with_fixed_dj(
    participants: &[Participant],
    dj: &Participant,
    round_number: u32,
) -> Result<RoleAssignment, DomainError> {
    let remaining: Vec<Participant> = participants
        .iter()
        .filter(|p| p.participant_id != dj.participant_id)
        .cloned()
        .collect();

    if remaining.is_empty() {
        return Err(DomainError::invalid_input(
            ValidationKind::DjOnlyRoster,
            format!(
                "all-time DJ {} is the only participant; nobody is left to play",
                dj.participant_id
            ),
        ));
    }

    let rotated = rotated_for_round(&remaining, round_number);
    Ok(fixed_dj_slots(&rotated).with_dj(dj.clone()))
}

/// Slots by remaining count M (DJ excluded).
fn fixed_dj_slots(remaining: &[Participant]) -> Slots {
    match remaining {
        [] => Slots::default(),
        // M = 1: the one other participant plays.
        [player] => Slots {
            players: vec![player.clone()],
            ..Slots::default()
        },
        // M = 2: one player, one stealer.
        [player, stealer] => Slots {
            players: vec![player.clone()],
            stealer: Some(stealer.clone()),
            ..Slots::default()
        },
        // M = 3: a team of two, one stealer.
        [first, second, stealer] => Slots {
            players: vec![first.clone(), second.clone()],
            stealer: Some(stealer.clone()),
            ..Slots::default()
        },
        // M >= 4: a team of two, one stealer, everyone else inactive.
        [first, second, stealer, inactive @ ..] => Slots {
            players: vec![first.clone(), second.clone()],
            stealer: Some(stealer.clone()),
            inactive: inactive.to_vec(),
        },
    }
}
