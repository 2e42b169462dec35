//! Participants: players seated at a game.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub type ParticipantId = i64;
pub type PlayerId = i64;
/// 1-based table position, fixed when the game is created.
pub type SeatNumber = u32;

/// A player profile as shown at the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PlayerProfile {
    pub fn new(player_id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player_id,
            name: name.into(),
            image_url: None,
        }
    }
}

/// A player's seat in one game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub participant_id: ParticipantId,
    pub seat_number: SeatNumber,
    pub player: PlayerProfile,
}

impl Participant {
    pub fn new(participant_id: ParticipantId, seat_number: SeatNumber, player: PlayerProfile) -> Self {
        Self {
            participant_id,
            seat_number,
            player,
        }
    }

    pub fn name(&self) -> &str {
        &self.player.name
    }
}

/// Order participants by ascending seat number, the order role rotation expects.
pub fn sort_by_seat(participants: &mut [Participant]) {
    participants.sort_by_key(|p| p.seat_number);
}

/// Check that a roster has unique participant ids and unique, positive seats.
pub fn validate_roster(participants: &[Participant]) -> Result<(), DomainError> {
    let mut ids = HashSet::with_capacity(participants.len());
    let mut seats = HashSet::with_capacity(participants.len());

    for p in participants {
        if p.seat_number == 0 {
            return Err(DomainError::invalid_input(
                ValidationKind::InvalidSeat,
                format!("participant {} has seat 0; seats are 1-based", p.participant_id),
            ));
        }
        if !ids.insert(p.participant_id) {
            return Err(DomainError::invalid_input(
                ValidationKind::DuplicateParticipant,
                format!("participant {} appears more than once", p.participant_id),
            ));
        }
        if !seats.insert(p.seat_number) {
            return Err(DomainError::invalid_input(
                ValidationKind::InvalidSeat,
                format!("seat {} is taken twice", p.seat_number),
            ));
        }
    }

    Ok(())
}
