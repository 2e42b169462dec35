//! Seating for a new game.
//!
//! Players are picked in the order they should sit and may be dragged to a
//! different seat before the game starts. Seat numbers are handed out from 1
//! in that order and never change afterwards.

use tracing::debug;

use crate::domain::participants::{Participant, ParticipantId, PlayerId, PlayerProfile, SeatNumber};
use crate::errors::domain::{DomainError, ValidationKind};

/// Smallest table a game can start with.
pub const MIN_PLAYERS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatingPlan {
    players: Vec<PlayerProfile>,
}

impl SeatingPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_players(players: Vec<PlayerProfile>) -> Self {
        let mut plan = Self::new();
        for player in players {
            if !plan.contains(player.player_id) {
                plan.players.push(player);
            }
        }
        plan
    }

    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.player_id == player_id)
    }

    /// Select a player (taking the next seat) or deselect them if already picked.
    ///
    /// Returns `true` if the player is seated afterwards.
    pub fn toggle(&mut self, player: PlayerProfile) -> bool {
        if let Some(index) = self
            .players
            .iter()
            .position(|p| p.player_id == player.player_id)
        {
            self.players.remove(index);
            false
        } else {
            self.players.push(player);
            true
        }
    }

    /// Move the player at `from` to `to`, shifting everyone in between.
    pub fn move_seat(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        let len = self.players.len();
        if from >= len || to >= len {
            return Err(DomainError::invalid_input(
                ValidationKind::SeatOutOfRange,
                format!("cannot move seat {from} to {to} at a table of {len}"),
            ));
        }
        if from == to {
            return Ok(());
        }
        let player = self.players.remove(from);
        self.players.insert(to, player);
        Ok(())
    }

    /// Seat everyone, numbering seats from 1 and participant ids from
    /// `first_participant_id`.
    pub fn into_participants(
        self,
        first_participant_id: ParticipantId,
    ) -> Result<Vec<Participant>, DomainError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(DomainError::invalid_input(
                ValidationKind::TooFewPlayers,
                format!(
                    "a game needs at least {MIN_PLAYERS} players, got {}",
                    self.players.len()
                ),
            ));
        }

        let participants: Vec<Participant> = self
            .players
            .into_iter()
            .enumerate()
            .map(|(index, player)| {
                Participant::new(
                    first_participant_id + index as ParticipantId,
                    index as SeatNumber + 1,
                    player,
                )
            })
            .collect();

        debug!(seats = participants.len(), "table seated");
        Ok(participants)
    }
}
