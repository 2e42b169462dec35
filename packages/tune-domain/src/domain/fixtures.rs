//! Rosters for unit tests.

use crate::domain::participants::{Participant, PlayerProfile};

/// `n` participants seated 1..=n, with participant ids 101.. and player ids 1..
pub fn roster(n: usize) -> Vec<Participant> {
    (1..=n)
        .map(|seat| {
            Participant::new(
                100 + seat as i64,
                seat as u32,
                PlayerProfile::new(seat as i64, format!("P{seat}")),
            )
        })
        .collect()
}

/// Participant ids of a slice, in order.
pub fn ids(participants: &[Participant]) -> Vec<i64> {
    participants.iter().map(|p| p.participant_id).collect()
}
