// Proptest generators for domain types.
// Rosters always have unique participant ids and strictly increasing seats.

use proptest::prelude::*;

use crate::domain::participants::{Participant, PlayerProfile};

/// Generate a seat-ordered roster of `min..=max` participants.
///
/// Seat numbers have random gaps and participant ids are shuffled so tests
/// cannot lean on ids matching seats.
pub fn roster(min: usize, max: usize) -> impl Strategy<Value = Vec<Participant>> {
    (min..=max)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(1u32..=3, n),
                Just((1..=n as i64).collect::<Vec<i64>>()).prop_shuffle(),
            )
        })
        .prop_map(|(gaps, ids)| {
            let mut seat = 0u32;
            gaps.into_iter()
                .zip(ids)
                .map(|(gap, id)| {
                    seat += gap;
                    Participant::new(
                        id * 10,
                        seat,
                        PlayerProfile::new(id, format!("Player {id}")),
                    )
                })
                .collect()
        })
}

/// Generate a 1-based round number.
pub fn round_number() -> impl Strategy<Value = u32> {
    1u32..=500
}

/// Generate a roster together with the index of the participant pinned as DJ.
pub fn roster_with_dj(
    min: usize,
    max: usize,
) -> impl Strategy<Value = (Vec<Participant>, usize)> {
    roster(min, max).prop_flat_map(|people| {
        let len = people.len();
        (Just(people), 0..len)
    })
}
