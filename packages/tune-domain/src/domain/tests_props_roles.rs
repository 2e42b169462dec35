//! Property tests for role assignment (pure domain, no I/O).
//!
//! Rules checked:
//! - every participant lands in exactly one slot
//! - identical inputs give identical assignments
//! - over one full rotation each participant is DJ exactly once
//! - every participant holds each active slot once per full rotation
//! - an all-time DJ stays DJ; everyone else cycles through each slot once
//! - slot sizes follow the table size

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::participants::ParticipantId;
use crate::domain::roles::{assign_roles_for_round, Role, RoleAssignment};
use crate::domain::test_gens;
use crate::domain::test_prelude;

/// Active slot positions; the two player seats are told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Slot {
    Dj,
    Player(usize),
    Stealer,
}

fn active_slots(roles: &RoleAssignment) -> impl Iterator<Item = (ParticipantId, Slot)> + '_ {
    std::iter::once((roles.dj.participant_id, Slot::Dj))
        .chain(
            roles
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| (p.participant_id, Slot::Player(i))),
        )
        .chain(roles.stealer.iter().map(|p| (p.participant_id, Slot::Stealer)))
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: the assignment partitions the roster
    #[test]
    fn prop_every_participant_exactly_once(
        people in test_gens::roster(1, 12),
        round in test_gens::round_number(),
    ) {
        let roles = assign_roles_for_round(&people, round, None).unwrap();

        let mut seen: Vec<ParticipantId> = roles.labels().map(|(p, _)| p.participant_id).collect();
        let mut expected: Vec<ParticipantId> = people.iter().map(|p| p.participant_id).collect();
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(roles.participant_count(), people.len());
    }

    /// Property: same partition with an all-time DJ
    #[test]
    fn prop_partition_with_all_time_dj(
        (people, dj_index) in test_gens::roster_with_dj(2, 12),
        round in test_gens::round_number(),
    ) {
        let dj_id = people[dj_index].participant_id;
        let roles = assign_roles_for_round(&people, round, Some(dj_id)).unwrap();

        let mut seen: Vec<ParticipantId> = roles.labels().map(|(p, _)| p.participant_id).collect();
        let mut expected: Vec<ParticipantId> = people.iter().map(|p| p.participant_id).collect();
        seen.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    /// Property: no hidden state
    #[test]
    fn prop_deterministic(
        (people, dj_index) in test_gens::roster_with_dj(2, 10),
        round in test_gens::round_number(),
        pin in any::<bool>(),
    ) {
        let fixed = pin.then(|| people[dj_index].participant_id);
        let a = assign_roles_for_round(&people, round, fixed).unwrap();
        let b = assign_roles_for_round(&people, round, fixed).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Property: each participant is DJ exactly once per N consecutive rounds
    #[test]
    fn prop_dj_rotates_through_everyone(
        people in test_gens::roster(2, 10),
        start in test_gens::round_number(),
    ) {
        let n = people.len() as u32;
        let mut dj_counts: HashMap<ParticipantId, u32> = HashMap::new();
        for round in start..start + n {
            let roles = assign_roles_for_round(&people, round, None).unwrap();
            *dj_counts.entry(roles.dj.participant_id).or_default() += 1;
        }
        prop_assert_eq!(dj_counts.len(), people.len());
        prop_assert!(dj_counts.values().all(|&c| c == 1));
    }

    /// Property: consecutive rounds move the DJ one seat along
    #[test]
    fn prop_dj_advances_one_seat(
        people in test_gens::roster(2, 10),
        round in test_gens::round_number(),
    ) {
        let now = assign_roles_for_round(&people, round, None).unwrap();
        let next = assign_roles_for_round(&people, round + 1, None).unwrap();
        let seat = people.iter().position(|p| p == &now.dj).unwrap();
        prop_assert_eq!(&next.dj, &people[(seat + 1) % people.len()]);
    }

    /// Property: an all-time DJ is DJ in every round
    #[test]
    fn prop_all_time_dj_is_pinned(
        (people, dj_index) in test_gens::roster_with_dj(2, 10),
        round in test_gens::round_number(),
    ) {
        let dj_id = people[dj_index].participant_id;
        let roles = assign_roles_for_round(&people, round, Some(dj_id)).unwrap();
        prop_assert_eq!(roles.dj.participant_id, dj_id);
        prop_assert_eq!(roles.role_of(dj_id), Some(Role::Dj));
    }

    /// Property: over N consecutive rounds each participant holds every
    /// active slot exactly once
    #[test]
    fn prop_rotation_visits_every_slot_once(
        people in test_gens::roster(1, 10),
        start in test_gens::round_number(),
    ) {
        let n = people.len();
        let mut tally: HashMap<(ParticipantId, Slot), u32> = HashMap::new();
        for round in start..start + n as u32 {
            let roles = assign_roles_for_round(&people, round, None).unwrap();
            for key in active_slots(&roles) {
                *tally.entry(key).or_default() += 1;
            }
        }

        prop_assert_eq!(tally.len(), n * n.min(4));
        prop_assert!(tally.values().all(|&c| c == 1));
    }

    /// Property: with an all-time DJ, each other participant holds every
    /// active slot exactly once per M consecutive rounds
    #[test]
    fn prop_all_time_dj_rotates_the_rest(
        (people, dj_index) in test_gens::roster_with_dj(2, 10),
        start in test_gens::round_number(),
    ) {
        let dj_id = people[dj_index].participant_id;
        let m = people.len() - 1;

        let mut tally: HashMap<(ParticipantId, Slot), u32> = HashMap::new();
        for round in start..start + m as u32 {
            let roles = assign_roles_for_round(&people, round, Some(dj_id)).unwrap();
            for key in active_slots(&roles).filter(|(_, slot)| *slot != Slot::Dj) {
                *tally.entry(key).or_default() += 1;
            }
        }

        prop_assert_eq!(tally.len(), m * m.min(3));
        prop_assert!(tally.keys().all(|(id, _)| *id != dj_id));
        prop_assert!(tally.values().all(|&c| c == 1));
    }

    /// Property: slot sizes depend only on the table size
    #[test]
    fn prop_slot_sizes_follow_table_size(
        people in test_gens::roster(1, 12),
        round in test_gens::round_number(),
    ) {
        let n = people.len();
        let roles = assign_roles_for_round(&people, round, None).unwrap();

        let expected_players = match n { 1 => 0, 2 | 3 => 1, _ => 2 };
        prop_assert_eq!(roles.players.len(), expected_players);
        prop_assert_eq!(roles.stealer.is_some(), n >= 3);
        prop_assert_eq!(roles.inactive.len(), n.saturating_sub(4));
    }

    /// Property: with an all-time DJ, slot sizes depend only on the remaining count
    #[test]
    fn prop_all_time_dj_slot_sizes(
        (people, dj_index) in test_gens::roster_with_dj(2, 12),
        round in test_gens::round_number(),
    ) {
        let m = people.len() - 1;
        let dj_id = people[dj_index].participant_id;
        let roles = assign_roles_for_round(&people, round, Some(dj_id)).unwrap();

        let expected_players = match m { 1 | 2 => 1, _ => 2 };
        prop_assert_eq!(roles.players.len(), expected_players);
        prop_assert_eq!(roles.stealer.is_some(), m >= 2);
        prop_assert_eq!(roles.inactive.len(), m.saturating_sub(3));
    }
}
