//! Game standings and the all-time leaderboard.
//!
//! A team's points for a round count for every member of that team, so both
//! players of a two-person team get the full team score.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::games::{GameId, GameRecord};
use crate::domain::participants::{Participant, ParticipantId, PlayerId, PlayerProfile};
use crate::domain::rounds::RoundRecord;
use crate::domain::scoring::team_score;

/// Default number of rows on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub participant_id: ParticipantId,
    pub player: PlayerProfile,
    pub total_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: PlayerProfile,
    pub total_score: u32,
    pub games_played: usize,
}

/// Each team's score in each round, paired with the team members.
fn team_totals(rounds: &[RoundRecord]) -> impl Iterator<Item = (&[ParticipantId], u32)> + '_ {
    rounds.iter().flat_map(|round| {
        round.teams.iter().map(move |team| {
            (
                team.participant_ids.as_slice(),
                team_score(round, team.round_team_id),
            )
        })
    })
}

/// Per-participant totals for one game, highest first; ties keep seat order.
///
/// Team members who are not in `participants` are ignored.
pub fn game_standings(participants: &[Participant], rounds: &[RoundRecord]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = participants
        .iter()
        .map(|p| Standing {
            participant_id: p.participant_id,
            player: p.player.clone(),
            total_score: 0,
        })
        .collect();

    let index: HashMap<ParticipantId, usize> = standings
        .iter()
        .enumerate()
        .map(|(i, s)| (s.participant_id, i))
        .collect();

    for (members, score) in team_totals(rounds) {
        for id in members {
            if let Some(&i) = index.get(id) {
                standings[i].total_score += score;
            }
        }
    }

    // Stable: equal totals stay in the order participants were given.
    standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    standings
}

/// Player with the highest total, `None` for an empty roster.
pub fn game_winner(participants: &[Participant], rounds: &[RoundRecord]) -> Option<PlayerProfile> {
    game_standings(participants, rounds)
        .into_iter()
        .next()
        .map(|s| s.player)
}

/// Totals per player across games.
///
/// A game counts as played for every player who sat on a team in it. Players
/// without points are left out; the rest are sorted highest first (ties keep
/// first appearance) and cut to `limit`.
pub fn leaderboard(games: &[GameRecord], limit: usize) -> Vec<LeaderboardEntry> {
    struct Tally {
        player: PlayerProfile,
        total_score: u32,
        games: HashSet<GameId>,
    }

    let mut tallies: Vec<Tally> = Vec::new();
    let mut by_player: HashMap<PlayerId, usize> = HashMap::new();

    for game in games {
        let players: HashMap<ParticipantId, &PlayerProfile> = game
            .participants
            .iter()
            .map(|p| (p.participant_id, &p.player))
            .collect();

        for (members, score) in team_totals(&game.rounds) {
            for id in members {
                let Some(player) = players.get(id) else {
                    continue;
                };
                let i = *by_player.entry(player.player_id).or_insert_with(|| {
                    tallies.push(Tally {
                        player: (*player).clone(),
                        total_score: 0,
                        games: HashSet::new(),
                    });
                    tallies.len() - 1
                });
                tallies[i].total_score += score;
                tallies[i].games.insert(game.game_id);
            }
        }
    }

    let mut entries: Vec<LeaderboardEntry> = tallies
        .into_iter()
        .filter(|t| t.total_score > 0)
        .map(|t| LeaderboardEntry {
            player: t.player,
            total_score: t.total_score,
            games_played: t.games.len(),
        })
        .collect();
    entries.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    entries.truncate(limit);
    entries
}
