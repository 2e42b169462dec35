//! Domain layer: pure game rules and the types they work on.

pub mod games;
pub mod participants;
pub mod roles;
pub mod round_teams;
pub mod rounds;
pub mod scoring;
pub mod seating;
pub mod seats;
pub mod standings;

#[cfg(test)]
pub(crate) mod fixtures;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_roles;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use games::{duration_label, GameId, GameRecord};
pub use participants::{
    sort_by_seat, validate_roster, Participant, ParticipantId, PlayerId, PlayerProfile,
    SeatNumber,
};
pub use roles::{assign_roles_for_round, Role, RoleAssignment};
pub use round_teams::{next_round_number, plan_round_teams, RoundTeamPlan, TeamRole};
pub use rounds::{RoundId, RoundRecord, RoundSong, RoundTeam, RoundTeamId, SONGS_PER_ROUND};
pub use scoring::{scoring_team_role, team_score, ScoreType, SongGuess};
pub use seating::{SeatingPlan, MIN_PLAYERS};
pub use standings::{game_standings, game_winner, leaderboard, LeaderboardEntry, Standing};
