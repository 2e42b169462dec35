use crate::domain::fixtures::roster;
use crate::domain::roles::assign_roles_for_round;
use crate::domain::round_teams::{plan_round_teams, TeamRole};
use crate::domain::rounds::{RoundRecord, RoundSong, SONGS_PER_ROUND};
use crate::domain::scoring::{scoring_team_role, team_score, ScoreType, SongGuess};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

fn guess(artist: bool, title: bool, movie: bool, score_type: ScoreType) -> SongGuess {
    SongGuess {
        correct_artist: artist,
        correct_song_title: title,
        bonus_correct_movie: movie,
        score_type,
    }
}

/// Round 1 of a `n`-player table, teams numbered from 10.
fn round_for(n: usize) -> RoundRecord {
    let roles = assign_roles_for_round(&roster(n), 1, None).unwrap();
    RoundRecord::from_plans(1, 1, plan_round_teams(&roles), 10)
}

#[test]
fn points_count_artist_title_and_bonus() {
    assert_eq!(guess(false, false, false, ScoreType::Standard).points(), 0);
    assert_eq!(guess(true, false, false, ScoreType::Standard).points(), 1);
    assert_eq!(guess(true, true, false, ScoreType::Standard).points(), 2);
    assert_eq!(guess(true, true, true, ScoreType::Standard).points(), 3);
    assert_eq!(guess(false, true, true, ScoreType::Steal).points(), 2);
}

#[test]
fn movie_bonus_needs_artist_or_title() {
    let bonus_only = guess(false, false, true, ScoreType::Standard);
    assert!(!bonus_only.bonus_eligible());
    assert_eq!(bonus_only.points(), 0);
    assert!(!bonus_only.normalized().bonus_correct_movie);

    let with_artist = guess(true, false, true, ScoreType::Standard);
    assert!(with_artist.normalized().bonus_correct_movie);
}

#[test]
fn steals_go_to_the_stealer_team() {
    assert_eq!(scoring_team_role(ScoreType::Standard), TeamRole::Player);
    assert_eq!(scoring_team_role(ScoreType::Steal), TeamRole::Stealer);

    let mut round = round_for(4);
    // teams: 10 = DJ, 11 = players, 12 = stealer
    round
        .record_song(guess(true, true, false, ScoreType::Standard), SONGS_PER_ROUND)
        .unwrap();
    let stolen = round
        .record_song(guess(true, false, true, ScoreType::Steal), SONGS_PER_ROUND)
        .unwrap();
    assert_eq!(stolen.round_team_id, 12);

    assert_eq!(team_score(&round, 10), 0);
    assert_eq!(team_score(&round, 11), 2);
    assert_eq!(team_score(&round, 12), 2);
    assert_eq!(team_score(&round, 99), 0);
    assert_eq!(round.team_scores(), vec![(10, 0), (11, 2), (12, 2)]);
}

#[test]
fn recorded_songs_drop_ineligible_bonus() {
    let mut round = round_for(3);
    let song = round
        .record_song(guess(false, false, true, ScoreType::Standard), SONGS_PER_ROUND)
        .unwrap();
    assert!(!song.guess.bonus_correct_movie);
}

#[test]
fn steal_without_stealer_is_rejected() {
    let mut round = round_for(2);
    let err = round
        .record_song(guess(true, false, false, ScoreType::Steal), SONGS_PER_ROUND)
        .unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::NoStealerTeam));
    assert!(round.songs.is_empty());
}

#[test]
fn missing_player_team_is_not_found() {
    let mut round = round_for(4);
    round.teams.retain(|t| t.role != TeamRole::Player);
    let err = round
        .record_song(guess(true, false, false, ScoreType::Standard), SONGS_PER_ROUND)
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::RoundTeam, _)));
}

#[test]
fn round_completes_after_songs_per_round() {
    let mut round = round_for(4);
    for _ in 0..3 {
        assert!(!round.is_complete(3));
        round
            .record_song(guess(true, false, false, ScoreType::Standard), 3)
            .unwrap();
    }
    assert!(round.is_complete(3));

    let err = round
        .record_song(guess(true, false, false, ScoreType::Standard), 3)
        .unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::RoundFull));
    assert_eq!(team_score(&round, 11), 3);
}

#[test]
fn team_lookup_by_role_and_id() {
    let round = round_for(5);
    assert_eq!(round.team(TeamRole::Dj).map(|t| t.round_team_id), Some(10));
    assert_eq!(
        round.team_by_id(11).map(|t| t.participant_ids.clone()),
        Some(vec![102, 103])
    );
    assert!(round.team_by_id(13).is_none());
}

#[test]
fn guess_deserializes_with_default_score_type() {
    let parsed: SongGuess = serde_json::from_str(
        r#"{"correct_artist": true, "correct_song_title": false, "bonus_correct_movie": false}"#,
    )
    .unwrap();
    assert_eq!(parsed.score_type, ScoreType::Standard);

    let steal: ScoreType = serde_json::from_str("\"steal\"").unwrap();
    assert_eq!(steal, ScoreType::Steal);
}

#[test]
fn recorded_song_always_names_its_team() {
    let mut round = round_for(4);
    round
        .record_song(guess(true, false, false, ScoreType::Standard), SONGS_PER_ROUND)
        .unwrap();

    let json = serde_json::to_value(&round.songs[0]).unwrap();
    assert_eq!(json["round_team_id"], 11);

    let missing_team = serde_json::json!({ "guess": json["guess"].clone() });
    assert!(serde_json::from_value::<RoundSong>(missing_team).is_err());
}
