//! Rosters for the planner: loaded from JSON or generated.

use std::fs;
use std::path::Path;

use tune_domain::domain::{sort_by_seat, validate_roster, Participant, PlayerProfile, SeatingPlan};

/// Load participants from a JSON array, seat-ordered and validated.
pub fn load_roster(path: &Path) -> Result<Vec<Participant>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("failed to read roster {}: {e}", path.display()))?;
    parse_roster(&contents)
}

pub fn parse_roster(json: &str) -> Result<Vec<Participant>, Box<dyn std::error::Error>> {
    let mut participants: Vec<Participant> = serde_json::from_str(json)?;
    sort_by_seat(&mut participants);
    validate_roster(&participants)?;
    Ok(participants)
}

/// `count` players named "Player 1".."Player N", seated in that order.
pub fn generated_roster(count: usize) -> Result<Vec<Participant>, Box<dyn std::error::Error>> {
    let players = (1..=count)
        .map(|i| PlayerProfile::new(i as i64, format!("Player {i}")))
        .collect();
    Ok(SeatingPlan::from_players(players).into_participants(1)?)
}
