//! Gameplay settings.
//!
//! Settings are stored as string key/value pairs (`SONGS_PER_ROUND`,
//! `ALL_TIME_DJ`, ...). This module gives them a typed shape, filling in
//! defaults for anything unset and keeping unknown keys under `custom`.
//!
//! # Example JSON
//!
//! ```json
//! {"songs_per_round": 8, "all_time_dj": 12, "house_rules": "no humming"}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::domain::participants::ParticipantId;
use crate::domain::rounds::SONGS_PER_ROUND;
use crate::domain::standings::LEADERBOARD_SIZE;
use crate::errors::domain::{DomainError, ValidationKind};

pub const KEY_SONGS_PER_ROUND: &str = "SONGS_PER_ROUND";
pub const KEY_LEADERBOARD_SIZE: &str = "LEADERBOARD_SIZE";
pub const KEY_ALL_TIME_DJ: &str = "ALL_TIME_DJ";
pub const KEY_SPOTIFY_PLAYLIST: &str = "SPOTIFY_PLAYLIST";

fn default_songs_per_round() -> usize {
    SONGS_PER_ROUND
}

fn default_leaderboard_size() -> usize {
    LEADERBOARD_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameplaySettings {
    /// Songs played per round before the round is complete.
    #[serde(default = "default_songs_per_round")]
    pub songs_per_round: usize,

    /// Rows shown on the all-time leaderboard.
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,

    /// Participant pinned as DJ for every round, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_time_dj: Option<ParticipantId>,

    /// Playlist songs are picked from. Opaque to the rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_playlist: Option<String>,

    /// Settings these rules do not interpret.
    #[serde(flatten)]
    pub custom: Map<String, JsonValue>,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            songs_per_round: SONGS_PER_ROUND,
            leaderboard_size: LEADERBOARD_SIZE,
            all_time_dj: None,
            spotify_playlist: None,
            custom: Map::new(),
        }
    }
}

impl GameplaySettings {
    /// Parse settings from JSON. `None` yields the defaults.
    pub fn from_json(config: Option<&JsonValue>) -> Result<Self, DomainError> {
        let Some(json) = config else {
            return Ok(Self::default());
        };
        let settings: Self = serde_json::from_value(json.clone()).map_err(|e| {
            DomainError::invalid_input(ValidationKind::InvalidSetting, e.to_string())
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Build settings from stored key/value rows.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            settings.upsert(key, value)?;
        }
        Ok(settings)
    }

    /// Set one stored setting, replacing any previous value.
    ///
    /// An empty `ALL_TIME_DJ` or `SPOTIFY_PLAYLIST` clears it.
    pub fn upsert(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        let value = value.trim();
        match key {
            KEY_SONGS_PER_ROUND => {
                self.songs_per_round = parse_count(key, value)?;
            }
            KEY_LEADERBOARD_SIZE => {
                self.leaderboard_size = parse_count(key, value)?;
            }
            KEY_ALL_TIME_DJ => {
                self.all_time_dj = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|_| {
                        DomainError::invalid_input(
                            ValidationKind::InvalidSetting,
                            format!("{key} must be a participant id, got {value:?}"),
                        )
                    })?)
                };
            }
            KEY_SPOTIFY_PLAYLIST => {
                self.spotify_playlist = (!value.is_empty()).then(|| value.to_string());
            }
            _ => {
                self.custom
                    .insert(key.to_string(), JsonValue::String(value.to_string()));
            }
        }
        Ok(())
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.songs_per_round == 0 {
            return Err(DomainError::invalid_input(
                ValidationKind::InvalidSetting,
                "songs_per_round must be at least 1",
            ));
        }
        if self.leaderboard_size == 0 {
            return Err(DomainError::invalid_input(
                ValidationKind::InvalidSetting,
                "leaderboard_size must be at least 1",
            ));
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, DomainError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DomainError::invalid_input(
            ValidationKind::InvalidSetting,
            format!("{key} must be a positive integer, got {value:?}"),
        )),
    }
}
