//! Domain-level error type used by every rule in this crate.
//!
//! Callers (round setup, scoring screens, the planner CLI) map these onto
//! whatever surface they expose. Nothing here knows about HTTP or storage.

use thiserror::Error;

/// Which input rule was broken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    EmptyRoster,
    DjOnlyRoster,
    InvalidRoundNumber,
    DuplicateParticipant,
    InvalidSeat,
    TooFewPlayers,
    SeatOutOfRange,
    NoStealerTeam,
    RoundFull,
    InvalidSetting,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Participant,
    RoundTeam,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input rejected by a game rule
    #[error("invalid input {0:?}: {1}")]
    InvalidInput(ValidationKind, String),
    /// Missing entity in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn invalid_input(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::InvalidInput(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// The broken rule, when this is an `InvalidInput`.
    pub fn validation_kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::InvalidInput(kind, _) => Some(kind),
            DomainError::NotFound(..) => None,
        }
    }
}
