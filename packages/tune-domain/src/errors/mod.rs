//! Error handling for the game rules.

pub mod domain;

pub use domain::{DomainError, NotFoundKind, ValidationKind};
