//! Game rules for Name That Tune.
//!
//! Everything in this crate is pure: role rotation, seating, round teams,
//! song scoring and standings. Persistence, HTTP and playback live in the
//! callers.

pub mod config;
pub mod domain;
pub mod errors;

pub use config::GameplaySettings;
pub use domain::{assign_roles_for_round, Participant, Role, RoleAssignment};
pub use errors::DomainError;
