//! Test support utilities for the game rules workspace.
//!
//! Provides unified logging initialization and log capture for unit and
//! integration tests.

pub mod logging;
