//! Core game logic for one snake session
//!
//! This module contains all the gameplay rules without any I/O or rendering
//! dependencies, so it can be driven directly from tests.

pub mod action;
pub mod config;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use session::{GameSession, TickResult};
pub use state::{Position, Snake};
