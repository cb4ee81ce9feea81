//! Snake Arcade - a single-screen arcade snake game for the terminal
//!
//! This library provides:
//! - Core game logic with toroidal movement (game module)
//! - Top-10 score persistence (store module)
//! - Key event mapping (input module)
//! - TUI rendering for each screen (render module)
//! - The screen state machine and main loop (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod store;
