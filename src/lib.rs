//! # Connect Four
//!
//! A two-player Connect Four engine with a console front end.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, moves, players, turn-enforcing engine
//! - [`ui`] — Console game loop and board rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
