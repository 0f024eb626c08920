//! # Connect Four
//!
//! A Connect Four rules engine with a terminal front end built on Ratatui.
//! The engine owns the board, drop resolution, win/tie detection and turn
//! order; front ends only call [`game::GameState`] and render what it returns.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`script`] — Headless play from a list of columns
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod script;
pub mod ui;
