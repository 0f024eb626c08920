//! Core Connect Four game logic: board representation, player identifiers,
//! and the turn/lifecycle state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, HEIGHT, WIDTH};
pub use player::Player;
pub use state::{DropOutcome, GameState, GameStatus, StatusSnapshot};
