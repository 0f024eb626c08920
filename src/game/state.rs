use std::fmt;

use tracing::{debug, info, instrument};

use crate::error::{BoardError, MoveError};

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "won by {player}"),
            GameStatus::Tied => write!(f, "tied"),
        }
    }
}

/// Result of an accepted drop. `cell` is the (row, column) the piece landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Continue {
        cell: (usize, usize),
        next_player: Player,
    },
    Won {
        cell: (usize, usize),
        winner: Player,
    },
    Tied {
        cell: (usize, usize),
    },
}

impl DropOutcome {
    pub fn cell(&self) -> (usize, usize) {
        match *self {
            DropOutcome::Continue { cell, .. }
            | DropOutcome::Won { cell, .. }
            | DropOutcome::Tied { cell } => cell,
        }
    }
}

/// Read-only view of the state machine for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub status: GameStatus,
    pub current_player: Player,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    moves_played: usize,
}

impl GameState {
    /// Create a fresh game on the standard board
    pub fn new() -> Self {
        Self::with_board(Board::standard())
    }

    /// Create a fresh game on an empty board of the given dimensions
    pub fn with_dimensions(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(width, height)?))
    }

    fn with_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::Player1,
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            status: self.status,
            current_player: self.current_player,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Rejected drops leave the game untouched. An accepted drop either ends
    /// the game (the mover wins, or the board fills) or hands the turn over.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }

        let row = self
            .board
            .drop_location(column)
            .map_err(|_| MoveError::InvalidColumn {
                column,
                width: self.board.width(),
            })?
            .ok_or(MoveError::ColumnFull { column })?;

        // drop_location just found this cell empty
        self.board
            .occupy(row, column, self.current_player)
            .map_err(|_| MoveError::ColumnFull { column })?;
        self.moves_played += 1;
        debug!(row, column, moves = self.moves_played, "piece placed");

        let mover = self.current_player;
        let cell = (row, column);

        if self.board.check_win(mover) {
            self.status = GameStatus::Won(mover);
            info!(winner = %mover, moves = self.moves_played, "game won");
            return Ok(DropOutcome::Won {
                cell,
                winner: mover,
            });
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!(moves = self.moves_played, "game tied");
            return Ok(DropOutcome::Tied { cell });
        }

        self.current_player = mover.other();
        Ok(DropOutcome::Continue {
            cell,
            next_player: self.current_player,
        })
    }

    /// Whether `player` has four in a row on the current board
    pub fn check_win(&self, player: Player) -> bool {
        self.board.check_win(player)
    }

    /// Throw away the current game and start a new one on a board of the
    /// same size.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn reset(&mut self) {
        *self = Self::with_board(self.board.cleared());
        info!("game reset");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
