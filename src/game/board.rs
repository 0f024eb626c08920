use std::fmt;

use crate::error::BoardError;

use super::Player;

/// Default number of columns.
pub const WIDTH: usize = 7;
/// Default number of rows.
pub const HEIGHT: usize = 6;

/// Pieces in a row needed to win.
const LINE: usize = 4;

/// Ray directions as (row step, column step): horizontal, vertical,
/// down-right and down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Grid of `height` rows by `width` columns. Row 0 is the top; pieces settle
/// at the highest free row index of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self::empty(width, height))
    }

    /// Create an empty board with the standard 7x6 layout
    pub fn standard() -> Self {
        Self::empty(WIDTH, HEIGHT)
    }

    /// Empty board with the same dimensions
    pub fn cleared(&self) -> Self {
        Self::empty(self.width, self.height)
    }

    /// Dimensions must already be checked non-zero.
    fn empty(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, `None` if outside the board
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Row a piece dropped into `column` would land on, or `None` when the
    /// column is full. Does not mutate the board.
    pub fn drop_location(&self, column: usize) -> Result<Option<usize>, BoardError> {
        if column >= self.width {
            return Err(BoardError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row][column] == Cell::Empty))
    }

    /// Record `owner` at (row, column). The cell must be empty; callers get
    /// the row from [`Board::drop_location`].
    pub fn occupy(&mut self, row: usize, column: usize, owner: Player) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(BoardError::OutOfRange { row, column })?;

        if *cell != Cell::Empty {
            return Err(BoardError::ColumnFull { column });
        }

        *cell = owner.to_cell();
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Whether `player` owns four in a row anywhere on the board
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// First line of four owned by `player`, scanning every cell as a line
    /// start in all four directions.
    pub fn winning_line(&self, player: Player) -> Option<[(usize, usize); 4]> {
        let target = player.to_cell();
        for row in 0..self.height {
            for column in 0..self.width {
                for &direction in &DIRECTIONS {
                    let Some(ray) = self.ray(row, column, direction) else {
                        continue;
                    };
                    if ray.iter().all(|&(r, c)| self.cells[r][c] == target) {
                        return Some(ray);
                    }
                }
            }
        }
        None
    }

    /// The four coordinates starting at (row, column) in `direction`, or
    /// `None` if any of them falls off the board.
    fn ray(
        &self,
        row: usize,
        column: usize,
        (d_row, d_col): (isize, isize),
    ) -> Option<[(usize, usize); LINE]> {
        let mut ray = [(0, 0); LINE];
        for (i, slot) in ray.iter_mut().enumerate() {
            let r = row.checked_add_signed(d_row * i as isize)?;
            let c = column.checked_add_signed(d_col * i as isize)?;
            if r >= self.height || c >= self.width {
                return None;
            }
            *slot = (r, c);
        }
        Some(ray)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Occupied(Player::Player1) => "1",
                    Cell::Occupied(Player::Player2) => "2",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.width).map(|c| (c % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
