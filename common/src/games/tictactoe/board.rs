use super::error::GameError;
use super::types::Mark;
use super::win_detector::has_line;

pub const CELL_COUNT: usize = 9;
pub const WIN_SCORE: i32 = 10;

/// The 3x3 grid, indexed 0..=8 in row-major order.
///
/// `Board` is deliberately not `Copy`: the search engine clones it once per
/// candidate move so no two branches ever share a grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Mark, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::OutOfBounds(index as i64))
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if mark == Mark::Empty {
            return Err(GameError::InvalidCell);
        }
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::OutOfBounds(index as i64))?;
        if *cell != Mark::Empty {
            return Err(GameError::CellOccupied(index));
        }
        *cell = mark;
        Ok(())
    }

    /// Returns a copy with `mark` placed at `index`, leaving `self` untouched.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, GameError> {
        let mut next = self.clone();
        next.place(index, mark)?;
        Ok(next)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn winner_x(&self) -> bool {
        has_line(&self.cells, Mark::X)
    }

    pub fn winner_o(&self) -> bool {
        has_line(&self.cells, Mark::O)
    }

    pub fn is_game_over(&self) -> bool {
        self.winner_x() || self.winner_o() || self.is_full()
    }

    /// Terminal score seen from `O`: faster wins score higher, slower losses
    /// score less negative. `depth` counts plies from the root of the search.
    pub fn evaluate(&self, depth: usize) -> i32 {
        let depth = depth as i32;
        if self.winner_o() {
            return WIN_SCORE - depth;
        }
        if self.winner_x() {
            return depth - WIN_SCORE;
        }
        0
    }
}
