use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::board::{Board, GamePhase};
use crate::piece::PieceShape;
use crate::types::{BlockColor, Orientation, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub color: BlockColor,
    pub orientation: Orientation,
    pub column: i32,
    pub row: i32,
    pub blocks: [(i32, i32); 4],
}

impl From<&PieceShape> for PieceSnapshot {
    fn from(value: &PieceShape) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            orientation: value.orientation(),
            column: value.column(),
            row: value.row(),
            blocks: (*value.blocks()).map(|b| b.position()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: usize,
    pub rows: usize,
    /// Row-major settled cells
    pub cells: Vec<Option<BlockColor>>,
    pub falling: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub phase: GamePhase,
}

impl BoardSnapshot {
    /// Settled color at (column, row); `None` when empty or off the board
    pub fn cell(&self, column: usize, row: usize) -> Option<BlockColor> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(row * self.columns + column).copied().flatten()
    }

    pub fn settled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let grid = board.grid();
        Self {
            columns: grid.columns(),
            rows: grid.rows(),
            cells: grid.cells().iter().map(|c| c.as_ref().map(Block::color)).collect(),
            falling: board.falling_piece().map(PieceSnapshot::from),
            next: board.next_piece().map(PieceSnapshot::from),
            phase: board.phase(),
        }
    }
}
