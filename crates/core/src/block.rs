//! Block module - a single colored cell of a piece or of the settled stack

use serde::{Deserialize, Serialize};

use crate::types::BlockColor;

/// One unit cell with a fixed color and a movable board position
///
/// Equality and hashing cover column, row and color together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    column: i32,
    row: i32,
    color: BlockColor,
}

impl Block {
    pub fn new(column: i32, row: i32, color: BlockColor) -> Self {
        Self { column, row, color }
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    /// (column, row)
    pub fn position(&self) -> (i32, i32) {
        (self.column, self.row)
    }

    pub fn set_position(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
    }

    pub(crate) fn set_column(&mut self, column: i32) {
        self.column = column;
    }

    /// Translate by the given deltas
    pub fn shift_by(&mut self, columns: i32, rows: i32) {
        self.column += columns;
        self.row += rows;
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [{}, {}]", self.color, self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equal_blocks_share_all_fields() {
        let a = Block::new(3, 8, BlockColor::Blue);
        assert_eq!(a, Block::new(3, 8, BlockColor::Blue));
        assert_ne!(a, Block::new(4, 8, BlockColor::Blue));
        assert_ne!(a, Block::new(3, 9, BlockColor::Blue));
        assert_ne!(a, Block::new(3, 8, BlockColor::Red));
    }

    #[test]
    fn mirrored_coordinates_stay_distinct_in_sets() {
        // (1, 2) and (2, 1) collide under a column ^ row hash
        let mut set = HashSet::new();
        set.insert(Block::new(1, 2, BlockColor::Teal));
        set.insert(Block::new(2, 1, BlockColor::Teal));
        set.insert(Block::new(3, 0, BlockColor::Teal));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn shift_keeps_color() {
        let mut b = Block::new(0, 0, BlockColor::Orange);
        b.shift_by(2, -1);
        assert_eq!(b.position(), (2, -1));
        assert_eq!(b.color(), BlockColor::Orange);
    }

    #[test]
    fn display_matches_sprite_name() {
        assert_eq!(Block::new(8, 3, BlockColor::Blue).to_string(), "blue: [8, 3]");
    }
}
