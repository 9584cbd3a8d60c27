//! Piece module - a movable tetromino
//!
//! A [`PieceShape`] is an anchor (column, row), an orientation and four blocks.
//! Block positions are always derived from the anchor plus the current orientation's
//! offsets (see [`crate::shapes`]); the blocks are updated in place on every move
//! so that block index `i` keeps referring to the same cell.
//!
//! Rotation only recomputes block columns by default, leaving rows where they were.
//! [`PieceShape::rotate`] with `resync_rows` recomputes rows as well.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::block::Block;
use crate::rng::{random_color, random_kind, random_orientation};
use crate::shapes::{self, ShapeOffsets};
use crate::types::{BlockColor, Orientation, ShapeKind};

/// A tetromino with an anchor, an orientation and four blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    kind: ShapeKind,
    color: BlockColor,
    orientation: Orientation,
    column: i32,
    row: i32,
    blocks: [Block; 4],
}

impl PieceShape {
    /// Build a piece with its blocks laid out for `orientation` around the anchor
    pub fn new(
        kind: ShapeKind,
        column: i32,
        row: i32,
        color: BlockColor,
        orientation: Orientation,
    ) -> Self {
        let offsets = shapes::offsets(kind, orientation);
        let blocks = (*offsets).map(|(dc, dr)| Block::new(column + dc, row + dr, color));
        Self {
            kind,
            color,
            orientation,
            column,
            row,
            blocks,
        }
    }

    /// Build a piece of the given kind with a random color and orientation
    pub fn with_random_style<R: Rng + ?Sized>(
        kind: ShapeKind,
        column: i32,
        row: i32,
        rng: &mut R,
    ) -> Self {
        let color = random_color(rng);
        let orientation = random_orientation(rng);
        Self::new(kind, column, row, color, orientation)
    }

    /// Build a piece of a random kind, color and orientation
    pub fn random<R: Rng + ?Sized>(column: i32, row: i32, rng: &mut R) -> Self {
        let kind = random_kind(rng);
        Self::with_random_style(kind, column, row, rng)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor column
    pub fn column(&self) -> i32 {
        self.column
    }

    /// Anchor row
    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    /// Offsets for the current orientation
    pub fn offsets(&self) -> &'static ShapeOffsets {
        shapes::offsets(self.kind, self.orientation)
    }

    /// Blocks on the leading edge in the direction of fall
    pub fn bottom_blocks(&self) -> ArrayVec<Block, 4> {
        shapes::bottom_block_indices(self.kind, self.orientation)
            .iter()
            .map(|&i| self.blocks[i])
            .collect()
    }

    /// Rotate 90° clockwise; block rows are left unchanged
    pub fn rotate_clockwise(&mut self) {
        self.rotate(true, false);
    }

    /// Rotate 90° counter-clockwise; block rows are left unchanged
    pub fn rotate_counter_clockwise(&mut self) {
        self.rotate(false, false);
    }

    /// Step the orientation and lay the blocks out for it
    ///
    /// Block columns always follow the new offsets. Rows follow them only when
    /// `resync_rows` is set.
    pub fn rotate(&mut self, clockwise: bool, resync_rows: bool) {
        let orientation = self.orientation.rotate(clockwise);
        if resync_rows {
            self.realign(orientation);
        } else {
            self.realign_columns(orientation);
        }
        self.orientation = orientation;
    }

    /// Translate the anchor and every block
    pub fn shift_by(&mut self, columns: i32, rows: i32) {
        self.column += columns;
        self.row += rows;
        for block in &mut self.blocks {
            block.shift_by(columns, rows);
        }
    }

    /// Place the anchor at (column, row) and re-derive every block position
    pub fn move_to(&mut self, column: i32, row: i32) {
        self.column = column;
        self.row = row;
        self.realign(self.orientation);
    }

    pub fn lower_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    fn realign(&mut self, orientation: Orientation) {
        let offsets = shapes::offsets(self.kind, orientation);
        for (block, &(dc, dr)) in self.blocks.iter_mut().zip(offsets) {
            block.set_position(self.column + dc, self.row + dr);
        }
    }

    fn realign_columns(&mut self, orientation: Orientation) {
        let offsets = shapes::offsets(self.kind, orientation);
        for (block, &(dc, _)) in self.blocks.iter_mut().zip(offsets) {
            block.set_column(self.column + dc);
        }
    }
}

impl std::fmt::Display for PieceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} facing {}: {}, {}, {}, {}",
            self.color,
            self.kind,
            self.orientation,
            self.blocks[0],
            self.blocks[1],
            self.blocks[2],
            self.blocks[3]
        )
    }
}
