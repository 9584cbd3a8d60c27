//! Shapes module - per-kind orientation tables
//!
//! Every kind carries two tables indexed by [`Orientation::index`]:
//!
//! - **offsets**: four `(column_diff, row_diff)` pairs added to the piece anchor. Block
//!   index `i` is the same logical cell of the tetromino in every orientation.
//! - **bottom**: indices of the blocks on the leading edge in the direction of fall
//!   (the lowest block of each occupied column).
//!
//! The tables are total over kinds and orientations, so every piece always has
//! exactly four blocks.

use crate::types::{Orientation, ShapeKind, BLOCKS_PER_SHAPE};

/// Offset of a single block from the piece anchor (column_diff, row_diff)
pub type Offset = (i32, i32);

/// Offsets for the four blocks of a piece
pub type ShapeOffsets = [Offset; BLOCKS_PER_SHAPE];

struct ShapeTable {
    offsets: [ShapeOffsets; 4],
    bottom: [&'static [usize]; 4],
}

/*
 * |0|1|
 * |2|3|
 */
static SQUARE: ShapeTable = ShapeTable {
    offsets: [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4],
    bottom: [&[2, 3]; 4],
};

const LINE_VERTICAL: ShapeOffsets = [(0, 0), (0, 1), (0, 2), (0, 3)];
const LINE_HORIZONTAL: ShapeOffsets = [(-1, 0), (0, 0), (1, 0), (2, 0)];

static LINE: ShapeTable = ShapeTable {
    offsets: [LINE_VERTICAL, LINE_HORIZONTAL, LINE_VERTICAL, LINE_HORIZONTAL],
    bottom: [&[3], &[0, 1, 2, 3], &[3], &[0, 1, 2, 3]],
};

static T: ShapeTable = ShapeTable {
    offsets: [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(2, 1), (1, 0), (1, 1), (1, 2)],
        [(1, 2), (0, 1), (1, 1), (2, 1)],
        [(0, 1), (1, 0), (1, 1), (1, 2)],
    ],
    bottom: [&[1, 2, 3], &[0, 3], &[0, 1, 3], &[0, 3]],
};

static L: ShapeTable = ShapeTable {
    offsets: [
        [(0, 0), (0, 1), (0, 2), (1, 2)],
        [(1, 1), (0, 1), (-1, 1), (-1, 2)],
        [(0, 2), (0, 1), (0, 0), (-1, 0)],
        [(-1, 1), (0, 1), (1, 1), (1, 0)],
    ],
    bottom: [&[2, 3], &[0, 1, 3], &[0, 3], &[0, 1, 2]],
};

static J: ShapeTable = ShapeTable {
    offsets: [
        [(1, 0), (1, 1), (1, 2), (0, 2)],
        [(2, 1), (1, 1), (0, 1), (0, 0)],
        [(0, 0), (0, 1), (0, 2), (1, 0)],
        [(0, 0), (1, 0), (2, 0), (2, 1)],
    ],
    bottom: [&[2, 3], &[0, 1, 2], &[2, 3], &[0, 1, 3]],
};

const S_UPRIGHT: ShapeOffsets = [(0, 0), (0, 1), (1, 1), (1, 2)];
const S_FLAT: ShapeOffsets = [(2, 0), (1, 0), (1, 1), (0, 1)];

static S: ShapeTable = ShapeTable {
    offsets: [S_UPRIGHT, S_FLAT, S_UPRIGHT, S_FLAT],
    bottom: [&[1, 3], &[0, 2, 3], &[1, 3], &[0, 2, 3]],
};

const Z_UPRIGHT: ShapeOffsets = [(1, 0), (1, 1), (0, 1), (0, 2)];
const Z_FLAT: ShapeOffsets = [(-1, 0), (0, 0), (0, 1), (1, 1)];

static Z: ShapeTable = ShapeTable {
    offsets: [Z_UPRIGHT, Z_FLAT, Z_UPRIGHT, Z_FLAT],
    bottom: [&[1, 3], &[0, 2, 3], &[1, 3], &[0, 2, 3]],
};

fn table(kind: ShapeKind) -> &'static ShapeTable {
    match kind {
        ShapeKind::Square => &SQUARE,
        ShapeKind::Line => &LINE,
        ShapeKind::T => &T,
        ShapeKind::L => &L,
        ShapeKind::J => &J,
        ShapeKind::S => &S,
        ShapeKind::Z => &Z,
    }
}

/// Block offsets for a kind in a given orientation
pub fn offsets(kind: ShapeKind, orientation: Orientation) -> &'static ShapeOffsets {
    &table(kind).offsets[orientation.index()]
}

/// Indices of the blocks forming the leading edge when falling
pub fn bottom_block_indices(kind: ShapeKind, orientation: Orientation) -> &'static [usize] {
    table(kind).bottom[orientation.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_has_four_distinct_cells() {
        for kind in ShapeKind::ALL {
            for o in Orientation::ALL {
                let cells = offsets(kind, o);
                assert_eq!(cells.len(), 4);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(cells[i], cells[j], "{kind:?} {o:?} repeats a cell");
                    }
                }
            }
        }
    }

    #[test]
    fn bottom_indices_are_lowest_cell_of_each_column() {
        for kind in ShapeKind::ALL {
            for o in Orientation::ALL {
                let cells = offsets(kind, o);
                let mut expected: Vec<usize> = (0..4)
                    .filter(|&i| {
                        let (c, r) = cells[i];
                        !cells.iter().any(|&(c2, r2)| c2 == c && r2 > r)
                    })
                    .collect();
                expected.sort_unstable();
                assert_eq!(bottom_block_indices(kind, o), expected.as_slice(), "{kind:?} {o:?}");
            }
        }
    }

    #[test]
    fn square_is_orientation_invariant() {
        for o in Orientation::ALL {
            assert_eq!(offsets(ShapeKind::Square, o), &[(0, 0), (1, 0), (0, 1), (1, 1)]);
            assert_eq!(bottom_block_indices(ShapeKind::Square, o), &[2, 3]);
        }
    }

    #[test]
    fn cells_are_edge_connected() {
        for kind in ShapeKind::ALL {
            for o in Orientation::ALL {
                let cells = offsets(kind, o);
                for &(c, r) in cells {
                    let touches = cells
                        .iter()
                        .any(|&(c2, r2)| (c - c2).abs() + (r - r2).abs() == 1);
                    assert!(touches, "{kind:?} {o:?} has a detached cell");
                }
            }
        }
    }
}
