//! Core game logic - pieces, orientation geometry, the board grid and collision
//!
//! This crate is the model half of a falling-block puzzle game. It has no rendering,
//! input or timing of its own: a host (terminal UI, GUI, headless driver) calls into
//! a [`Board`] and reacts to the notifications it sends to a [`BoardListener`].
//!
//! - **Synchronous**: every call runs to completion; there are no timers or threads
//! - **Deterministic**: a seeded [`BoardConfig`] deals the same pieces every time
//! - **Table-driven**: each [`ShapeKind`](types::ShapeKind) is data, not a subtype
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size row-major 2D storage
//! - [`block`]: a single colored cell
//! - [`shapes`]: per-kind offset and bottom-edge tables for every orientation
//! - [`piece`]: a movable tetromino built from those tables
//! - [`board`]: settled blocks, falling and preview pieces, placement legality
//! - [`listener`]: notifications to the host
//! - [`config`]: board geometry and rule switches
//! - [`rng`]: uniform picks for color, orientation and kind
//! - [`snapshot`]: serializable board view for renderers
//!
//! # Piece Lifecycle
//!
//! 1. [`Board::begin_game`] creates the preview piece and fires `game_did_begin`
//! 2. [`Board::advance_piece`] promotes the preview to the spawn anchor and deals a new
//!    preview; a blocked spawn ends the game and returns `(None, None)`
//! 3. The host moves, rotates, drops and lets the piece fall; moves that would overlap
//!    or leave the board are refused
//! 4. A piece that can fall no further is settled into the grid (`game_shape_did_land`)
//!    and the host advances again
//!
//! # Example
//!
//! ```
//! use swiftris_core::{Board, BoardConfig, GamePhase};
//!
//! let mut board = Board::new(BoardConfig::seeded(12345)).unwrap();
//! board.begin_game();
//!
//! let (falling, next) = board.advance_piece();
//! assert!(falling.is_some() && next.is_some());
//!
//! board.drop_shape();
//! board.settle_shape();
//! assert_eq!(board.grid().iter().count(), 4);
//! assert_eq!(board.phase(), GamePhase::Playing);
//! ```

pub mod block;
pub mod board;
pub mod config;
pub mod grid;
pub mod listener;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use swiftris_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use board::{Board, GamePhase};
pub use config::{BoardConfig, MAX_CELLS};
pub use grid::Grid2D;
pub use listener::{BoardListener, LogListener};
pub use piece::PieceShape;
pub use shapes::{bottom_block_indices, offsets, Offset, ShapeOffsets};
pub use snapshot::{BoardSnapshot, PieceSnapshot};
