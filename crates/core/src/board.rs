//! Board module - the playfield and the piece lifecycle
//!
//! The board owns the grid of settled blocks, the falling piece and the preview
//! piece. It decides whether a placement is legal and drives the begin/advance/end
//! transitions; the host drives cadence (ticks, input) and reacts to listener events.
//!
//! Coordinates: column grows to the right, row grows downward, (0, 0) is top-left.

use anyhow::Result;
use log::{debug, info, warn};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::config::BoardConfig;
use crate::grid::Grid2D;
use crate::listener::{dispatch, BoardListener};
use crate::piece::PieceShape;
use crate::rng;
use crate::snapshot::BoardSnapshot;
use crate::types::BoardEvent;

/// Where the board is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Constructed, `begin_game` not called yet
    Idle,
    Playing,
    /// A spawned piece could not be placed
    Over,
}

/// The game board
pub struct Board {
    config: BoardConfig,
    grid: Grid2D<Block>,
    falling: Option<PieceShape>,
    next: Option<PieceShape>,
    phase: GamePhase,
    listener: Option<Box<dyn BoardListener>>,
    rng: Box<dyn RngCore>,
}

impl Board {
    /// Create an empty board; pieces come from the config seed or OS entropy
    pub fn new(config: BoardConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_rng(config, rng::seeded(seed)),
            None => Self::with_rng(config, rng::from_entropy()),
        }
    }

    /// Create an empty board drawing pieces from `rng`
    pub fn with_rng(config: BoardConfig, rng: impl RngCore + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid2D::new(config.columns, config.rows),
            config,
            falling: None,
            next: None,
            phase: GamePhase::Idle,
            listener: None,
            rng: Box::new(rng),
        })
    }

    pub fn set_listener(&mut self, listener: Box<dyn BoardListener>) {
        self.listener = Some(listener);
    }

    /// Detach and return the current listener
    pub fn take_listener(&mut self) -> Option<Box<dyn BoardListener>> {
        self.listener.take()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid2D<Block> {
        &self.grid
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn falling_piece(&self) -> Option<&PieceShape> {
        self.falling.as_ref()
    }

    pub fn next_piece(&self) -> Option<&PieceShape> {
        self.next.as_ref()
    }

    /// Settled block at (column, row); `None` when empty or off the board
    pub fn block_at(&self, column: i32, row: i32) -> Option<&Block> {
        if !self.grid.contains(column, row) {
            return None;
        }
        self.grid.get(column as usize, row as usize)
    }

    /// Inside the board and holding a settled block
    pub fn is_occupied(&self, column: i32, row: i32) -> bool {
        self.block_at(column, row).is_some()
    }

    /// Place a settled block directly, e.g. to set up a position
    ///
    /// Returns false (and leaves the grid untouched) when the block is off the board.
    pub fn place_block(&mut self, block: Block) -> bool {
        let (column, row) = block.position();
        if !self.grid.contains(column, row) {
            return false;
        }
        self.grid.set(column as usize, row as usize, Some(block));
        true
    }

    /// Start (or restart) a game
    ///
    /// Makes sure a preview piece exists and notifies `game_did_begin`. A board whose
    /// previous game ended is cleared first.
    pub fn begin_game(&mut self) {
        if self.phase == GamePhase::Over {
            self.grid.clear();
            self.falling = None;
        }
        if self.next.is_none() {
            self.next = Some(self.preview_piece());
        }
        self.phase = GamePhase::Playing;
        info!(
            "game begins on a {}x{} board",
            self.config.columns, self.config.rows
        );
        self.notify(BoardEvent::GameDidBegin);
    }

    /// Promote the preview piece to the falling piece and draw a new preview
    ///
    /// Returns `(falling, next)`. When the promoted piece cannot be placed at the
    /// spawn anchor it goes back to the preview slot, the game ends and
    /// `(None, None)` is returned.
    pub fn advance_piece(&mut self) -> (Option<PieceShape>, Option<PieceShape>) {
        if self.phase != GamePhase::Playing {
            warn!("advance_piece ignored while {:?}", self.phase);
            return (None, None);
        }

        let mut piece = match self.next.take() {
            Some(piece) => piece,
            None => self.preview_piece(),
        };
        self.next = Some(self.preview_piece());
        piece.move_to(self.config.starting_column, self.config.starting_row);
        self.falling = Some(piece);

        if self.is_placement_illegal() {
            debug!("spawn blocked for {}", piece);
            piece.move_to(self.config.preview_column, self.config.preview_row);
            self.next = Some(piece);
            self.falling = None;
            self.end_game();
            return (None, None);
        }

        debug!("advanced {}", piece);
        (self.falling, self.next)
    }

    /// True if any falling block is off the board or on a settled block
    pub fn is_placement_illegal(&self) -> bool {
        self.falling
            .as_ref()
            .is_some_and(|piece| !self.fits(piece))
    }

    /// End the game and notify `game_did_end`
    pub fn end_game(&mut self) {
        self.phase = GamePhase::Over;
        info!("game over, {} settled blocks", self.grid.iter().count());
        self.notify(BoardEvent::GameDidEnd);
    }

    /// Shift the falling piece one column left; false if blocked
    pub fn move_shape_left(&mut self) -> bool {
        self.try_update(PieceShape::shift_left_by_one_column)
    }

    /// Shift the falling piece one column right; false if blocked
    pub fn move_shape_right(&mut self) -> bool {
        let lift = if self.config.shift_right_lifts_row { -1 } else { 0 };
        self.try_update(|piece| piece.shift_by(1, lift))
    }

    /// Rotate the falling piece clockwise; false if the rotated piece does not fit
    pub fn rotate_shape(&mut self) -> bool {
        let resync_rows = self.config.rotation_resyncs_rows;
        self.try_update(|piece| piece.rotate(true, resync_rows))
    }

    /// Move the falling piece straight down as far as it fits
    pub fn drop_shape(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(mut piece) = self.falling else {
            return;
        };
        while self.fits(&piece) {
            piece.lower_by_one_row();
        }
        piece.raise_by_one_row();
        self.falling = Some(piece);
        self.notify(BoardEvent::GameShapeDidDrop);
    }

    /// Gravity step: lower the falling piece one row
    ///
    /// A piece that cannot move down is settled; one that cannot even stay where it
    /// was ends the game. A piece that moved and now rests on something is settled
    /// right away.
    pub fn let_shape_fall(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(mut piece) = self.falling else {
            return;
        };

        piece.lower_by_one_row();
        if self.fits(&piece) {
            self.falling = Some(piece);
            self.notify(BoardEvent::GameShapeDidMove);
            if self.detect_touch() {
                self.settle_shape();
            }
            return;
        }

        piece.raise_by_one_row();
        if self.fits(&piece) {
            self.settle_shape();
        } else {
            self.falling = None;
            self.end_game();
        }
    }

    /// Write the falling piece into the grid and notify `game_shape_did_land`
    pub fn settle_shape(&mut self) {
        let Some(piece) = self.falling.take() else {
            return;
        };
        for block in piece.blocks() {
            if !self.place_block(*block) {
                warn!("settled block {} is off the board", block);
            }
        }
        debug!("settled {}", piece);
        self.notify(BoardEvent::GameShapeDidLand);
    }

    /// True if the falling piece rests on the floor or on a settled block
    pub fn detect_touch(&self) -> bool {
        let Some(piece) = self.falling.as_ref() else {
            return false;
        };
        let last_row = self.config.rows as i32 - 1;
        piece
            .bottom_blocks()
            .iter()
            .any(|b| b.row() == last_row || self.is_occupied(b.column(), b.row() + 1))
    }

    /// Serializable view of the whole board
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }

    fn fits(&self, piece: &PieceShape) -> bool {
        piece
            .blocks()
            .iter()
            .all(|b| {
                self.grid.contains(b.column(), b.row()) && !self.is_occupied(b.column(), b.row())
            })
    }

    /// Apply `update` to a copy of the falling piece and keep it only if it fits
    fn try_update(&mut self, update: impl FnOnce(&mut PieceShape)) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        let Some(mut piece) = self.falling else {
            return false;
        };
        update(&mut piece);
        if !self.fits(&piece) {
            return false;
        }
        self.falling = Some(piece);
        self.notify(BoardEvent::GameShapeDidMove);
        true
    }

    fn preview_piece(&mut self) -> PieceShape {
        PieceShape::random(
            self.config.preview_column,
            self.config.preview_row,
            &mut *self.rng,
        )
    }

    fn notify(&mut self, event: BoardEvent) {
        if let Some(mut listener) = self.listener.take() {
            dispatch(listener.as_mut(), event, self);
            self.listener = Some(listener);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        match Self::new(BoardConfig::default()) {
            Ok(board) => board,
            Err(e) => unreachable!("default board config rejected: {e:#}"),
        }
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("falling", &self.falling)
            .field("next", &self.next)
            .field("settled", &self.grid.iter().count())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
