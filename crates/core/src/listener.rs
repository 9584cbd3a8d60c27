//! Listener module - notifications from the board to its host
//!
//! The board calls into a [`BoardListener`] whenever the game state changes in a way
//! the rendering/input layer cares about. Calls are fire-and-forget: nothing a
//! listener does flows back into the board.
//!
//! Hosts that would rather poll can hand the board an
//! `std::sync::mpsc::Sender<BoardEvent>` and drain the receiver in their loop.

use std::sync::mpsc::Sender;

use log::{debug, info};

use crate::board::Board;
use crate::types::BoardEvent;

/// Receiver of board lifecycle notifications
///
/// Every method has an empty default, so implementors only override what they use.
pub trait BoardListener {
    fn game_did_begin(&mut self, _board: &Board) {}
    fn game_did_end(&mut self, _board: &Board) {}
    fn game_did_level_up(&mut self, _board: &Board) {}
    fn game_shape_did_drop(&mut self, _board: &Board) {}
    fn game_shape_did_land(&mut self, _board: &Board) {}
    fn game_shape_did_move(&mut self, _board: &Board) {}
}

/// Route an event to the matching listener method
pub(crate) fn dispatch(listener: &mut dyn BoardListener, event: BoardEvent, board: &Board) {
    match event {
        BoardEvent::GameDidBegin => listener.game_did_begin(board),
        BoardEvent::GameDidEnd => listener.game_did_end(board),
        BoardEvent::GameDidLevelUp => listener.game_did_level_up(board),
        BoardEvent::GameShapeDidDrop => listener.game_shape_did_drop(board),
        BoardEvent::GameShapeDidLand => listener.game_shape_did_land(board),
        BoardEvent::GameShapeDidMove => listener.game_shape_did_move(board),
    }
}

/// Forwards every notification as a [`BoardEvent`]
///
/// A dropped receiver is ignored.
impl BoardListener for Sender<BoardEvent> {
    fn game_did_begin(&mut self, _board: &Board) {
        let _ = self.send(BoardEvent::GameDidBegin);
    }

    fn game_did_end(&mut self, _board: &Board) {
        let _ = self.send(BoardEvent::GameDidEnd);
    }

    fn game_did_level_up(&mut self, _board: &Board) {
        let _ = self.send(BoardEvent::GameDidLevelUp);
    }

    fn game_shape_did_drop(&mut self, _board: &Board) {
        let _ = self.send(BoardEvent::GameShapeDidDrop);
    }

    fn game_shape_did_land(&mut self, _board: &Board) {
        let _ = self.send(BoardEvent::GameShapeDidLand);
    }

    fn game_shape_did_move(&mut self, _board: &Board) {
        let _ = self.send(BoardEvent::GameShapeDidMove);
    }
}

/// Logs each notification at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogListener;

impl BoardListener for LogListener {
    fn game_did_begin(&mut self, board: &Board) {
        info!("game began, next piece: {:?}", board.next_piece().map(|p| p.kind()));
    }

    fn game_did_end(&mut self, board: &Board) {
        info!("game ended with {} settled blocks", board.grid().iter().count());
    }

    fn game_did_level_up(&mut self, _board: &Board) {
        info!("level up");
    }

    fn game_shape_did_drop(&mut self, board: &Board) {
        if let Some(piece) = board.falling_piece() {
            info!("dropped {}", piece);
        }
    }

    fn game_shape_did_land(&mut self, board: &Board) {
        info!("piece landed, {} settled blocks", board.grid().iter().count());
    }

    fn game_shape_did_move(&mut self, board: &Board) {
        if let Some(piece) = board.falling_piece() {
            debug!("moved to ({}, {})", piece.column(), piece.row());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn sender_forwards_each_event() {
        let board = Board::default();
        let (mut tx, rx) = channel::<BoardEvent>();
        for event in [
            BoardEvent::GameDidBegin,
            BoardEvent::GameShapeDidMove,
            BoardEvent::GameShapeDidDrop,
            BoardEvent::GameShapeDidLand,
            BoardEvent::GameDidLevelUp,
            BoardEvent::GameDidEnd,
        ] {
            dispatch(&mut tx, event, &board);
            assert_eq!(rx.try_recv(), Ok(event));
        }
    }

    #[test]
    fn closed_channel_is_ignored() {
        let board = Board::default();
        let (mut tx, rx) = channel::<BoardEvent>();
        drop(rx);
        dispatch(&mut tx, BoardEvent::GameDidEnd, &board);
    }

    #[derive(Default)]
    struct Counter {
        moves: u32,
    }

    impl BoardListener for Counter {
        fn game_shape_did_move(&mut self, _board: &Board) {
            self.moves += 1;
        }
    }

    #[test]
    fn default_methods_are_no_ops() {
        let board = Board::default();
        let mut counter = Counter::default();
        dispatch(&mut counter, BoardEvent::GameDidBegin, &board);
        dispatch(&mut counter, BoardEvent::GameShapeDidMove, &board);
        assert_eq!(counter.moves, 1);
    }
}
