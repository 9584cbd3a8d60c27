//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the engine.
//! They are plain data with no game logic attached, so the core, a renderer or a
//! headless driver can all share them.
//!
//! # Board Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NUM_COLUMNS` | 10 | Playfield width |
//! | `NUM_ROWS` | 20 | Playfield height |
//! | `STARTING_COLUMN` / `STARTING_ROW` | (4, 0) | Spawn anchor of the falling piece |
//! | `PREVIEW_COLUMN` / `PREVIEW_ROW` | (12, 1) | Anchor of the preview piece (off-grid) |
//!
//! Rows grow downward: row 0 is the top of the playfield.
//!
//! # Examples
//!
//! ```
//! use swiftris_types::{BlockColor, Orientation, ShapeKind};
//!
//! assert_eq!(BlockColor::from_str("TEAL"), Some(BlockColor::Teal));
//! assert_eq!(Orientation::TwoSeventy.rotate(true), Orientation::Zero);
//! assert_eq!(ShapeKind::ALL.len(), 7);
//! ```

use serde::{Deserialize, Serialize};

/// Playfield width in cells
pub const NUM_COLUMNS: usize = 10;

/// Playfield height in cells
pub const NUM_ROWS: usize = 20;

/// Column where a promoted piece is anchored
pub const STARTING_COLUMN: i32 = 4;

/// Row where a promoted piece is anchored
pub const STARTING_ROW: i32 = 0;

/// Column of the preview anchor, right of the playfield
pub const PREVIEW_COLUMN: i32 = 12;

/// Row of the preview anchor
pub const PREVIEW_ROW: i32 = 1;

/// Number of blocks in every piece
pub const BLOCKS_PER_SHAPE: usize = 4;

/// The six block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    /// Every color, in declaration order
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];

    /// Parse color from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::BlockColor;
    ///
    /// assert_eq!(BlockColor::from_str("blue"), Some(BlockColor::Blue));
    /// assert_eq!(BlockColor::from_str("Purple"), Some(BlockColor::Purple));
    /// assert_eq!(BlockColor::from_str("green"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "blue" => Some(BlockColor::Blue),
            "orange" => Some(BlockColor::Orange),
            "purple" => Some(BlockColor::Purple),
            "red" => Some(BlockColor::Red),
            "teal" => Some(BlockColor::Teal),
            "yellow" => Some(BlockColor::Yellow),
            _ => None,
        }
    }

    /// Lowercase name, doubling as the sprite name a renderer looks up
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for BlockColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four rotational states of a piece
///
/// The cycle goes: Zero → Ninety → OneEighty → TwoSeventy → Zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    /// Every orientation, in clockwise order starting at Zero
    pub const ALL: [Orientation; 4] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Step one orientation clockwise or counter-clockwise, wrapping around
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate(true), Orientation::Ninety);
    /// assert_eq!(Orientation::TwoSeventy.rotate(true), Orientation::Zero);
    /// assert_eq!(Orientation::Zero.rotate(false), Orientation::TwoSeventy);
    /// ```
    pub fn rotate(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::Ninety => Orientation::Zero,
        }
    }

    /// Position in the clockwise cycle (0..4), used to index per-orientation tables
    pub fn index(&self) -> usize {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 1,
            Orientation::OneEighty => 2,
            Orientation::TwoSeventy => 3,
        }
    }

    /// Rotation in degrees
    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 90,
            Orientation::OneEighty => 180,
            Orientation::TwoSeventy => 270,
        }
    }

    /// Parse from degrees ("0", "90", "180", "270")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "0" => Some(Orientation::Zero),
            "90" => Some(Orientation::Ninety),
            "180" => Some(Orientation::OneEighty),
            "270" => Some(Orientation::TwoSeventy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// The seven tetromino variants
///
/// - **Square**: 2x2, looks the same in every orientation
/// - **Line**: four in a row
/// - **T**, **L**, **J**, **S**, **Z**: the remaining tetrominoes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Square,
    Line,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    /// Every kind; a uniform pick from this array gives each kind equal odds
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("o"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(ShapeKind::Square),
            "line" => Some(ShapeKind::Line),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notifications a board sends to its listener
///
/// One variant per listener callback. Used where the caller prefers a stream of
/// events (e.g. an mpsc channel) over implementing the callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoardEvent {
    GameDidBegin,
    GameDidEnd,
    GameShapeDidLand,
    GameShapeDidMove,
    GameShapeDidDrop,
    GameDidLevelUp,
}

impl BoardEvent {
    /// camelCase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardEvent::GameDidBegin => "gameDidBegin",
            BoardEvent::GameDidEnd => "gameDidEnd",
            BoardEvent::GameShapeDidLand => "gameShapeDidLand",
            BoardEvent::GameShapeDidMove => "gameShapeDidMove",
            BoardEvent::GameShapeDidDrop => "gameShapeDidDrop",
            BoardEvent::GameDidLevelUp => "gameDidLevelUp",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        assert_eq!(NUM_COLUMNS, 10);
        assert_eq!(NUM_ROWS, 20);
        assert_eq!((STARTING_COLUMN, STARTING_ROW), (4, 0));
        assert_eq!((PREVIEW_COLUMN, PREVIEW_ROW), (12, 1));
    }

    #[test]
    fn rotate_is_inverted_by_opposite_direction() {
        for o in Orientation::ALL {
            assert_eq!(o.rotate(true).rotate(false), o);
            assert_eq!(o.rotate(false).rotate(true), o);
        }
    }

    #[test]
    fn four_clockwise_turns_are_identity() {
        for o in Orientation::ALL {
            let mut r = o;
            for _ in 0..4 {
                r = r.rotate(true);
            }
            assert_eq!(r, o);
        }
    }

    #[test]
    fn orientation_index_follows_cycle() {
        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
            assert_eq!(o.rotate_cw().index(), (i + 1) % 4);
        }
    }

    #[test]
    fn orientation_degrees_roundtrip_through_str() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_str(&o.to_string()), Some(o));
        }
        assert_eq!(Orientation::from_str("45"), None);
    }

    #[test]
    fn color_names_are_sprite_names() {
        assert_eq!(BlockColor::Teal.as_str(), "teal");
        assert_eq!(BlockColor::Yellow.to_string(), "yellow");
        for c in BlockColor::ALL {
            assert_eq!(BlockColor::from_str(c.as_str()), Some(c));
        }
    }

    #[test]
    fn event_names_are_camel_case() {
        assert_eq!(BoardEvent::GameShapeDidLand.as_str(), "gameShapeDidLand");
        assert_eq!(BoardEvent::GameDidLevelUp.as_str(), "gameDidLevelUp");
    }
}
