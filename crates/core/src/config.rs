//! Config module - board geometry and rule switches
//!
//! Everything the board treats as a constant (extent, spawn and preview anchors)
//! lives here so a caller can pass it at construction. Missing JSON keys fall back
//! to the defaults from [`crate::types`].

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{
    NUM_COLUMNS, NUM_ROWS, PREVIEW_COLUMN, PREVIEW_ROW, STARTING_COLUMN, STARTING_ROW,
};

/// Largest number of cells a board may hold
pub const MAX_CELLS: usize = 1 << 20;

/// Board construction parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
    /// Anchor a promoted piece is moved to
    pub starting_column: i32,
    pub starting_row: i32,
    /// Anchor of the preview piece; usually outside the grid
    pub preview_column: i32,
    pub preview_row: i32,
    /// Recompute block rows as well as columns when rotating
    pub rotation_resyncs_rows: bool,
    /// Moving right also lifts the piece by one row
    pub shift_right_lifts_row: bool,
    /// Seed for piece generation; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: NUM_COLUMNS,
            rows: NUM_ROWS,
            starting_column: STARTING_COLUMN,
            starting_row: STARTING_ROW,
            preview_column: PREVIEW_COLUMN,
            preview_row: PREVIEW_ROW,
            rotation_resyncs_rows: false,
            shift_right_lifts_row: false,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Default geometry with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s).context("invalid board config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading board config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("loading {}", path.display()))
    }

    /// Reject geometry the board cannot play on
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            bail!(
                "board must have at least one column and one row, got {}x{}",
                self.columns,
                self.rows
            );
        }
        match self.columns.checked_mul(self.rows) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => bail!(
                "board extent {}x{} exceeds {} cells",
                self.columns,
                self.rows,
                MAX_CELLS
            ),
        }
        // both sides are at most MAX_CELLS here
        let columns = self.columns as i32;
        let rows = self.rows as i32;
        if !(0..columns).contains(&self.starting_column)
            || !(0..rows).contains(&self.starting_row)
        {
            bail!(
                "spawn anchor ({}, {}) lies outside the {}x{} board",
                self.starting_column,
                self.starting_row,
                self.columns,
                self.rows
            );
        }
        Ok(())
    }
}
