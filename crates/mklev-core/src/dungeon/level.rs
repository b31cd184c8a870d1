//! Level container and configuration.

use serde::{Deserialize, Serialize};

use crate::consts::{COLNO, DOORMAX, MAXNROFROOMS, MAXRECT, ROWNO, XLIM, YLIM};

use super::cell::Cell;
use super::door::Door;
use super::room::Room;

/// Generation limits for one run. The defaults are the classic 80x21
/// values; tests shrink them to exercise starved configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Grid width
    pub cols: usize,
    /// Grid height
    pub rows: usize,
    /// Room budget
    pub max_rooms: usize,
    /// Free-rectangle pool capacity
    pub max_rects: usize,
    /// Door budget
    pub max_doors: usize,
    /// Minimum horizontal separation between rooms
    pub xlim: i32,
    /// Minimum vertical separation between rooms
    pub ylim: i32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            cols: COLNO,
            rows: ROWNO,
            max_rooms: MAXNROFROOMS,
            max_rects: MAXRECT,
            max_doors: DOORMAX,
            xlim: XLIM,
            ylim: YLIM,
        }
    }
}

/// A staircase on the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stairway {
    pub x: i32,
    pub y: i32,
    pub up: bool,
}

/// A generated dungeon level.
///
/// Owned by the generation run while it is being built; handed to the
/// caller read-only on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Limits this level was generated under
    pub config: LevelConfig,

    /// Map cells, indexed `[x][y]`
    pub cells: Vec<Vec<Cell>>,

    /// Room registry, sorted by left edge before corridors are dug
    pub rooms: Vec<Room>,

    /// Global door list; each room owns the contiguous slice
    /// `[fdoor, fdoor + doorct)`
    pub doors: Vec<Door>,

    /// Staircases
    pub stairs: Vec<Stairway>,

    /// Reserved top-left corner of a hidden vault footprint, if one was
    /// carved out of the free space. Not painted and not in the registry.
    pub vault: Option<(i32, i32)>,
}

impl Level {
    /// Create an all-stone level.
    pub fn new(config: LevelConfig) -> Self {
        Self {
            config,
            cells: vec![vec![Cell::stone(); config.rows]; config.cols],
            rooms: Vec::new(),
            doors: Vec::new(),
            stairs: Vec::new(),
            vault: None,
        }
    }

    /// Check that (x, y) is a usable map position. Column 0 is reserved,
    /// as in the classic maps.
    pub fn is_ok(&self, x: i32, y: i32) -> bool {
        x >= 1 && x < self.config.cols as i32 && y >= 0 && y < self.config.rows as i32
    }

    /// Cell at (x, y). Callers check `is_ok` first.
    pub fn cell(&self, x: i32, y: i32) -> &Cell {
        &self.cells[x as usize][y as usize]
    }

    /// Mutable cell at (x, y). Callers check `is_ok` first.
    pub fn cell_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        &mut self.cells[x as usize][y as usize]
    }

    /// Render the grid as one glyph per cell, row by row. Read-only: two
    /// calls without intervening mutation return identical strings.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.config.cols + 1) * self.config.rows);
        for y in 0..self.config.rows {
            for x in 0..self.config.cols {
                out.push(self.cells[x][y].typ.symbol());
            }
            out.push('\n');
        }
        out
    }
}
