//! Default generation limits.
//!
//! These are the classic 80x21 map constants. [`crate::dungeon::LevelConfig`]
//! carries them as runtime values so tests can generate on smaller grids.

/// Map dimensions
pub const COLNO: usize = 80;
pub const ROWNO: usize = 21;

/// Maximum number of rooms on a level
pub const MAXNROFROOMS: usize = 40;

/// Maximum number of free rectangles tracked during room placement
pub const MAXRECT: usize = 50;

/// Maximum number of doors on a level
pub const DOORMAX: usize = 120;

/// Minimum horizontal separation between rooms
pub const XLIM: i32 = 4;

/// Minimum vertical separation between rooms
pub const YLIM: i32 = 3;
