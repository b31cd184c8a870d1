//! Dungeon level generation.
//!
//! A level is built in phases: rooms are placed inside a shrinking pool of
//! free rectangles, corridors are dug until every room is reachable from
//! every other, doors are cut where corridors meet walls, and a staircase
//! finishes the level.

mod cell;
mod corridor;
mod door;
mod generation;
mod level;
mod rect;
mod room;

pub use cell::{Cell, CellType, DoorState};
pub use corridor::{dig_corridor, finddpos, join, ConnectivityTracker, DigAbort};
pub use door::{bydoor, dodoor, okdoor, Door};
pub use generation::{add_room, mklev};
pub use level::{Level, LevelConfig, Stairway};
pub use rect::{FreeRect, RectPool};
pub use room::{Room, RoomKind};
