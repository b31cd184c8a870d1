//! mklev-core: procedural generation of a single room-and-corridor dungeon
//! level on a fixed character grid, in the style of the classic roguelikes.
//!
//! The crate is pure logic with no I/O. Callers supply a seed (or let the
//! RNG pull entropy), call [`dungeon::mklev`], and receive an owned
//! [`dungeon::Level`] to render or inspect. Generation never fails: every
//! bounded search degrades to a sparser level instead of erroring.

pub mod dungeon;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GameRng;
