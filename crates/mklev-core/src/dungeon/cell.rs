//! Map cell types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cell terrain type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellType {
    #[default]
    Stone,
    VWall,
    HWall,
    TLCorner,
    TRCorner,
    BLCorner,
    BRCorner,
    SecretDoor,
    SecretCorridor,
    Door,
    Corridor,
    Room,
    StairsUp,
    StairsDown,
}

impl CellType {
    /// Check if this is a wall type (plain walls and corners).
    pub const fn is_wall(&self) -> bool {
        matches!(
            self,
            CellType::VWall
                | CellType::HWall
                | CellType::TLCorner
                | CellType::TRCorner
                | CellType::BLCorner
                | CellType::BRCorner
        )
    }

    /// Check if this is a door.
    pub const fn is_door(&self) -> bool {
        matches!(self, CellType::Door | CellType::SecretDoor)
    }

    /// Check if a path can run through this cell. Hidden features count:
    /// reachability is a property of the generated layout, not of what a
    /// player has discovered yet.
    pub const fn is_passable(&self) -> bool {
        matches!(
            self,
            CellType::Room
                | CellType::Corridor
                | CellType::SecretCorridor
                | CellType::Door
                | CellType::SecretDoor
                | CellType::StairsUp
                | CellType::StairsDown
        )
    }

    /// Display glyph for this cell type.
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Stone => ' ',
            CellType::VWall => '|',
            CellType::HWall => '-',
            CellType::TLCorner => '-',
            CellType::TRCorner => '-',
            CellType::BLCorner => '-',
            CellType::BRCorner => '-',
            CellType::SecretDoor => '+',
            CellType::SecretCorridor => '#',
            CellType::Door => '+',
            CellType::Corridor => '#',
            CellType::Room => '.',
            CellType::StairsUp => '<',
            CellType::StairsDown => '>',
        }
    }
}

/// Door state, meaningful only on door cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DoorState {
    #[default]
    None,
    Open,
    Closed,
    Locked,
}

/// A single map cell.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Terrain type
    pub typ: CellType,

    /// Currently lit
    pub lit: bool,

    /// Door state, when `typ` is a door
    pub door: DoorState,
}

impl Cell {
    /// A dark stone cell, the initial state of the whole grid.
    pub const fn stone() -> Self {
        Self {
            typ: CellType::Stone,
            lit: false,
            door: DoorState::None,
        }
    }
}
