//! Door placement.
//!
//! Doors live in one global list kept in room order: each room owns the
//! contiguous slice `[fdoor, fdoor + doorct)`. Inserting a door for an
//! earlier room shifts every later room's doors down the list.

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

use super::cell::{CellType, DoorState};
use super::level::Level;

/// A placed door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub x: i32,
    pub y: i32,
    pub state: DoorState,
}

/// True if an orthogonal neighbor of (x, y) already holds a door.
pub fn bydoor(level: &Level, x: i32, y: i32) -> bool {
    for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
        if level.is_ok(nx, ny) && level.cell(nx, ny).typ.is_door() {
            return true;
        }
    }
    false
}

/// A cell can take a door if it is a plain wall segment, no neighbor is
/// already a door, and the door budget is not exhausted.
pub fn okdoor(level: &Level, x: i32, y: i32) -> bool {
    if !level.is_ok(x, y) {
        return false;
    }
    matches!(level.cell(x, y).typ, CellType::HWall | CellType::VWall)
        && level.doors.len() < level.config.max_doors
        && !bydoor(level, x, y)
}

/// Place a door at (x, y) owned by the room at `room_idx`. Most doors are
/// hidden; one in eight is a true door.
pub fn dodoor(level: &mut Level, rng: &mut GameRng, x: i32, y: i32, room_idx: usize) {
    if level.doors.len() >= level.config.max_doors {
        return;
    }
    let typ = if rng.one_in(8) {
        CellType::Door
    } else {
        CellType::SecretDoor
    };
    dosdoor(level, rng, x, y, room_idx, typ);
}

fn dosdoor(level: &mut Level, rng: &mut GameRng, x: i32, y: i32, room_idx: usize, typ: CellType) {
    // Digging already broke through here; a hidden door makes no sense.
    let typ = if level.cell(x, y).typ.is_wall() {
        typ
    } else {
        CellType::Door
    };

    let state = if typ == CellType::Door {
        if rng.one_in(15) {
            DoorState::Open
        } else if rng.one_in(18) {
            DoorState::Locked
        } else {
            DoorState::Closed
        }
    } else if rng.one_in(5) {
        DoorState::Locked
    } else {
        DoorState::Closed
    };

    let cell = level.cell_mut(x, y);
    cell.typ = typ;
    cell.door = state;

    add_door(level, x, y, state, room_idx);
}

/// Register a door in the global list, keeping room slices contiguous.
fn add_door(level: &mut Level, x: i32, y: i32, state: DoorState, room_idx: usize) {
    let at = if room_idx + 1 < level.rooms.len() {
        level.rooms[room_idx + 1].fdoor
    } else {
        level.doors.len()
    };
    level.doors.insert(at, Door { x, y, state });
    level.rooms[room_idx].doorct += 1;
    for room in level.rooms[room_idx + 1..].iter_mut() {
        room.fdoor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::generation::add_room;
    use crate::dungeon::level::LevelConfig;

    fn level_with_rooms() -> Level {
        let mut level = Level::new(LevelConfig::default());
        add_room(&mut level, 5, 5, 10, 9, true);
        add_room(&mut level, 20, 5, 25, 9, true);
        add_room(&mut level, 40, 5, 45, 9, true);
        level
    }

    #[test]
    fn bydoor_sees_orthogonal_only() {
        let mut level = Level::new(LevelConfig::default());
        level.cell_mut(20, 10).typ = CellType::Door;

        assert!(bydoor(&level, 19, 10));
        assert!(bydoor(&level, 21, 10));
        assert!(bydoor(&level, 20, 9));
        assert!(bydoor(&level, 20, 11));
        assert!(!bydoor(&level, 19, 9));
        assert!(!bydoor(&level, 10, 10));
    }

    #[test]
    fn okdoor_needs_plain_wall() {
        let level = level_with_rooms();
        // Top wall of the first room.
        assert!(okdoor(&level, 7, 4));
        // Floor and corners are not eligible.
        assert!(!okdoor(&level, 7, 7));
        assert!(!okdoor(&level, 4, 4));
    }

    #[test]
    fn okdoor_rejects_adjacent_doors() {
        let mut level = level_with_rooms();
        let mut rng = GameRng::new(42);
        dodoor(&mut level, &mut rng, 7, 4, 0);
        assert!(!okdoor(&level, 8, 4));
        assert!(okdoor(&level, 9, 4));
    }

    #[test]
    fn door_slices_stay_contiguous() {
        let mut level = level_with_rooms();
        let mut rng = GameRng::new(42);

        // Place doors out of room order.
        dodoor(&mut level, &mut rng, 42, 4, 2);
        dodoor(&mut level, &mut rng, 7, 4, 0);
        dodoor(&mut level, &mut rng, 22, 4, 1);
        dodoor(&mut level, &mut rng, 9, 4, 0);

        assert_eq!(level.doors.len(), 4);
        let rooms = level.rooms.clone();
        assert_eq!(rooms[0].doorct, 2);
        assert_eq!(rooms[1].doorct, 1);
        assert_eq!(rooms[2].doorct, 1);

        // Slices are contiguous and in room order.
        assert_eq!(rooms[0].fdoor, 0);
        assert_eq!(rooms[1].fdoor, 2);
        assert_eq!(rooms[2].fdoor, 3);

        // Each room's slice holds doors on that room's walls.
        for (idx, room) in rooms.iter().enumerate() {
            for door in &level.doors[room.fdoor..room.fdoor + room.doorct] {
                assert!(
                    door.x >= room.lx - 1 && door.x <= room.hx + 1,
                    "door {door:?} not on room {idx}"
                );
            }
        }
    }

    #[test]
    fn door_budget_is_respected() {
        let mut level = level_with_rooms();
        level.config.max_doors = 2;
        let mut rng = GameRng::new(42);

        dodoor(&mut level, &mut rng, 7, 4, 0);
        dodoor(&mut level, &mut rng, 9, 4, 0);
        dodoor(&mut level, &mut rng, 22, 4, 1);

        assert_eq!(level.doors.len(), 2);
    }
}
