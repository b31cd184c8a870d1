//! Level generation driver: room placement and the full build sequence.

use crate::rng::GameRng;

use super::cell::CellType;
use super::corridor::makecorridors;
use super::level::{Level, LevelConfig, Stairway};
use super::rect::{FreeRect, RectPool};
use super::room::{Room, RoomKind};

/// Placement attempts before giving up on the current room.
const ROOM_TRY_LIMIT: usize = 100;

/// Generate a complete level. Always returns a level; a starved
/// configuration simply yields fewer rooms, down to none.
pub fn mklev(config: LevelConfig, rng: &mut GameRng) -> Level {
    let mut level = Level::new(config);
    let mut pool = RectPool::new(&config);

    makerooms(&mut level, &mut pool, rng);
    // Corridor phases walk the registry left to right.
    level.rooms.sort_by_key(|r| r.lx);

    makecorridors(&mut level, rng);

    if !level.rooms.is_empty() {
        let room = level.rooms[rng.rn2(level.rooms.len() as i32) as usize];
        let x = room.somex(rng);
        let y = room.somey(rng);
        mkstairs(&mut level, x, y, false);
    }
    level
}

/// Fill the level with rooms until the budget or the free space runs out.
/// Once a sixth of the budget is placed, a coin flip may spend one attempt
/// on a hidden vault instead.
fn makerooms(level: &mut Level, pool: &mut RectPool, rng: &mut GameRng) {
    let mut tried_vault = false;
    while level.rooms.len() < level.config.max_rooms && !pool.is_empty() {
        if !tried_vault
            && level.rooms.len() >= level.config.max_rooms / 6
            && rng.rn2(2) != 0
        {
            tried_vault = true;
            create_room(level, pool, rng, RoomKind::Vault);
        } else if !create_room(level, pool, rng, RoomKind::Ordinary) {
            return;
        }
    }
}

/// Try to place one room of the given kind. Samples the free-rectangle
/// pool, rolls dimensions and an offset, and retries on a size or clamp
/// rejection. On success the room's margin is carved out of the pool.
fn create_room(level: &mut Level, pool: &mut RectPool, rng: &mut GameRng, kind: RoomKind) -> bool {
    let vault = kind == RoomKind::Vault;
    let cols = level.config.cols as i32;
    let rows = level.config.rows as i32;
    // Vaults keep an extra cell of clearance on every side.
    let (xlim, ylim) = if vault {
        (level.config.xlim + 1, level.config.ylim + 1)
    } else {
        (level.config.xlim, level.config.ylim)
    };

    // One lighting roll per room, not per attempt.
    let rlit = rng.rnd(12) < 11 && rng.rn2(77) != 0;

    for _ in 0..ROOM_TRY_LIMIT {
        let Some(r1) = pool.sample(rng) else {
            return false;
        };
        let (lx, ly, hx, hy) = (r1.lx, r1.ly, r1.hx, r1.hy);

        let (dx, mut dy) = if vault {
            (1, 1)
        } else {
            let dx = 2 + rng.rn2(if hx - lx > 28 { 12 } else { 8 });
            let mut dy = 2 + rng.rn2(4);
            if dx * dy > 50 {
                dy = 50 / dx;
            }
            (dx, dy)
        };

        // Rectangles flush with a map edge need less clearance on that
        // side: there is no neighbor to keep apart from.
        let xborder = if lx > 0 && hx < cols - 1 { 2 * xlim } else { xlim + 1 };
        let yborder = if ly > 0 && hy < rows - 1 { 2 * ylim } else { ylim + 1 };
        if hx - lx < dx + 3 + xborder || hy - ly < dy + 3 + yborder {
            continue;
        }

        let xabs = lx
            + if lx > 0 { xlim } else { 3 }
            + rng.rn2(hx - if lx > 0 { lx } else { 3 } - dx - xborder + 1);
        let mut yabs = ly
            + if ly > 0 { ylim } else { 2 }
            + rng.rn2(hy - if ly > 0 { ly } else { 2 } - dy - yborder + 1);

        // A full-height rectangle tends to spawn rooms in the lower half;
        // occasionally hoist one up to keep the top band populated.
        let nrooms = level.rooms.len();
        if ly == 0
            && hy >= rows - 1
            && (nrooms == 0 || rng.rn2(nrooms as i32) == 0)
            && yabs + dy > rows / 2
        {
            yabs = rng.rn2(3) + 2;
            if nrooms < 4 && dy > 1 {
                dy -= 1;
            }
        }

        let Some((xabs, yabs, dx, dy)) = check_room(level, xabs, dx, yabs, dy) else {
            continue;
        };

        let wtmp = dx + 1;
        let htmp = dy + 1;
        let r2 = FreeRect::new(xabs - 1, yabs - 1, xabs + wtmp, yabs + htmp);
        pool.split(r1, r2);

        if vault {
            level.vault = Some((xabs, yabs));
        } else {
            add_room(level, xabs, yabs, xabs + wtmp - 1, yabs + htmp - 1, rlit);
        }
        return true;
    }
    false
}

/// Clamp a candidate room into the interior band of the map. `None` if
/// clamping leaves nothing usable.
fn check_room(
    level: &Level,
    lowx: i32,
    ddx: i32,
    lowy: i32,
    ddy: i32,
) -> Option<(i32, i32, i32, i32)> {
    let cols = level.config.cols as i32;
    let rows = level.config.rows as i32;

    let hix = (lowx + ddx).min(cols - 3);
    let hiy = (lowy + ddy).min(rows - 3);
    let lowx = lowx.max(3);
    let lowy = lowy.max(2);

    if hix <= lowx || hiy <= lowy {
        return None;
    }
    Some((lowx, lowy, hix - lowx, hiy - lowy))
}

/// Paint a room onto the grid and register it. Bounds are the floor
/// rectangle; walls go one cell outside.
pub fn add_room(level: &mut Level, lowx: i32, lowy: i32, hix: i32, hiy: i32, lit: bool) {
    let (lowx, lowy, hix, hiy) = carve_room(level, lowx, lowy, hix, hiy, lit);
    let fdoor = level.doors.len();
    level.rooms.push(Room {
        lx: lowx,
        ly: lowy,
        hx: hix,
        hy: hiy,
        lit,
        doorct: 0,
        fdoor,
        kind: RoomKind::Ordinary,
    });
}

fn carve_room(
    level: &mut Level,
    lowx: i32,
    lowy: i32,
    hix: i32,
    hiy: i32,
    lit: bool,
) -> (i32, i32, i32, i32) {
    let cols = level.config.cols as i32;
    let rows = level.config.rows as i32;

    // Bumping the map edge would put a wall out of bounds.
    let lowx = if lowx == 0 { 1 } else { lowx };
    let lowy = if lowy == 0 { 1 } else { lowy };
    let hix = hix.min(cols - 2);
    let hiy = hiy.min(rows - 2);

    if lit {
        for x in lowx - 1..=hix + 1 {
            for y in (lowy - 1).max(0)..=hiy + 1 {
                level.cell_mut(x, y).lit = true;
            }
        }
    }

    for x in lowx - 1..=hix + 1 {
        level.cell_mut(x, lowy - 1).typ = CellType::HWall;
        level.cell_mut(x, hiy + 1).typ = CellType::HWall;
    }
    for y in lowy..=hiy {
        level.cell_mut(lowx - 1, y).typ = CellType::VWall;
        level.cell_mut(hix + 1, y).typ = CellType::VWall;
    }
    for x in lowx..=hix {
        for y in lowy..=hiy {
            level.cell_mut(x, y).typ = CellType::Room;
        }
    }

    level.cell_mut(lowx - 1, lowy - 1).typ = CellType::TLCorner;
    level.cell_mut(hix + 1, lowy - 1).typ = CellType::TRCorner;
    level.cell_mut(lowx - 1, hiy + 1).typ = CellType::BLCorner;
    level.cell_mut(hix + 1, hiy + 1).typ = CellType::BRCorner;

    (lowx, lowy, hix, hiy)
}

fn mkstairs(level: &mut Level, x: i32, y: i32, up: bool) {
    level.cell_mut(x, y).typ = if up {
        CellType::StairsUp
    } else {
        CellType::StairsDown
    };
    level.stairs.push(Stairway { x, y, up });
}
