//! Corridor digging and room connectivity.
//!
//! Corridors are dug one cell at a time by a greedy walk that prefers the
//! dominant axis toward the target and turns when blocked. Connectivity of
//! the room graph is tracked with a union-find over room indices; the
//! merge order (lower root wins) keeps component labels stable across a
//! generation run.

use thiserror::Error;

use crate::rng::GameRng;

use super::cell::CellType;
use super::door::{dodoor, okdoor};
use super::level::Level;

/// Why a dig was abandoned. All of these are soft failures: the caller
/// drops the corridor and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigAbort {
    #[error("corridor left the diggable map area")]
    OutOfBounds,
    #[error("corridor ran into undiggable terrain")]
    Blocked,
    #[error("corridor exceeded the step budget")]
    StepBudget,
    #[error("extra corridor abandoned mid-dig")]
    GaveUp,
}

/// Union-find over room indices.
#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    parent: Vec<usize>,
}

impl ConnectivityTracker {
    pub fn new(rooms: usize) -> Self {
        Self {
            parent: (0..rooms).collect(),
        }
    }

    fn find(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    /// Merge the components of `a` and `b`. The lower root becomes the
    /// representative of the merged component.
    pub fn merge(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra < rb {
            self.parent[rb] = ra;
        } else {
            self.parent[ra] = rb;
        }
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// True once every room shares one component. Vacuously true for an
    /// empty level.
    pub fn all_connected(&self) -> bool {
        self.parent.iter().enumerate().all(|(i, _)| self.find(i) == self.find(0))
    }
}

/// Pick a door position on the wall span `(xl, yl)..(xh, yh)`. Tries a
/// random probe first, then scans for any eligible wall cell, then settles
/// for an existing door on the span, and finally falls back to a corner.
pub fn finddpos(level: &Level, rng: &mut GameRng, xl: i32, yl: i32, xh: i32, yh: i32) -> (i32, i32) {
    let x = if xl == xh { xl } else { xl + rng.rn2(xh - xl + 1) };
    let y = if yl == yh { yl } else { yl + rng.rn2(yh - yl + 1) };
    if okdoor(level, x, y) {
        return (x, y);
    }
    for x in xl..=xh {
        for y in yl..=yh {
            if okdoor(level, x, y) {
                return (x, y);
            }
        }
    }
    for x in xl..=xh {
        for y in yl..=yh {
            if level.is_ok(x, y) && level.cell(x, y).typ.is_door() {
                return (x, y);
            }
        }
    }
    (xl, yh)
}

fn diggable(typ: CellType) -> bool {
    matches!(
        typ,
        CellType::Stone | CellType::Corridor | CellType::SecretCorridor
    )
}

/// Dig a corridor from `org` to `dest`, both inclusive. `nxcor` marks an
/// extra corridor, which may be abandoned partway and leaves hidden
/// segments now and then.
pub fn dig_corridor(
    level: &mut Level,
    rng: &mut GameRng,
    org: (i32, i32),
    dest: (i32, i32),
    nxcor: bool,
) -> Result<(), DigAbort> {
    let cols = level.config.cols as i32;
    let rows = level.config.rows as i32;
    let (mut xx, mut yy) = org;
    let (tx, ty) = dest;

    if xx <= 0 || yy <= 0 || xx >= cols - 1 || yy >= rows - 1 {
        return Err(DigAbort::OutOfBounds);
    }

    let (mut dx, mut dy) = if tx > xx {
        (1, 0)
    } else if ty > yy {
        (0, 1)
    } else if tx < xx {
        (-1, 0)
    } else {
        (0, -1)
    };
    // Back up one step so the loop carves the origin itself.
    xx -= dx;
    yy -= dy;

    let mut cct = 0;
    while xx != tx || yy != ty {
        cct += 1;
        if cct > 500 {
            return Err(DigAbort::StepBudget);
        }
        if nxcor && rng.one_in(35) {
            return Err(DigAbort::GaveUp);
        }

        xx += dx;
        yy += dy;
        if xx >= cols - 1 || xx <= 0 || yy <= 0 || yy >= rows - 1 {
            return Err(DigAbort::OutOfBounds);
        }

        match level.cell(xx, yy).typ {
            CellType::Stone => {
                let typ = if nxcor && rng.one_in(100) {
                    CellType::SecretCorridor
                } else {
                    CellType::Corridor
                };
                level.cell_mut(xx, yy).typ = typ;
            }
            CellType::Corridor | CellType::SecretCorridor => {}
            _ => return Err(DigAbort::Blocked),
        }

        let dix = (xx - tx).abs();
        let diy = (yy - ty).abs();

        // Snap back to the dominant axis when it is diggable.
        if dy != 0 && dix > diy {
            let ddx = if xx > tx { -1 } else { 1 };
            if diggable(level.cell(xx + ddx, yy).typ) {
                dx = ddx;
                dy = 0;
                continue;
            }
        } else if dx != 0 && diy > dix {
            let ddy = if yy > ty { -1 } else { 1 };
            if diggable(level.cell(xx, yy + ddy).typ) {
                dy = ddy;
                dx = 0;
                continue;
            }
        }

        // Straight ahead?
        if diggable(level.cell(xx + dx, yy + dy).typ) {
            continue;
        }

        // Turn toward the target.
        if dx != 0 {
            dx = 0;
            dy = if ty < yy { -1 } else { 1 };
        } else {
            dy = 0;
            dx = if tx < xx { -1 } else { 1 };
        }
        if diggable(level.cell(xx + dx, yy + dy).typ) {
            continue;
        }
        // Boxed in on both turns; reverse and hope.
        dx = -dx;
        dy = -dy;
    }
    Ok(())
}

/// Try to dig a corridor between rooms `a` and `b`, placing a door at each
/// end. Returns true if the rooms were joined.
pub fn join(
    level: &mut Level,
    tracker: &mut ConnectivityTracker,
    rng: &mut GameRng,
    a: usize,
    b: usize,
    nxcor: bool,
) -> bool {
    if a == b || a >= level.rooms.len() || b >= level.rooms.len() {
        return false;
    }
    if level.doors.len() >= level.config.max_doors {
        return false;
    }
    let croom = level.rooms[a];
    let troom = level.rooms[b];

    // Pick door spots on the pair of facing walls.
    let (dx, dy, cc, tt) = if troom.lx > croom.hx {
        let xx = croom.hx + 1;
        let tx = troom.lx - 1;
        let cc = finddpos(level, rng, xx, croom.ly, xx, croom.hy);
        let tt = finddpos(level, rng, tx, troom.ly, tx, troom.hy);
        (1, 0, cc, tt)
    } else if troom.hy < croom.ly {
        let yy = croom.ly - 1;
        let ty = troom.hy + 1;
        let cc = finddpos(level, rng, croom.lx, yy, croom.hx, yy);
        let tt = finddpos(level, rng, troom.lx, ty, troom.hx, ty);
        (0, -1, cc, tt)
    } else if troom.hx < croom.lx {
        let xx = croom.lx - 1;
        let tx = troom.hx + 1;
        let cc = finddpos(level, rng, xx, croom.ly, xx, croom.hy);
        let tt = finddpos(level, rng, tx, troom.ly, tx, troom.hy);
        (-1, 0, cc, tt)
    } else {
        let yy = croom.hy + 1;
        let ty = troom.ly - 1;
        let cc = finddpos(level, rng, croom.lx, yy, croom.hx, yy);
        let tt = finddpos(level, rng, troom.lx, ty, troom.hx, ty);
        (0, 1, cc, tt)
    };
    let (xx, yy) = cc;
    let (tx, ty) = (tt.0 - dx, tt.1 - dy);

    // Extra corridors only start on virgin stone.
    if nxcor
        && level.is_ok(xx + dx, yy + dy)
        && level.cell(xx + dx, yy + dy).typ != CellType::Stone
    {
        return false;
    }
    if okdoor(level, xx, yy) || !nxcor {
        dodoor(level, rng, xx, yy, a);
    }

    if dig_corridor(level, rng, (xx + dx, yy + dy), (tx, ty), nxcor).is_err() {
        return false;
    }

    if okdoor(level, tt.0, tt.1) || !nxcor {
        dodoor(level, rng, tt.0, tt.1, b);
    }

    tracker.merge(a, b);
    true
}

/// Wire the room list together: a chain pass, a skip-one pass, repeated
/// sweeps until every room is in one component, then a handful of extra
/// corridors for loops.
pub(crate) fn makecorridors(level: &mut Level, rng: &mut GameRng) -> ConnectivityTracker {
    let nroom = level.rooms.len();
    let mut tracker = ConnectivityTracker::new(nroom);
    if nroom < 2 {
        return tracker;
    }

    for a in 0..nroom - 1 {
        join(level, &mut tracker, rng, a, a + 1, false);
        if rng.one_in(50) {
            break;
        }
    }

    for a in 0..nroom - 2 {
        if !tracker.connected(a, a + 2) {
            join(level, &mut tracker, rng, a, a + 2, false);
        }
    }

    // Sweep until connected. Only counting successful joins guarantees
    // the loop terminates even when digs keep failing.
    loop {
        let mut any = false;
        for a in 0..nroom {
            for b in a + 1..nroom {
                if !tracker.connected(a, b) && join(level, &mut tracker, rng, a, b, false) {
                    any = true;
                }
            }
        }
        if !any || tracker.all_connected() {
            break;
        }
    }

    if nroom > 2 {
        let extras = rng.rn2(nroom as i32) + 4;
        for _ in 0..extras {
            let a = rng.rn2(nroom as i32) as usize;
            let mut b = rng.rn2(nroom as i32 - 2) as usize;
            if b >= a {
                b += 2;
            }
            join(level, &mut tracker, rng, a, b, true);
        }
    }
    tracker
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::level::LevelConfig;

    #[test]
    fn tracker_merges_toward_lower_root() {
        let mut t = ConnectivityTracker::new(5);
        assert!(!t.connected(0, 4));
        t.merge(3, 4);
        t.merge(0, 1);
        assert!(t.connected(3, 4));
        assert!(!t.connected(1, 3));
        assert!(!t.all_connected());
        t.merge(1, 3);
        t.merge(2, 4);
        assert!(t.all_connected());
    }

    #[test]
    fn tracker_on_empty_level() {
        let t = ConnectivityTracker::new(0);
        assert!(t.all_connected());
    }

    #[test]
    fn straight_dig_carves_a_corridor() {
        let mut level = Level::new(LevelConfig::default());
        let mut rng = GameRng::new(42);
        dig_corridor(&mut level, &mut rng, (10, 10), (20, 10), false).unwrap();
        for x in 10..=20 {
            assert_eq!(level.cell(x, 10).typ, CellType::Corridor, "at x={x}");
        }
    }

    #[test]
    fn dig_turns_around_corners() {
        let mut level = Level::new(LevelConfig::default());
        let mut rng = GameRng::new(42);
        dig_corridor(&mut level, &mut rng, (10, 5), (30, 15), false).unwrap();
        // Both endpoints were carved and the path is contiguous corridor.
        assert_eq!(level.cell(10, 5).typ, CellType::Corridor);
        assert_eq!(level.cell(30, 15).typ, CellType::Corridor);
    }

    #[test]
    fn dig_reports_blocked_terrain() {
        let mut level = Level::new(LevelConfig::default());
        let mut rng = GameRng::new(42);
        // Box the origin in on three sides; the walk reverses into the
        // remaining wall and gives up.
        for (x, y) in [(11, 10), (10, 9), (10, 11)] {
            level.cell_mut(x, y).typ = CellType::VWall;
        }
        assert_eq!(
            dig_corridor(&mut level, &mut rng, (10, 10), (20, 10), false),
            Err(DigAbort::Blocked)
        );
    }

    #[test]
    fn dig_rejects_border_origin() {
        let mut level = Level::new(LevelConfig::default());
        let mut rng = GameRng::new(42);
        assert_eq!(
            dig_corridor(&mut level, &mut rng, (0, 10), (20, 10), false),
            Err(DigAbort::OutOfBounds)
        );
    }

    #[test]
    fn finddpos_corner_fallback() {
        // All stone: no wall can take a door, no door exists, so the scan
        // falls through to the low-x high-y corner.
        let level = Level::new(LevelConfig::default());
        let mut rng = GameRng::new(42);
        assert_eq!(finddpos(&level, &mut rng, 5, 3, 5, 8), (5, 8));
    }
}
