//! Room registry types.

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

/// What kind of room a placement produced. Vaults reserve space but are
/// never painted or wired into the corridor graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomKind {
    #[default]
    Ordinary,
    Vault,
}

/// A placed room. Bounds are the floor rectangle, inclusive; the wall
/// border sits one cell outside them. Immutable once carved except for the
/// door bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub lx: i32,
    pub ly: i32,
    pub hx: i32,
    pub hy: i32,
    /// Interior is lit
    pub lit: bool,
    /// Number of doors owned by this room
    pub doorct: usize,
    /// Index of this room's first door in the level's global door list
    pub fdoor: usize,
    pub kind: RoomKind,
}

impl Room {
    pub fn width(&self) -> i32 {
        self.hx - self.lx + 1
    }

    pub fn height(&self) -> i32 {
        self.hy - self.ly + 1
    }

    /// Check if (x, y) lies on the floor rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.lx && x <= self.hx && y >= self.ly && y <= self.hy
    }

    /// Check if two rooms' floor rectangles come within `margin` cells of
    /// each other.
    pub fn overlaps(&self, other: &Room, margin: i32) -> bool {
        !(self.hx + margin < other.lx
            || other.hx + margin < self.lx
            || self.hy + margin < other.ly
            || other.hy + margin < self.ly)
    }

    /// Random x on the floor rectangle.
    pub fn somex(&self, rng: &mut GameRng) -> i32 {
        self.lx + rng.rn2(self.hx - self.lx + 1)
    }

    /// Random y on the floor rectangle.
    pub fn somey(&self, rng: &mut GameRng) -> i32 {
        self.ly + rng.rn2(self.hy - self.ly + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(lx: i32, ly: i32, hx: i32, hy: i32) -> Room {
        Room {
            lx,
            ly,
            hx,
            hy,
            lit: true,
            doorct: 0,
            fdoor: 0,
            kind: RoomKind::Ordinary,
        }
    }

    #[test]
    fn dimensions() {
        let r = room(10, 5, 15, 8);
        assert_eq!(r.width(), 6);
        assert_eq!(r.height(), 4);
        assert!(r.contains(10, 5));
        assert!(r.contains(15, 8));
        assert!(!r.contains(16, 8));
    }

    #[test]
    fn overlap_with_margin() {
        let a = room(5, 5, 9, 9);
        let b = room(11, 5, 15, 9);
        assert!(!a.overlaps(&b, 0));
        assert!(!a.overlaps(&b, 1));
        assert!(a.overlaps(&b, 2));
    }

    #[test]
    fn random_points_stay_inside() {
        let r = room(30, 10, 37, 14);
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            let (x, y) = (r.somex(&mut rng), r.somey(&mut rng));
            assert!(r.contains(x, y));
        }
    }
}
