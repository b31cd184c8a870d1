//! Free-rectangle bookkeeping for room placement.
//!
//! The pool holds the currently unclaimed regions of the map. Placing a
//! room carves its margin rectangle out of the pool, leaving up to four
//! remainder strips per affected rectangle; strips too thin to ever hold
//! another room are discarded on the spot.

use serde::{Deserialize, Serialize};

use crate::rng::GameRng;

use super::level::LevelConfig;

/// An unclaimed region, inclusive on all four bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeRect {
    pub lx: i32,
    pub ly: i32,
    pub hx: i32,
    pub hy: i32,
}

impl FreeRect {
    pub const fn new(lx: i32, ly: i32, hx: i32, hy: i32) -> Self {
        Self { lx, ly, hx, hy }
    }

    /// Check if this rectangle fully contains another.
    pub fn contains(&self, other: &FreeRect) -> bool {
        self.lx <= other.lx && self.ly <= other.ly && self.hx >= other.hx && self.hy >= other.hy
    }

    /// Overlap of two rectangles, if any.
    pub fn intersection(&self, other: &FreeRect) -> Option<FreeRect> {
        if other.lx > self.hx || other.ly > self.hy || other.hx < self.lx || other.hy < self.ly {
            return None;
        }
        let r = FreeRect::new(
            self.lx.max(other.lx),
            self.ly.max(other.ly),
            self.hx.min(other.hx),
            self.hy.min(other.hy),
        );
        if r.lx > r.hx || r.ly > r.hy {
            return None;
        }
        Some(r)
    }
}

/// The pool of free rectangles available for room placement.
#[derive(Debug, Clone)]
pub struct RectPool {
    rects: Vec<FreeRect>,
    cols: i32,
    rows: i32,
    xlim: i32,
    ylim: i32,
    max_rects: usize,
}

impl RectPool {
    /// Pool covering the whole grid as a single rectangle.
    pub fn new(config: &LevelConfig) -> Self {
        let cols = config.cols as i32;
        let rows = config.rows as i32;
        let mut pool = Self {
            rects: Vec::with_capacity(config.max_rects),
            cols,
            rows,
            xlim: config.xlim,
            ylim: config.ylim,
            max_rects: config.max_rects,
        };
        pool.rects.push(FreeRect::new(0, 0, cols - 1, rows - 1));
        pool
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// The current pool members.
    pub fn rects(&self) -> &[FreeRect] {
        &self.rects
    }

    /// Uniform random pool member; `None` once the pool is exhausted,
    /// which ends the placement phase.
    pub fn sample(&self, rng: &mut GameRng) -> Option<FreeRect> {
        if self.rects.is_empty() {
            return None;
        }
        Some(self.rects[rng.rn2(self.rects.len() as i32) as usize])
    }

    /// Insert a rectangle. Silently dropped when the pool is full or the
    /// rectangle is already contained in an existing member.
    pub fn add(&mut self, r: FreeRect) {
        if self.rects.len() >= self.max_rects {
            return;
        }
        if self.rects.iter().any(|held| held.contains(&r)) {
            return;
        }
        self.rects.push(r);
    }

    /// Remove a rectangle by identity, swapping the last member into its
    /// slot. Pool order feeds both sampling and the split scan, so the
    /// swap semantics are part of the behavior.
    pub fn remove(&mut self, r: &FreeRect) {
        if let Some(idx) = self.rects.iter().position(|held| held == r) {
            self.rects.swap_remove(idx);
        }
    }

    /// Carve `r2` (a room's margin rectangle) out of `r1` and out of every
    /// other pool member it overlaps, keeping the usable remainder strips.
    ///
    /// Pool members can overlap each other, so carving one member's strips
    /// is not enough: the pool is rescanned against `r2` itself, last to
    /// first, until no member touches it. Strips never overlap `r2`, so
    /// the rescan terminates. Afterwards no pool member covers any part of
    /// the placed room.
    pub fn split(&mut self, r1: FreeRect, r2: FreeRect) {
        self.remove(&r1);
        self.carve(&r1, &r2);

        while let Some(idx) = self
            .rects
            .iter()
            .rposition(|held| held.intersection(&r2).is_some())
        {
            let held = self.rects.swap_remove(idx);
            self.carve(&held, &r2);
        }
    }

    /// Emit the usable remainder strips of `r1` minus its overlap with the
    /// carved area.
    fn carve(&mut self, r1: &FreeRect, r2: &FreeRect) {
        let Some(overlap) = r1.intersection(r2) else {
            return;
        };
        let (xlim, ylim) = (self.xlim, self.ylim);

        // Top strip
        let clearance = if r1.hy < self.rows - 1 { 2 * ylim } else { ylim + 1 };
        if overlap.ly - r1.ly - 1 > clearance + 4 {
            self.add(FreeRect { hy: overlap.ly - 2, ..*r1 });
        }

        // Left strip
        let clearance = if r1.hx < self.cols - 1 { 2 * xlim } else { xlim + 1 };
        if overlap.lx - r1.lx - 1 > clearance + 4 {
            self.add(FreeRect { hx: overlap.lx - 2, ..*r1 });
        }

        // Bottom strip
        let clearance = if r1.ly > 0 { 2 * ylim } else { ylim + 1 };
        if r1.hy - overlap.hy - 1 > clearance + 4 {
            self.add(FreeRect { ly: overlap.hy + 2, ..*r1 });
        }

        // Right strip
        let clearance = if r1.lx > 0 { 2 * xlim } else { xlim + 1 };
        if r1.hx - overlap.hx - 1 > clearance + 4 {
            self.add(FreeRect { lx: overlap.hx + 2, ..*r1 });
        }
    }
}
