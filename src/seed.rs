//! Seed-source and paint-request interfaces consumed from external
//! collaborators (spec §6). Generalizes the teacher's
//! `infinite_grid.rs::insert_pattern`/`patterns` module (glider/blinker/block
//! literals stamped at an offset) to the full seed-source vocabulary the
//! spec names: random density, centered disk, centered ring, symmetric
//! cross, a literal grid, or a named pattern (optionally tiled).

use rand::Rng;

use crate::error::PatternError;
use crate::grid::CaGrid;
use crate::io::{load_rle_into_grid, named_pattern};

/// How the host wants the front buffer initially populated.
pub enum SeedSource {
    RandomDensity { density: f64, include_decay: bool, num_states: u16 },
    CenteredDisk { radius: i64, state: u16 },
    CenteredRing { inner_radius: i64, outer_radius: i64, state: u16 },
    SymmetricCross { arm_len: i64, state: u16 },
    Literal(Vec<Vec<u16>>),
    Named { name: String, spacing: Option<(usize, usize)> },
}

/// Populate `grid`'s front buffer per `source`.
pub fn apply_seed(grid: &mut CaGrid, source: &SeedSource, rng: &mut impl Rng) -> Result<(), PatternError> {
    match source {
        SeedSource::RandomDensity { density, include_decay, num_states } => {
            grid.randomize(*density, *include_decay, *num_states, rng);
            Ok(())
        }
        SeedSource::CenteredDisk { radius, state } => {
            let (cx, cy) = center(grid);
            for y in 0..grid.height() as i64 {
                for x in 0..grid.width() as i64 {
                    let (dx, dy) = (x - cx, y - cy);
                    if dx * dx + dy * dy <= radius * radius {
                        grid.fill_cell(x as usize, y as usize, *state);
                    }
                }
            }
            Ok(())
        }
        SeedSource::CenteredRing { inner_radius, outer_radius, state } => {
            let (cx, cy) = center(grid);
            for y in 0..grid.height() as i64 {
                for x in 0..grid.width() as i64 {
                    let (dx, dy) = (x - cx, y - cy);
                    let d2 = dx * dx + dy * dy;
                    if d2 >= inner_radius * inner_radius && d2 <= outer_radius * outer_radius {
                        grid.fill_cell(x as usize, y as usize, *state);
                    }
                }
            }
            Ok(())
        }
        SeedSource::SymmetricCross { arm_len, state } => {
            let (cx, cy) = center(grid);
            for d in -arm_len..=*arm_len {
                set_if_in_bounds(grid, cx + d, cy, *state);
                set_if_in_bounds(grid, cx, cy + d, *state);
            }
            Ok(())
        }
        SeedSource::Literal(rows) => {
            for (y, row) in rows.iter().enumerate() {
                for (x, &state) in row.iter().enumerate() {
                    grid.fill_cell(x, y, state);
                }
            }
            Ok(())
        }
        SeedSource::Named { name, spacing } => {
            let rle = named_pattern(name).ok_or_else(|| PatternError::UnknownName(name.clone()))?;
            match spacing {
                None => {
                    let (cx, cy) = center(grid);
                    load_rle_into_grid(grid, rle, cx.max(0) as usize, cy.max(0) as usize)
                }
                Some((sx, sy)) => {
                    let mut oy = 0;
                    while oy < grid.height() {
                        let mut ox = 0;
                        while ox < grid.width() {
                            // Best-effort tiling: a copy that would run off
                            // the edge is simply skipped rather than erroring
                            // the whole seed.
                            let _ = load_rle_into_grid(grid, rle, ox, oy);
                            ox += sx;
                        }
                        oy += sy;
                    }
                    Ok(())
                }
            }
        }
    }
}

/// Shape for a paint stroke (spec §6 paint request).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PaintShape {
    Circle,
    Square,
}

/// Write `state` into every cell within `radius` of `(cx, cy)`, per `shape`,
/// with independent per-cell probability `density`. Intended to be called
/// between steps (spec §6 paint request).
pub fn paint(
    grid: &mut CaGrid,
    cx: i64,
    cy: i64,
    radius: i64,
    state: u16,
    shape: PaintShape,
    density: f64,
    rng: &mut impl Rng,
) {
    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let (dx, dy) = (x - cx, y - cy);
            let inside = match shape {
                PaintShape::Circle => dx * dx + dy * dy <= radius * radius,
                PaintShape::Square => dx.abs() <= radius && dy.abs() <= radius,
            };
            if inside && rng.gen_bool(density.clamp(0.0, 1.0)) {
                set_if_in_bounds(grid, x, y, state);
            }
        }
    }
}

fn center(grid: &CaGrid) -> (i64, i64) {
    (grid.width() as i64 / 2, grid.height() as i64 / 2)
}

fn set_if_in_bounds(grid: &mut CaGrid, x: i64, y: i64, state: u16) {
    if x >= 0 && y >= 0 && (x as usize) < grid.width() && (y as usize) < grid.height() {
        grid.fill_cell(x as usize, y as usize, state);
    }
}
