//! C5 (evaluator half) — applies the rule to every cell and commits the step.
//!
//! Generalizes the teacher's `lib.rs::Grid::step` (clone the buffer, overwrite
//! cell-by-cell, install the clone) to decay states and vitality-weighted
//! neighbor counts. Per spec §5, no cell's evaluation depends on another's
//! output within the same step — the loop below is written as a flat,
//! branch-cheap pass precisely so it can be parallelized per cell without
//! changing its semantics.

use crate::grid::CaGrid;
use crate::neighborhood::effective_neighbor_count;
use crate::rule::RuleSpec;
use crate::vitality::VitalityTable;

/// Advance `grid` by one generation under `rule`, sampling `vitality` for
/// decaying neighbors. Writes every index of the back buffer exactly once,
/// then commits.
pub fn step(grid: &mut CaGrid, rule: &RuleSpec, vitality: &VitalityTable) {
    let (width, height) = (grid.width(), grid.height());
    for y in 0..height {
        for x in 0..width {
            let i = grid.index(x, y);
            let s = grid.read_front(i);
            let n = effective_neighbor_count(grid, x, y, rule, vitality);
            let next = rule.transition(s, n);
            grid.write_back(i, next);
        }
    }
    grid.commit_step();
}
