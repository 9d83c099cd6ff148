//! Pattern I/O: RLE (Run-Length Encoded) loader plus a small named-pattern
//! catalog (C7 per SPEC_FULL.md).
//!
//! Reference: <https://conwaylife.com/wiki/Run_Length_Encoded>
//! Only essential tokens are parsed. Comments and header lines are skipped.
//!
//! Generalized from the teacher's loader (which always wrote
//! `CellState::Alive`) to stamp an arbitrary `u16` alive-state value, since a
//! Generations rule's "this cell starts alive" may not be state `1`... in
//! practice it always is (state `1` is the spec's one fully-alive value),
//! but the loader takes the value as a parameter rather than hardcoding it so
//! callers don't have to special-case it.

use core::str::Chars;

use crate::error::PatternError;
use crate::grid::CaGrid;

pub mod lif;
pub use lif::load_lif_into_grid;

/// Load an RLE string into `grid`, placing top-left corner at `(ox, oy)`,
/// writing `alive_state` for every live cell the pattern marks.
/// Returns `PatternError` if the pattern goes out of bounds or the RLE is
/// malformed.
pub fn load_rle_into_grid_with_state(
    grid: &mut CaGrid,
    rle: &str,
    ox: usize,
    oy: usize,
    alive_state: u16,
) -> Result<(), PatternError> {
    let cleaned: String = rle
        .lines()
        .filter(|l| !l.starts_with('#') && !l.starts_with('x'))
        .collect();
    parse_body(grid, &cleaned, ox, oy, alive_state)
}

/// Convenience wrapper that stamps the fully-alive state (`1`).
pub fn load_rle_into_grid(grid: &mut CaGrid, rle: &str, ox: usize, oy: usize) -> Result<(), PatternError> {
    load_rle_into_grid_with_state(grid, rle, ox, oy, 1)
}

fn parse_body(
    grid: &mut CaGrid,
    body: &str,
    ox: usize,
    oy: usize,
    alive_state: u16,
) -> Result<(), PatternError> {
    let mut chars = body.chars();
    let (mut x, mut y) = (0usize, 0usize);
    while let Some(ch) = chars.next() {
        match ch {
            '0'..='9' => {
                let run = read_number(ch, &mut chars)?;
                if let Some(tok) = chars.next() {
                    apply_token(grid, tok, run, &mut x, &mut y, ox, oy, alive_state)?;
                } else {
                    return Err(PatternError::InvalidRun);
                }
            }
            'b' | 'o' | '$' | '!' => apply_token(grid, ch, 1, &mut x, &mut y, ox, oy, alive_state)?,
            '\n' | '\r' | ' ' => continue,
            _ => return Err(PatternError::InvalidChar(ch)),
        }
    }
    Ok(())
}

#[inline]
fn read_number(first: char, chars: &mut Chars) -> Result<usize, PatternError> {
    let mut n = first.to_digit(10).unwrap() as usize;
    while let Some(next) = chars.clone().next() {
        if next.is_ascii_digit() {
            chars.next();
            n = n * 10 + next.to_digit(10).unwrap() as usize;
        } else {
            break;
        }
    }
    if n == 0 { Err(PatternError::InvalidRun) } else { Ok(n) }
}

fn apply_token(
    grid: &mut CaGrid,
    tok: char,
    run: usize,
    x: &mut usize,
    y: &mut usize,
    ox: usize,
    oy: usize,
    alive_state: u16,
) -> Result<(), PatternError> {
    match tok {
        'b' => *x += run, // dead cells
        'o' => {
            for _ in 0..run {
                if ox + *x >= grid.width() || oy + *y >= grid.height() {
                    return Err(PatternError::OutOfBounds);
                }
                grid.fill_cell(ox + *x, oy + *y, alive_state);
                *x += 1;
            }
        }
        '$' => {
            *y += run;
            *x = 0;
        }
        '!' => return Ok(()), // end of pattern
        _ => return Err(PatternError::InvalidChar(tok)),
    }
    Ok(())
}

/// A small catalog of named patterns, stored as RLE, for the "named pattern
/// stamped at the center" seed source (spec §6).
pub fn named_pattern(name: &str) -> Option<&'static str> {
    Some(match name {
        "glider" => "bob$2bo$3o!",
        "blinker" => "3o!",
        "block" => "2o$2o!",
        "toad" => "b3o$3ob!",
        "beacon" => "2o2b$2o2b$2b2o$2b2o!",
        "lwss" => "bo2bo$o4b$o3bo$4o!",
        _ => return None,
    })
}
