//! Plain-text *.lif* (Life 1.x) pattern loader.
//!
//! * Header line starts with "#Life 1." (ignored)
//! * Comment lines begin with '#'.
//! * "#P x y" re-positions the cursor.
//! * Pattern rows use '.' (dead) and '*' (alive).

use crate::error::PatternError;
use crate::grid::CaGrid;

/// Load a .lif string into `grid`, top-left offset `(ox, oy)`, writing
/// `alive_state` for every `*` cell.
pub fn load_lif_into_grid_with_state(
    grid: &mut CaGrid,
    lif: &str,
    ox: usize,
    oy: usize,
    alive_state: u16,
) -> Result<(), PatternError> {
    let mut px = 0isize;
    let mut py = 0isize;

    for line in lif.lines() {
        if line.starts_with("#Life") || line.starts_with("#N") || line.starts_with("#D") {
            continue; // header / comments
        }
        if let Some(rest) = line.strip_prefix("#P ") {
            let parts: Vec<_> = rest.split_whitespace().collect();
            if parts.len() == 2 {
                px = parts[0].parse::<isize>().unwrap_or(0);
                py = parts[1].parse::<isize>().unwrap_or(0);
            }
            continue;
        }

        for (dx, ch) in line.chars().enumerate() {
            match ch {
                '.' => {}
                '*' => {
                    let gx = ox as isize + px + dx as isize;
                    let gy = oy as isize + py;
                    if gx < 0 || gy < 0 || gx as usize >= grid.width() || gy as usize >= grid.height() {
                        return Err(PatternError::OutOfBounds);
                    }
                    grid.fill_cell(gx as usize, gy as usize, alive_state);
                }
                _ => return Err(PatternError::InvalidChar(ch)),
            }
        }
        py += 1;
        px = 0;
    }
    Ok(())
}

/// Convenience wrapper that stamps the fully-alive state (`1`).
pub fn load_lif_into_grid(grid: &mut CaGrid, lif: &str, ox: usize, oy: usize) -> Result<(), PatternError> {
    load_lif_into_grid_with_state(grid, lif, ox, oy, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_simple_lif_pattern() {
        let mut grid = CaGrid::new(5, 5).unwrap();
        let lif = "#Life 1.06\n.*.\n..*\n***\n";
        load_lif_into_grid(&mut grid, lif, 1, 1).unwrap();
        assert_eq!(grid.get_cell(2, 1), 1);
        assert_eq!(grid.get_cell(3, 2), 1);
        assert_eq!(grid.get_cell(1, 3), 1);
    }

    #[test]
    fn respects_position_directive() {
        let mut grid = CaGrid::new(6, 6).unwrap();
        let lif = "#Life 1.06\n#P 2 2\n*\n";
        load_lif_into_grid(&mut grid, lif, 0, 0).unwrap();
        assert_eq!(grid.get_cell(2, 2), 1);
    }

    #[test]
    fn bad_char_errors() {
        let mut grid = CaGrid::new(5, 5).unwrap();
        let err = load_lif_into_grid(&mut grid, "x\n", 0, 0);
        assert_eq!(err, Err(PatternError::InvalidChar('x')));
    }
}
