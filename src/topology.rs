//! C2 — Topology Resolver.
//!
//! Maps a requested `(x, y)`, possibly outside `[0, W) x [0, H)`, to an
//! in-bounds cell under one of nine boundary modes, or reports the cell as
//! absent (equivalent to dead for all downstream counting).
//!
//! A boundary mode is modeled as two independent concerns: does an axis
//! wrap, and does crossing that axis once flip the other coordinate. This
//! mirrors the teacher's single `wrap` Cargo feature (`lib.rs::neighbour_coord`,
//! torus vs. clamp), generalized to the full 3x3 wrap/flip product the spec
//! requires.

use serde::{Deserialize, Serialize};

/// Boundary topology, keyed by the wire-stable tokens in spec §6.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Boundary {
    Plane,
    CylinderX,
    CylinderY,
    Torus,
    MobiusX,
    MobiusY,
    KleinX,
    KleinY,
    ProjectivePlane,
}

struct BoundaryRules {
    x_wraps: bool,
    y_wraps: bool,
    x_cross_flips_y: bool,
    y_cross_flips_x: bool,
}

impl Boundary {
    /// Wire-stable token, as documented in spec §6.
    pub fn token(self) -> &'static str {
        match self {
            Boundary::Plane => "plane",
            Boundary::CylinderX => "cylinderX",
            Boundary::CylinderY => "cylinderY",
            Boundary::Torus => "torus",
            Boundary::MobiusX => "mobiusX",
            Boundary::MobiusY => "mobiusY",
            Boundary::KleinX => "kleinX",
            Boundary::KleinY => "kleinY",
            Boundary::ProjectivePlane => "projectivePlane",
        }
    }

    /// Parse a wire-stable token, per spec §6.
    pub fn parse(token: &str) -> Option<Self> {
        Some(match token {
            "plane" => Boundary::Plane,
            "cylinderX" => Boundary::CylinderX,
            "cylinderY" => Boundary::CylinderY,
            "torus" => Boundary::Torus,
            "mobiusX" => Boundary::MobiusX,
            "mobiusY" => Boundary::MobiusY,
            "kleinX" => Boundary::KleinX,
            "kleinY" => Boundary::KleinY,
            "projectivePlane" => Boundary::ProjectivePlane,
            _ => return None,
        })
    }

    fn rules(self) -> BoundaryRules {
        use Boundary::*;
        match self {
            Plane => BoundaryRules { x_wraps: false, y_wraps: false, x_cross_flips_y: false, y_cross_flips_x: false },
            CylinderX => BoundaryRules { x_wraps: true, y_wraps: false, x_cross_flips_y: false, y_cross_flips_x: false },
            CylinderY => BoundaryRules { x_wraps: false, y_wraps: true, x_cross_flips_y: false, y_cross_flips_x: false },
            Torus => BoundaryRules { x_wraps: true, y_wraps: true, x_cross_flips_y: false, y_cross_flips_x: false },
            MobiusX => BoundaryRules { x_wraps: true, y_wraps: false, x_cross_flips_y: true, y_cross_flips_x: false },
            MobiusY => BoundaryRules { x_wraps: false, y_wraps: true, x_cross_flips_y: false, y_cross_flips_x: true },
            KleinX => BoundaryRules { x_wraps: true, y_wraps: true, x_cross_flips_y: true, y_cross_flips_x: false },
            KleinY => BoundaryRules { x_wraps: true, y_wraps: true, x_cross_flips_y: false, y_cross_flips_x: true },
            ProjectivePlane => BoundaryRules { x_wraps: true, y_wraps: true, x_cross_flips_y: true, y_cross_flips_x: true },
        }
    }
}

/// Resolve a (possibly out-of-bounds, possibly multiply-wrapped) coordinate
/// against a `width x height` grid under `boundary`. Returns `None` for
/// "absent" (treated as dead by callers).
pub fn resolve(x: i64, y: i64, width: usize, height: usize, boundary: Boundary) -> Option<(usize, usize)> {
    let w = width as i64;
    let h = height as i64;
    let rules = boundary.rules();

    let x_in_bounds = x >= 0 && x < w;
    if !x_in_bounds && !rules.x_wraps {
        return None;
    }
    let y_in_bounds = y >= 0 && y < h;
    if !y_in_bounds && !rules.y_wraps {
        return None;
    }

    let wx = x.div_euclid(w);
    let mut xr = x.rem_euclid(w);
    let wy = y.div_euclid(h);
    let mut yr = y.rem_euclid(h);

    if wx.rem_euclid(2) != 0 && rules.x_cross_flips_y {
        yr = h - 1 - yr;
    }
    if wy.rem_euclid(2) != 0 && rules.y_cross_flips_x {
        xr = w - 1 - xr;
    }

    Some((xr as usize, yr as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_out_of_bounds_is_absent() {
        assert_eq!(resolve(-1, 0, 5, 5, Boundary::Plane), None);
        assert_eq!(resolve(5, 0, 5, 5, Boundary::Plane), None);
        assert_eq!(resolve(0, 0, 5, 5, Boundary::Plane), Some((0, 0)));
    }

    #[test]
    fn torus_wraps_both_axes_without_flip() {
        assert_eq!(resolve(-1, -1, 5, 5, Boundary::Torus), Some((4, 4)));
        assert_eq!(resolve(5, 5, 5, 5, Boundary::Torus), Some((0, 0)));
    }

    #[test]
    fn mobius_x_flips_y_on_single_crossing() {
        // P4: crossing the right edge once flips y to H-1-y.
        assert_eq!(resolve(5, 2, 5, 5, Boundary::MobiusX), Some((0, 2)));
        assert_eq!(resolve(-1, 2, 5, 5, Boundary::MobiusX), Some((4, 2)));
    }

    #[test]
    fn mobius_x_double_crossing_restores_y() {
        // P4: crossing twice (offset +2 on a width-1 grid) returns to the
        // original y.
        assert_eq!(resolve(2, 3, 1, 5, Boundary::MobiusX), Some((0, 3)));
    }

    #[test]
    fn klein_x_flips_y_only_on_x_crossing() {
        assert_eq!(resolve(5, 0, 5, 5, Boundary::KleinX), Some((0, 4)));
        assert_eq!(resolve(0, 5, 5, 5, Boundary::KleinX), Some((0, 0)));
    }

    #[test]
    fn projective_plane_flips_on_either_crossing() {
        assert_eq!(resolve(5, 0, 5, 5, Boundary::ProjectivePlane), Some((0, 4)));
        assert_eq!(resolve(0, 5, 5, 5, Boundary::ProjectivePlane), Some((4, 0)));
    }

    #[test]
    fn token_round_trip() {
        for b in [
            Boundary::Plane, Boundary::CylinderX, Boundary::CylinderY, Boundary::Torus,
            Boundary::MobiusX, Boundary::MobiusY, Boundary::KleinX, Boundary::KleinY,
            Boundary::ProjectivePlane,
        ] {
            assert_eq!(Boundary::parse(b.token()), Some(b));
        }
        assert_eq!(Boundary::parse("nonsense"), None);
    }
}
