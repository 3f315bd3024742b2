//! Normalized turning angles for the rotation system.

use geo::Coord;

/// The direction vector from `from` to `to`.
#[inline]
pub(crate) fn direction(from: Coord<f64>, to: Coord<f64>) -> Coord<f64> {
    Coord { x: to.x - from.x, y: to.y - from.y }
}

/// Signed turning angle from `in_dir` to `out_dir`, in degrees, normalized
/// into `(0°, 360°]`.
///
/// The raw angle is `atan2(cross, dot)` in `(-180°, 180°]`; values at or
/// below zero are shifted by a full turn.  `in_dir` points *back* along the
/// incoming edge (origin − destination), so the candidate that exactly
/// reverses the incoming edge measures 0° and normalizes to 360°, sorting
/// last within its fan.  The minimum over a fan is therefore the edge
/// reached by the smallest counter-clockwise turn out of the reversal.
pub(crate) fn turn_degrees(in_dir: Coord<f64>, out_dir: Coord<f64>) -> f64 {
    let cross = in_dir.x * out_dir.y - in_dir.y * out_dir.x;
    let dot = in_dir.x * out_dir.x + in_dir.y * out_dir.y;
    let degrees = cross.atan2(dot).to_degrees();
    if degrees <= 0.0 { degrees + 360.0 } else { degrees }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn exact_reversal_is_a_full_turn() {
        let d = coord(-1.0, 0.0);
        assert_eq!(turn_degrees(d, d), 360.0);
    }

    #[test]
    fn opposite_direction_is_half_turn() {
        // Continuing straight through the vertex: out_dir is the reverse of
        // in_dir (in_dir already points backwards).
        assert!((turn_degrees(coord(-1.0, 0.0), coord(1.0, 0.0)) - 180.0).abs() < 1e-12);
        // Same configuration mirrored, where cross comes out as -0.0.
        assert!((turn_degrees(coord(1.0, 0.0), coord(-1.0, 0.0)) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn quarter_turns() {
        let back = coord(-1.0, 0.0);
        assert!((turn_degrees(back, coord(0.0, -1.0)) - 90.0).abs() < 1e-12);
        assert!((turn_degrees(back, coord(0.0, 1.0)) - 270.0).abs() < 1e-12);
    }

    #[test]
    fn eighth_turns() {
        let back = coord(-1.0, 0.0);
        assert!((turn_degrees(back, coord(-1.0, -1.0)) - 45.0).abs() < 1e-12);
        assert!((turn_degrees(back, coord(-1.0, 1.0)) - 315.0).abs() < 1e-12);
    }

    #[test]
    fn magnitude_does_not_matter() {
        let a = turn_degrees(coord(-2.0, 0.0), coord(3.0, 3.0));
        let b = turn_degrees(coord(-0.5, 0.0), coord(0.1, 0.1));
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn range_is_left_open_at_zero() {
        // Any non-reversal lands strictly inside (0, 360).
        let angle = turn_degrees(coord(-1.0, 0.0), coord(-1.0, -1e-9));
        assert!(angle > 0.0 && angle < 360.0);
    }
}
