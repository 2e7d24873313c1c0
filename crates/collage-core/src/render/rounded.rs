//! Rounded-rectangle containment test used as the cell clip path.

/// Test whether a cell-local point lies inside a `width` x `height` rounded
/// rectangle with the given corner radius.
///
/// The radius is clamped to half the smaller extent, so an oversized radius
/// degrades to a capsule rather than producing negative corner centers. A
/// radius of zero (or less) is a plain rectangle test.
pub fn rounded_rect_contains(width: f64, height: f64, radius: f64, x: f64, y: f64) -> bool {
    if x < 0.0 || y < 0.0 || x > width || y > height {
        return false;
    }
    if radius <= 0.0 {
        return true;
    }

    let r = radius.min(width / 2.0).min(height / 2.0);

    // Distance from the nearest corner-circle center, but only when the
    // point is in a corner square; elsewhere the straight edges already
    // decided containment.
    let cx = if x < r {
        r
    } else if x > width - r {
        width - r
    } else {
        return true;
    };
    let cy = if y < r {
        r
    } else if y > height - r {
        height - r
    } else {
        return true;
    };

    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_radius_is_plain_rect() {
        assert!(rounded_rect_contains(100.0, 50.0, 0.0, 0.0, 0.0));
        assert!(rounded_rect_contains(100.0, 50.0, 0.0, 100.0, 50.0));
        assert!(!rounded_rect_contains(100.0, 50.0, 0.0, 100.1, 25.0));
        assert!(!rounded_rect_contains(100.0, 50.0, 0.0, 50.0, -0.1));
    }

    #[test]
    fn test_corners_cut_by_radius() {
        // The very corner of the box is outside once a radius applies
        assert!(!rounded_rect_contains(100.0, 100.0, 20.0, 0.0, 0.0));
        assert!(!rounded_rect_contains(100.0, 100.0, 20.0, 100.0, 100.0));
        // But the corner-circle boundary is inside
        assert!(rounded_rect_contains(100.0, 100.0, 20.0, 20.0, 20.0));
        // A point on the diagonal of the corner arc
        let on_arc = 20.0 - 20.0 / std::f64::consts::SQRT_2;
        assert!(rounded_rect_contains(100.0, 100.0, 20.0, on_arc + 0.1, on_arc + 0.1));
        assert!(!rounded_rect_contains(100.0, 100.0, 20.0, on_arc - 0.1, on_arc - 0.1));
    }

    #[test]
    fn test_edge_midpoints_always_inside() {
        for radius in [0.0, 10.0, 50.0, 500.0] {
            assert!(rounded_rect_contains(100.0, 60.0, radius, 50.0, 0.0));
            assert!(rounded_rect_contains(100.0, 60.0, radius, 50.0, 60.0));
            assert!(rounded_rect_contains(100.0, 60.0, radius, 0.0, 30.0));
            assert!(rounded_rect_contains(100.0, 60.0, radius, 100.0, 30.0));
        }
    }

    #[test]
    fn test_oversized_radius_clamps() {
        // Radius beyond half the min extent behaves like a capsule
        assert!(rounded_rect_contains(200.0, 100.0, 1000.0, 100.0, 50.0));
        assert!(!rounded_rect_contains(200.0, 100.0, 1000.0, 2.0, 2.0));
        assert!(rounded_rect_contains(200.0, 100.0, 1000.0, 50.0, 50.0));
    }

    #[test]
    fn test_center_always_inside() {
        for radius in [0.0, 5.0, 25.0, 100.0] {
            assert!(rounded_rect_contains(50.0, 50.0, radius, 25.0, 25.0));
        }
    }
}
