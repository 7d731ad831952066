//! Overlap testing and the dimensional policy tables for beds and paths.

use crate::models::bed::{Bed, GardenPath};
use crate::models::geometry::Rect;

/// Beds wider than this cannot be worked from the long edges without
/// stepping on the soil.
pub const BED_MAX_WIDTH_IN: f64 = 48.0;
/// 50 ft. Longer beds make walking around them impractical.
pub const BED_MAX_LENGTH_IN: f64 = 600.0;
pub const BED_MIN_HEIGHT_IN: f64 = 6.0;
pub const BED_MAX_HEIGHT_IN: f64 = 36.0;
pub const PATH_MIN_WIDTH_IN: f64 = 18.0;
/// Wheelchair / walker clearance.
pub const ACCESSIBLE_PATH_MIN_WIDTH_IN: f64 = 36.0;

/// Minkowski-expanded AABB separation test.
///
/// Returns true when `a` and `b` keep at least `tolerance_in` of daylight
/// between them on *some* axis. Two rectangles are only "too close" when the
/// center distance is under the summed half-extents plus tolerance on both
/// axes at once; a sufficient gap on either axis alone separates them.
/// Symmetric in `a` and `b`. Tolerance 0 means the rectangles may abut
/// exactly.
pub fn rects_clear(a: &Rect, b: &Rect, tolerance_in: f64) -> bool {
    let too_close_x =
        (a.center_x() - b.center_x()).abs() < a.half_width() + b.half_width() + tolerance_in;
    let too_close_y =
        (a.center_y() - b.center_y()).abs() < a.half_height() + b.half_height() + tolerance_in;
    !(too_close_x && too_close_y)
}

/// Checks a bed against the reachability policy table. Violations come back
/// as human-readable strings; the caller decides whether to reject, correct
/// or warn.
pub fn validate_bed(bed: &Bed) -> Vec<String> {
    let mut violations = Vec::new();
    if bed.rect.width <= 0.0 || bed.rect.height <= 0.0 {
        violations.push(format!(
            "Bed '{}' has non-positive dimensions ({} x {} in)",
            bed.name, bed.rect.width, bed.rect.height
        ));
    }
    if bed.rect.width > BED_MAX_WIDTH_IN {
        violations.push(format!(
            "Bed '{}' is {} inches wide; beds must be at most {} inches so the center stays reachable",
            bed.name, bed.rect.width, BED_MAX_WIDTH_IN
        ));
    }
    if bed.rect.height > BED_MAX_LENGTH_IN {
        violations.push(format!(
            "Bed '{}' is {} inches long; beds must be at most {} inches",
            bed.name, bed.rect.height, BED_MAX_LENGTH_IN
        ));
    }
    if bed.height_in < BED_MIN_HEIGHT_IN || bed.height_in > BED_MAX_HEIGHT_IN {
        violations.push(format!(
            "Bed '{}' is {} inches deep; soil depth must be between {} and {} inches",
            bed.name, bed.height_in, BED_MIN_HEIGHT_IN, BED_MAX_HEIGHT_IN
        ));
    }
    violations
}

/// Checks a path against the clearance policy table.
pub fn validate_path(path: &GardenPath) -> Vec<String> {
    let mut violations = Vec::new();
    if path.accessible {
        if path.width_in < ACCESSIBLE_PATH_MIN_WIDTH_IN {
            violations.push("Accessible paths must be at least 36 inches wide".to_string());
        }
    } else if path.width_in < PATH_MIN_WIDTH_IN {
        violations.push("Paths must be at least 18 inches wide".to_string());
    }
    violations
}
