//! Constructive row-layout generator: wizard input in, beds and paths out.

use crate::error::EngineError;
use crate::logic::geometry::{rects_clear, ACCESSIBLE_PATH_MIN_WIDTH_IN, PATH_MIN_WIDTH_IN};
use crate::models::{
    bed::{Bed, GardenPath, Orientation, Surface},
    geometry::Rect,
    plant::SunExposure,
    request::{LayoutPlan, LayoutRequest, Shape},
};

pub const DEFAULT_BED_WIDTH_IN: f64 = 36.0;
/// Narrower bed so the center stays reachable from a seated position.
pub const ACCESSIBLE_BED_WIDTH_IN: f64 = 30.0;
pub const DEFAULT_BED_LENGTH_IN: f64 = 96.0;
/// Anything shorter is not worth building.
pub const MIN_BED_LENGTH_IN: f64 = 24.0;
pub const DEFAULT_BED_HEIGHT_IN: f64 = 12.0;
pub const MAX_BED_COUNT: usize = 16;
/// Above this grade the rows want terracing, which the generator does not model.
pub const TERRACE_SLOPE_PCT: f64 = 5.0;

/// Places north-south bed rows separated by minimum-legal paths until the
/// usable area is exhausted or [`MAX_BED_COUNT`] is reached.
///
/// Deterministic: identical input always produces the identical plan.
/// Infeasible sites come back as an empty plan with warnings; only malformed
/// input and generator bugs are `Err`.
pub fn generate_layout(request: &LayoutRequest) -> Result<LayoutPlan, EngineError> {
    if !request.total_area_sq_ft.is_finite() || request.total_area_sq_ft <= 0.0 {
        return Err(EngineError::invalid_input(
            "totalAreaSqFt",
            "must be strictly positive",
        ));
    }
    if !request.usable_fraction.is_finite()
        || request.usable_fraction <= 0.0
        || request.usable_fraction > 1.0
    {
        return Err(EngineError::invalid_input(
            "usableFraction",
            "must be within (0, 1]",
        ));
    }
    if !request.slope_pct.is_finite() || request.slope_pct < 0.0 {
        return Err(EngineError::invalid_input(
            "slopePct",
            "must not be negative",
        ));
    }

    let usable_sq_in = request.total_area_sq_ft * request.usable_fraction * 144.0;
    let (bed_width, path_width) = if request.accessibility_needs {
        (ACCESSIBLE_BED_WIDTH_IN, ACCESSIBLE_PATH_MIN_WIDTH_IN)
    } else {
        (DEFAULT_BED_WIDTH_IN, PATH_MIN_WIDTH_IN)
    };
    let bed_length = (usable_sq_in / bed_width).floor().min(DEFAULT_BED_LENGTH_IN);

    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();
    let mut beds: Vec<Bed> = Vec::new();
    let mut paths: Vec<GardenPath> = Vec::new();

    if bed_length >= MIN_BED_LENGTH_IN {
        place_rows(request, bed_width, bed_length, path_width, usable_sq_in, &mut beds, &mut paths);
    } else {
        warnings.push(format!(
            "The usable area ({:.0} sq ft) is too small for a single {:.0} x {:.0} inch bed.",
            usable_sq_in / 144.0,
            bed_width,
            MIN_BED_LENGTH_IN
        ));
    }

    if request.slope_pct > TERRACE_SLOPE_PCT {
        warnings.push(format!(
            "A slope of {:.0}% may require terracing; terraces are not part of this plan.",
            request.slope_pct
        ));
    }
    match request.sun_exposure {
        SunExposure::Partial => suggestions.push(
            "Partial sun: favor shade-tolerant crops such as lettuce, spinach and peas."
                .to_string(),
        ),
        SunExposure::Shade => suggestions.push(
            "Full shade supports very few edible crops; consider leafy greens only, or relocating the beds.".to_string(),
        ),
        SunExposure::Full => {}
    }
    if request.surface == Surface::Hard {
        suggestions.push(
            "Hard surface: every bed is a wicking bed with its own water reservoir.".to_string(),
        );
    } else if !request.water_access {
        suggestions.push(
            "No water access nearby: plan for hauling water or installing a rain barrel."
                .to_string(),
        );
    }
    if request.shape == Shape::Irregular && !beds.is_empty() {
        suggestions.push(
            "Irregular plot: the row layout assumes a clear rectangular corridor; shift individual beds to fit your boundary.".to_string(),
        );
    }

    // Every pair of generated beds must clear the path width used between
    // rows. The constructive walk cannot place beds closer than that, so a
    // failure here is a generator defect and surfaces as an error, not a
    // warning.
    for (i, a) in beds.iter().enumerate() {
        for b in beds.iter().skip(i + 1) {
            if !rects_clear(&a.rect, &b.rect, path_width) {
                return Err(EngineError::LayoutInvariant(format!(
                    "beds '{}' and '{}' are closer than the {:.0} inch path between rows",
                    a.id, b.id, path_width
                )));
            }
        }
    }

    let total_bed_area_sq_ft =
        beds.iter().map(|b| b.rect.area_sq_in()).sum::<f64>() / 144.0;
    log::debug!(
        "layout: {} beds, {} paths, {:.1} sq ft of growing area",
        beds.len(),
        paths.len(),
        total_bed_area_sq_ft
    );

    Ok(LayoutPlan {
        beds,
        paths,
        total_bed_area_sq_ft,
        warnings,
        suggestions,
    })
}

/// Walks rows west to east: bed, path, bed, path... A path is only laid when
/// the remaining area still fits the next bed behind it.
fn place_rows(
    request: &LayoutRequest,
    bed_width: f64,
    bed_length: f64,
    path_width: f64,
    usable_sq_in: f64,
    beds: &mut Vec<Bed>,
    paths: &mut Vec<GardenPath>,
) {
    let bed_area = bed_width * bed_length;
    let path_area = path_width * bed_length;
    let mut remaining = usable_sq_in;
    let mut x = 0.0;

    while beds.len() < MAX_BED_COUNT && remaining >= bed_area {
        let n = beds.len() + 1;
        beds.push(Bed {
            id: format!("bed-{n}"),
            name: format!("Bed {n}"),
            rect: Rect::new(x, 0.0, bed_width, bed_length),
            height_in: DEFAULT_BED_HEIGHT_IN,
            orientation: Orientation::NorthSouth,
            surface: request.surface,
            // Hard surfaces cannot draw ground moisture, so the bed brings
            // its own reservoir regardless of water access.
            wicking: request.surface == Surface::Hard,
            has_trellis: false,
            path_clearance_in: path_width,
        });
        remaining -= bed_area;
        x += bed_width;

        if beds.len() < MAX_BED_COUNT && remaining >= bed_area + path_area {
            paths.push(GardenPath {
                id: format!("path-{n}"),
                rect: Rect::new(x, 0.0, path_width, bed_length),
                width_in: path_width,
                accessible: request.accessibility_needs,
            });
            remaining -= path_area;
            x += path_width;
        } else {
            break;
        }
    }
}
