//! Soil, lumber, irrigation and cost estimation over a bed set.

use crate::models::{
    bed::{Bed, Surface},
    materials::{CostRange, MaterialsEstimate, PriceTable},
};

pub const SOIL_FRACTION: f64 = 0.6;
pub const COMPOST_FRACTION: f64 = 0.4;
/// Top-dressing depth over the full bed surface.
pub const MULCH_DEPTH_IN: f64 = 2.0;
/// Beds are framed in 2x8s; one course covers 7.25 in of actual height.
pub const BOARD_COURSE_HEIGHT_IN: f64 = 7.25;
pub const BOARD_FEET_PER_LINEAR_FOOT: f64 = 2.0 * 8.0 / 12.0;
pub const STANDARD_BOARD_LENGTHS_FT: [f64; 3] = [8.0, 10.0, 12.0];
pub const SCREWS_PER_JOINT: u32 = 3;
/// Drip runs as a double row along the bed length.
pub const DRIP_LINES_PER_BED: f64 = 2.0;
pub const EMITTER_SPACING_IN: f64 = 12.0;

const CU_IN_PER_CU_FT: f64 = 1728.0;
const SQ_IN_PER_SQ_FT: f64 = 144.0;

/// Computes the full bill of materials for a bed set. Stateless: always
/// recomputed from the beds, and every quantity appears in the total even
/// when zero.
pub fn estimate_materials(
    beds: &[Bed],
    surface: Surface,
    drip_allowed: bool,
    prices: &PriceTable,
) -> MaterialsEstimate {
    let mut soil_cu_ft = 0.0;
    let mut compost_cu_ft = 0.0;
    let mut mulch_cu_ft = 0.0;
    let mut board_count = 0u32;
    let mut board_linear_ft = 0.0;
    let mut screw_count = 0u32;
    let mut irrigation_line_ft = 0.0;
    let mut emitter_count = 0u32;
    let mut liner_sq_ft = 0.0;
    let mut wicking_beds = 0u32;

    for bed in beds {
        let volume_cu_ft = bed.rect.width * bed.rect.height * bed.height_in / CU_IN_PER_CU_FT;
        soil_cu_ft += volume_cu_ft * SOIL_FRACTION;
        compost_cu_ft += volume_cu_ft * COMPOST_FRACTION;
        mulch_cu_ft += bed.rect.area_sq_in() * MULCH_DEPTH_IN / CU_IN_PER_CU_FT;

        let courses = (bed.height_in / BOARD_COURSE_HEIGHT_IN).ceil() as u32;
        for side_in in [bed.rect.width, bed.rect.height, bed.rect.width, bed.rect.height] {
            let (count, linear_ft) = boards_for_span(side_in / 12.0);
            board_count += count * courses;
            board_linear_ft += linear_ft * f64::from(courses);
        }
        screw_count += 4 * courses * SCREWS_PER_JOINT;

        if drip_allowed {
            let length_ft = bed.rect.width.max(bed.rect.height) / 12.0;
            let line_ft = DRIP_LINES_PER_BED * length_ft;
            irrigation_line_ft += line_ft;
            emitter_count += (line_ft * 12.0 / EMITTER_SPACING_IN).floor() as u32;
        }

        if bed.wicking {
            liner_sq_ft += bed.rect.area_sq_in() / SQ_IN_PER_SQ_FT;
            wicking_beds += 1;
        }
    }

    let lumber_board_feet = board_linear_ft * BOARD_FEET_PER_LINEAR_FOOT;

    let mut notes = Vec::new();
    if !drip_allowed {
        notes.push("Drip irrigation is off; hand watering assumed.".to_string());
    }
    if surface == Surface::Hard {
        notes.push(
            "Hard surface: volumes assume fully contained beds with no ground contact."
                .to_string(),
        );
    }
    if wicking_beds > 0 {
        notes.push(format!(
            "Includes reservoir liner for {wicking_beds} wicking bed(s)."
        ));
    }

    let cost = CostRange::ZERO
        .plus(prices.soil_per_cu_ft.scaled(soil_cu_ft))
        .plus(prices.compost_per_cu_ft.scaled(compost_cu_ft))
        .plus(prices.mulch_per_cu_ft.scaled(mulch_cu_ft))
        .plus(prices.lumber_per_board_foot.scaled(lumber_board_feet))
        .plus(prices.screw_each.scaled(f64::from(screw_count)))
        .plus(prices.irrigation_line_per_ft.scaled(irrigation_line_ft))
        .plus(prices.emitter_each.scaled(f64::from(emitter_count)))
        .plus(prices.liner_per_sq_ft.scaled(liner_sq_ft));

    MaterialsEstimate {
        soil_cu_ft,
        compost_cu_ft,
        mulch_cu_ft,
        lumber_board_feet,
        board_count,
        screw_count,
        irrigation_line_ft,
        emitter_count,
        liner_sq_ft,
        cost,
        notes,
    }
}

/// Smallest standard board covering the span, or a run of 12-footers for
/// spans longer than the longest stock length.
fn boards_for_span(span_ft: f64) -> (u32, f64) {
    if span_ft <= 0.0 {
        return (0, 0.0);
    }
    for board_ft in STANDARD_BOARD_LENGTHS_FT {
        if span_ft <= board_ft {
            return (1, board_ft);
        }
    }
    let longest = STANDARD_BOARD_LENGTHS_FT[STANDARD_BOARD_LENGTHS_FT.len() - 1];
    let count = (span_ft / longest).ceil() as u32;
    (count, f64::from(count) * longest)
}
