//! Greedy per-bed, per-season rotation scheduling.
//!
//! The walk never backtracks: a season's pick is final even when revisiting
//! it could free up a later slot. Some feasible schedules are therefore
//! missed; this is a deliberate simplicity trade-off, kept because the
//! output must stay cheap and reproducible.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::EngineError;
use crate::models::{
    plant::{PlantCatalog, PlantProfile},
    request::{RotationPlan, RotationRequest},
    rotation::{season_ordinal, RotationEntry, Season},
};

/// Minimum number of seasons before a bed may host the same plant family
/// again.
pub const ROTATION_WINDOW_SEASONS: i64 = 3;

/// Walks each bed independently from `(start_season, start_year)` for
/// `seasons_to_plan` steps, planting the first preferred crop that is
/// rotation-safe and frost-fit. Slots with no such crop stay fallow and
/// produce a warning; rotation safety is never traded away to fill a slot.
///
/// Deterministic: no clock, no randomness, candidate order is input order.
pub fn plan_rotation(
    request: &RotationRequest,
    catalog: &PlantCatalog,
) -> Result<RotationPlan, EngineError> {
    if let (Some(last), Some(first)) = (request.last_frost_date, request.first_frost_date) {
        if last >= first {
            return Err(EngineError::invalid_input(
                "lastFrostDate",
                "must fall before firstFrostDate",
            ));
        }
    }

    let mut warnings = Vec::new();
    let mut crops: Vec<&PlantProfile> = Vec::new();
    for id in &request.preferred_crops {
        match catalog.get(id) {
            Some(profile) => {
                if !crops.iter().any(|c| c.id == profile.id) {
                    crops.push(profile);
                }
            }
            None => warnings.push(format!("Crop '{id}' not found in the catalogue, skipped.")),
        }
    }
    crops.retain(|c| !request.avoid_families.contains(&c.family));

    let mut plantings = Vec::new();
    for bed in &request.beds {
        // (ordinal, family) of everything scheduled in this bed so far.
        let mut history: Vec<(i64, String)> = Vec::new();
        let mut season = request.start_season;
        let mut year = request.start_year;

        for _ in 0..request.seasons_to_plan {
            let ordinal = season_ordinal(year, season);
            match select_crop(&crops, &history, ordinal, season, year, request) {
                Some(profile) => {
                    history.push((ordinal, profile.family.clone()));
                    plantings.push(RotationEntry {
                        bed_id: bed.id.clone(),
                        season,
                        year,
                        crop_id: profile.id.clone(),
                        family: profile.family.clone(),
                        spacing_in: profile.spacing_in,
                        sowing_method: profile.sowing,
                    });
                }
                None => warnings.push(format!(
                    "No crop fits bed '{}' in {} {}; left fallow.",
                    bed.name,
                    season.label(),
                    year
                )),
            }
            if season == Season::Winter {
                year += 1;
            }
            season = season.next();
        }
    }

    log::debug!(
        "rotation: {} plantings across {} beds, {} warnings",
        plantings.len(),
        request.beds.len(),
        warnings.len()
    );
    Ok(RotationPlan {
        plantings,
        warnings,
    })
}

/// First rotation-safe, frost-fit candidate. Candidates matching the site
/// sun exposure are tried before the rest; input order is preserved within
/// each pass.
fn select_crop<'a>(
    crops: &[&'a PlantProfile],
    history: &[(i64, String)],
    ordinal: i64,
    season: Season,
    year: i32,
    request: &RotationRequest,
) -> Option<&'a PlantProfile> {
    let fits = |profile: &PlantProfile| -> bool {
        let rotation_safe = !history
            .iter()
            .any(|(o, family)| family == &profile.family && ordinal - o < ROTATION_WINDOW_SEASONS);
        rotation_safe
            && frost_fit(
                profile,
                season,
                year,
                request.last_frost_date,
                request.first_frost_date,
            )
    };

    if let Some(sun) = request.sun_exposure {
        if let Some(profile) = crops
            .iter()
            .copied()
            .find(|p| p.sun_requirement == sun && fits(p))
        {
            return Some(profile);
        }
    }
    crops.iter().copied().find(|p| fits(p))
}

/// True when the crop's worst-case maturity still lands before the first
/// frost of the planting year. Winter sowings overwinter and are exempt.
fn frost_fit(
    profile: &PlantProfile,
    season: Season,
    year: i32,
    last_frost: Option<NaiveDate>,
    first_frost: Option<NaiveDate>,
) -> bool {
    let Some(first_frost) = first_frost else {
        return true;
    };
    if season == Season::Winter {
        return true;
    }
    let sowing = sowing_anchor(season, year, last_frost);
    let harvest = sowing + Duration::days(i64::from(profile.days_to_maturity.max));
    harvest <= on_year(first_frost, year)
}

/// Nominal sowing date per season. Spring waits for the last frost when one
/// is supplied.
fn sowing_anchor(season: Season, year: i32, last_frost: Option<NaiveDate>) -> NaiveDate {
    match season {
        Season::Spring => last_frost
            .map(|d| on_year(d, year))
            .unwrap_or_else(|| month_start(year, 4)),
        Season::Summer => month_start(year, 6),
        Season::Fall => month_start(year, 8),
        Season::Winter => month_start(year, 11),
    }
}

fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// The same calendar day in another year; Feb 29 falls back to Feb 28.
fn on_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}
