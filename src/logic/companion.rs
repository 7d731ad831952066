//! Pairwise companion/antagonist analysis over placed plants.

use crate::models::{
    plant::{PlantCatalog, PlantPlacement, PlantProfile, SunExposure, WaterRequirement},
    request::{CompanionReport, RelationKind, Relationship},
};

/// Beyond this separation, proximity effects are treated as negligible.
pub const PROXIMITY_RANGE_IN: f64 = 48.0;
/// Antagonists closer than this get an explicit "too close" warning.
pub const TOO_CLOSE_IN: f64 = 24.0;

/// Classifies every unordered pair of placements within
/// [`PROXIMITY_RANGE_IN`] of each other and aggregates a group verdict.
///
/// Relationship membership is symmetric: either plant's list establishes it.
/// When a pair is asserted as both beneficial and antagonistic, antagonistic
/// wins, guarding against inconsistently authored plant data.
pub fn analyze_companions(
    placements: &[PlantPlacement],
    catalog: &PlantCatalog,
    focus_plant_id: Option<&str>,
) -> CompanionReport {
    let mut warnings = Vec::new();

    let mut resolved: Vec<(&PlantPlacement, &PlantProfile)> = Vec::new();
    let mut missing: Vec<&str> = Vec::new();
    for placement in placements {
        match catalog.get(&placement.plant_id) {
            Some(profile) => resolved.push((placement, profile)),
            None => {
                if !missing.contains(&placement.plant_id.as_str()) {
                    missing.push(&placement.plant_id);
                    warnings.push(format!(
                        "Plant '{}' not found in the catalogue, skipped.",
                        placement.plant_id
                    ));
                }
            }
        }
    }

    let mut relationships = Vec::new();
    let mut benefits = Vec::new();
    for (i, (pa, a)) in resolved.iter().enumerate() {
        for (pb, b) in resolved.iter().skip(i + 1) {
            if let Some(focus) = focus_plant_id {
                if a.id != focus && b.id != focus {
                    continue;
                }
            }
            let distance_in = ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt();
            if distance_in > PROXIMITY_RANGE_IN {
                continue;
            }
            let Some(kind) = classify(a, b) else {
                continue;
            };
            match kind {
                RelationKind::Antagonistic => {
                    if distance_in < TOO_CLOSE_IN {
                        warnings.push(format!(
                            "{} and {} are antagonists and sit too close together ({distance_in:.0} in apart).",
                            a.name, b.name
                        ));
                    } else {
                        warnings.push(format!(
                            "{} and {} are antagonists; keep them farther apart.",
                            a.name, b.name
                        ));
                    }
                }
                RelationKind::Beneficial => {
                    benefits.push(format!("{} grows well next to {}.", a.name, b.name));
                }
            }
            relationships.push(Relationship {
                a: a.id.clone(),
                b: b.id.clone(),
                kind,
                distance_in,
            });
        }
    }

    let suns: Vec<SunExposure> = resolved.iter().map(|(_, p)| p.sun_requirement).collect();
    let waters: Vec<WaterRequirement> = resolved.iter().map(|(_, p)| p.water_requirement).collect();
    let sun_unanimous = suns.windows(2).all(|w| w[0] == w[1]);
    let has_antagonist = relationships
        .iter()
        .any(|r| r.kind == RelationKind::Antagonistic);

    CompanionReport {
        compatible: sun_unanimous && !has_antagonist,
        relationships,
        warnings,
        benefits,
        water_requirement: plurality(&waters),
        sun_requirement: plurality(&suns),
    }
}

/// Symmetric lookup with antagonistic precedence.
fn classify(a: &PlantProfile, b: &PlantProfile) -> Option<RelationKind> {
    let antagonistic = a.antagonistic_with.iter().any(|id| id == &b.id)
        || b.antagonistic_with.iter().any(|id| id == &a.id);
    if antagonistic {
        return Some(RelationKind::Antagonistic);
    }
    let beneficial = a.beneficial_with.iter().any(|id| id == &b.id)
        || b.beneficial_with.iter().any(|id| id == &a.id);
    beneficial.then_some(RelationKind::Beneficial)
}

/// Most frequent value; earlier-seen values win ties, keeping the result
/// deterministic.
fn plurality<T: Copy + PartialEq>(values: &[T]) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for &candidate in values {
        let count = values.iter().filter(|&&v| v == candidate).count();
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((candidate, count)),
        }
    }
    best.map(|(value, _)| value)
}
