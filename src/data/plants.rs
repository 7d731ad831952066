//! Built-in plant knowledge base.
//!
//! The engine never reads this module directly: callers pass a
//! [`PlantCatalog`] into each call, and this is merely the catalogue the
//! HTTP facade serves by default. Companion lists reference ids within this
//! set only.

use crate::models::plant::{
    MaturityRange, PlantCatalog, PlantProfile, SowingMethod, SunExposure, WaterRequirement,
};

pub fn builtin_catalog() -> PlantCatalog {
    PlantCatalog::from_profiles(all_profiles())
}

pub fn get_plant_by_id(id: &str) -> Option<PlantProfile> {
    all_profiles().into_iter().find(|p| p.id == id)
}

#[allow(clippy::too_many_arguments)]
fn plant(
    id: &str,
    name: &str,
    family: &str,
    sun: SunExposure,
    water: WaterRequirement,
    spacing_in: f64,
    maturity: (u32, u32),
    sowing: SowingMethod,
    beneficial: &[&str],
    antagonistic: &[&str],
) -> PlantProfile {
    PlantProfile {
        id: id.into(),
        name: name.into(),
        family: family.into(),
        sun_requirement: sun,
        water_requirement: water,
        spacing_in,
        days_to_maturity: MaturityRange {
            min: maturity.0,
            max: maturity.1,
        },
        sowing,
        beneficial_with: beneficial.iter().map(|s| s.to_string()).collect(),
        antagonistic_with: antagonistic.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn all_profiles() -> Vec<PlantProfile> {
    use SowingMethod::{DirectSow, Transplant};
    use SunExposure::{Full, Partial};
    use WaterRequirement::{High, Low, Moderate};

    vec![
        plant(
            "tomato", "Tomato", "Solanaceae", Full, High, 24.0, (60, 85), Transplant,
            &["basil", "carrot", "onion"],
            &["fennel", "potato", "corn", "cabbage"],
        ),
        plant(
            "pepper", "Pepper", "Solanaceae", Full, Moderate, 18.0, (60, 90), Transplant,
            &["basil", "onion"],
            &["fennel"],
        ),
        plant(
            "potato", "Potato", "Solanaceae", Full, Moderate, 12.0, (70, 120), DirectSow,
            &["bean", "cabbage"],
            &["tomato", "cucumber", "zucchini"],
        ),
        plant(
            "basil", "Basil", "Lamiaceae", Full, Moderate, 10.0, (50, 75), Transplant,
            &["tomato", "pepper"],
            &[],
        ),
        plant(
            "carrot", "Carrot", "Apiaceae", Full, Moderate, 3.0, (60, 80), DirectSow,
            &["tomato", "onion", "radish", "pea"],
            &[],
        ),
        plant(
            "fennel", "Fennel", "Apiaceae", Full, Moderate, 12.0, (65, 90), DirectSow,
            &[],
            &["tomato", "bean", "pepper"],
        ),
        plant(
            "onion", "Onion", "Amaryllidaceae", Full, Low, 4.0, (90, 110), DirectSow,
            &["carrot", "tomato", "cabbage", "lettuce"],
            &["bean", "pea"],
        ),
        plant(
            "garlic", "Garlic", "Amaryllidaceae", Full, Low, 4.0, (90, 150), DirectSow,
            &["tomato", "cabbage"],
            &["bean", "pea"],
        ),
        plant(
            "cabbage", "Cabbage", "Brassicaceae", Full, High, 18.0, (70, 100), Transplant,
            &["onion", "potato", "beet"],
            &["tomato"],
        ),
        plant(
            "broccoli", "Broccoli", "Brassicaceae", Full, High, 18.0, (60, 90), Transplant,
            &["onion", "beet", "spinach"],
            &["tomato"],
        ),
        plant(
            "radish", "Radish", "Brassicaceae", Full, Moderate, 2.0, (25, 35), DirectSow,
            &["carrot", "lettuce", "cucumber", "pea"],
            &[],
        ),
        plant(
            "lettuce", "Lettuce", "Asteraceae", Partial, Moderate, 8.0, (45, 60), DirectSow,
            &["radish", "carrot", "onion"],
            &[],
        ),
        plant(
            "spinach", "Spinach", "Amaranthaceae", Partial, Moderate, 4.0, (40, 50), DirectSow,
            &["pea", "bean", "lettuce"],
            &[],
        ),
        plant(
            "beet", "Beet", "Amaranthaceae", Full, Moderate, 4.0, (50, 70), DirectSow,
            &["onion", "cabbage", "lettuce"],
            &["bean"],
        ),
        plant(
            "bean", "Bush Bean", "Fabaceae", Full, Moderate, 6.0, (55, 75), DirectSow,
            &["carrot", "cucumber", "cabbage", "corn"],
            &["onion", "garlic", "fennel", "beet"],
        ),
        plant(
            "pea", "Pea", "Fabaceae", Partial, Moderate, 3.0, (55, 70), DirectSow,
            &["carrot", "radish", "cucumber", "corn"],
            &["onion", "garlic"],
        ),
        plant(
            "cucumber", "Cucumber", "Cucurbitaceae", Full, High, 12.0, (50, 70), DirectSow,
            &["bean", "pea", "radish", "corn"],
            &["potato"],
        ),
        plant(
            "zucchini", "Zucchini", "Cucurbitaceae", Full, High, 24.0, (45, 60), DirectSow,
            &["bean", "corn", "radish"],
            &["potato"],
        ),
        plant(
            "corn", "Sweet Corn", "Poaceae", Full, High, 12.0, (60, 100), DirectSow,
            &["bean", "pea", "cucumber", "zucchini"],
            &["tomato"],
        ),
        plant(
            "strawberry", "Strawberry", "Rosaceae", Full, Moderate, 12.0, (90, 120), Transplant,
            &["lettuce", "spinach", "bean"],
            &["cabbage", "broccoli"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let profiles = all_profiles();
        for (i, a) in profiles.iter().enumerate() {
            for b in profiles.iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate plant id '{}'", a.id);
            }
        }
    }

    #[test]
    fn test_companion_references_stay_within_the_catalogue() {
        let profiles = all_profiles();
        let ids: Vec<&str> = profiles.iter().map(|p| p.id.as_str()).collect();
        for p in &profiles {
            for other in p.beneficial_with.iter().chain(&p.antagonistic_with) {
                assert!(
                    ids.contains(&other.as_str()),
                    "'{}' references unknown plant '{}'",
                    p.id,
                    other
                );
            }
        }
    }

    #[test]
    fn test_no_plant_is_its_own_companion() {
        for p in all_profiles() {
            assert!(!p.beneficial_with.contains(&p.id));
            assert!(!p.antagonistic_with.contains(&p.id));
        }
    }

    #[test]
    fn test_maturity_ranges_are_ordered() {
        for p in all_profiles() {
            assert!(
                p.days_to_maturity.min <= p.days_to_maturity.max,
                "'{}' has an inverted maturity range",
                p.id
            );
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert!(get_plant_by_id("tomato").is_some());
        assert!(get_plant_by_id("dragonfruit").is_none());
    }
}
