//! Barbell plate loading.
//!
//! Plates are chosen greedily: the heaviest denomination that still fits is
//! taken as many times as it fits, then the next lighter one. Standard plate
//! sets behave like a canonical coin system, so greedy lands on the best
//! load in practice. Unusual custom sets (for example 25 and 20 with a 40
//! per-side target) can make it fall short where an exact subset exists;
//! that trade-off is accepted for predictable output.

use crate::{PlateColor, PlateLoadout};

/// Standard barbell weight
pub const DEFAULT_BAR_WEIGHT: f64 = 45.0;

/// Plates go on both ends of the bar
pub const DEFAULT_LOADING_SIDES: u32 = 2;

/// Standard plate denominations, heaviest first
pub const DEFAULT_PLATES: [f64; 6] = [45.0, 35.0, 25.0, 10.0, 5.0, 2.5];

/// Slack used for both "plate fits" and "load is exact"
const TOLERANCE: f64 = 0.01;

/// Work out which plates to load on each side to approach `target_weight`
///
/// Denominations in `available_plates` may repeat and come in any order;
/// non-positive entries are ignored. Targets at or below the bar give a
/// bar-only loadout that is exact only when the target equals the bar.
pub fn calculate_plates(
    target_weight: f64,
    available_plates: &[f64],
    bar_weight: f64,
    loading_sides: u32,
) -> PlateLoadout {
    if target_weight <= bar_weight {
        return PlateLoadout::bar_only(bar_weight, target_weight == bar_weight);
    }

    if loading_sides == 0 || !target_weight.is_finite() {
        tracing::warn!(
            "Cannot load {} with {} loading sides, returning bar only",
            target_weight,
            loading_sides
        );
        return PlateLoadout::bar_only(bar_weight, false);
    }

    let sides = f64::from(loading_sides);
    let mut remaining = (target_weight - bar_weight) / sides;

    let mut denominations: Vec<f64> = available_plates
        .iter()
        .copied()
        .filter(|plate| plate.is_finite() && *plate > 0.0)
        .collect();
    denominations.sort_by(|a, b| b.total_cmp(a));
    denominations.dedup();

    let mut plates = Vec::new();
    for plate in denominations {
        while remaining >= TOLERANCE && plate <= remaining + TOLERANCE {
            plates.push(plate);
            remaining -= plate;
        }
    }

    let total_weight = bar_weight + plates.iter().sum::<f64>() * sides;
    let is_exact = (total_weight - target_weight).abs() < TOLERANCE;

    tracing::debug!(
        "Loaded {} as {:?} per side (total {}, exact: {})",
        target_weight,
        plates,
        total_weight,
        is_exact
    );

    PlateLoadout {
        plates,
        total_weight,
        is_exact,
    }
}

/// `calculate_plates` with a 45 bar loaded on both sides
pub fn calculate_plates_default(target_weight: f64, available_plates: &[f64]) -> PlateLoadout {
    calculate_plates(
        target_weight,
        available_plates,
        DEFAULT_BAR_WEIGHT,
        DEFAULT_LOADING_SIDES,
    )
}

/// Human-readable per-side loadout, e.g. "45 + 10 + 2.5"
pub fn format_loadout(loadout: &PlateLoadout) -> String {
    if loadout.is_bar_only() {
        return "Bar only".to_string();
    }

    loadout
        .plates
        .iter()
        .map(|plate| format_weight(*plate))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Render a weight, dropping the decimal point for whole numbers
pub fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}

/// Colour band for a plate of the given weight
pub fn color_for_plate_weight(weight: f64) -> PlateColor {
    if weight >= 55.0 {
        PlateColor::Red
    } else if weight >= 45.0 {
        PlateColor::Blue
    } else if weight >= 35.0 {
        PlateColor::Yellow
    } else if weight >= 25.0 {
        PlateColor::Green
    } else if weight >= 10.0 {
        PlateColor::White
    } else {
        PlateColor::Gray
    }
}
