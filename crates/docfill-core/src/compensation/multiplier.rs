//! Age multiplier and dependency ratio tables

/// (maximum age, multiplier), ascending and non-overlapping
const MULTIPLIER_BANDS: [(u32, u32); 8] = [
    (15, 15),
    (20, 18),
    (25, 16),
    (30, 15),
    (35, 14),
    (40, 13),
    (45, 11),
    (50, 9),
];

/// Multiplier above the last band
const OLDEST_MULTIPLIER: u32 = 6;

/// Multiplier for a victim of `age`
pub fn multiplier_for_age(age: u32) -> u32 {
    MULTIPLIER_BANDS
        .iter()
        .find(|(max_age, _)| age <= *max_age)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(OLDEST_MULTIPLIER)
}

/// Share of the deceased's income attributed to `dependents`
pub fn dependency_ratio(dependents: u32) -> f64 {
    match dependents {
        0..=2 => 0.5,
        3..=4 => 0.6,
        _ => 0.7,
    }
}
