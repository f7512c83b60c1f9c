//! Descriptors of how evenly the gaps between places are spread.

use mst_struct::Structure;

/// Mean distances closer to zero than this are treated as degenerate.
const MEAN_DISTANCE_EPSILON: f32 = 1e-6;

/// Heterogeneity of gap lengths: the standard deviation of the distances
/// relative to their mean, as a percentage clamped to 100.
///
/// Zero for fewer than two places.
pub fn variance(structure: &Structure) -> f32 {
    let level = structure.level();
    if level <= 1 {
        return 0.0;
    }
    let mean = f32::from(structure.order()) / f32::from(level);
    if mean.abs() < MEAN_DISTANCE_EPSILON {
        return 0.0;
    }
    let distances = structure.distances();
    let squares: f32 = distances
        .iter()
        .map(|&d| {
            let delta = f32::from(d) - mean;
            delta * delta
        })
        .sum();
    let deviation = (squares / distances.len() as f32).sqrt();
    (deviation / mean * 100.0).min(100.0)
}

/// Shannon entropy of the distance distribution normalized by `ln(level)`,
/// as a percentage. Equal gaps score 100.
///
/// Zero for fewer than two places.
pub fn entropy(structure: &Structure) -> f32 {
    let level = structure.level();
    if level <= 1 {
        return 0.0;
    }
    let order = f32::from(structure.order());
    let sum: f32 = structure
        .distances()
        .iter()
        .map(|&d| {
            let p = f32::from(d) / order;
            p * p.ln()
        })
        .sum();
    -sum / f32::from(level).ln() * 100.0
}
