//! Descriptors of where the places sit inside the cycle.

use mst_struct::Structure;

/// Weight of the upper half against the lower half.
///
/// Counts places in `[0, median)` and `[median, order)`; 50 means balanced,
/// 0 for the empty structure. Odd orders give the upper half one extra
/// position, so the result is clamped to 100.
pub fn balance(structure: &Structure) -> f32 {
    if structure.level() == 0 {
        return 0.0;
    }
    let order = structure.order();
    let median = structure.system().median();
    let number = structure.number();
    let left = if median == 0 {
        0
    } else {
        mst_bits::count_on_in_range(number, 0, median - 1)
    };
    let right = mst_bits::count_on_in_range(number, median, order - 1);
    let skew = (f32::from(right) - f32::from(left)) / f32::from(order);
    ((0.5 + skew) * 100.0).clamp(0.0, 100.0)
}

/// Share of the cycle covered from the first onset through the cycle end.
///
/// Zero for the empty structure.
pub fn filling(structure: &Structure) -> f32 {
    match structure.places().first() {
        Some(&first) => {
            let order = f32::from(structure.order());
            (order - f32::from(first)) / order * 100.0
        }
        None => 0.0,
    }
}
