//! Arithmetic descriptors that relate places to the divisors of the order.

use mst_struct::Structure;

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Resonance with the regular subdivisions of the cycle.
///
/// For every divisor `m` with `2 <= m < order`, each position that is a
/// multiple of `m` weighs `m`; the result is the weight of the set positions
/// over the total weight. Zero when the order has no such divisor.
pub fn beat(structure: &Structure) -> f32 {
    let order = structure.order();
    let mut hit = 0u32;
    let mut total = 0u32;
    for m in (2..order).filter(|m| order % m == 0) {
        for position in (0..order).step_by(m as usize) {
            total += u32::from(m);
            if structure.is_on(position) {
                hit += u32::from(m);
            }
        }
    }
    if total == 0 {
        return 0.0;
    }
    hit as f32 / total as f32 * 100.0
}

/// Arithmetic irregularity of the places.
///
/// Each place `p` adds two to the denominator; the numerator gains one when
/// `gcd(order, p) < p` and one more when `gcd(order, p) == 1`.
pub fn complexity(structure: &Structure) -> f32 {
    let order = u32::from(structure.order());
    let mut hits = 0u32;
    let mut total = 0u32;
    for &place in structure.places() {
        let place = u32::from(place);
        let d = gcd(order, place);
        total += 2;
        if d < place {
            hits += 1;
        }
        if d == 1 {
            hits += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    hits as f32 / total as f32 * 100.0
}
