//! Bit-level operations on an `order`-bit cyclic field packed into a `u64`.
//!
//! Bit `i` of `number` is position `i` of the cycle. Every function that takes
//! an `order` panics when `order` is zero or wider than 64 bits.

use mst_core::MAX_ORDER;

#[inline]
fn check_order(order: u8) {
    assert!(
        order > 0 && order <= MAX_ORDER,
        "order must lie in 1..=64, got {order}"
    );
}

/// Word with the lowest `order` bits set.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
#[inline]
pub fn mask(order: u8) -> u64 {
    check_order(order);
    if order == MAX_ORDER {
        u64::MAX
    } else {
        (1u64 << order) - 1
    }
}

/// Word with only bit `i` set.
#[inline]
pub fn bit_at(i: u8) -> u64 {
    1u64 << i
}

/// Returns whether bit `i` is set. Positions past the word are off.
#[inline]
pub fn is_on(number: u64, i: u8) -> bool {
    i < MAX_ORDER && number & bit_at(i) != 0
}

/// Returns whether bit `i` is clear.
#[inline]
pub fn is_off(number: u64, i: u8) -> bool {
    !is_on(number, i)
}

/// Number of set bits inside the first `order` positions.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
#[inline]
pub fn count_on(order: u8, number: u64) -> u8 {
    (number & mask(order)).count_ones() as u8
}

fn range_mask(from: u8, to: u8) -> u64 {
    debug_assert!(from <= to && to < MAX_ORDER);
    let upper = if to + 1 >= MAX_ORDER {
        u64::MAX
    } else {
        (1u64 << (to + 1)) - 1
    };
    upper & !((1u64 << from) - 1)
}

/// Number of set bits in the inclusive range `[from, to]`.
///
/// The caller guarantees `from <= to < order`.
#[inline]
pub fn count_on_in_range(number: u64, from: u8, to: u8) -> u8 {
    (number & range_mask(from, to)).count_ones() as u8
}

/// Number of clear bits in the inclusive range `[from, to]`.
#[inline]
pub fn count_off_in_range(number: u64, from: u8, to: u8) -> u8 {
    (to - from + 1) - count_on_in_range(number, from, to)
}

/// Rotates the ring by one step: bit 0 moves to `order - 1`, every other bit
/// moves one position down.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
#[inline]
pub fn rotate_left_one(order: u8, number: u64) -> u64 {
    let number = number & mask(order);
    (number >> 1) | ((number & 1) << (order - 1))
}

/// Transposes by `k` steps, equal to applying [`rotate_left_one`] `k` times.
///
/// `k` is taken modulo `order`.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
#[inline]
pub fn rotate_to(order: u8, number: u64, k: u32) -> u64 {
    let field = mask(order);
    let number = number & field;
    let k = (k % u32::from(order)) as u8;
    if k == 0 {
        return number;
    }
    ((number >> k) | (number << (order - k))) & field
}

/// Canonical representative of the rotation class: the minimum over all
/// `order` rotations, identity included.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
pub fn class_number(order: u8, number: u64) -> u64 {
    let mut current = number & mask(order);
    let mut best = current;
    for _ in 1..order {
        current = rotate_left_one(order, current);
        if current < best {
            best = current;
        }
    }
    best
}

/// Returns whether `number` is already the minimum of its rotation class.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
pub fn is_class_number(order: u8, number: u64) -> bool {
    let number = number & mask(order);
    let mut current = number;
    for _ in 1..order {
        current = rotate_left_one(order, current);
        if current < number {
            return false;
        }
    }
    true
}

/// Smallest `k > 0` with `rotate_to(order, number, k) == number`.
///
/// Always divides `order`.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
pub fn rotation_period(order: u8, number: u64) -> u8 {
    let number = number & mask(order);
    let mut current = number;
    for k in 1..order {
        current = rotate_left_one(order, current);
        if current == number {
            return k;
        }
    }
    order
}

/// Ascending positions of the set bits inside the first `order` positions.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
pub fn places(order: u8, number: u64) -> Vec<u8> {
    let mut remaining = number & mask(order);
    let mut out = Vec::with_capacity(remaining.count_ones() as usize);
    while remaining != 0 {
        out.push(remaining.trailing_zeros() as u8);
        remaining &= remaining - 1;
    }
    out
}

/// Wrapping gaps between consecutive set bits.
///
/// The last entry is the gap from the highest set bit back to the lowest, so
/// the sequence sums to `order`. With fewer than two set bits the schema is
/// the single entry `[order]`.
///
/// # Panics
/// Panics when `order` is outside `1..=64`.
pub fn distance_schema(order: u8, number: u64) -> Vec<u8> {
    let places = places(order, number);
    if places.len() <= 1 {
        return vec![order];
    }
    let mut distances: Vec<u8> = places.windows(2).map(|pair| pair[1] - pair[0]).collect();
    let first = places[0];
    let last = places[places.len() - 1];
    distances.push(order - last + first);
    distances
}

/// Returns whether every bit of `pattern` is also set in `universe`.
#[inline]
pub fn is_subset(pattern: u64, universe: u64) -> bool {
    pattern & universe == pattern
}
