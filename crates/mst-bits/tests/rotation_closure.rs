use mst_bits::{class_number, is_class_number, mask, rotate_left_one, rotate_to, rotation_period};
use proptest::prelude::*;

fn arb_field() -> impl Strategy<Value = (u8, u64)> {
    (1u8..=64).prop_flat_map(|order| (Just(order), any::<u64>().prop_map(move |n| n & mask(order))))
}

proptest! {
    #[test]
    fn rotating_order_times_is_identity((order, number) in arb_field()) {
        let mut current = number;
        for _ in 0..order {
            current = rotate_left_one(order, current);
        }
        prop_assert_eq!(current, number);
    }

    #[test]
    fn rotate_to_matches_iteration((order, number) in arb_field(), k in 0u32..200) {
        let mut expected = number;
        for _ in 0..(k % u32::from(order)) {
            expected = rotate_left_one(order, expected);
        }
        prop_assert_eq!(rotate_to(order, number, k), expected);
    }

    #[test]
    fn class_number_is_minimal_and_idempotent((order, number) in arb_field()) {
        let class = class_number(order, number);
        for k in 0..u32::from(order) {
            prop_assert!(class <= rotate_to(order, number, k));
        }
        prop_assert_eq!(class_number(order, class), class);
        prop_assert!(is_class_number(order, class));
        prop_assert_eq!(class.count_ones(), number.count_ones());
    }

    #[test]
    fn rotations_share_a_class((order, number) in arb_field(), k in 0u32..64) {
        let rotated = rotate_to(order, number, k);
        prop_assert_eq!(class_number(order, rotated), class_number(order, number));
    }

    #[test]
    fn rotation_period_divides_order((order, number) in arb_field()) {
        let period = rotation_period(order, number);
        prop_assert_eq!(order % period, 0);
        prop_assert_eq!(rotate_to(order, number, u32::from(period)), number);
    }
}

#[test]
fn rotate_left_one_moves_bit_zero_to_top() {
    assert_eq!(rotate_left_one(4, 0b0001), 0b1000);
    assert_eq!(rotate_left_one(4, 0b0110), 0b0011);
    assert_eq!(rotate_left_one(64, 1), 1u64 << 63);
}

#[test]
fn degenerate_patterns_map_to_themselves() {
    assert_eq!(rotate_to(12, 0, 5), 0);
    assert_eq!(rotate_to(12, mask(12), 5), mask(12));
    assert_eq!(class_number(12, mask(12)), mask(12));
    assert_eq!(class_number(1, 1), 1);
}

#[test]
fn triad_classes() {
    // C E G = {0, 4, 7} is already minimal among its rotations.
    let major = 0b1001_0001;
    assert_eq!(class_number(12, major), major);
    // D F# A = {2, 6, 9} collapses onto the same class.
    let d_major = (1 << 2) | (1 << 6) | (1 << 9);
    assert_eq!(class_number(12, d_major), major);
    // The minor triad {0, 3, 7} is a different class under rotation alone.
    let minor = (1 << 0) | (1 << 3) | (1 << 7);
    assert_eq!(class_number(12, minor), minor);
    assert_ne!(class_number(12, minor), class_number(12, major));
}

#[test]
fn symmetric_patterns_have_short_periods() {
    // Augmented triad {0, 4, 8} repeats every 4 steps.
    assert_eq!(rotation_period(12, 0b0001_0001_0001), 4);
    assert_eq!(rotation_period(12, 0b1), 12);
    assert_eq!(rotation_period(12, 0), 1);
}

#[test]
#[should_panic(expected = "order must lie in 1..=64")]
fn zero_order_panics() {
    let _ = class_number(0, 1);
}
