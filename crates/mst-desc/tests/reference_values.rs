use mst_core::AlgebraicSystem;
use mst_desc::{balance, beat, complexity, entropy, filling, variance, Descriptor, DescriptorProfile};
use mst_struct::Structure;

const TOLERANCE: f32 = 1e-3;

fn structure(order: u8, code: &str) -> Structure {
    Structure::from_code(AlgebraicSystem::new(1, order).unwrap(), code).unwrap()
}

fn assert_close(actual: f32, expected: f32, label: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{label}: expected {expected}, got {actual}"
    );
}

fn assert_profile(order: u8, code: &str, expected: [f32; 6]) {
    let s = structure(order, code);
    let profile = DescriptorProfile::compute(&s);
    for (descriptor, value) in Descriptor::ALL.iter().zip(expected) {
        assert_close(profile.get(*descriptor), value, &format!("{code} {descriptor:?}"));
        assert_close(descriptor.compute(&s), value, &format!("{code} {descriptor:?}"));
    }
    assert_eq!(profile.level, s.level());
}

#[test]
fn major_triad() {
    assert_profile(12, "0,4,7", [20.4124, 41.6667, 100.0, 43.75, 33.3333, 98.0834]);
}

#[test]
fn major_scale() {
    assert_profile(
        12,
        "0,2,4,5,7,9,11",
        [26.3523, 41.6667, 100.0, 54.1667, 50.0, 98.015],
    );
}

#[test]
fn diminished_seventh_is_perfectly_even() {
    assert_profile(12, "0,3,6,9", [0.0, 50.0, 100.0, 66.6667, 12.5, 100.0]);
}

#[test]
fn rhythm_in_sixteen() {
    assert_profile(16, "0,3,6,10,12", [23.3854, 43.75, 100.0, 50.0, 50.0, 98.2218]);
}

#[test]
fn late_onset_lowers_filling() {
    assert_profile(12, "1,5", [33.3333, 33.3333, 91.6667, 0.0, 75.0, 91.8296]);
}

#[test]
fn clustered_places_clamp_variance() {
    assert_profile(12, "0,1,2", [100.0, 25.0, 100.0, 35.4167, 16.6667, 51.5273]);
}

#[test]
fn odd_order_clamps_balance_and_has_no_beat() {
    assert_profile(7, "3,4,5,6", [74.2307, 100.0, 57.1429, 0.0, 100.0, 83.2249]);
}

#[test]
fn empty_structure_scores_zero() {
    let s = structure(12, "");
    assert_eq!(variance(&s), 0.0);
    assert_eq!(balance(&s), 0.0);
    assert_eq!(filling(&s), 0.0);
    assert_eq!(beat(&s), 0.0);
    assert_eq!(complexity(&s), 0.0);
    assert_eq!(entropy(&s), 0.0);
}

#[test]
fn single_place_has_no_spread() {
    let s = structure(12, "6");
    assert_eq!(variance(&s), 0.0);
    assert_eq!(entropy(&s), 0.0);
    assert_close(balance(&s), 58.3333, "balance");
}

#[test]
fn descriptors_are_transposition_sensitive_only_where_expected() {
    let a = structure(12, "0,4,7");
    let b = a.transpose(5);
    assert_close(variance(&a), variance(&b), "variance");
    assert_close(entropy(&a), entropy(&b), "entropy");
}
