use std::collections::{BTreeSet, HashSet};

use mst_core::AlgebraicSystem;
use mst_struct::Structure;

fn chromatic(code: &str) -> Structure {
    Structure::from_code(AlgebraicSystem::chromatic(), code).unwrap()
}

#[test]
fn ordering_is_level_first() {
    let triad = chromatic("0,4,7");
    let dyad = chromatic("10,11");
    assert!(dyad < triad);
}

#[test]
fn equal_levels_compare_bits_from_position_zero() {
    // First difference at position 1: the structure with it set ranks higher.
    let a = chromatic("0,1,5");
    let b = chromatic("0,2,5");
    assert!(a > b);
    assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);
}

#[test]
fn equality_and_hash_agree() {
    let a = chromatic("0,4,7");
    let b = Structure::from_number(AlgebraicSystem::chromatic(), 0b1001_0001).unwrap();
    // Same bits in a rhythmic system of the same order compare equal too.
    let c = Structure::from_code(AlgebraicSystem::new(2, 12).unwrap(), "0,4,7").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
    let set: HashSet<_> = [a.clone(), b, c].into_iter().collect();
    assert_eq!(set.len(), 1);
    let other_order = Structure::from_code(AlgebraicSystem::new(1, 13).unwrap(), "0,4,7").unwrap();
    assert_ne!(a, other_order);
}

#[test]
fn class_structure_collapses_transpositions() {
    let c_major = chromatic("0,4,7");
    let transposed: BTreeSet<u64> = (0..12)
        .map(|k| c_major.transpose(k).class_number())
        .collect();
    assert_eq!(transposed.len(), 1);
    let class = chromatic("2,6,9").class_structure();
    assert_eq!(class.structural_code(), "0,4,7");
    assert!(class.is_class());
    assert!(!chromatic("2,6,9").is_class());
}

#[test]
fn transpose_shifts_positions_down() {
    assert_eq!(chromatic("2,6,9").transpose(2).structural_code(), "0,4,7");
    assert_eq!(chromatic("0,4,7").transpose(1).structural_code(), "3,6,11");
}

#[test]
fn complement_and_substructure() {
    let major_scale = chromatic("0,2,4,5,7,9,11");
    let pentatonic = major_scale.complement();
    assert_eq!(pentatonic.structural_code(), "1,3,6,8,10");
    assert!(chromatic("0,4,7").is_substructure_of(&major_scale));
    assert!(!chromatic("0,3,7").is_substructure_of(&major_scale));
}

#[test]
fn display_is_structural_code() {
    assert_eq!(chromatic("0,3,7").to_string(), "0,3,7");
}
