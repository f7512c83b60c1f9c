//! Per-kind structure rules, selected by matching on [`StructureKind`].

use mst_core::StructureKind;
use mst_struct::Structure;

use crate::arith::{beat, complexity};
use crate::spread::{entropy, variance};

/// Returns whether the structure holds no positions. Identical for all kinds.
pub fn is_empty_struct(structure: &Structure) -> bool {
    structure.level() == 0
}

/// Returns whether the structure is meaningful for its kind.
///
/// Binary structures are always valid. Harmonic structures need a sounding
/// position, rhythms must start with an onset and melodic shapes need at least
/// two positions to move between.
pub fn is_valid_struct(structure: &Structure) -> bool {
    match structure.kind() {
        StructureKind::Binary => true,
        StructureKind::Harmonic => structure.level() >= 1,
        StructureKind::Rhythmic => structure.is_on(0),
        StructureKind::Melodic => structure.level() >= 2,
    }
}

/// The descriptor that characterises a structure of its kind.
///
/// Binary: complexity. Harmonic: variance. Rhythmic: beat. Melodic: entropy.
pub fn behavior(structure: &Structure) -> f32 {
    match structure.kind() {
        StructureKind::Binary => complexity(structure),
        StructureKind::Harmonic => variance(structure),
        StructureKind::Rhythmic => beat(structure),
        StructureKind::Melodic => entropy(structure),
    }
}
