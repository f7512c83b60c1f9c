use serde::{Deserialize, Serialize};

use mst_struct::Structure;

use crate::arith::{beat, complexity};
use crate::layout::{balance, filling};
use crate::spread::{entropy, variance};

/// Names one of the six descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Descriptor {
    /// See [`variance`].
    Variance,
    /// See [`balance`].
    Balance,
    /// See [`filling`].
    Filling,
    /// See [`beat`].
    Beat,
    /// See [`complexity`].
    Complexity,
    /// See [`entropy`].
    Entropy,
}

impl Descriptor {
    /// Every descriptor in a fixed order.
    pub const ALL: [Descriptor; 6] = [
        Descriptor::Variance,
        Descriptor::Balance,
        Descriptor::Filling,
        Descriptor::Beat,
        Descriptor::Complexity,
        Descriptor::Entropy,
    ];

    /// Computes this descriptor for `structure`.
    pub fn compute(self, structure: &Structure) -> f32 {
        match self {
            Descriptor::Variance => variance(structure),
            Descriptor::Balance => balance(structure),
            Descriptor::Filling => filling(structure),
            Descriptor::Beat => beat(structure),
            Descriptor::Complexity => complexity(structure),
            Descriptor::Entropy => entropy(structure),
        }
    }
}

/// All descriptors of one structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescriptorProfile {
    /// Number of set positions.
    pub level: u8,
    /// Gap heterogeneity.
    pub variance: f32,
    /// Upper versus lower half weight.
    pub balance: f32,
    /// Coverage from the first onset.
    pub filling: f32,
    /// Divisor resonance.
    pub beat: f32,
    /// Arithmetic irregularity.
    pub complexity: f32,
    /// Normalized gap entropy.
    pub entropy: f32,
}

impl DescriptorProfile {
    /// Computes every descriptor of `structure`.
    pub fn compute(structure: &Structure) -> Self {
        Self {
            level: structure.level(),
            variance: variance(structure),
            balance: balance(structure),
            filling: filling(structure),
            beat: beat(structure),
            complexity: complexity(structure),
            entropy: entropy(structure),
        }
    }

    /// Returns the value of one descriptor.
    pub fn get(&self, descriptor: Descriptor) -> f32 {
        match descriptor {
            Descriptor::Variance => self.variance,
            Descriptor::Balance => self.balance,
            Descriptor::Filling => self.filling,
            Descriptor::Beat => self.beat,
            Descriptor::Complexity => self.complexity,
            Descriptor::Entropy => self.entropy,
        }
    }
}
