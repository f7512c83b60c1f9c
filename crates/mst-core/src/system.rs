//! Algebraic systems: the `(degree, order)` pair every structure is bound to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MstError};

/// Largest order a structure can be packed into (one `u64` word).
pub const MAX_ORDER: u8 = 64;

/// Family of structures a system describes.
///
/// The numeric value doubles as the raw `degree` tag stored in
/// [`AlgebraicSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureKind {
    /// Plain bitfields without musical interpretation.
    Binary = 0,
    /// Chords and scales over pitch classes.
    Harmonic = 1,
    /// Onset patterns over a rhythmic subdivision.
    Rhythmic = 2,
    /// Melodic shapes (contours) over a step lattice.
    Melodic = 3,
}

impl StructureKind {
    /// Resolves the kind tagged by a raw degree. Unknown degrees are binary.
    pub fn from_degree(degree: u8) -> Self {
        match degree {
            1 => StructureKind::Harmonic,
            2 => StructureKind::Rhythmic,
            3 => StructureKind::Melodic,
            _ => StructureKind::Binary,
        }
    }

    /// Returns the raw degree tag for this kind.
    pub fn degree(self) -> u8 {
        self as u8
    }

    /// Returns a short lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            StructureKind::Binary => "binary",
            StructureKind::Harmonic => "harmonic",
            StructureKind::Rhythmic => "rhythmic",
            StructureKind::Melodic => "melodic",
        }
    }
}

/// Discrete cyclic system of `order` positions tagged by a `degree`.
///
/// Systems are plain values: two systems are equal when both their degree and
/// order match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSystem", into = "RawSystem")]
pub struct AlgebraicSystem {
    degree: u8,
    order: u8,
}

#[derive(Serialize, Deserialize)]
struct RawSystem {
    degree: u8,
    order: u8,
}

impl TryFrom<RawSystem> for AlgebraicSystem {
    type Error = MstError;

    fn try_from(raw: RawSystem) -> Result<Self, Self::Error> {
        AlgebraicSystem::new(raw.degree, raw.order)
    }
}

impl From<AlgebraicSystem> for RawSystem {
    fn from(system: AlgebraicSystem) -> Self {
        RawSystem {
            degree: system.degree,
            order: system.order,
        }
    }
}

impl AlgebraicSystem {
    /// Creates a system, validating `1 <= order <= 64`.
    pub fn new(degree: u8, order: u8) -> Result<Self, MstError> {
        if order == 0 {
            return Err(MstError::System(
                ErrorInfo::new("order-zero", "algebraic system order must be positive")
                    .with_context("degree", degree),
            ));
        }
        if order > MAX_ORDER {
            return Err(MstError::System(
                ErrorInfo::new("order-too-large", "order exceeds the packed word width")
                    .with_context("order", order)
                    .with_context("max", MAX_ORDER)
                    .with_hint("structures are packed into a single u64"),
            ));
        }
        Ok(Self { degree, order })
    }

    /// Creates a system of the given kind.
    pub fn of_kind(kind: StructureKind, order: u8) -> Result<Self, MstError> {
        Self::new(kind.degree(), order)
    }

    /// Twelve-tone chromatic pitch system.
    pub fn chromatic() -> Self {
        Self {
            degree: StructureKind::Harmonic.degree(),
            order: 12,
        }
    }

    /// Returns the raw degree tag.
    pub fn degree(&self) -> u8 {
        self.degree
    }

    /// Returns the number of positions per cycle.
    pub fn order(&self) -> u8 {
        self.order
    }

    /// Returns the structure family tagged by the degree.
    pub fn kind(&self) -> StructureKind {
        StructureKind::from_degree(self.degree)
    }

    /// Returns a word with the lowest `order` bits set.
    pub fn mask(&self) -> u64 {
        if self.order >= MAX_ORDER {
            u64::MAX
        } else {
            (1u64 << self.order) - 1
        }
    }

    /// Index splitting the cycle into a lower `[0, median)` and upper half.
    pub fn median(&self) -> u8 {
        self.order / 2
    }

    /// Reduces a signed distance into `[0, order)`.
    pub fn formal_length(&self, distance: i32) -> u8 {
        distance.rem_euclid(i32::from(self.order)) as u8
    }

    /// Returns whether `position` lies inside the cycle.
    pub fn contains(&self, position: u8) -> bool {
        position < self.order
    }

    /// Number of distinct bit patterns (`2^order`).
    pub fn universe_size(&self) -> u128 {
        1u128 << self.order
    }
}

impl fmt::Display for AlgebraicSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind().label(), self.order)
    }
}
