use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use mst_core::{AlgebraicSystem, ErrorInfo, MstError, StructureKind};

use crate::code::{format_code, parse_code};
use crate::modality::Modality;

/// Half-open run of positions `[start, start + length)` covered by one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BitRange {
    /// First position of the run.
    pub start: u8,
    /// Number of positions in the run.
    pub length: u8,
}

#[derive(Debug, Clone, Default)]
struct DerivedCache {
    places: OnceLock<Vec<u8>>,
    distances: OnceLock<Vec<u8>>,
    code: OnceLock<String>,
}

/// Cyclic bitfield of `order` positions bound to an [`AlgebraicSystem`].
///
/// Places, distances and the structural code are derived lazily and memoized.
/// Every mutating method drops the memoized values, so a stale view can never
/// be observed.
///
/// Structures order by level first, then by their bit pattern read from
/// position 0 upward with a set bit ranking above a clear one. Equality and
/// hashing follow the same `(order, bits)` identity; the degree tag does not
/// take part.
#[derive(Clone)]
pub struct Structure {
    system: AlgebraicSystem,
    bits: u64,
    modality: Option<Arc<Modality>>,
    cache: DerivedCache,
}

impl fmt::Debug for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Structure")
            .field("system", &self.system)
            .field("code", &self.structural_code())
            .field("has_modality", &self.modality.is_some())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.structural_code())
    }
}

fn position_error(system: &AlgebraicSystem, position: u32) -> MstError {
    MstError::Structure(
        ErrorInfo::new("position-out-of-range", "position lies outside the cycle")
            .with_context("position", position)
            .with_context("order", system.order()),
    )
}

impl Structure {
    pub(crate) fn from_parts(system: AlgebraicSystem, bits: u64) -> Self {
        Self {
            system,
            bits: bits & system.mask(),
            modality: None,
            cache: DerivedCache::default(),
        }
    }

    /// Creates the empty structure of a system.
    pub fn empty(system: AlgebraicSystem) -> Self {
        Self::from_parts(system, 0)
    }

    /// Creates a structure from a packed integer; bit `i` is position `i`.
    pub fn from_number(system: AlgebraicSystem, number: u64) -> Result<Self, MstError> {
        if number & !system.mask() != 0 {
            return Err(MstError::Structure(
                ErrorInfo::new("number-out-of-range", "number sets bits beyond the order")
                    .with_context("number", number)
                    .with_context("order", system.order()),
            ));
        }
        Ok(Self::from_parts(system, number))
    }

    /// Creates a structure from exactly `order` flags.
    pub fn from_bits(system: AlgebraicSystem, bits: &[bool]) -> Result<Self, MstError> {
        if bits.len() != system.order() as usize {
            return Err(MstError::Structure(
                ErrorInfo::new("bits-length-mismatch", "bit vector length must equal the order")
                    .with_context("length", bits.len())
                    .with_context("order", system.order()),
            ));
        }
        let number = bits
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(0u64, |acc, (idx, _)| acc | (1u64 << idx));
        Ok(Self::from_parts(system, number))
    }

    /// Parses a structure from its structural code.
    pub fn from_code(system: AlgebraicSystem, code: &str) -> Result<Self, MstError> {
        let bits = parse_code(&system, code)?;
        Ok(Self::from_parts(system, bits))
    }

    /// Creates a structure with the listed positions set.
    pub fn from_places(system: AlgebraicSystem, places: &[u8]) -> Result<Self, MstError> {
        let mut bits = 0u64;
        for &place in places {
            if !system.contains(place) {
                return Err(position_error(&system, u32::from(place)));
            }
            bits |= 1u64 << place;
        }
        Ok(Self::from_parts(system, bits))
    }

    /// Attaches the modality this structure was derived from.
    pub fn with_modality(mut self, modality: Arc<Modality>) -> Self {
        self.modality = Some(modality);
        self
    }

    /// Returns the system the structure is bound to.
    pub fn system(&self) -> &AlgebraicSystem {
        &self.system
    }

    /// Returns the structure family of the system.
    pub fn kind(&self) -> StructureKind {
        self.system.kind()
    }

    /// Returns the number of positions per cycle.
    pub fn order(&self) -> u8 {
        self.system.order()
    }

    /// Returns the packed bit pattern.
    pub fn number(&self) -> u64 {
        self.bits
    }

    /// Returns the shared modality, if the structure was generated from one.
    pub fn modality(&self) -> Option<&Arc<Modality>> {
        self.modality.as_ref()
    }

    /// Returns the flags as a vector of exactly `order` booleans.
    pub fn to_bits(&self) -> Vec<bool> {
        (0..self.order()).map(|i| self.is_on(i)).collect()
    }

    /// Returns whether position `i` is set. Positions past the order are off.
    pub fn is_on(&self, i: u8) -> bool {
        self.system.contains(i) && mst_bits::is_on(self.bits, i)
    }

    /// Returns whether position `i` is clear.
    pub fn is_off(&self, i: u8) -> bool {
        !self.is_on(i)
    }

    /// Drops every memoized derived value.
    pub fn reset(&mut self) {
        self.cache = DerivedCache::default();
    }

    /// Sets position `i`.
    pub fn on(&mut self, i: u8) -> Result<(), MstError> {
        if !self.system.contains(i) {
            return Err(position_error(&self.system, u32::from(i)));
        }
        self.bits |= 1u64 << i;
        self.reset();
        Ok(())
    }

    /// Clears position `i`.
    pub fn off(&mut self, i: u8) -> Result<(), MstError> {
        if !self.system.contains(i) {
            return Err(position_error(&self.system, u32::from(i)));
        }
        self.bits &= !(1u64 << i);
        self.reset();
        Ok(())
    }

    fn range_bits(&self, start: u8, length: u8) -> Result<u64, MstError> {
        let end = u32::from(start) + u32::from(length);
        if end > u32::from(self.order()) {
            return Err(position_error(&self.system, end.saturating_sub(1)));
        }
        if length == 0 {
            return Ok(0);
        }
        Ok(mst_bits::mask(length) << start)
    }

    /// Sets every position in `[start, start + length)`.
    pub fn on_range(&mut self, start: u8, length: u8) -> Result<(), MstError> {
        let range = self.range_bits(start, length)?;
        self.bits |= range;
        self.reset();
        Ok(())
    }

    /// Clears every position in `[start, start + length)`.
    pub fn off_range(&mut self, start: u8, length: u8) -> Result<(), MstError> {
        let range = self.range_bits(start, length)?;
        self.bits &= !range;
        self.reset();
        Ok(())
    }

    /// Number of set positions.
    pub fn level(&self) -> u8 {
        self.bits.count_ones() as u8
    }

    /// Ascending positions of the set bits.
    pub fn places(&self) -> &[u8] {
        self.cache
            .places
            .get_or_init(|| mst_bits::places(self.order(), self.bits))
    }

    /// Wrapping gaps between consecutive places.
    ///
    /// A structure with fewer than two places has the single distance
    /// `[order]`: one span around the whole cycle.
    pub fn distances(&self) -> &[u8] {
        self.cache
            .distances
            .get_or_init(|| mst_bits::distance_schema(self.order(), self.bits))
    }

    /// Comma separated list of places; empty for the empty structure.
    pub fn structural_code(&self) -> &str {
        self.cache.code.get_or_init(|| format_code(self.places()))
    }

    fn level_error(&self, level: usize) -> MstError {
        MstError::Structure(
            ErrorInfo::new("level-out-of-range", "level index exceeds the structure level")
                .with_context("index", level)
                .with_context("level", self.level())
                .with_context("code", self.structural_code()),
        )
    }

    /// Position of the `level`-th set bit.
    pub fn place_at_level(&self, level: usize) -> Result<u8, MstError> {
        self.places()
            .get(level)
            .copied()
            .ok_or_else(|| self.level_error(level))
    }

    /// Gap following the `level`-th set bit, or 0 past the last level.
    pub fn distance_at_level(&self, level: usize) -> u8 {
        if level >= self.level() as usize {
            return 0;
        }
        self.distances().get(level).copied().unwrap_or(0)
    }

    /// Run of positions owned by the `level`-th set bit.
    ///
    /// The run starts at the place and spans its distance. For the last level
    /// the run would wrap past the cycle end; it is shortened by the overshoot
    /// only while the overshoot is positive and smaller than the length.
    pub fn range_at_level(&self, level: usize) -> Result<BitRange, MstError> {
        let start = self.place_at_level(level)?;
        let mut length = self.distance_at_level(level);
        if level + 1 == self.level() as usize {
            let diff = i32::from(start) + i32::from(length) - i32::from(self.order());
            if diff > 0 && diff < i32::from(length) {
                length -= diff as u8;
            }
        }
        Ok(BitRange { start, length })
    }

    /// Canonical class number of this structure's rotation class.
    pub fn class_number(&self) -> u64 {
        mst_bits::class_number(self.order(), self.bits)
    }

    /// Returns whether this structure is its own class representative.
    pub fn is_class(&self) -> bool {
        mst_bits::is_class_number(self.order(), self.bits)
    }

    /// Canonical representative of this structure's rotation class.
    pub fn class_structure(&self) -> Structure {
        Self::from_parts(self.system, self.class_number())
    }

    /// Transposition by `k` positions.
    pub fn transpose(&self, k: u32) -> Structure {
        Self::from_parts(self.system, mst_bits::rotate_to(self.order(), self.bits, k))
    }

    /// Structure holding exactly the positions this one leaves clear.
    pub fn complement(&self) -> Structure {
        Self::from_parts(self.system, !self.bits)
    }

    /// Returns whether every set position is also set in `other`.
    pub fn is_substructure_of(&self, other: &Structure) -> bool {
        self.order() == other.order() && mst_bits::is_subset(self.bits, other.bits)
    }
}

impl PartialEq for Structure {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Structure {}

impl Hash for Structure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order().hash(state);
        self.bits.hash(state);
    }
}

impl PartialOrd for Structure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Structure {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order()
            .cmp(&other.order())
            .then_with(|| self.level().cmp(&other.level()))
            .then_with(|| {
                let diff = self.bits ^ other.bits;
                if diff == 0 {
                    Ordering::Equal
                } else {
                    let first = diff.trailing_zeros();
                    if (self.bits >> first) & 1 == 1 {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    }
                }
            })
    }
}
