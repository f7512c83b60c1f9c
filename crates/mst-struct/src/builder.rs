use std::sync::Arc;

use mst_core::{AlgebraicSystem, ErrorInfo, MstError};

use crate::modality::Modality;
use crate::structure::Structure;

/// Accumulates bit edits and produces a finished [`Structure`].
///
/// Structures built this way start with an empty derived cache and are never
/// mutated afterwards. The first invalid edit is remembered and reported by
/// [`StructureBuilder::build`].
#[derive(Debug, Clone)]
pub struct StructureBuilder {
    system: AlgebraicSystem,
    bits: u64,
    modality: Option<Arc<Modality>>,
    error: Option<MstError>,
}

impl StructureBuilder {
    /// Starts an empty structure for `system`.
    pub fn new(system: AlgebraicSystem) -> Self {
        Self {
            system,
            bits: 0,
            modality: None,
            error: None,
        }
    }

    fn fail(&mut self, code: &str, message: &str, position: u32) {
        if self.error.is_none() {
            self.error = Some(MstError::Structure(
                ErrorInfo::new(code, message)
                    .with_context("position", position)
                    .with_context("order", self.system.order()),
            ));
        }
    }

    /// Replaces the whole pattern.
    pub fn number(mut self, number: u64) -> Self {
        if number & !self.system.mask() != 0 {
            self.fail(
                "number-out-of-range",
                "number sets bits beyond the order",
                64 - number.leading_zeros() - 1,
            );
        }
        self.bits = number & self.system.mask();
        self
    }

    /// Sets position `i`.
    pub fn on(mut self, i: u8) -> Self {
        if self.system.contains(i) {
            self.bits |= 1u64 << i;
        } else {
            self.fail("position-out-of-range", "position lies outside the cycle", u32::from(i));
        }
        self
    }

    /// Clears position `i`.
    pub fn off(mut self, i: u8) -> Self {
        if self.system.contains(i) {
            self.bits &= !(1u64 << i);
        } else {
            self.fail("position-out-of-range", "position lies outside the cycle", u32::from(i));
        }
        self
    }

    /// Sets every position in `[start, start + length)`.
    pub fn on_range(mut self, start: u8, length: u8) -> Self {
        for i in start..start.saturating_add(length) {
            self = self.on(i);
        }
        self
    }

    /// Clears every position in `[start, start + length)`.
    pub fn off_range(mut self, start: u8, length: u8) -> Self {
        for i in start..start.saturating_add(length) {
            self = self.off(i);
        }
        self
    }

    /// Shares `modality` with the built structure.
    pub fn modality(mut self, modality: Arc<Modality>) -> Self {
        self.modality = Some(modality);
        self
    }

    /// Finishes the structure, reporting the first invalid edit.
    pub fn build(self) -> Result<Structure, MstError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let structure = Structure::from_parts(self.system, self.bits);
        Ok(match self.modality {
            Some(modality) => structure.with_modality(modality),
            None => structure,
        })
    }
}
