//! Modalities: reference structures that name their levels and score their
//! interval content.
//!
//! A modality is shared behind an `Arc` by every substructure generated from
//! it. Its symbol and interval tables come from a [`SystemRegistry`], so all
//! modalities of one system reuse a single table set.

use std::sync::{Arc, OnceLock};

use mst_core::{ErrorInfo, MstError, SystemRegistry, SystemTables};
use serde::{Deserialize, Serialize};

use crate::structure::Structure;

/// Interval scores of a modality, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ModalityScores {
    /// Mean consonance over every pair of places.
    pub potential: f32,
    /// Mean dissonance of the steps between consecutive places.
    pub impulse: f32,
    /// Share of steps no wider than the stepwise threshold.
    pub continuity: f32,
}

/// Structure used as a constraining universe and scoring reference.
#[derive(Debug)]
pub struct Modality {
    structure: Structure,
    tables: Arc<SystemTables>,
    tone_schema: OnceLock<String>,
}

impl Modality {
    /// Wraps `structure`, resolving its tables through `registry`.
    pub fn new(structure: Structure, registry: &SystemRegistry) -> Result<Self, MstError> {
        let tables = registry.tables_for(*structure.system())?;
        Ok(Self {
            structure,
            tables,
            tone_schema: OnceLock::new(),
        })
    }

    /// Parses a modality from a structural code.
    pub fn from_code(
        registry: &SystemRegistry,
        degree: u8,
        order: u8,
        code: &str,
    ) -> Result<Self, MstError> {
        let system = registry.system(degree, order)?;
        Self::new(Structure::from_code(system, code)?, registry)
    }

    /// Returns the underlying structure.
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Returns the shared tables of the modality's system.
    pub fn tables(&self) -> &SystemTables {
        &self.tables
    }

    /// Symbol of the place at `level`.
    pub fn symbol_at_level(&self, level: usize) -> Result<&str, MstError> {
        let place = self.structure.place_at_level(level)?;
        self.tables.symbol(place).ok_or_else(|| {
            MstError::Structure(
                ErrorInfo::new("position-out-of-range", "no symbol for position")
                    .with_context("position", place),
            )
        })
    }

    /// Space separated symbols of every place, memoized.
    pub fn tone_schema(&self) -> &str {
        self.tone_schema.get_or_init(|| {
            self.structure
                .places()
                .iter()
                .filter_map(|&place| self.tables.symbol(place))
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// Mean consonance over all unordered place pairs, as a percentage.
    pub fn potential(&self) -> f32 {
        let places = self.structure.places();
        if places.len() < 2 {
            return 0.0;
        }
        let mut total = 0.0f32;
        let mut pairs = 0u32;
        for (idx, &low) in places.iter().enumerate() {
            for &high in &places[idx + 1..] {
                total += self.tables.intervals.consonance(usize::from(high - low));
                pairs += 1;
            }
        }
        total / pairs as f32 * 100.0
    }

    /// Mean dissonance of consecutive steps, as a percentage.
    pub fn impulse(&self) -> f32 {
        if self.structure.level() < 2 {
            return 0.0;
        }
        let distances = self.structure.distances();
        let total: f32 = distances
            .iter()
            .map(|&d| 1.0 - self.tables.intervals.consonance(usize::from(d)))
            .sum();
        total / distances.len() as f32 * 100.0
    }

    /// Percentage of steps no wider than `max(1, ceil(order / 6))`.
    pub fn continuity(&self) -> f32 {
        if self.structure.level() < 2 {
            return 0.0;
        }
        let threshold = self.structure.order().div_ceil(6).max(1);
        let distances = self.structure.distances();
        let steps = distances.iter().filter(|&&d| d <= threshold).count();
        steps as f32 / distances.len() as f32 * 100.0
    }

    /// All interval scores at once.
    pub fn scores(&self) -> ModalityScores {
        ModalityScores {
            potential: self.potential(),
            impulse: self.impulse(),
            continuity: self.continuity(),
        }
    }
}

impl AsRef<Structure> for Modality {
    fn as_ref(&self) -> &Structure {
        &self.structure
    }
}
