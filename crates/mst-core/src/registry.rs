//! Shared, lazily built per-system lookup tables.
//!
//! The registry replaces a process-wide cache: callers own it and pass it by
//! reference, so independent tests never observe each other's entries. Tables
//! are built once per `(degree, order)` and never evicted.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MstError};
use crate::system::AlgebraicSystem;

const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const JUST_RATIOS: [(u32, u32); 12] = [
    (1, 1),
    (16, 15),
    (9, 8),
    (6, 5),
    (5, 4),
    (4, 3),
    (45, 32),
    (3, 2),
    (8, 5),
    (5, 3),
    (9, 5),
    (15, 8),
];

const MAX_APPROX_DENOMINATOR: u32 = 16;

/// Frequency ratios assigned to each step of a system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalTable {
    ratios: Vec<(u32, u32)>,
}

impl IntervalTable {
    /// Builds the table for a system of the given order.
    ///
    /// Order 12 uses the 5-limit just table; any other order uses the best
    /// rational approximation of `2^(step/order)` with a small denominator.
    pub fn for_order(order: u8) -> Self {
        if order == 12 {
            return Self {
                ratios: JUST_RATIOS.to_vec(),
            };
        }
        let ratios = (0..order)
            .map(|step| {
                let target = 2f64.powf(f64::from(step) / f64::from(order));
                best_ratio(target, MAX_APPROX_DENOMINATOR)
            })
            .collect();
        Self { ratios }
    }

    /// Number of steps covered by the table.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Reduced ratio for the interval of `step` positions (taken modulo order).
    pub fn ratio(&self, step: usize) -> (u32, u32) {
        self.ratios[step % self.ratios.len()]
    }

    /// Consonance of a step as the inverse Tenney height `1 / log2(p * q)`.
    ///
    /// The unison scores `1.0`.
    pub fn consonance(&self, step: usize) -> f32 {
        let (p, q) = self.ratio(step);
        let height = f64::from(p) * f64::from(q);
        if height <= 1.0 {
            1.0
        } else {
            (1.0 / height.log2()) as f32
        }
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn best_ratio(target: f64, max_denominator: u32) -> (u32, u32) {
    let mut best = (1u32, 1u32);
    let mut best_err = f64::INFINITY;
    for q in 1..=max_denominator {
        let p = (target * f64::from(q)).round() as u32;
        if p == 0 {
            continue;
        }
        let err = (f64::from(p) / f64::from(q) - target).abs();
        if err < best_err {
            let g = gcd(p, q);
            best = (p / g, q / g);
            best_err = err;
        }
    }
    best
}

/// Derived lookup tables for one algebraic system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemTables {
    /// System the tables were derived for.
    pub system: AlgebraicSystem,
    /// Display symbol of each position.
    pub symbols: Vec<String>,
    /// Interval ratios per step.
    pub intervals: IntervalTable,
}

impl SystemTables {
    /// Computes the tables for a system.
    pub fn build(system: AlgebraicSystem) -> Self {
        Self {
            system,
            symbols: symbols_for(system.order()),
            intervals: IntervalTable::for_order(system.order()),
        }
    }

    /// Symbol of a position, if inside the cycle.
    pub fn symbol(&self, position: u8) -> Option<&str> {
        self.symbols.get(position as usize).map(String::as_str)
    }
}

fn symbols_for(order: u8) -> Vec<String> {
    if order == 12 {
        return PITCH_NAMES.iter().map(|name| name.to_string()).collect();
    }
    (0..order)
        .map(|position| {
            if order <= 36 {
                char::from_digit(u32::from(position), 36)
                    .map(|c| c.to_ascii_uppercase().to_string())
                    .unwrap_or_else(|| position.to_string())
            } else {
                position.to_string()
            }
        })
        .collect()
}

/// Thread-safe memo of [`SystemTables`] keyed by `(degree, order)`.
#[derive(Debug, Default)]
pub struct SystemRegistry {
    entries: Mutex<BTreeMap<(u8, u8), Arc<SystemTables>>>,
}

impl SystemRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tables for `(degree, order)`, building them on first use.
    pub fn tables(&self, degree: u8, order: u8) -> Result<Arc<SystemTables>, MstError> {
        let system = AlgebraicSystem::new(degree, order)?;
        self.tables_for(system)
    }

    /// Returns the tables for an already validated system.
    pub fn tables_for(&self, system: AlgebraicSystem) -> Result<Arc<SystemTables>, MstError> {
        let mut entries = self.entries.lock().map_err(|_| {
            MstError::System(
                ErrorInfo::new("registry-poisoned", "system registry lock was poisoned")
                    .with_context("order", system.order()),
            )
        })?;
        let key = (system.degree(), system.order());
        if let Some(tables) = entries.get(&key) {
            return Ok(Arc::clone(tables));
        }
        tracing::debug!(
            degree = system.degree(),
            order = system.order(),
            "building system tables"
        );
        let tables = Arc::new(SystemTables::build(system));
        entries.insert(key, Arc::clone(&tables));
        Ok(tables)
    }

    /// Returns the validated system for `(degree, order)` and memoizes its tables.
    pub fn system(&self, degree: u8, order: u8) -> Result<AlgebraicSystem, MstError> {
        Ok(self.tables(degree, order)?.system)
    }

    /// Number of memoized systems.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns whether no system has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
