use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use mst_core::{from_json_slice, from_yaml_str, ErrorInfo, MstError};
use mst_desc::{is_valid_struct, Descriptor};
use mst_struct::Structure;
use serde::{Deserialize, Serialize};

/// Decides whether a structure belongs to an enumeration's output.
pub trait StructurePredicate: Send + Sync {
    /// Returns true when `structure` is accepted.
    fn accepts(&self, structure: &Structure) -> bool;
}

impl<F> StructurePredicate for F
where
    F: Fn(&Structure) -> bool + Send + Sync,
{
    fn accepts(&self, structure: &Structure) -> bool {
        self(structure)
    }
}

/// Predicate accepting every structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl StructurePredicate for AcceptAll {
    fn accepts(&self, _structure: &Structure) -> bool {
        true
    }
}

/// Predicate rejecting every structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

impl StructurePredicate for RejectAll {
    fn accepts(&self, _structure: &Structure) -> bool {
        false
    }
}

/// Inclusive window on a descriptor value; a missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DescriptorRange {
    /// Smallest accepted value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    /// Largest accepted value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
}

impl DescriptorRange {
    /// Window `[min, max]`.
    pub fn between(min: f32, max: f32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Window `[min, +inf)`.
    pub fn at_least(min: f32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Window `(-inf, max]`.
    pub fn at_most(max: f32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Returns whether `value` lies inside the window.
    pub fn contains(&self, value: f32) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Inclusive window on the number of set positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LevelRange {
    /// Fewest accepted set positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u8>,
    /// Most accepted set positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u8>,
}

impl LevelRange {
    /// Returns whether `level` lies inside the window.
    pub fn contains(&self, level: u8) -> bool {
        self.min.map_or(true, |min| level >= min) && self.max.map_or(true, |max| level <= max)
    }
}

/// Filter over levels and descriptor windows, loadable from YAML or JSON.
///
/// Descriptors are only computed for the windows that are set, and
/// [`StructurePredicate::accepts`] stops at the first failing check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Qualifier {
    /// Accepted level window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<LevelRange>,
    /// Require the structure to be valid for its kind.
    #[serde(default)]
    pub require_valid: bool,
    /// Accepted variance window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<DescriptorRange>,
    /// Accepted balance window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<DescriptorRange>,
    /// Accepted filling window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filling: Option<DescriptorRange>,
    /// Accepted beat window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beat: Option<DescriptorRange>,
    /// Accepted complexity window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<DescriptorRange>,
    /// Accepted entropy window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entropy: Option<DescriptorRange>,
}

impl Qualifier {
    /// Qualifier accepting everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the level to `[min, max]`.
    pub fn with_levels(mut self, min: u8, max: u8) -> Self {
        self.levels = Some(LevelRange {
            min: Some(min),
            max: Some(max),
        });
        self
    }

    /// Requires structures to be valid for their kind.
    pub fn requiring_valid(mut self) -> Self {
        self.require_valid = true;
        self
    }

    /// Sets the window of one descriptor.
    pub fn with_range(mut self, descriptor: Descriptor, range: DescriptorRange) -> Self {
        *self.slot(descriptor) = Some(range);
        self
    }

    /// Returns the window of one descriptor, if set.
    pub fn range(&self, descriptor: Descriptor) -> Option<&DescriptorRange> {
        match descriptor {
            Descriptor::Variance => self.variance.as_ref(),
            Descriptor::Balance => self.balance.as_ref(),
            Descriptor::Filling => self.filling.as_ref(),
            Descriptor::Beat => self.beat.as_ref(),
            Descriptor::Complexity => self.complexity.as_ref(),
            Descriptor::Entropy => self.entropy.as_ref(),
        }
    }

    fn slot(&mut self, descriptor: Descriptor) -> &mut Option<DescriptorRange> {
        match descriptor {
            Descriptor::Variance => &mut self.variance,
            Descriptor::Balance => &mut self.balance,
            Descriptor::Filling => &mut self.filling,
            Descriptor::Beat => &mut self.beat,
            Descriptor::Complexity => &mut self.complexity,
            Descriptor::Entropy => &mut self.entropy,
        }
    }

    fn ranges(&self) -> impl Iterator<Item = (Descriptor, &DescriptorRange)> + '_ {
        Descriptor::ALL
            .into_iter()
            .filter_map(move |descriptor| self.range(descriptor).map(|range| (descriptor, range)))
    }

    /// Runs every check and reports each outcome.
    pub fn evaluate(&self, structure: &Structure) -> QualifierDecision {
        let level = self
            .levels
            .map_or(true, |levels| levels.contains(structure.level()));
        let valid = !self.require_valid || is_valid_struct(structure);
        let descriptors = self
            .ranges()
            .map(|(descriptor, range)| (descriptor, range.contains(descriptor.compute(structure))))
            .collect();
        QualifierDecision {
            level,
            valid,
            descriptors,
        }
    }

    /// Parses a qualifier from YAML.
    pub fn from_yaml_str(data: &str) -> Result<Self, MstError> {
        from_yaml_str(data)
    }

    /// Parses a qualifier from JSON.
    pub fn from_json_str(data: &str) -> Result<Self, MstError> {
        from_json_slice(data.as_bytes())
    }
}

impl StructurePredicate for Qualifier {
    fn accepts(&self, structure: &Structure) -> bool {
        if let Some(levels) = self.levels {
            if !levels.contains(structure.level()) {
                return false;
            }
        }
        if self.require_valid && !is_valid_struct(structure) {
            return false;
        }
        self.ranges()
            .all(|(descriptor, range)| range.contains(descriptor.compute(structure)))
    }
}

/// Per-check outcome of [`Qualifier::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QualifierDecision {
    /// Level window result.
    pub level: bool,
    /// Kind validity result.
    pub valid: bool,
    /// Result of every configured descriptor window.
    pub descriptors: BTreeMap<Descriptor, bool>,
}

impl QualifierDecision {
    /// Returns true when all checks succeed.
    pub fn passes(&self) -> bool {
        self.level && self.valid && self.descriptors.values().all(|&ok| ok)
    }
}

/// Loads a qualifier from a `.json`, `.yaml` or `.yml` file.
pub fn load_qualifier(path: &Path) -> Result<Qualifier, MstError> {
    let data = fs::read_to_string(path).map_err(|err| {
        MstError::Serde(
            ErrorInfo::new("qualifier-read", err.to_string()).with_context("path", path.display()),
        )
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Qualifier::from_json_str(&data),
        _ => Qualifier::from_yaml_str(&data),
    }
}
