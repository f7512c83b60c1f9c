use mst_core::{to_canonical_json_bytes, MstError};
use mst_struct::{Structure, StructureRecord};
use serde::{Deserialize, Serialize};

use crate::kind::VarietyKind;

/// Serializable summary of one enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationReport {
    /// What was enumerated.
    pub kind: VarietyKind,
    /// Degree tag of the system.
    pub degree: u8,
    /// Order of the system.
    pub order: u8,
    /// Requested result limit.
    pub limit: usize,
    /// Structural code of the constraining modality, for substructure runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modality: Option<String>,
    /// Candidates examined before the run stopped.
    pub candidates_visited: u64,
    /// Stopped at the candidate budget.
    #[serde(default)]
    pub truncated: bool,
    /// Stopped by cancellation.
    #[serde(default)]
    pub cancelled: bool,
    /// Accepted structures in enumeration order.
    pub records: Vec<StructureRecord>,
    /// SHA-256 digest of `records`.
    pub hash: String,
}

impl EnumerationReport {
    /// Canonical JSON encoding of the report.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>, MstError> {
        to_canonical_json_bytes(self)
    }

    /// Rebuilds the structures listed in the report.
    pub fn structures(&self) -> Result<Vec<Structure>, MstError> {
        self.records.iter().map(Structure::from_record).collect()
    }
}
