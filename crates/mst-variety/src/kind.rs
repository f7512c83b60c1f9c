use std::fmt;

use serde::{Deserialize, Serialize};

/// What an enumeration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarietyKind {
    /// One canonical representative per rotation class.
    Classes,
    /// Every distinct bit pattern.
    Instances,
    /// Every bit pattern contained in the attached modality.
    SubstructuresOfModality,
}

impl fmt::Display for VarietyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VarietyKind::Classes => "classes",
            VarietyKind::Instances => "instances",
            VarietyKind::SubstructuresOfModality => "substructures_of_modality",
        })
    }
}
