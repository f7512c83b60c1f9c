//! Serializable form of structures, keyed by their structural code.

use mst_core::{
    from_json_slice, from_yaml_str, to_canonical_json_bytes, to_yaml_string, AlgebraicSystem,
    ErrorInfo, MstError,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::structure::Structure;

/// Plain data form of a [`Structure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureRecord {
    /// Degree tag of the structure's system.
    pub degree: u8,
    /// Order of the structure's system.
    pub order: u8,
    /// Structural code of the set positions.
    pub code: String,
}

impl Structure {
    /// Converts the structure into its record form.
    pub fn to_record(&self) -> StructureRecord {
        StructureRecord {
            degree: self.system().degree(),
            order: self.order(),
            code: self.structural_code().to_string(),
        }
    }

    /// Rebuilds a structure from its record, validating system and code.
    pub fn from_record(record: &StructureRecord) -> Result<Self, MstError> {
        let system = AlgebraicSystem::new(record.degree, record.order)?;
        Structure::from_code(system, &record.code)
    }
}

impl Serialize for Structure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Structure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = StructureRecord::deserialize(deserializer)?;
        Structure::from_record(&record).map_err(serde::de::Error::custom)
    }
}

/// Serializes structures into canonical JSON.
pub fn to_json(structures: &[Structure]) -> Result<String, MstError> {
    let bytes = to_canonical_json_bytes(&structures)?;
    String::from_utf8(bytes)
        .map_err(|err| MstError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores structures from JSON.
pub fn from_json(data: &str) -> Result<Vec<Structure>, MstError> {
    from_json_slice(data.as_bytes())
}

/// Serializes structures into YAML.
pub fn to_yaml(structures: &[Structure]) -> Result<String, MstError> {
    to_yaml_string(&structures)
}

/// Restores structures from YAML.
pub fn from_yaml(data: &str) -> Result<Vec<Structure>, MstError> {
    from_yaml_str(data)
}
