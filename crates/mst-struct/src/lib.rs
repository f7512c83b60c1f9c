#![deny(missing_docs)]
#![doc = "Cyclic binary structures, their structural codes and the modalities that constrain them."]

/// Incremental construction of finished structures.
pub mod builder;
/// Structural code parsing and formatting.
pub mod code;
/// Stable digests over structure lists.
pub mod hash;
/// Reference structures with symbolic naming and interval scores.
pub mod modality;
/// Record form and JSON/YAML round-trips.
pub mod record;
/// The structure type and its derived schemas.
pub mod structure;

pub use builder::StructureBuilder;
pub use code::{format_code, parse_code};
pub use hash::structure_hash;
pub use modality::{Modality, ModalityScores};
pub use record::{from_json, from_yaml, to_json, to_yaml, StructureRecord};
pub use structure::{BitRange, Structure};
