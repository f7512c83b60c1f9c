#![deny(missing_docs)]
#![doc = "Core error, algebraic system and registry types shared by the MST crates."]

/// Structured error types.
pub mod errors;
/// Lazily built per-system lookup tables.
pub mod registry;
/// Canonical JSON and YAML helpers.
#[path = "serde.rs"]
pub mod serde_io;
/// Algebraic systems and structure kinds.
pub mod system;

pub use errors::{ErrorInfo, MstError};
pub use registry::{IntervalTable, SystemRegistry, SystemTables};
pub use serde_io::{from_json_slice, from_yaml_str, to_canonical_json_bytes, to_yaml_string};
pub use system::{AlgebraicSystem, StructureKind, MAX_ORDER};
