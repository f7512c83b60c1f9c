use mst_core::{to_canonical_json_bytes, MstError};
use sha2::{Digest, Sha256};

use crate::record::StructureRecord;
use crate::structure::Structure;

/// Stable SHA-256 digest of an ordered list of structures.
///
/// Only the records (system and structural code) are hashed, so attached
/// modalities and cache state never influence the result.
pub fn structure_hash(structures: &[Structure]) -> Result<String, MstError> {
    let records: Vec<StructureRecord> = structures.iter().map(Structure::to_record).collect();
    let bytes = to_canonical_json_bytes(&records)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}
