use std::fs;
use std::path::Path;

use mst_core::{from_json_slice, from_yaml_str, ErrorInfo, MstError};
use serde::{Deserialize, Serialize};

/// Options controlling an enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationOptions {
    /// Maximum number of structures returned. Zero returns nothing.
    #[serde(default = "EnumerationOptions::default_limit")]
    pub limit: usize,
    /// Scan candidate chunks on a rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Candidates per parallel chunk.
    #[serde(default = "EnumerationOptions::default_chunk_size")]
    pub chunk_size: u64,
    /// Worker threads for the parallel pool; zero uses the rayon default.
    #[serde(default)]
    pub threads: usize,
    /// Upper bound on the number of candidates examined.
    #[serde(default)]
    pub max_candidates: Option<u64>,
}

impl EnumerationOptions {
    fn default_limit() -> usize {
        1000
    }

    fn default_chunk_size() -> u64 {
        4096
    }

    /// Default options with the given limit.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Switches to the parallel scan.
    pub fn parallel(mut self, threads: usize) -> Self {
        self.parallel = true;
        self.threads = threads;
        self
    }

    /// Parses options from JSON.
    pub fn from_json_str(data: &str) -> Result<Self, MstError> {
        from_json_slice(data.as_bytes())
    }

    /// Parses options from YAML.
    pub fn from_yaml_str(data: &str) -> Result<Self, MstError> {
        from_yaml_str(data)
    }

    /// Loads options from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self, MstError> {
        let data = fs::read_to_string(path).map_err(|err| {
            MstError::Serde(
                ErrorInfo::new("options-read", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&data),
            _ => Self::from_yaml_str(&data),
        }
    }
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        Self {
            limit: Self::default_limit(),
            parallel: false,
            chunk_size: Self::default_chunk_size(),
            threads: 0,
            max_candidates: None,
        }
    }
}
