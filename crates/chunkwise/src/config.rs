//! Engine configuration and its file loader.

use crate::error::ChunkwiseError;
use crate::sizing::{BASE_CHUNK_BYTES, chunk_size_for};
use crate::system::detect_number_of_cores;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings a storage engine is initialized with.
///
/// The compressor thread count lives here rather than in process-wide state,
/// so two engines in one process can run with different settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "detect_number_of_cores")]
    pub nthreads: usize,
    /// Fixed chunk size overriding the advisor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_bytes: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            nthreads: detect_number_of_cores(),
            chunk_bytes: None,
        }
    }
}

impl EngineConfig {
    pub fn with_nthreads(mut self, nthreads: usize) -> Result<Self, ChunkwiseError> {
        self.set_nthreads(nthreads)?;
        Ok(self)
    }

    /// Change the thread count, returning the previous setting.
    pub fn set_nthreads(&mut self, nthreads: usize) -> Result<usize, ChunkwiseError> {
        validate_nthreads(nthreads)?;
        Ok(std::mem::replace(&mut self.nthreads, nthreads))
    }

    pub fn with_chunk_bytes(mut self, chunk_bytes: usize) -> Result<Self, ChunkwiseError> {
        validate_chunk_bytes(chunk_bytes)?;
        self.chunk_bytes = Some(chunk_bytes);
        Ok(self)
    }

    /// Chunk size for a dataset of `expected_size_mb`, honoring the override.
    pub fn chunk_bytes_for(&self, expected_size_mb: f64) -> Result<usize, ChunkwiseError> {
        match self.chunk_bytes {
            Some(bytes) => Ok(bytes),
            None => chunk_size_for(expected_size_mb),
        }
    }

    pub fn validate(&self) -> Result<(), ChunkwiseError> {
        validate_nthreads(self.nthreads)?;
        if let Some(bytes) = self.chunk_bytes {
            validate_chunk_bytes(bytes)?;
        }
        Ok(())
    }
}

fn validate_nthreads(nthreads: usize) -> Result<(), ChunkwiseError> {
    if nthreads == 0 {
        return Err(ChunkwiseError::invalid_argument(
            "engine config",
            "nthreads must be at least 1",
        ));
    }
    Ok(())
}

fn validate_chunk_bytes(chunk_bytes: usize) -> Result<(), ChunkwiseError> {
    if chunk_bytes == 0 || chunk_bytes % BASE_CHUNK_BYTES != 0 {
        return Err(ChunkwiseError::invalid_argument(
            "engine config",
            format!("chunk_bytes must be a positive multiple of {BASE_CHUNK_BYTES}, got {chunk_bytes}"),
        ));
    }
    Ok(())
}

/// Loads [`EngineConfig`] from JSON or YAML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config. The format follows the file extension
    /// (`.json`, `.yaml`, `.yml`); anything else tries JSON, then YAML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ChunkwiseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ChunkwiseError::from_io_error(e, "config loading"))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let config: EngineConfig = match extension.to_lowercase().as_str() {
            "json" => serde_json::from_str(&content)
                .map_err(|e| ChunkwiseError::from_parse_error(e, "JSON config parsing"))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| ChunkwiseError::from_parse_error(e, "YAML config parsing"))?,
            _ => serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| {
                    ChunkwiseError::from_parse_error(e, "config parsing (tried both JSON and YAML)")
                })?,
        };

        config.validate()?;
        Ok(config)
    }
}
