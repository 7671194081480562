//! Chunk sizing policy for chunked, compressed columnar storage.
//!
//! The centerpiece is [`chunk_size_for`], which maps the expected size of a
//! dataset to the byte length of each chunk. The remaining modules hold the
//! helpers an engine needs around it: strided range lengths, byte formatting,
//! array conversion, process introspection and engine configuration.

pub mod config;
pub mod convert;
pub mod error;
pub mod sizing;
pub mod system;
pub mod telemetry;
pub mod units;

pub use config::{ConfigLoader, EngineConfig};
pub use convert::{ArrayLike, Scalar, to_array};
pub use error::ChunkwiseError;
pub use sizing::{chunk_len_for, chunk_size_for, decade_zone, range_length};
pub use system::{MemoryStats, detect_number_of_cores, log_memory_stats, memory_stats};
pub use units::human_readable_size;

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};
