use crate::error::ChunkwiseError;
use tracing::debug;

/// Base unit every chunk size is a power-of-two multiple of.
pub const BASE_CHUNK_BYTES: usize = 1024;
/// Smallest expected size the advisor distinguishes (.1 KB).
pub const MIN_EXPECTED_SIZE_MB: f64 = 1e-4;
/// Largest expected size the advisor distinguishes (10 GB).
pub const MAX_EXPECTED_SIZE_MB: f64 = 1e4;

const BYTES_PER_MB: f64 = (1u64 << 20) as f64;
const ZONE_SHIFT: i32 = 6;
const MIN_ZONE: i32 = -4;

// Lower bound of each decade inside the clamp envelope, ascending.
const DECADES: [f64; 9] = [1e-4, 1e-3, 1e-2, 1e-1, 1e0, 1e1, 1e2, 1e3, 1e4];

fn clamp_expected_size(expected_size_mb: f64) -> Result<f64, ChunkwiseError> {
    if !expected_size_mb.is_finite() {
        return Err(ChunkwiseError::invalid_argument(
            "chunk sizing",
            format!("expected size must be a finite number of MB, got {expected_size_mb}"),
        ));
    }

    let clamped = expected_size_mb.clamp(MIN_EXPECTED_SIZE_MB, MAX_EXPECTED_SIZE_MB);
    if clamped != expected_size_mb {
        debug!("Clamped expected size {expected_size_mb} MB to {clamped} MB");
    }
    Ok(clamped)
}

/// Decade exponent of the clamped expected size, i.e. `floor(log10(size))`.
///
/// Always within `-4..=4`. Exact powers of ten land in their own decade.
pub fn decade_zone(expected_size_mb: f64) -> Result<i32, ChunkwiseError> {
    let size = clamp_expected_size(expected_size_mb)?;
    let reached = DECADES.iter().take_while(|&&lower| lower <= size).count();
    Ok(MIN_ZONE + reached as i32 - 1)
}

/// Compute the chunk size in bytes for a dataset of `expected_size_mb`.
///
/// Compression works best with chunks around 1 MB, but every chunk is
/// reserved in full in memory, so small datasets get proportionally
/// smaller chunks. The result is `1024 * 2^(zone + 6)`:
///
/// - 4 KB for datasets <= .1 KB
/// - 64 KB for datasets of 1 MB
/// - 1 MB for datasets >= 10 GB
///
/// Zero and negative sizes clamp to the lower bound. NaN and infinities are
/// rejected.
pub fn chunk_size_for(expected_size_mb: f64) -> Result<usize, ChunkwiseError> {
    let zone = decade_zone(expected_size_mb)?;
    let shift = (zone + ZONE_SHIFT) as u32;
    Ok(BASE_CHUNK_BYTES << shift)
}

/// Number of items per chunk for `expected_len` items of `item_size` bytes.
pub fn chunk_len_for(expected_len: u64, item_size: usize) -> Result<usize, ChunkwiseError> {
    if item_size == 0 {
        return Err(ChunkwiseError::invalid_argument(
            "chunk length",
            "item size must be at least one byte",
        ));
    }

    let expected_size_mb = expected_len as f64 * item_size as f64 / BYTES_PER_MB;
    let chunk_bytes = chunk_size_for(expected_size_mb)?;
    Ok((chunk_bytes / item_size).max(1))
}
