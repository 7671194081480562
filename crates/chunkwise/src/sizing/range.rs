use crate::error::ChunkwiseError;

/// Number of indices in the half-open range `start..stop` taken every `step`.
///
/// Ranges with `start >= stop` are empty. `step` must be strictly positive;
/// descending or wrapping ranges are not supported.
pub fn range_length(start: i64, stop: i64, step: i64) -> Result<u64, ChunkwiseError> {
    if step <= 0 {
        return Err(ChunkwiseError::invalid_argument(
            "range length",
            format!("step must be positive, got {step}"),
        ));
    }
    if start >= stop {
        return Ok(0);
    }

    // i128 keeps `stop - start` exact across the whole i64 domain
    let span = i128::from(stop) - i128::from(start);
    let len = (span - 1) / i128::from(step) + 1;
    Ok(len as u64)
}
