pub mod chunk_size;
pub mod range;

pub use chunk_size::{
    BASE_CHUNK_BYTES, MAX_EXPECTED_SIZE_MB, MIN_EXPECTED_SIZE_MB, chunk_len_for, chunk_size_for,
    decade_zone,
};
pub use range::range_length;
