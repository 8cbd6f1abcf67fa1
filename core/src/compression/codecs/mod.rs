//! compression/codecs/mod.rs
//! Codec adapters and the output/overflow split they share.

pub mod lz4;
pub mod zlib;
pub mod zstd;

pub use self::lz4::*;
pub use self::zlib::*;
pub use self::zstd::*;

use tracing::debug;

use crate::region::Region;
use crate::types::CodecError;

/// Copy `compressed` into `output` from its position. Once `output` is full the
/// rest goes into `overflow` from its start, and `overflow`'s position is set
/// to the spilled byte count.
///
/// Overflow capacity is checked before anything is copied.
pub(crate) fn write_with_overflow(
    compressed: &[u8],
    output: &mut Region<'_>,
    overflow: &mut Region<'_>,
) -> Result<(), CodecError> {
    let remaining = output.remaining();
    if remaining >= compressed.len() {
        return output.put_slice(compressed);
    }

    let (head, tail) = compressed.split_at(remaining);
    if tail.len() > overflow.limit() {
        return Err(CodecError::InvalidArgument(format!(
            "overflow region holds {} bytes, {} needed",
            overflow.limit(),
            tail.len()
        )));
    }
    output.put_slice(head)?;
    overflow.put_from_start(tail)?;
    debug!(primary = head.len(), spilled = tail.len(), "compressed block spilled into overflow");
    Ok(())
}
