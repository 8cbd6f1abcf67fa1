//! codecs/lz4.rs
//! LZ4 block codec (raw block format, no size prefix).
use lz4_flex::block::{compress_into, decompress_into, get_maximum_output_size};

use crate::compression::codecs::write_with_overflow;
use crate::compression::options::{mismatch, CodecOptions};
use crate::compression::registry::CodecPool;
use crate::compression::scratch::ScratchBuffer;
use crate::compression::types::{CompressionCodec, CompressionKind};
use crate::region::Region;
use crate::types::{BackendError, CodecError};

const CODEC: &str = "lz4";

/// LZ4 has no level in block mode, so the codec carries no options.
#[derive(Default)]
pub struct Lz4Codec {
    scratch: ScratchBuffer,
}

impl Lz4Codec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scratch(mut self, scratch: ScratchBuffer) -> Self {
        self.scratch = scratch;
        self
    }

    pub fn into_scratch(self) -> ScratchBuffer {
        self.scratch
    }
}

impl CompressionCodec for Lz4Codec {
    fn kind(&self) -> CompressionKind {
        CompressionKind::Lz4
    }

    fn default_options(&self) -> CodecOptions {
        CodecOptions::Lz4
    }

    fn compress(
        &mut self,
        input: &Region<'_>,
        output: &mut Region<'_>,
        overflow: &mut Region<'_>,
        options: &CodecOptions,
    ) -> Result<bool, CodecError> {
        if *options != CodecOptions::Lz4 {
            return Err(mismatch(CompressionKind::Lz4, options.kind()));
        }
        let src = input.remaining_slice();
        let compressed = self.scratch.get(get_maximum_output_size(src.len()));
        let out_bytes = compress_into(src, compressed).map_err(|e| CodecError::CompressionFailure {
            codec: CODEC,
            source: BackendError::msg(e.to_string()),
        })?;

        if out_bytes >= src.len() {
            return Ok(false);
        }
        write_with_overflow(&compressed[..out_bytes], output, overflow)?;
        Ok(true)
    }

    fn decompress(&mut self, input: &mut Region<'_>, output: &mut Region<'_>) -> Result<(), CodecError> {
        let produced = decompress_into(input.remaining_slice(), output.remaining_slice_mut())
            .map_err(|e| CodecError::DecompressionFailure {
                codec: CODEC,
                source: BackendError::msg(e.to_string()),
            })?;
        input.consume_all();
        output.advance(produced)?;
        output.flip();
        Ok(())
    }

    fn reset(&mut self) {}

    fn destroy(&mut self) {}

    fn close(self: Box<Self>, pool: &CodecPool) {
        pool.return_codec(CompressionKind::Lz4, self);
    }
}
