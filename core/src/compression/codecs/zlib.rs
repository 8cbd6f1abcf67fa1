//! compression/codecs/zlib.rs
//! Zlib (raw deflate, no header) via flate2.

use flate2::{Compress, Compression, Decompress, FlushCompress, FlushDecompress, Status};
use tracing::debug;

use crate::compression::codecs::write_with_overflow;
use crate::compression::options::{CodecOptions, ZlibOptions};
use crate::compression::registry::CodecPool;
use crate::compression::scratch::ScratchBuffer;
use crate::compression::types::{CompressionCodec, CompressionKind};
use crate::region::Region;
use crate::types::{BackendError, CodecError};

const CODEC: &str = "zlib";

#[derive(Default)]
pub struct ZlibCodec {
    options: ZlibOptions,
    scratch: ScratchBuffer,
}

impl ZlibCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ZlibOptions) -> Self {
        Self { options, scratch: ScratchBuffer::new() }
    }

    pub fn with_scratch(mut self, scratch: ScratchBuffer) -> Self {
        self.scratch = scratch;
        self
    }

    pub fn into_scratch(self) -> ScratchBuffer {
        self.scratch
    }
}

impl CompressionCodec for ZlibCodec {
    fn kind(&self) -> CompressionKind {
        CompressionKind::Zlib
    }

    fn default_options(&self) -> CodecOptions {
        CodecOptions::Zlib(self.options.unlocked())
    }

    fn compress(
        &mut self,
        input: &Region<'_>,
        output: &mut Region<'_>,
        overflow: &mut Region<'_>,
        options: &CodecOptions,
    ) -> Result<bool, CodecError> {
        let zlo = options.as_zlib()?;
        let src = input.remaining_slice();
        if src.is_empty() {
            return Ok(false);
        }

        // Anything that does not finish inside input-length bytes is not worth keeping.
        let compressed = self.scratch.get(src.len());
        let mut deflater = Compress::new(Compression::new(zlo.level()), false);
        let status = deflater
            .compress(src, compressed, FlushCompress::Finish)
            .map_err(|e| CodecError::CompressionFailure {
                codec: CODEC,
                source: BackendError::msg(e.to_string()),
            })?;

        let out_bytes = deflater.total_out() as usize;
        if status != Status::StreamEnd || out_bytes >= src.len() {
            debug!(in_bytes = src.len(), out_bytes, "zlib block not compressible");
            return Ok(false);
        }
        write_with_overflow(&compressed[..out_bytes], output, overflow)?;
        Ok(true)
    }

    fn decompress(&mut self, input: &mut Region<'_>, output: &mut Region<'_>) -> Result<(), CodecError> {
        let mut inflater = Decompress::new(false);
        let status = inflater
            .decompress(input.remaining_slice(), output.remaining_slice_mut(), FlushDecompress::Finish)
            .map_err(|e| CodecError::DecompressionFailure {
                codec: CODEC,
                source: BackendError::msg(e.to_string()),
            })?;
        if status != Status::StreamEnd {
            return Err(CodecError::DecompressionFailure {
                codec: CODEC,
                source: BackendError::msg("stream truncated or output too small"),
            });
        }

        let produced = inflater.total_out() as usize;
        input.consume_all();
        output.advance(produced)?;
        output.flip();
        Ok(())
    }

    fn reset(&mut self) {}

    // No backend handle outlives a call.
    fn destroy(&mut self) {}

    fn close(self: Box<Self>, pool: &CodecPool) {
        pool.return_codec(CompressionKind::Zlib, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_text() {
        let mut codec = ZlibCodec::new();
        let opts = codec.default_options();
        let mut data = b"the quick brown fox jumps over the lazy dog. ".repeat(40);
        let len = data.len();

        let mut out = vec![0u8; len];
        let mut ovf = vec![0u8; len];
        let mut output = Region::new(&mut out);
        let mut overflow = Region::new(&mut ovf);
        let compressed = codec
            .compress(&Region::new(&mut data), &mut output, &mut overflow, &opts)
            .unwrap();
        assert!(compressed);
        let written = output.position();

        let mut restored = vec![0u8; len];
        let mut input = Region::new(&mut out[..written]);
        let mut target = Region::new(&mut restored);
        codec.decompress(&mut input, &mut target).unwrap();
        assert_eq!(target.remaining_slice(), &data[..]);
    }

    #[test]
    fn empty_input_is_not_compressed() {
        let mut codec = ZlibCodec::new();
        let opts = codec.default_options();
        let mut out = [0u8; 16];
        let mut ovf = [0u8; 16];
        let mut output = Region::new(&mut out);
        let mut overflow = Region::new(&mut ovf);

        let compressed = codec
            .compress(&Region::new(&mut []), &mut output, &mut overflow, &opts)
            .unwrap();
        assert!(!compressed);
        assert_eq!(output.position(), 0);
    }

    #[test]
    fn foreign_options_are_rejected() {
        let mut codec = ZlibCodec::new();
        let mut data = vec![1u8; 64];
        let mut out = [0u8; 64];
        let mut ovf = [0u8; 64];
        let err = codec
            .compress(
                &Region::new(&mut data),
                &mut Region::new(&mut out),
                &mut Region::new(&mut ovf),
                &CodecOptions::Lz4,
            )
            .unwrap_err();
        assert!(matches!(err, CodecError::InvalidArgument(_)));
    }
}
