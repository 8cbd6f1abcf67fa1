//! compression/codecs/zstd.rs
//!
//! Zstd block codec.
//!
//! Design notes:
//! - A fresh backend context is created per `compress` call and released before
//!   the call returns, on the error path too.
//! - Output goes to the scratch buffer first (sized by the backend's bound), so
//!   an incompressible block never touches the caller's regions.
//! - Decompression is one-shot into the output's remaining space.

use tracing::{debug, trace};

use crate::compression::backend::{CompressContext, ContextParams, LibZstd, ZstdBackend};
use crate::compression::codecs::write_with_overflow;
use crate::compression::constants::{DEFAULT_WINDOW_LOG, DEFAULT_ZSTD_LEVEL};
use crate::compression::options::{CodecOptions, ZstdOptions};
use crate::compression::registry::CodecPool;
use crate::compression::scratch::ScratchBuffer;
use crate::compression::types::{CompressionCodec, CompressionKind};
use crate::region::Region;
use crate::types::CodecError;

const CODEC: &str = "zstd";

pub struct ZstdCodec<B: ZstdBackend = LibZstd> {
    backend: B,
    options: ZstdOptions,
    context: Option<B::Context>,
    scratch: ScratchBuffer,
}

impl ZstdCodec<LibZstd> {
    /// Level 3, default window.
    pub fn new() -> Self {
        Self::with_backend(LibZstd)
    }

    pub fn with_options(level: i32, window_log: u32, locked: bool) -> Self {
        let mut codec = Self::new();
        codec.options = ZstdOptions::new(level, window_log, locked);
        codec
    }
}

impl Default for ZstdCodec<LibZstd> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ZstdBackend> ZstdCodec<B> {
    pub fn with_backend(backend: B) -> Self {
        let options = ZstdOptions::with_limits(
            DEFAULT_ZSTD_LEVEL,
            DEFAULT_WINDOW_LOG,
            false,
            backend.limits(),
        );
        Self { backend, options, context: None, scratch: ScratchBuffer::new() }
    }

    /// Use `scratch` instead of a fresh buffer, e.g. one owned by the worker.
    pub fn with_scratch(mut self, scratch: ScratchBuffer) -> Self {
        self.scratch = scratch;
        self
    }

    pub fn into_scratch(self) -> ScratchBuffer {
        self.scratch
    }

    pub fn scratch(&self) -> &ScratchBuffer {
        &self.scratch
    }

    /// Options this codec was built with.
    pub fn zstd_options(&self) -> &ZstdOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether a backend compression context is currently held.
    pub fn holds_context(&self) -> bool {
        self.context.is_some()
    }
}

impl<B: ZstdBackend + 'static> CompressionCodec for ZstdCodec<B> {
    fn kind(&self) -> CompressionKind {
        CompressionKind::Zstd
    }

    fn default_options(&self) -> CodecOptions {
        CodecOptions::Zstd(self.options.unlocked())
    }

    fn compress(
        &mut self,
        input: &Region<'_>,
        output: &mut Region<'_>,
        overflow: &mut Region<'_>,
        options: &CodecOptions,
    ) -> Result<bool, CodecError> {
        let zso = options.as_zstd()?;
        let params = ContextParams {
            level: zso.level(),
            window_log: zso.window_log(),
            checksum: false,
        };
        let ctx = self
            .backend
            .create_context(params)
            .map_err(|source| CodecError::CompressionFailure { codec: CODEC, source })?;
        let ctx = self.context.insert(ctx);

        let src = input.remaining_slice();
        let bound = self.backend.compress_bound(src.len());
        let compressed = self.scratch.get(bound);
        let result = ctx.compress(compressed, src);
        self.context = None;

        let out_bytes =
            result.map_err(|source| CodecError::CompressionFailure { codec: CODEC, source })?;
        trace!(in_bytes = src.len(), out_bytes, bound, "zstd block compressed");

        if out_bytes >= src.len() {
            debug!(in_bytes = src.len(), out_bytes, "zstd block not compressible");
            return Ok(false);
        }
        write_with_overflow(&compressed[..out_bytes], output, overflow)?;
        Ok(true)
    }

    fn decompress(&mut self, input: &mut Region<'_>, output: &mut Region<'_>) -> Result<(), CodecError> {
        let produced = self
            .backend
            .decompress(output.remaining_slice_mut(), input.remaining_slice())
            .map_err(|source| CodecError::DecompressionFailure { codec: CODEC, source })?;
        input.consume_all();
        output.advance(produced)?;
        output.flip();
        Ok(())
    }

    // Nothing survives a call; contexts are per-call.
    fn reset(&mut self) {}

    fn destroy(&mut self) {
        if let Some(ctx) = self.context.take() {
            drop(ctx);
        }
    }

    fn close(self: Box<Self>, pool: &CodecPool) {
        pool.return_codec(CompressionKind::Zstd, self);
    }
}
