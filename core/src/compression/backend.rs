//! compression/backend.rs
//! Narrow capability interface over a zstd implementation.
//!
//! The adapter only needs four things from the library: its numeric limits,
//! a worst-case output bound, a one-shot compression context, and one-shot
//! decompression. Keeping them behind `ZstdBackend` lets the buffer splitting
//! and option validation run against a fake in tests.

use zstd_safe::{CCtx, CParameter, DCtx, DParameter};

use crate::compression::constants::{ZSTD_WINDOWLOG_MAX, ZSTD_WINDOWLOG_MIN};
use crate::types::BackendError;

/// Limits reported by the backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BackendLimits {
    pub min_level: i32,
    pub max_level: i32,
    pub min_window_log: u32,
    pub max_window_log: u32,
}

/// Parameters for one compression context.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContextParams {
    pub level: i32,
    /// 0 disables long-distance matching.
    pub window_log: u32,
    pub checksum: bool,
}

/// Short-lived compression state. Dropping it releases the backend resources.
pub trait CompressContext: Send {
    /// Compress all of `src` into `dst`, returning the number of bytes written.
    fn compress(&mut self, dst: &mut [u8], src: &[u8]) -> Result<usize, BackendError>;
}

pub trait ZstdBackend: Send {
    type Context: CompressContext;

    fn limits(&self) -> BackendLimits;

    /// Worst-case compressed size for `src_len` input bytes.
    fn compress_bound(&self, src_len: usize) -> usize;

    fn create_context(&self, params: ContextParams) -> Result<Self::Context, BackendError>;

    /// Decompress a complete frame into `dst`, returning the restored size.
    fn decompress(&self, dst: &mut [u8], src: &[u8]) -> Result<usize, BackendError>;
}

/// libzstd through `zstd-safe`.
#[derive(Copy, Clone, Debug, Default)]
pub struct LibZstd;

pub struct LibZstdContext {
    cctx: CCtx<'static>,
}

fn zstd_error(code: zstd_safe::ErrorCode) -> BackendError {
    BackendError::with_code(code, zstd_safe::get_error_name(code))
}

impl CompressContext for LibZstdContext {
    fn compress(&mut self, dst: &mut [u8], src: &[u8]) -> Result<usize, BackendError> {
        self.cctx.compress2(dst, src).map_err(zstd_error)
    }
}

impl ZstdBackend for LibZstd {
    type Context = LibZstdContext;

    fn limits(&self) -> BackendLimits {
        let levels = zstd::compression_level_range();
        BackendLimits {
            min_level: *levels.start(),
            max_level: *levels.end(),
            min_window_log: ZSTD_WINDOWLOG_MIN,
            max_window_log: ZSTD_WINDOWLOG_MAX,
        }
    }

    fn compress_bound(&self, src_len: usize) -> usize {
        zstd_safe::compress_bound(src_len)
    }

    fn create_context(&self, params: ContextParams) -> Result<Self::Context, BackendError> {
        let mut cctx = CCtx::create();
        cctx.set_parameter(CParameter::CompressionLevel(params.level))
            .map_err(zstd_error)?;
        if params.window_log > 0 {
            cctx.set_parameter(CParameter::EnableLongDistanceMatching(true))
                .map_err(zstd_error)?;
            cctx.set_parameter(CParameter::WindowLog(params.window_log))
                .map_err(zstd_error)?;
        }
        cctx.set_parameter(CParameter::ChecksumFlag(params.checksum))
            .map_err(zstd_error)?;
        Ok(LibZstdContext { cctx })
    }

    fn decompress(&self, dst: &mut [u8], src: &[u8]) -> Result<usize, BackendError> {
        let mut dctx = DCtx::create();
        // Frames written in long mode may use windows past the decoder default.
        dctx.set_parameter(DParameter::WindowLogMax(ZSTD_WINDOWLOG_MAX))
            .map_err(zstd_error)?;
        dctx.decompress(dst, src).map_err(zstd_error)
    }
}
