//! compression/options.rs
//! Per-codec compression options with validated setters.
use std::hash::{Hash, Hasher};

use crate::compression::backend::{BackendLimits, LibZstd, ZstdBackend};
use crate::compression::constants::{
    speed_levels, DEFAULT_WINDOW_LOG, DEFAULT_ZLIB_LEVEL, DEFAULT_ZSTD_LEVEL, ZLIB_MAX_LEVEL,
    ZLIB_MIN_LEVEL,
};
use crate::compression::types::{CompressionKind, DataKind, SpeedModifier};
use crate::types::CodecError;

/// Zstd options.
///
/// Equality and hashing cover `(level, window_log, locked)`; the backend
/// limits used for validation are not part of the value.
#[derive(Clone, Debug)]
pub struct ZstdOptions {
    level: i32,
    window_log: u32,
    locked: bool,
    limits: BackendLimits,
}

impl ZstdOptions {
    /// Options validated against libzstd's limits.
    pub fn new(level: i32, window_log: u32, locked: bool) -> Self {
        Self::with_limits(level, window_log, locked, LibZstd.limits())
    }

    /// Construction itself does not validate; only the setters do.
    pub fn with_limits(level: i32, window_log: u32, locked: bool, limits: BackendLimits) -> Self {
        Self { level, window_log, locked, limits }
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn window_log(&self) -> u32 {
        self.window_log
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn limits(&self) -> BackendLimits {
        self.limits
    }

    /// Independent copy with identical field values, `locked` included.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Copy with `locked` cleared.
    pub fn unlocked(&self) -> Self {
        Self { locked: false, ..self.clone() }
    }

    /// Set the compression level directly.
    ///
    /// # Errors
    /// `InvalidArgument` when outside the backend's `[min_level, max_level]`.
    pub fn set_level(&mut self, level: i32) -> Result<&mut Self, CodecError> {
        if level < self.limits.min_level || level > self.limits.max_level {
            return Err(CodecError::InvalidArgument(format!(
                "zstd compression level should be in the range {} to {}",
                self.limits.min_level, self.limits.max_level
            )));
        }
        self.level = level;
        Ok(self)
    }

    /// Set the long-mode window as a power of two. 0 restores the backend default.
    ///
    /// # Errors
    /// `InvalidArgument` unless 0 or inside `[min_window_log, max_window_log]`.
    pub fn set_window_log(&mut self, window_log: u32) -> Result<&mut Self, CodecError> {
        let in_range = window_log >= self.limits.min_window_log
            && window_log <= self.limits.max_window_log;
        if window_log != 0 && !in_range {
            return Err(CodecError::InvalidArgument(format!(
                "zstd window log should be in the range {} to {}, or 0 for the default",
                self.limits.min_window_log, self.limits.max_window_log
            )));
        }
        self.window_log = window_log;
        Ok(self)
    }

    /// Map a speed preset onto a level: Fastest 1, Fast 2, Default 3.
    ///
    /// # Errors
    /// `IllegalState` when these options are locked.
    pub fn set_speed(&mut self, speed: SpeedModifier) -> Result<&mut Self, CodecError> {
        if self.locked {
            return Err(CodecError::IllegalState("attempt to modify the default options".into()));
        }
        let level = match speed {
            SpeedModifier::Fastest => speed_levels::ZSTD_FASTEST,
            SpeedModifier::Fast => speed_levels::ZSTD_FAST,
            SpeedModifier::Default => speed_levels::ZSTD_DEFAULT,
        };
        self.set_level(level)
    }

    /// Data hints have no effect on zstd.
    pub fn set_data(&mut self, _data: DataKind) -> &mut Self {
        self
    }
}

impl Default for ZstdOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ZSTD_LEVEL, DEFAULT_WINDOW_LOG, false)
    }
}

impl PartialEq for ZstdOptions {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
            && self.window_log == other.window_log
            && self.locked == other.locked
    }
}

impl Eq for ZstdOptions {}

impl Hash for ZstdOptions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level.hash(state);
        self.window_log.hash(state);
        self.locked.hash(state);
    }
}

/// Zlib (raw deflate) options.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZlibOptions {
    level: u32,
    locked: bool,
}

impl ZlibOptions {
    pub fn new(level: u32, locked: bool) -> Self {
        Self { level, locked }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn unlocked(&self) -> Self {
        Self { locked: false, ..self.clone() }
    }

    pub fn set_level(&mut self, level: u32) -> Result<&mut Self, CodecError> {
        if !(ZLIB_MIN_LEVEL..=ZLIB_MAX_LEVEL).contains(&level) {
            return Err(CodecError::InvalidArgument(format!(
                "zlib compression level should be in the range {} to {}",
                ZLIB_MIN_LEVEL, ZLIB_MAX_LEVEL
            )));
        }
        self.level = level;
        Ok(self)
    }

    pub fn set_speed(&mut self, speed: SpeedModifier) -> Result<&mut Self, CodecError> {
        if self.locked {
            return Err(CodecError::IllegalState("attempt to modify the default options".into()));
        }
        let level = match speed {
            SpeedModifier::Fastest => speed_levels::ZLIB_FASTEST,
            SpeedModifier::Fast => speed_levels::ZLIB_FAST,
            SpeedModifier::Default => speed_levels::ZLIB_DEFAULT,
        };
        self.set_level(level)
    }

    // flate2 exposes no strategy knob, so the hint is dropped.
    pub fn set_data(&mut self, _data: DataKind) -> &mut Self {
        self
    }
}

impl Default for ZlibOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ZLIB_LEVEL, false)
    }
}

/// Options for any codec kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CodecOptions {
    Zstd(ZstdOptions),
    Zlib(ZlibOptions),
    /// LZ4 block compression has nothing to tune.
    Lz4,
}

impl CodecOptions {
    pub fn kind(&self) -> CompressionKind {
        match self {
            CodecOptions::Zstd(_) => CompressionKind::Zstd,
            CodecOptions::Zlib(_) => CompressionKind::Zlib,
            CodecOptions::Lz4 => CompressionKind::Lz4,
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn set_speed(&mut self, speed: SpeedModifier) -> Result<&mut Self, CodecError> {
        match self {
            CodecOptions::Zstd(o) => {
                o.set_speed(speed)?;
            }
            CodecOptions::Zlib(o) => {
                o.set_speed(speed)?;
            }
            CodecOptions::Lz4 => {}
        }
        Ok(self)
    }

    pub fn set_data(&mut self, data: DataKind) -> &mut Self {
        match self {
            CodecOptions::Zstd(o) => {
                o.set_data(data);
            }
            CodecOptions::Zlib(o) => {
                o.set_data(data);
            }
            CodecOptions::Lz4 => {}
        }
        self
    }

    pub fn as_zstd(&self) -> Result<&ZstdOptions, CodecError> {
        match self {
            CodecOptions::Zstd(o) => Ok(o),
            other => Err(mismatch(CompressionKind::Zstd, other.kind())),
        }
    }

    pub fn as_zlib(&self) -> Result<&ZlibOptions, CodecError> {
        match self {
            CodecOptions::Zlib(o) => Ok(o),
            other => Err(mismatch(CompressionKind::Zlib, other.kind())),
        }
    }
}

pub(crate) fn mismatch(expected: CompressionKind, got: CompressionKind) -> CodecError {
    CodecError::InvalidArgument(format!("{} options passed to the {} codec", got, expected))
}

impl From<ZstdOptions> for CodecOptions {
    fn from(o: ZstdOptions) -> Self {
        CodecOptions::Zstd(o)
    }
}

impl From<ZlibOptions> for CodecOptions {
    fn from(o: ZlibOptions) -> Self {
        CodecOptions::Zlib(o)
    }
}
