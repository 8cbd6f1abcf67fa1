//! compression/constants.rs
//! Stable kind ids, level defaults and backend limits.

/// Default zstd compression level (libzstd's own default).
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Window log of 0 means "let the backend pick" (long mode off).
pub const DEFAULT_WINDOW_LOG: u32 = 0;

/// Default zlib level, matching zlib's `Z_DEFAULT_COMPRESSION` mapping.
pub const DEFAULT_ZLIB_LEVEL: u32 = 6;

/// Zlib accepts levels 0 (stored) through 9 (best).
pub const ZLIB_MIN_LEVEL: u32 = 0;
pub const ZLIB_MAX_LEVEL: u32 = 9;

/// Zstd window log limits (ZSTD_WINDOWLOG_MIN / ZSTD_WINDOWLOG_MAX).
pub const ZSTD_WINDOWLOG_MIN: u32 = 10;
#[cfg(target_pointer_width = "32")]
pub const ZSTD_WINDOWLOG_MAX: u32 = 30;
#[cfg(not(target_pointer_width = "32"))]
pub const ZSTD_WINDOWLOG_MAX: u32 = 31;

/// Codecs kept per compression kind before returned ones get destroyed.
pub const DEFAULT_POOL_MAX_PER_KIND: usize = 32;

/// Speed preset levels.
pub mod speed_levels {
    pub const ZSTD_FASTEST: i32 = 1;
    pub const ZSTD_FAST: i32 = 2;
    pub const ZSTD_DEFAULT: i32 = 3;

    pub const ZLIB_FASTEST: u32 = 1;
    pub const ZLIB_FAST: u32 = 1;
    pub const ZLIB_DEFAULT: u32 = 6;
}

/// Stable compression kind ids (mirrored in file metadata).
pub mod kind_ids {
    pub const NONE: u8 = 0;
    pub const ZLIB: u8 = 1;
    pub const LZ4: u8 = 4;
    pub const ZSTD: u8 = 5;
}
