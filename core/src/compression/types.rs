//! compression/types.rs
//! Compression kinds, option hints, and the codec trait shared by all adapters.
use std::fmt;

use num_enum::TryFromPrimitive;

use crate::compression::constants::kind_ids;
use crate::compression::options::CodecOptions;
use crate::compression::registry::CodecPool;
use crate::region::Region;
use crate::types::CodecError;

/// Stable compression kind identifiers.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionKind {
    None = kind_ids::NONE,
    Zlib = kind_ids::ZLIB,
    Lz4  = kind_ids::LZ4,
    Zstd = kind_ids::ZSTD,
}

impl CompressionKind {
    /// Kinds that have a codec behind them.
    pub const CODEC_KINDS: [CompressionKind; 3] =
        [CompressionKind::Zlib, CompressionKind::Lz4, CompressionKind::Zstd];

    pub fn from_raw(raw: u8) -> Result<Self, CodecError> {
        CompressionKind::try_from_primitive(raw)
            .map_err(|_| CodecError::UnsupportedKind(format!("0x{:02x}", raw)))
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressionKind::None => "none",
            CompressionKind::Zlib => "zlib",
            CompressionKind::Lz4  => "lz4",
            CompressionKind::Zstd => "zstd",
        }
    }
}

impl fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse compression aggressiveness preset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpeedModifier {
    Fastest,
    Fast,
    Default,
}

/// Hint about the data being compressed. Codecs may ignore it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataKind {
    Text,
    Binary,
}

/// A block compression adapter.
///
/// Contract shared by every codec:
/// - `compress` reads `input`'s remaining bytes without moving its cursor.
///   `Ok(false)` means the result was not smaller than the input; `output` and
///   `overflow` are then untouched and the caller stores the input verbatim.
///   `Ok(true)` means the compressed bytes went to `output` from its position,
///   spilling into `overflow` (from its start) once `output` is full.
/// - `decompress` consumes all of `input` and leaves `output` flipped so the
///   restored bytes are readable from its start.
/// - One call at a time per instance; `&mut self` enforces it.
pub trait CompressionCodec: Send {
    fn kind(&self) -> CompressionKind;

    /// Unlocked copy of the options this codec was built with.
    fn default_options(&self) -> CodecOptions;

    fn compress(
        &mut self,
        input: &Region<'_>,
        output: &mut Region<'_>,
        overflow: &mut Region<'_>,
        options: &CodecOptions,
    ) -> Result<bool, CodecError>;

    fn decompress(&mut self, input: &mut Region<'_>, output: &mut Region<'_>) -> Result<(), CodecError>;

    /// Clear per-call state before the instance is reused.
    fn reset(&mut self);

    /// Release backend resources. Safe to call repeatedly.
    fn destroy(&mut self);

    /// Hand this instance back to `pool`.
    fn close(self: Box<Self>, pool: &CodecPool);
}
