//! blockcodec-core
//!
//! Block-level compression adapters for a columnar file writer/reader.
//! Pure Rust over libzstd, flate2 and lz4_flex. No I/O, no threads.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod region;
pub mod types;

pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        create_codec, CodecOptions, CodecPool, CompressionCodec, CompressionKind, DataKind,
        Lz4Codec, ScratchBuffer, SpeedModifier, ZlibCodec, ZlibOptions, ZstdCodec, ZstdOptions,
    };
    pub use crate::config::CodecConfig;
    pub use crate::region::Region;
    pub use crate::types::CodecError;
}
