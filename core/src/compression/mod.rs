//! compression/mod.rs
//! Block compression adapters.
//!
//! - Each codec compresses one block into a caller region, spilling into an
//!   overflow region when the primary one is full.
//! - zstd sits behind the `ZstdBackend` capability trait.
//! - `CodecPool` recycles codec instances per compression kind.

pub mod backend;
pub mod codecs;
pub mod constants;
pub mod options;
pub mod registry;
pub mod scratch;
pub mod types;

pub use backend::*;
pub use codecs::*;
pub use constants::*;
pub use options::*;
pub use registry::*;
pub use scratch::*;
pub use types::*;
