//! compression/registry.rs
//! Codec factory and the per-kind codec pool.
//!
//! The pool is an explicit object rather than process-wide state: writers and
//! readers share one `CodecPool` (typically behind an `Arc`) and check codecs
//! out and back in through it.

use std::collections::HashMap;

use crossbeam::queue::ArrayQueue;
use tracing::{debug, warn};

use crate::compression::codecs::{Lz4Codec, ZlibCodec, ZstdCodec};
use crate::compression::constants::DEFAULT_POOL_MAX_PER_KIND;
use crate::compression::types::{CompressionCodec, CompressionKind};
use crate::config::CodecConfig;
use crate::types::CodecError;

/// Fresh codec with default options. `None` has no codec.
pub fn create_codec(kind: CompressionKind) -> Option<Box<dyn CompressionCodec>> {
    match kind {
        CompressionKind::None => None,
        CompressionKind::Zlib => Some(Box::new(ZlibCodec::new())),
        CompressionKind::Lz4 => Some(Box::new(Lz4Codec::new())),
        CompressionKind::Zstd => Some(Box::new(ZstdCodec::new())),
    }
}

/// Same as [`create_codec`], from a raw kind id.
pub fn create_codec_by_id(raw: u8) -> Result<Option<Box<dyn CompressionCodec>>, CodecError> {
    Ok(create_codec(CompressionKind::from_raw(raw)?))
}

pub struct CodecPool {
    queues: HashMap<CompressionKind, ArrayQueue<Box<dyn CompressionCodec>>>,
    max_per_kind: usize,
}

impl CodecPool {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_MAX_PER_KIND)
    }

    /// A capacity of 0 disables pooling: every returned codec is destroyed.
    pub fn with_capacity(max_per_kind: usize) -> Self {
        let queues = if max_per_kind == 0 {
            HashMap::new()
        } else {
            CompressionKind::CODEC_KINDS
                .iter()
                .map(|&kind| (kind, ArrayQueue::new(max_per_kind)))
                .collect()
        };
        Self { queues, max_per_kind }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::with_capacity(config.pool.max_per_kind)
    }

    pub fn max_per_kind(&self) -> usize {
        self.max_per_kind
    }

    /// Check out a codec, reusing a pooled one when available.
    pub fn get_codec(&self, kind: CompressionKind) -> Option<Box<dyn CompressionCodec>> {
        if kind == CompressionKind::None {
            return None;
        }
        match self.queues.get(&kind).and_then(ArrayQueue::pop) {
            Some(codec) => {
                debug!(%kind, "reusing pooled codec");
                Some(codec)
            }
            None => {
                debug!(%kind, "creating codec");
                create_codec(kind)
            }
        }
    }

    /// Check a codec back in. It is reset first; if the kind's slot is full it
    /// is destroyed instead of kept.
    pub fn return_codec(&self, kind: CompressionKind, mut codec: Box<dyn CompressionCodec>) {
        debug_assert_eq!(kind, codec.kind(), "codec returned under the wrong kind");
        codec.reset();

        let rejected = match self.queues.get(&kind) {
            Some(queue) => queue.push(codec).err(),
            None => Some(codec),
        };
        if let Some(mut codec) = rejected {
            warn!(%kind, max = self.max_per_kind, "codec pool full, destroying returned codec");
            codec.destroy();
        }
    }

    /// Pooled codecs currently available for `kind`.
    pub fn pool_size(&self, kind: CompressionKind) -> usize {
        self.queues.get(&kind).map_or(0, ArrayQueue::len)
    }

    /// Destroy and drop every pooled codec.
    pub fn clear(&self) {
        for queue in self.queues.values() {
            while let Some(mut codec) = queue.pop() {
                codec.destroy();
            }
        }
    }
}

impl Default for CodecPool {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CodecPool {
    fn drop(&mut self) {
        self.clear();
    }
}
