//! compression/scratch.rs
//! Reusable scratch buffer for compressed output.
//!
//! One buffer per execution context. It is kept across calls and replaced only
//! when the requested size falls outside `[capacity / 2, capacity]`, so a
//! worker that compresses similar-sized blocks never reallocates, and one huge
//! block does not pin memory for every small block after it.

use tracing::trace;

#[derive(Debug, Default)]
pub struct ScratchBuffer {
    buf: Option<Box<[u8]>>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        Self { buf: None }
    }

    /// Return a buffer of at least `size` bytes.
    ///
    /// The contents are whatever the previous caller left behind.
    pub fn get(&mut self, size: usize) -> &mut [u8] {
        let reusable = self
            .buf
            .as_ref()
            .is_some_and(|b| b.len() >= size && b.len() <= size.saturating_mul(2));

        if !reusable {
            trace!(requested = size, previous = self.capacity(), "reallocating scratch buffer");
            self.buf = None;
        }
        self.buf.get_or_insert_with(|| vec![0u8; size].into_boxed_slice())
    }

    /// Size of the cached buffer, 0 when none is held.
    pub fn capacity(&self) -> usize {
        self.buf.as_ref().map_or(0, |b| b.len())
    }
}
