//! region.rs
//! Bounded, position-tracked view over caller-owned bytes.
//!
//! Summary: mirrors classic byte-buffer cursor semantics.
//! - Invariant: `position <= limit <= capacity`.
//! - `remaining = limit - position`; writers advance `position`.
//! - A region never grows or reallocates; the caller owns the storage and picks
//!   the offset by slicing before wrapping it.

use crate::types::CodecError;

#[derive(Debug)]
pub struct Region<'a> {
    data: &'a mut [u8],
    position: usize,
    limit: usize,
}

impl<'a> Region<'a> {
    /// Wrap the whole slice: position 0, limit = capacity.
    pub fn new(data: &'a mut [u8]) -> Self {
        let limit = data.len();
        Self { data, position: 0, limit }
    }

    /// Wrap a slice with an explicit cursor.
    ///
    /// # Errors
    /// `InvalidArgument` unless `position <= limit <= data.len()`.
    pub fn with_bounds(data: &'a mut [u8], position: usize, limit: usize) -> Result<Self, CodecError> {
        if limit > data.len() || position > limit {
            return Err(CodecError::InvalidArgument(format!(
                "region bounds out of range: position {} limit {} capacity {}",
                position, limit, data.len()
            )));
        }
        Ok(Self { data, position, limit })
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    pub fn set_position(&mut self, position: usize) -> Result<(), CodecError> {
        if position > self.limit {
            return Err(CodecError::InvalidArgument(format!(
                "position {} beyond limit {}", position, self.limit
            )));
        }
        self.position = position;
        Ok(())
    }

    /// Lowering the limit below the position clamps the position.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), CodecError> {
        if limit > self.data.len() {
            return Err(CodecError::InvalidArgument(format!(
                "limit {} beyond capacity {}", limit, self.data.len()
            )));
        }
        self.limit = limit;
        self.position = self.position.min(limit);
        Ok(())
    }

    /// Limit becomes the current position, position goes back to 0.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Position 0, limit = capacity. Contents are left as they are.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.data.len();
    }

    /// Bytes in `[position, limit)`.
    pub fn remaining_slice(&self) -> &[u8] {
        &self.data[self.position..self.limit]
    }

    pub fn remaining_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.position..self.limit]
    }

    /// Copy `src` at the position and advance past it.
    pub fn put_slice(&mut self, src: &[u8]) -> Result<(), CodecError> {
        if src.len() > self.remaining() {
            return Err(CodecError::InvalidArgument(format!(
                "write of {} bytes exceeds remaining {}", src.len(), self.remaining()
            )));
        }
        let end = self.position + src.len();
        self.data[self.position..end].copy_from_slice(src);
        self.position = end;
        Ok(())
    }

    /// Copy `src` at the region's start and set the position to its length.
    pub fn put_from_start(&mut self, src: &[u8]) -> Result<(), CodecError> {
        if src.len() > self.limit {
            return Err(CodecError::InvalidArgument(format!(
                "write of {} bytes exceeds limit {}", src.len(), self.limit
            )));
        }
        self.data[..src.len()].copy_from_slice(src);
        self.position = src.len();
        Ok(())
    }

    /// Advance by `n` already-written bytes.
    pub(crate) fn advance(&mut self, n: usize) -> Result<(), CodecError> {
        self.set_position(self.position + n)
    }

    /// Mark everything up to the limit as consumed.
    pub(crate) fn consume_all(&mut self) {
        self.position = self.limit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_advances_and_rejects_overrun() {
        let mut storage = [0u8; 8];
        let mut region = Region::with_bounds(&mut storage, 2, 6).unwrap();
        assert_eq!(region.remaining(), 4);

        region.put_slice(b"ab").unwrap();
        assert_eq!(region.position(), 4);
        assert!(region.put_slice(b"xyz").is_err());
        assert_eq!(region.position(), 4);

        region.put_slice(b"cd").unwrap();
        assert!(!region.has_remaining());
        assert_eq!(&storage[2..6], b"abcd");
    }

    #[test]
    fn flip_exposes_written_bytes() {
        let mut storage = [0u8; 16];
        let mut region = Region::new(&mut storage);
        region.put_slice(b"hello").unwrap();
        region.flip();

        assert_eq!(region.position(), 0);
        assert_eq!(region.limit(), 5);
        assert_eq!(region.remaining_slice(), b"hello");
    }

    #[test]
    fn bounds_are_validated() {
        let mut storage = [0u8; 4];
        assert!(Region::with_bounds(&mut storage, 3, 2).is_err());
        assert!(Region::with_bounds(&mut storage, 0, 5).is_err());

        let mut region = Region::new(&mut storage);
        assert!(region.set_position(5).is_err());
        region.set_position(3).unwrap();
        region.set_limit(2).unwrap();
        assert_eq!(region.position(), 2);
    }
}
