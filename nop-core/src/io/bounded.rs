//! A reader view that enforces a byte budget.

use crate::error::{NopError, Status};
use crate::io::Reader;
use crate::types::{Handle, HandleReference};

/// Wraps a reader and refuses to consume past a fixed capacity.
///
/// Every consuming operation checks the remaining budget before touching
/// the inner reader: the first operation whose cumulative total would
/// exceed the capacity fails with `NoBuffer` and leaves the inner reader
/// exactly where the last successful operation left it. This is what makes
/// framed sub-streams safe to parse: a truncated or oversized payload is
/// always an explicit error, never a read into the next frame.
#[derive(Debug)]
pub struct BoundedReader<'a, R: ?Sized> {
    reader: &'a mut R,
    capacity: usize,
    index: usize,
}

impl<'a, R: Reader + ?Sized> BoundedReader<'a, R> {
    /// Create a view over `reader` limited to `capacity` bytes.
    pub fn new(reader: &'a mut R, capacity: usize) -> Self {
        Self { reader, capacity, index: 0 }
    }

    /// Bytes consumed through this view so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.index
    }

    /// The byte budget set at construction.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes still available within the budget.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity - self.index
    }

    /// Returns `true` once the budget is fully consumed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.index == self.capacity
    }

    /// Discard whatever remains of the budget.
    ///
    /// This is the documented way to consume unknown trailing bytes within
    /// a framed sub-stream; it never reads past the capacity and leaves
    /// the view exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner reader fails.
    pub fn read_padding(&mut self) -> Status<()> {
        let padding = self.capacity - self.index;
        self.reader.skip(padding)?;
        self.index = self.capacity;
        Ok(())
    }
}

impl<R: Reader + ?Sized> Reader for BoundedReader<'_, R> {
    fn ensure(&mut self, count: usize) -> Status<()> {
        if count > self.remaining() {
            return Err(NopError::NoBuffer);
        }
        self.reader.ensure(count)
    }

    fn read_byte(&mut self) -> Status<u8> {
        if self.remaining() < 1 {
            return Err(NopError::NoBuffer);
        }
        let byte = self.reader.read_byte()?;
        self.index += 1;
        Ok(byte)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Status<()> {
        if buf.len() > self.remaining() {
            return Err(NopError::NoBuffer);
        }
        self.reader.read_exact(buf)?;
        self.index += buf.len();
        Ok(())
    }

    fn skip(&mut self, count: usize) -> Status<()> {
        if count > self.remaining() {
            return Err(NopError::NoBuffer);
        }
        self.reader.skip(count)?;
        self.index += count;
        Ok(())
    }

    fn get_handle(&mut self, reference: HandleReference) -> Status<Handle> {
        self.reader.get_handle(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::BufferReader;

    #[test]
    fn reads_within_budget() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut inner = BufferReader::new(&bytes);
        let mut bounded = BoundedReader::new(&mut inner, 4);

        assert_eq!(bounded.read_byte(), Ok(1));
        assert_eq!(bounded.read_byte(), Ok(2));
        assert_eq!(bounded.read_byte(), Ok(3));
        assert_eq!(bounded.consumed(), 3);
        assert_eq!(bounded.remaining(), 1);
    }

    #[test]
    fn first_overflowing_op_fails_without_touching_inner() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut inner = BufferReader::new(&bytes);
        let mut bounded = BoundedReader::new(&mut inner, 4);

        for _ in 0..3 {
            bounded.read_byte().expect("within budget");
        }

        let mut buf = [0u8; 2];
        assert_eq!(bounded.read_exact(&mut buf), Err(NopError::NoBuffer));
        assert_eq!(bounded.consumed(), 3);

        // The inner reader is still positioned after the third byte.
        drop(bounded);
        assert_eq!(inner.read_byte(), Ok(4));
    }

    #[test]
    fn ensure_checks_budget_first() {
        let bytes = [0u8; 16];
        let mut inner = BufferReader::new(&bytes);
        let mut bounded = BoundedReader::new(&mut inner, 2);

        assert_eq!(bounded.ensure(2), Ok(()));
        assert_eq!(bounded.ensure(3), Err(NopError::NoBuffer));
    }

    #[test]
    fn read_padding_drains_to_capacity() {
        let bytes = [9u8, 9, 9, 9, 5];
        let mut inner = BufferReader::new(&bytes);
        let mut bounded = BoundedReader::new(&mut inner, 4);

        bounded.read_byte().expect("within budget");
        bounded.read_padding().expect("padding available");
        assert!(bounded.is_exhausted());
        assert_eq!(bounded.read_byte(), Err(NopError::NoBuffer));

        drop(bounded);
        assert_eq!(inner.read_byte(), Ok(5));
    }

    #[test]
    fn skip_counts_against_budget() {
        let bytes = [0u8; 8];
        let mut inner = BufferReader::new(&bytes);
        let mut bounded = BoundedReader::new(&mut inner, 3);

        assert_eq!(bounded.skip(2), Ok(()));
        assert_eq!(bounded.skip(2), Err(NopError::NoBuffer));
        assert_eq!(bounded.consumed(), 2);
    }
}
