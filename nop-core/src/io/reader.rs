//! The pull side of a byte stream.

use crate::error::Status;
use crate::types::{Handle, HandleReference};

/// A stateful source of bytes consumed in order.
///
/// Readers have no seek and no restart; every failed operation leaves the
/// amount consumed unspecified except where an implementation documents
/// otherwise. End of stream and transport failures both surface as
/// [`NopError::Io`](crate::NopError::Io).
pub trait Reader {
    /// Assert that `count` bytes can be produced without consuming them.
    ///
    /// Implementations that cannot know ahead of time (e.g. pipes) may
    /// succeed optimistically; the subsequent read still reports the
    /// shortfall.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are known to be unavailable.
    fn ensure(&mut self, count: usize) -> Status<()>;

    /// Consume and return one byte.
    ///
    /// # Errors
    ///
    /// Returns an error at end of stream or on transport failure.
    fn read_byte(&mut self) -> Status<u8>;

    /// Consume exactly `buf.len()` bytes into `buf`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream ends before the buffer fills.
    fn read_exact(&mut self, buf: &mut [u8]) -> Status<()>;

    /// Consume and discard `count` bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `count` bytes remain.
    fn skip(&mut self, count: usize) -> Status<()>;

    /// Fetch an out-of-band handle by its reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference does not resolve on this
    /// transport.
    fn get_handle(&mut self, reference: HandleReference) -> Status<Handle>;
}
