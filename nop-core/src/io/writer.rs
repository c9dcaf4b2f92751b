//! The push side of a byte stream.

use crate::error::Status;
use crate::types::{Handle, HandleReference};

/// A stateful sink of bytes produced in order.
pub trait Writer {
    /// Reserve room for `count` further bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot grow to hold them.
    fn prepare(&mut self, count: usize) -> Status<()>;

    /// Append one byte.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    fn write_byte(&mut self, byte: u8) -> Status<()>;

    /// Append all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    fn write_all(&mut self, bytes: &[u8]) -> Status<()>;

    /// Append `count` zero padding bytes.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    fn skip(&mut self, count: usize) -> Status<()>;

    /// Push a handle to the out-of-band table, returning its reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot carry handles.
    fn push_handle(&mut self, handle: Handle) -> Status<HandleReference>;
}
