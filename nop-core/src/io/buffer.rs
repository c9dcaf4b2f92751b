//! In-memory reader and writer over byte buffers.
//!
//! These are the reference transport: tests, the RPC layer, and the
//! `to_bytes`/`from_bytes` conveniences all run over them. Handles are
//! carried in a side table of `Handle` values parallel to the bytes.

use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};
use crate::types::{Handle, HandleReference};

/// A writer that appends to an owned `Vec<u8>` and collects pushed
/// handles in a side table.
#[derive(Debug, Default)]
pub struct BufferWriter {
    bytes: Vec<u8>,
    handles: Vec<Handle>,
}

impl BufferWriter {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with `capacity` bytes preallocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { bytes: Vec::with_capacity(capacity), handles: Vec::new() }
    }

    /// The bytes written so far.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The handle side table accumulated so far.
    #[must_use]
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    /// Consume the writer, returning the bytes and the handle table.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, Vec<Handle>) {
        (self.bytes, self.handles)
    }
}

impl Writer for BufferWriter {
    fn prepare(&mut self, count: usize) -> Status<()> {
        self.bytes.reserve(count);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Status<()> {
        self.bytes.push(byte);
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Status<()> {
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    fn skip(&mut self, count: usize) -> Status<()> {
        self.bytes.resize(self.bytes.len() + count, 0);
        Ok(())
    }

    fn push_handle(&mut self, handle: Handle) -> Status<HandleReference> {
        let reference = i32::try_from(self.handles.len()).map_err(|_| NopError::Io)?;
        self.handles.push(handle);
        Ok(HandleReference::new(reference))
    }
}

/// A reader over a borrowed byte slice with an optional handle table.
#[derive(Debug)]
pub struct BufferReader<'a> {
    bytes: &'a [u8],
    position: usize,
    handles: Vec<Handle>,
}

impl<'a> BufferReader<'a> {
    /// Create a reader over `bytes` with an empty handle table.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0, handles: Vec::new() }
    }

    /// Create a reader over `bytes` paired with the handle table the
    /// producing writer accumulated.
    #[must_use]
    pub fn with_handles(bytes: &'a [u8], handles: Vec<Handle>) -> Self {
        Self { bytes, position: 0, handles }
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Returns `true` once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

impl Reader for BufferReader<'_> {
    fn ensure(&mut self, count: usize) -> Status<()> {
        if count > self.remaining() {
            return Err(NopError::Io);
        }
        Ok(())
    }

    fn read_byte(&mut self) -> Status<u8> {
        let byte = *self.bytes.get(self.position).ok_or(NopError::Io)?;
        self.position += 1;
        Ok(byte)
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Status<()> {
        if buf.len() > self.remaining() {
            return Err(NopError::Io);
        }
        buf.copy_from_slice(&self.bytes[self.position..self.position + buf.len()]);
        self.position += buf.len();
        Ok(())
    }

    fn skip(&mut self, count: usize) -> Status<()> {
        if count > self.remaining() {
            return Err(NopError::Io);
        }
        self.position += count;
        Ok(())
    }

    fn get_handle(&mut self, reference: HandleReference) -> Status<Handle> {
        if reference.is_empty() {
            return Ok(Handle::INVALID);
        }
        let index = usize::try_from(reference.value()).map_err(|_| NopError::Io)?;
        self.handles.get(index).copied().ok_or(NopError::Io)
    }
}
