//! The per-type codec capability.

use crate::encoding::EncodingByte;
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};

/// The codec for one type: prefix selection, exact sizing, prefix
/// matching, and payload transfer.
///
/// Dispatch is type-directed and static: a concrete type has exactly one
/// codec, selected at compile time. Every implementation obeys four laws:
///
/// 1. **Size**: [`encoded_size`](Self::encoded_size) equals the byte count
///    [`write`](Self::write) emits.
/// 2. **Round trip**: `read(write(v))` yields a value equal to `v`.
/// 3. **Match totality**: [`matches`](Self::matches) returns `true` for
///    every prefix in the type's accepted set and `false` for every other
///    prefix.
/// 4. **Non-consumption on mismatch**: `matches` is a pure function of the
///    prefix value; a composite codec holding a non-matching prefix may
///    offer it to an alternative codec without rewinding the stream.
///
/// Writers emit the most compact representation that accommodates a value;
/// readers accept any size class that fits the target. This asymmetry is
/// what makes differently-sized integer declarations interoperate.
pub trait Encoding: Sized {
    /// Wire width in bytes when elements of this type pack into Binary
    /// blobs, or `None` when sequences of this type encode element-wise as
    /// Array.
    ///
    /// Types with a packed width also implement
    /// [`write_packed`](Self::write_packed) and
    /// [`read_packed`](Self::read_packed) as the raw little-endian element
    /// form. The default framed fallbacks are never taken by sequence
    /// codecs when this is `None`.
    const PACKED_WIDTH: Option<usize> = None;

    /// The prefix byte this value encodes under.
    fn prefix(&self) -> EncodingByte;

    /// Exact byte count of the full frame, prefix included.
    fn encoded_size(&self) -> usize;

    /// Whether `prefix` belongs to this type's accepted set.
    fn matches(prefix: EncodingByte) -> bool;

    /// Write the payload that follows `prefix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is malformed or the writer fails.
    fn write_payload<W: Writer + ?Sized>(
        &self,
        prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()>;

    /// Parse the payload that follows `prefix`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is malformed, truncated, or uses a
    /// size class outside the accepted set.
    fn read_payload<R: Reader + ?Sized>(prefix: EncodingByte, reader: &mut R) -> Status<Self>;

    /// Write the full frame: prefix, then payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is malformed or the writer fails.
    fn write<W: Writer + ?Sized>(&self, writer: &mut W) -> Status<()> {
        let prefix = self.prefix();
        prefix.write(writer)?;
        self.write_payload(prefix, writer)
    }

    /// Read a full frame: prefix, match, then payload.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEncodingType` if the prefix does not match, or
    /// whatever the payload parse reports.
    fn read<R: Reader + ?Sized>(reader: &mut R) -> Status<Self> {
        let prefix = EncodingByte::read(reader)?;
        if !Self::matches(prefix) {
            return Err(NopError::UnexpectedEncodingType);
        }
        Self::read_payload(prefix, reader)
    }

    /// Write the raw packed element form.
    ///
    /// Only meaningful when [`PACKED_WIDTH`](Self::PACKED_WIDTH) is set;
    /// the default falls back to the framed form.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    fn write_packed<W: Writer + ?Sized>(&self, writer: &mut W) -> Status<()> {
        self.write(writer)
    }

    /// Read the raw packed element form.
    ///
    /// Only meaningful when [`PACKED_WIDTH`](Self::PACKED_WIDTH) is set;
    /// the default falls back to the framed form.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails.
    fn read_packed<R: Reader + ?Sized>(reader: &mut R) -> Status<Self> {
        Self::read(reader)
    }
}
