//! Codecs for ordered sequences.
//!
//! Sequences of packed element types (integers, booleans) encode as Binary
//! blobs of raw little-endian elements behind a byte length; all other
//! element types encode element-wise as Array behind an element count.
//! Fixed arrays use the same productions but require the decoded length to
//! equal the declared capacity.

use std::collections::BTreeSet;

use crate::encoding::{Encoding, EncodingByte};
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};

/// The prefix a sequence of `T` encodes under.
#[must_use]
pub fn sequence_prefix<T: Encoding>() -> EncodingByte {
    if T::PACKED_WIDTH.is_some() {
        EncodingByte::Binary
    } else {
        EncodingByte::Array
    }
}

/// Exact frame size of a slice encoded as a sequence, prefix included.
#[must_use]
pub fn slice_encoded_size<T: Encoding>(elements: &[T]) -> usize {
    match T::PACKED_WIDTH {
        Some(width) => {
            let bytes = elements.len() * width;
            1 + (bytes as u64).encoded_size() + bytes
        }
        None => {
            let payload: usize = elements.iter().map(Encoding::encoded_size).sum();
            1 + (elements.len() as u64).encoded_size() + payload
        }
    }
}

/// Write the payload of a slice encoded as a sequence (length, then
/// elements; the prefix byte is the caller's).
///
/// # Errors
///
/// Returns an error if an element fails to encode or the writer fails.
pub fn write_slice_payload<T: Encoding, W: Writer + ?Sized>(
    elements: &[T],
    writer: &mut W,
) -> Status<()> {
    match T::PACKED_WIDTH {
        Some(width) => {
            ((elements.len() * width) as u64).write(writer)?;
            for element in elements {
                element.write_packed(writer)?;
            }
        }
        None => {
            (elements.len() as u64).write(writer)?;
            for element in elements {
                element.write(writer)?;
            }
        }
    }
    Ok(())
}

/// Read a sequence payload's element count, validating the length header
/// against the element width and the bytes actually available.
///
/// The availability check runs before any allocation sized by the header,
/// so a hostile length cannot force an oversized allocation.
///
/// # Errors
///
/// Returns `InvalidContainerLength` for a malformed header and `Io` when
/// the stream cannot hold the declared payload.
pub fn read_sequence_count<T: Encoding, R: Reader + ?Sized>(reader: &mut R) -> Status<usize> {
    let header = u64::read(reader)?;
    let header = usize::try_from(header).map_err(|_| NopError::InvalidContainerLength)?;
    match T::PACKED_WIDTH {
        Some(width) => {
            if header % width != 0 {
                return Err(NopError::InvalidContainerLength);
            }
            reader.ensure(header)?;
            Ok(header / width)
        }
        None => {
            // Every element frame is at least one prefix byte.
            reader.ensure(header)?;
            Ok(header)
        }
    }
}

/// Read one sequence element in whichever form the element type uses.
///
/// # Errors
///
/// Returns whatever the element codec reports.
pub fn read_sequence_element<T: Encoding, R: Reader + ?Sized>(reader: &mut R) -> Status<T> {
    if T::PACKED_WIDTH.is_some() {
        T::read_packed(reader)
    } else {
        T::read(reader)
    }
}

impl<T: Encoding> Encoding for Vec<T> {
    fn prefix(&self) -> EncodingByte {
        sequence_prefix::<T>()
    }

    fn encoded_size(&self) -> usize {
        slice_encoded_size(self)
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == sequence_prefix::<T>()
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        write_slice_payload(self, writer)
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        let count = read_sequence_count::<T, R>(reader)?;
        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            elements.push(read_sequence_element(reader)?);
        }
        Ok(elements)
    }
}

impl<T: Encoding + Default, const N: usize> Encoding for [T; N] {
    fn prefix(&self) -> EncodingByte {
        sequence_prefix::<T>()
    }

    fn encoded_size(&self) -> usize {
        slice_encoded_size(self)
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == sequence_prefix::<T>()
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        write_slice_payload(self, writer)
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        let count = read_sequence_count::<T, R>(reader)?;
        if count != N {
            return Err(NopError::InvalidContainerLength);
        }
        let mut elements: [T; N] = core::array::from_fn(|_| T::default());
        for slot in &mut elements {
            *slot = read_sequence_element(reader)?;
        }
        Ok(elements)
    }
}

impl<T: Encoding + Ord> Encoding for BTreeSet<T> {
    fn prefix(&self) -> EncodingByte {
        // Sets have no contiguous storage; they always encode
        // element-wise.
        EncodingByte::Array
    }

    fn encoded_size(&self) -> usize {
        let payload: usize = self.iter().map(Encoding::encoded_size).sum();
        1 + (self.len() as u64).encoded_size() + payload
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == EncodingByte::Array
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        (self.len() as u64).write(writer)?;
        for element in self {
            element.write(writer)?;
        }
        Ok(())
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        let count = u64::read(reader)?;
        let count = usize::try_from(count).map_err(|_| NopError::InvalidContainerLength)?;
        reader.ensure(count)?;

        let mut elements = BTreeSet::new();
        for _ in 0..count {
            elements.insert(T::read(reader)?);
        }
        Ok(elements)
    }
}
