//! Codec for logical buffers and array/count member pairs.
//!
//! A [`LogicalBuffer`] and a `(array, count)` structure member pair share
//! one wire form: the sequence production of the element type, carrying
//! only the live elements. Either is therefore fungible with a `Vec` of a
//! fungible element type.

use crate::encoding::sequence::{
    read_sequence_count, read_sequence_element, sequence_prefix, slice_encoded_size,
    write_slice_payload,
};
use crate::encoding::{Encoding, EncodingByte};
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};
use crate::types::LogicalBuffer;

impl<T: Encoding + Default, const N: usize> Encoding for LogicalBuffer<T, N> {
    fn prefix(&self) -> EncodingByte {
        sequence_prefix::<T>()
    }

    fn encoded_size(&self) -> usize {
        slice_encoded_size(self.as_slice())
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == sequence_prefix::<T>()
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        write_slice_payload(self.as_slice(), writer)
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        let (elements, count) = read_buffer_member::<T, N, R>(reader, false)?;
        LogicalBuffer::from_parts(elements, count)
    }
}

/// Exact frame size of an array/count member pair.
///
/// `count` is clamped to the array length; sizing is only meaningful for
/// values the write path accepts.
#[must_use]
pub fn buffer_member_size<T: Encoding>(elements: &[T], count: usize) -> usize {
    slice_encoded_size(&elements[..count.min(elements.len())])
}

/// Write an array/count member pair as a full sequence frame.
///
/// # Errors
///
/// Returns `InvalidContainerLength` if `count` exceeds the array length.
pub fn write_buffer_member<T: Encoding, W: Writer + ?Sized>(
    elements: &[T],
    count: usize,
    writer: &mut W,
) -> Status<()> {
    if count > elements.len() {
        return Err(NopError::InvalidContainerLength);
    }
    let live = &elements[..count];
    sequence_prefix::<T>().write(writer)?;
    write_slice_payload(live, writer)
}

/// Read a sequence frame into fixed storage, returning the filled array
/// and the live element count.
///
/// When `framed` is set the frame's prefix byte is consumed and checked
/// first; otherwise the caller has already consumed it.
///
/// # Errors
///
/// Returns `UnexpectedEncodingType` on a foreign prefix and
/// `InvalidContainerLength` when the decoded length exceeds `N`.
pub fn read_buffer_member<T: Encoding + Default, const N: usize, R: Reader + ?Sized>(
    reader: &mut R,
    framed: bool,
) -> Status<([T; N], usize)> {
    if framed {
        let prefix = EncodingByte::read(reader)?;
        if prefix != sequence_prefix::<T>() {
            return Err(NopError::UnexpectedEncodingType);
        }
    }

    let count = read_sequence_count::<T, R>(reader)?;
    if count > N {
        return Err(NopError::InvalidContainerLength);
    }

    let mut elements: [T; N] = core::array::from_fn(|_| T::default());
    for slot in &mut elements[..count] {
        *slot = read_sequence_element(reader)?;
    }
    Ok((elements, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{BufferReader, BufferWriter};

    fn encode<T: Encoding>(value: &T) -> Vec<u8> {
        let mut writer = BufferWriter::new();
        value.write(&mut writer).expect("in-memory write");
        writer.into_parts().0
    }

    fn decode<T: Encoding>(bytes: &[u8]) -> Status<T> {
        let mut reader = BufferReader::new(bytes);
        T::read(&mut reader)
    }

    #[test]
    fn byte_buffer_matches_byte_vector_output() {
        let buffer = LogicalBuffer::<u8, 256>::from_slice(&[0xAA, 0xBB, 0xCC]).expect("fits");
        let bytes = encode(&buffer);
        assert_eq!(bytes, [0xC4, 0x03, 0xAA, 0xBB, 0xCC]);
        assert_eq!(bytes, encode(&vec![0xAAu8, 0xBB, 0xCC]));
    }

    #[test]
    fn only_live_elements_reach_the_wire() {
        let mut buffer: LogicalBuffer<u32, 8> = LogicalBuffer::new();
        buffer.push(300).expect("capacity available");
        let bytes = encode(&buffer);
        // Binary frame: 4 payload bytes for the single live element.
        assert_eq!(bytes, [0xC4, 0x04, 0x2C, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn round_trips_with_capacity_to_spare() {
        let buffer = LogicalBuffer::<u16, 5>::from_slice(&[7, 300]).expect("fits");
        let decoded = decode::<LogicalBuffer<u16, 5>>(&encode(&buffer)).expect("round trip");
        assert_eq!(decoded.as_slice(), &[7, 300]);
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn capacity_overflow_is_rejected_on_read() {
        let bytes = encode(&vec![1u8, 2, 3, 4]);
        assert_eq!(
            decode::<LogicalBuffer<u8, 2>>(&bytes),
            Err(NopError::InvalidContainerLength)
        );
    }

    #[test]
    fn element_wise_buffer_uses_array() {
        let buffer =
            LogicalBuffer::<String, 4>::from_slice(&["hi".to_owned()]).expect("fits");
        let bytes = encode(&buffer);
        assert_eq!(bytes[0], 0xC6);
        let decoded = decode::<LogicalBuffer<String, 4>>(&bytes).expect("round trip");
        assert_eq!(decoded.as_slice(), &["hi".to_owned()]);
    }

    #[test]
    fn member_pair_round_trips() {
        let storage = [10u8, 20, 30, 0, 0, 0];
        let mut writer = BufferWriter::new();
        write_buffer_member(&storage, 3, &mut writer).expect("in-memory write");
        let bytes = writer.into_parts().0;
        assert_eq!(buffer_member_size(&storage, 3), bytes.len());

        let mut reader = BufferReader::new(&bytes);
        let (elements, count) =
            read_buffer_member::<u8, 6, _>(&mut reader, true).expect("round trip");
        assert_eq!(count, 3);
        assert_eq!(&elements[..count], &[10, 20, 30]);
    }

    #[test]
    fn member_pair_write_checks_count() {
        let storage = [0u8; 2];
        let mut writer = BufferWriter::new();
        assert_eq!(
            write_buffer_member(&storage, 3, &mut writer),
            Err(NopError::InvalidContainerLength)
        );
    }

    #[test]
    fn size_matches_output() {
        let buffer = LogicalBuffer::<i64, 16>::from_slice(&[-1, 300, i64::MIN]).expect("fits");
        assert_eq!(buffer.encoded_size(), encode(&buffer).len());
    }
}
