//! Top-level serialization entry points.

use crate::encoding::Encoding;
use crate::error::Status;
use crate::io::{BufferReader, BufferWriter, Reader, Writer};

/// Owns a writer and applies the type codec to values.
///
/// Serializers are single-threaded and non-reentrant; sharing one across
/// threads requires external synchronization.
#[derive(Debug)]
pub struct Serializer<W> {
    writer: W,
}

impl<W: Writer> Serializer<W> {
    /// Create a serializer over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Encode `value` onto the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the writer fails.
    pub fn write<T: Encoding>(&mut self, value: &T) -> Status<()> {
        self.writer.prepare(value.encoded_size())?;
        value.write(&mut self.writer)
    }

    /// Access the underlying writer.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the serializer, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Owns a reader and applies the type codec to the stream.
///
/// Deserializers are single-threaded and non-reentrant; sharing one
/// across threads requires external synchronization.
#[derive(Debug)]
pub struct Deserializer<R> {
    reader: R,
}

impl<R: Reader> Deserializer<R> {
    /// Create a deserializer over `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Decode one value from the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream does not hold a value of `T`.
    pub fn read<T: Encoding>(&mut self) -> Status<T> {
        T::read(&mut self.reader)
    }

    /// Access the underlying reader.
    pub fn reader(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consume the deserializer, returning the reader.
    pub fn into_reader(self) -> R {
        self.reader
    }
}

/// Encode `value` into a fresh byte vector.
///
/// Values containing handles need a real transport; this convenience
/// drops the side table.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn to_bytes<T: Encoding>(value: &T) -> Status<Vec<u8>> {
    let mut serializer = Serializer::new(BufferWriter::with_capacity(value.encoded_size()));
    serializer.write(value)?;
    Ok(serializer.into_writer().into_parts().0)
}

/// Decode a value of `T` from `bytes`.
///
/// # Errors
///
/// Returns an error if the bytes do not hold exactly one `T` frame
/// prefix-compatible with the type.
pub fn from_bytes<T: Encoding>(bytes: &[u8]) -> Status<T> {
    let mut deserializer = Deserializer::new(BufferReader::new(bytes));
    deserializer.read()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializer_round_trips_values() {
        let mut serializer = Serializer::new(BufferWriter::new());
        serializer.write(&300u32).expect("in-memory write");
        serializer.write(&"hi".to_owned()).expect("in-memory write");

        let (bytes, _) = serializer.into_writer().into_parts();
        let mut deserializer = Deserializer::new(BufferReader::new(&bytes));
        assert_eq!(deserializer.read::<u32>(), Ok(300));
        assert_eq!(deserializer.read::<String>(), Ok("hi".to_owned()));
    }

    #[test]
    fn to_bytes_matches_serializer_output() {
        let value = vec![1u16, 300];
        let bytes = to_bytes(&value).expect("in-memory write");
        assert_eq!(bytes.len(), value.encoded_size());
        assert_eq!(from_bytes::<Vec<u16>>(&bytes), Ok(value));
    }
}
