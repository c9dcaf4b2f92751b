//! Codec for UTF-8 strings.

use crate::encoding::{Encoding, EncodingByte};
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};

impl Encoding for String {
    fn prefix(&self) -> EncodingByte {
        EncodingByte::String
    }

    fn encoded_size(&self) -> usize {
        let length = self.len();
        1 + (length as u64).encoded_size() + length
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == EncodingByte::String
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        (self.len() as u64).write(writer)?;
        writer.write_all(self.as_bytes())
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        let length = u64::read(reader)?;
        let length = usize::try_from(length).map_err(|_| NopError::InvalidContainerLength)?;
        reader.ensure(length)?;

        let mut bytes = vec![0u8; length];
        reader.read_exact(&mut bytes)?;
        // The bytes were declared to be a String; anything that is not
        // UTF-8 is not that encoding.
        String::from_utf8(bytes).map_err(|_| NopError::UnexpectedEncodingType)
    }
}
