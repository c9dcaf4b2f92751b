//! Codecs for booleans, floats, and the unit value.

use crate::encoding::{Encoding, EncodingByte};
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};

impl Encoding for bool {
    // Booleans pack into Binary blobs as single 0/1 bytes.
    const PACKED_WIDTH: Option<usize> = Some(1);

    fn prefix(&self) -> EncodingByte {
        if *self {
            EncodingByte::True
        } else {
            EncodingByte::False
        }
    }

    fn encoded_size(&self) -> usize {
        1
    }

    fn matches(prefix: EncodingByte) -> bool {
        matches!(prefix, EncodingByte::True | EncodingByte::False)
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        _writer: &mut W,
    ) -> Status<()> {
        Ok(())
    }

    fn read_payload<R: Reader + ?Sized>(prefix: EncodingByte, _reader: &mut R) -> Status<Self> {
        match prefix {
            EncodingByte::True => Ok(true),
            EncodingByte::False => Ok(false),
            _ => Err(NopError::UnexpectedEncodingType),
        }
    }

    fn write_packed<W: Writer + ?Sized>(&self, writer: &mut W) -> Status<()> {
        writer.write_byte(u8::from(*self))
    }

    fn read_packed<R: Reader + ?Sized>(reader: &mut R) -> Status<Self> {
        Ok(reader.read_byte()? != 0)
    }
}

impl Encoding for () {
    fn prefix(&self) -> EncodingByte {
        EncodingByte::Nil
    }

    fn encoded_size(&self) -> usize {
        1
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == EncodingByte::Nil
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        _writer: &mut W,
    ) -> Status<()> {
        Ok(())
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, _reader: &mut R) -> Status<Self> {
        Ok(())
    }
}

macro_rules! float_encoding {
    ($ty:ty, $class:ident) => {
        impl Encoding for $ty {
            fn prefix(&self) -> EncodingByte {
                EncodingByte::$class
            }

            fn encoded_size(&self) -> usize {
                1 + core::mem::size_of::<$ty>()
            }

            fn matches(prefix: EncodingByte) -> bool {
                prefix == EncodingByte::$class
            }

            fn write_payload<W: Writer + ?Sized>(
                &self,
                _prefix: EncodingByte,
                writer: &mut W,
            ) -> Status<()> {
                writer.write_all(&self.to_le_bytes())
            }

            fn read_payload<R: Reader + ?Sized>(
                _prefix: EncodingByte,
                reader: &mut R,
            ) -> Status<Self> {
                let mut bytes = [0u8; core::mem::size_of::<$ty>()];
                reader.read_exact(&mut bytes)?;
                Ok(<$ty>::from_le_bytes(bytes))
            }
        }
    };
}

float_encoding!(f32, F32);
float_encoding!(f64, F64);
