//! Codec for [`ErrorOr`].

use crate::encoding::{Encoding, EncodingByte};
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};
use crate::types::ErrorOr;

// ErrorOr<E, T> is the variant over [E, T]: empty is index -1, the error
// index 0, the value index 1. The bytes are identical to the equivalent
// nop_variant! declaration.
impl<E: Encoding, T: Encoding> Encoding for ErrorOr<E, T> {
    fn prefix(&self) -> EncodingByte {
        EncodingByte::Variant
    }

    fn encoded_size(&self) -> usize {
        match self {
            Self::Empty => 2,
            Self::Err(error) => 2 + error.encoded_size(),
            Self::Ok(value) => 2 + value.encoded_size(),
        }
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == EncodingByte::Variant
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        match self {
            Self::Empty => (-1i32).write(writer),
            Self::Err(error) => {
                0i32.write(writer)?;
                error.write(writer)
            }
            Self::Ok(value) => {
                1i32.write(writer)?;
                value.write(writer)
            }
        }
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        match i32::read(reader)? {
            -1 => Ok(Self::Empty),
            0 => Ok(Self::Err(E::read(reader)?)),
            1 => Ok(Self::Ok(T::read(reader)?)),
            _ => Err(NopError::UnexpectedEncodingType),
        }
    }
}
