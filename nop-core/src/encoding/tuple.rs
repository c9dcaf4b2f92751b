//! Codecs for tuples.
//!
//! Tuples encode as Array frames whose element count equals the arity;
//! decoding requires the exact count. The unit type is not a tuple here:
//! it encodes as Nil.

use crate::encoding::{Encoding, EncodingByte};
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};

macro_rules! tuple_encoding {
    ($arity:expr => $($name:ident : $index:tt),+) => {
        impl<$($name: Encoding),+> Encoding for ($($name,)+) {
            fn prefix(&self) -> EncodingByte {
                EncodingByte::Array
            }

            fn encoded_size(&self) -> usize {
                1 + ($arity as u64).encoded_size() $(+ self.$index.encoded_size())+
            }

            fn matches(prefix: EncodingByte) -> bool {
                prefix == EncodingByte::Array
            }

            fn write_payload<W: Writer + ?Sized>(
                &self,
                _prefix: EncodingByte,
                writer: &mut W,
            ) -> Status<()> {
                ($arity as u64).write(writer)?;
                $(self.$index.write(writer)?;)+
                Ok(())
            }

            fn read_payload<R: Reader + ?Sized>(
                _prefix: EncodingByte,
                reader: &mut R,
            ) -> Status<Self> {
                let count = u64::read(reader)?;
                if count != $arity {
                    return Err(NopError::InvalidContainerLength);
                }
                Ok(($($name::read(reader)?,)+))
            }
        }
    };
}

tuple_encoding!(1 => A: 0);
tuple_encoding!(2 => A: 0, B: 1);
tuple_encoding!(3 => A: 0, B: 1, C: 2);
tuple_encoding!(4 => A: 0, B: 1, C: 2, D: 3);
tuple_encoding!(5 => A: 0, B: 1, C: 2, D: 3, E: 4);
tuple_encoding!(6 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
tuple_encoding!(7 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
tuple_encoding!(8 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
