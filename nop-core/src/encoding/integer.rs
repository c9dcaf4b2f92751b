//! Compact variable-width integer codecs.
//!
//! Writers always pick the smallest size class whose range contains the
//! value: an embedded fix-int when possible, then the narrowest U/I class.
//! Positive signed values borrow unsigned classes strictly narrower than
//! the target width, which keeps every accepted class's full range inside
//! the target type. Readers accept exactly those classes, so a compact
//! stream decodes into any integer declaration wide enough to hold it.
//!
//! All multibyte payloads are little-endian regardless of host order.

use crate::encoding::byte::{EncodingByte, NEGATIVE_FIXINT_MIN, POSITIVE_FIXINT_MAX};
use crate::encoding::Encoding;
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};

/// Payload width in bytes of an unsigned size class.
const fn unsigned_class_width(prefix: EncodingByte) -> Option<usize> {
    match prefix {
        EncodingByte::U8 => Some(1),
        EncodingByte::U16 => Some(2),
        EncodingByte::U32 => Some(4),
        EncodingByte::U64 => Some(8),
        _ => None,
    }
}

/// Payload width in bytes of a signed size class.
const fn signed_class_width(prefix: EncodingByte) -> Option<usize> {
    match prefix {
        EncodingByte::I8 => Some(1),
        EncodingByte::I16 => Some(2),
        EncodingByte::I32 => Some(4),
        EncodingByte::I64 => Some(8),
        _ => None,
    }
}

/// Smallest unsigned class containing `value`, as (prefix, payload width).
const fn unsigned_class(value: u64) -> (EncodingByte, usize) {
    if value <= POSITIVE_FIXINT_MAX as u64 {
        (EncodingByte::PositiveFixInt(value as u8), 0)
    } else if value <= u8::MAX as u64 {
        (EncodingByte::U8, 1)
    } else if value <= u16::MAX as u64 {
        (EncodingByte::U16, 2)
    } else if value <= u32::MAX as u64 {
        (EncodingByte::U32, 4)
    } else {
        (EncodingByte::U64, 8)
    }
}

/// Smallest class containing the signed `value` when encoded into a target
/// of `width` bytes, as (prefix, payload width).
const fn signed_class(value: i64, width: usize) -> (EncodingByte, usize) {
    if 0 <= value && value <= POSITIVE_FIXINT_MAX as i64 {
        (EncodingByte::PositiveFixInt(value as u8), 0)
    } else if NEGATIVE_FIXINT_MIN as i64 <= value && value < 0 {
        (EncodingByte::NegativeFixInt(value as i8), 0)
    } else if value > 0 {
        if value <= u8::MAX as i64 && width > 1 {
            (EncodingByte::U8, 1)
        } else if value <= u16::MAX as i64 && width > 2 {
            (EncodingByte::U16, 2)
        } else if value <= u32::MAX as i64 && width > 4 {
            (EncodingByte::U32, 4)
        } else if value <= i8::MAX as i64 {
            (EncodingByte::I8, 1)
        } else if value <= i16::MAX as i64 {
            (EncodingByte::I16, 2)
        } else if value <= i32::MAX as i64 {
            (EncodingByte::I32, 4)
        } else {
            (EncodingByte::I64, 8)
        }
    } else if value >= i8::MIN as i64 {
        (EncodingByte::I8, 1)
    } else if value >= i16::MIN as i64 {
        (EncodingByte::I16, 2)
    } else if value >= i32::MIN as i64 {
        (EncodingByte::I32, 4)
    } else {
        (EncodingByte::I64, 8)
    }
}

fn write_le<W: Writer + ?Sized>(writer: &mut W, value: u64, width: usize) -> Status<()> {
    writer.write_all(&value.to_le_bytes()[..width])
}

fn read_unsigned_le<R: Reader + ?Sized>(reader: &mut R, width: usize) -> Status<u64> {
    let mut bytes = [0u8; 8];
    reader.read_exact(&mut bytes[..width])?;
    Ok(u64::from_le_bytes(bytes))
}

fn read_signed_le<R: Reader + ?Sized>(reader: &mut R, width: usize) -> Status<i64> {
    let mut bytes = [0u8; 8];
    reader.read_exact(&mut bytes[..width])?;
    if bytes[width - 1] & 0x80 != 0 {
        for byte in &mut bytes[width..] {
            *byte = 0xFF;
        }
    }
    Ok(i64::from_le_bytes(bytes))
}

macro_rules! unsigned_encoding {
    ($ty:ty) => {
        impl Encoding for $ty {
            const PACKED_WIDTH: Option<usize> = Some(core::mem::size_of::<$ty>());

            fn prefix(&self) -> EncodingByte {
                unsigned_class(u64::from(*self)).0
            }

            fn encoded_size(&self) -> usize {
                1 + unsigned_class(u64::from(*self)).1
            }

            fn matches(prefix: EncodingByte) -> bool {
                match prefix {
                    EncodingByte::PositiveFixInt(_) => true,
                    class => match unsigned_class_width(class) {
                        Some(width) => width <= core::mem::size_of::<$ty>(),
                        None => false,
                    },
                }
            }

            fn write_payload<W: Writer + ?Sized>(
                &self,
                prefix: EncodingByte,
                writer: &mut W,
            ) -> Status<()> {
                match unsigned_class_width(prefix) {
                    Some(width) => write_le(writer, u64::from(*self), width),
                    None => Ok(()),
                }
            }

            fn read_payload<R: Reader + ?Sized>(
                prefix: EncodingByte,
                reader: &mut R,
            ) -> Status<Self> {
                match prefix {
                    EncodingByte::PositiveFixInt(value) => Ok(value as $ty),
                    class => {
                        let width = match unsigned_class_width(class) {
                            Some(width) => width,
                            None => return Err(NopError::UnexpectedEncodingType),
                        };
                        if width > core::mem::size_of::<$ty>() {
                            return Err(NopError::InvalidIntegerClass);
                        }
                        Ok(read_unsigned_le(reader, width)? as $ty)
                    }
                }
            }

            fn write_packed<W: Writer + ?Sized>(&self, writer: &mut W) -> Status<()> {
                writer.write_all(&self.to_le_bytes())
            }

            fn read_packed<R: Reader + ?Sized>(reader: &mut R) -> Status<Self> {
                let mut bytes = [0u8; core::mem::size_of::<$ty>()];
                reader.read_exact(&mut bytes)?;
                Ok(<$ty>::from_le_bytes(bytes))
            }
        }
    };
}

unsigned_encoding!(u8);
unsigned_encoding!(u16);
unsigned_encoding!(u32);
unsigned_encoding!(u64);

macro_rules! signed_encoding {
    ($ty:ty) => {
        impl Encoding for $ty {
            const PACKED_WIDTH: Option<usize> = Some(core::mem::size_of::<$ty>());

            fn prefix(&self) -> EncodingByte {
                signed_class(i64::from(*self), core::mem::size_of::<$ty>()).0
            }

            fn encoded_size(&self) -> usize {
                1 + signed_class(i64::from(*self), core::mem::size_of::<$ty>()).1
            }

            fn matches(prefix: EncodingByte) -> bool {
                match prefix {
                    EncodingByte::PositiveFixInt(_) | EncodingByte::NegativeFixInt(_) => true,
                    class => {
                        if let Some(width) = signed_class_width(class) {
                            width <= core::mem::size_of::<$ty>()
                        } else if let Some(width) = unsigned_class_width(class) {
                            width < core::mem::size_of::<$ty>()
                        } else {
                            false
                        }
                    }
                }
            }

            fn write_payload<W: Writer + ?Sized>(
                &self,
                prefix: EncodingByte,
                writer: &mut W,
            ) -> Status<()> {
                if let Some(width) = signed_class_width(prefix) {
                    write_le(writer, i64::from(*self) as u64, width)
                } else if let Some(width) = unsigned_class_width(prefix) {
                    write_le(writer, i64::from(*self) as u64, width)
                } else {
                    Ok(())
                }
            }

            fn read_payload<R: Reader + ?Sized>(
                prefix: EncodingByte,
                reader: &mut R,
            ) -> Status<Self> {
                match prefix {
                    EncodingByte::PositiveFixInt(value) => Ok(value as $ty),
                    EncodingByte::NegativeFixInt(value) => Ok(value as $ty),
                    class => {
                        if let Some(width) = signed_class_width(class) {
                            if width > core::mem::size_of::<$ty>() {
                                return Err(NopError::InvalidIntegerClass);
                            }
                            Ok(read_signed_le(reader, width)? as $ty)
                        } else if let Some(width) = unsigned_class_width(class) {
                            if width >= core::mem::size_of::<$ty>() {
                                return Err(NopError::InvalidIntegerClass);
                            }
                            Ok(read_unsigned_le(reader, width)? as $ty)
                        } else {
                            Err(NopError::UnexpectedEncodingType)
                        }
                    }
                }
            }

            fn write_packed<W: Writer + ?Sized>(&self, writer: &mut W) -> Status<()> {
                writer.write_all(&self.to_le_bytes())
            }

            fn read_packed<R: Reader + ?Sized>(reader: &mut R) -> Status<Self> {
                let mut bytes = [0u8; core::mem::size_of::<$ty>()];
                reader.read_exact(&mut bytes)?;
                Ok(<$ty>::from_le_bytes(bytes))
            }
        }
    };
}

signed_encoding!(i8);
signed_encoding!(i16);
signed_encoding!(i32);
signed_encoding!(i64);
