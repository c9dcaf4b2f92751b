//! The prefix byte taxonomy.
//!
//! Every encoded frame begins with a single prefix byte that names the
//! logical kind and, for small integers, carries the value itself. The
//! assignments below are part of the wire ABI and fixed once and for all:
//!
//! - `0x00..=0x7F` - positive fix-int, value embedded
//! - `0xC0` - nil, `0xC2`/`0xC3` - false/true
//! - `0xC4..=0xCB` - Binary, String, Array, Map, Structure, Variant,
//!   Handle, Table
//! - `0xCC..=0xCF` - U8..U64, `0xD0..=0xD3` - I8..I64
//! - `0xD4`/`0xD5` - F32/F64
//! - `0xE0..=0xFF` - negative fix-int, value -32..=-1 embedded
//! - `0x80..=0xBF`, `0xC1`, `0xD6..=0xDF` - reserved
//!
//! Reading a prefix byte uniquely determines the parser continuation.

use crate::error::Status;
use crate::io::{Reader, Writer};

/// Largest value a positive fix-int can embed.
pub const POSITIVE_FIXINT_MAX: u8 = 0x7F;
/// Smallest value a negative fix-int can embed.
pub const NEGATIVE_FIXINT_MIN: i8 = -32;

/// A decoded prefix byte.
///
/// `from_byte` is total: reserved assignments decode to
/// [`EncodingByte::Reserved`], which no codec matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingByte {
    /// A small non-negative integer embedded in the prefix.
    PositiveFixInt(u8),
    /// A small negative integer embedded in the prefix.
    NegativeFixInt(i8),
    /// The unit/absent value.
    Nil,
    /// Boolean false.
    False,
    /// Boolean true.
    True,
    /// A length-prefixed byte blob.
    Binary,
    /// A length-prefixed UTF-8 string.
    String,
    /// A counted sequence of frames.
    Array,
    /// A counted sequence of key/value frame pairs.
    Map,
    /// A counted, ordered member list.
    Structure,
    /// A tagged union frame.
    Variant,
    /// An out-of-band handle reference.
    Handle,
    /// Reserved for versioned table records.
    Table,
    /// Unsigned 8-bit payload.
    U8,
    /// Unsigned 16-bit payload.
    U16,
    /// Unsigned 32-bit payload.
    U32,
    /// Unsigned 64-bit payload.
    U64,
    /// Signed 8-bit payload.
    I8,
    /// Signed 16-bit payload.
    I16,
    /// Signed 32-bit payload.
    I32,
    /// Signed 64-bit payload.
    I64,
    /// IEEE-754 single precision payload.
    F32,
    /// IEEE-754 double precision payload.
    F64,
    /// A byte with no assigned meaning.
    Reserved(u8),
}

impl EncodingByte {
    /// Decode a raw byte. Total over all 256 values.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            0x00..=0x7F => Self::PositiveFixInt(byte),
            0xC0 => Self::Nil,
            0xC2 => Self::False,
            0xC3 => Self::True,
            0xC4 => Self::Binary,
            0xC5 => Self::String,
            0xC6 => Self::Array,
            0xC7 => Self::Map,
            0xC8 => Self::Structure,
            0xC9 => Self::Variant,
            0xCA => Self::Handle,
            0xCB => Self::Table,
            0xCC => Self::U8,
            0xCD => Self::U16,
            0xCE => Self::U32,
            0xCF => Self::U64,
            0xD0 => Self::I8,
            0xD1 => Self::I16,
            0xD2 => Self::I32,
            0xD3 => Self::I64,
            0xD4 => Self::F32,
            0xD5 => Self::F64,
            0xE0..=0xFF => Self::NegativeFixInt(byte as i8),
            _ => Self::Reserved(byte),
        }
    }

    /// Encode back to the raw byte.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::PositiveFixInt(value) => value,
            Self::NegativeFixInt(value) => value as u8,
            Self::Nil => 0xC0,
            Self::False => 0xC2,
            Self::True => 0xC3,
            Self::Binary => 0xC4,
            Self::String => 0xC5,
            Self::Array => 0xC6,
            Self::Map => 0xC7,
            Self::Structure => 0xC8,
            Self::Variant => 0xC9,
            Self::Handle => 0xCA,
            Self::Table => 0xCB,
            Self::U8 => 0xCC,
            Self::U16 => 0xCD,
            Self::U32 => 0xCE,
            Self::U64 => 0xCF,
            Self::I8 => 0xD0,
            Self::I16 => 0xD1,
            Self::I32 => 0xD2,
            Self::I64 => 0xD3,
            Self::F32 => 0xD4,
            Self::F64 => 0xD5,
            Self::Reserved(byte) => byte,
        }
    }

    /// Consume one byte from `reader` and decode it.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream ends.
    pub fn read<R: Reader + ?Sized>(reader: &mut R) -> Status<Self> {
        Ok(Self::from_byte(reader.read_byte()?))
    }

    /// Append the raw byte to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails.
    pub fn write<W: Writer + ?Sized>(self, writer: &mut W) -> Status<()> {
        writer.write_byte(self.to_byte())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_byte() {
        for byte in 0..=u8::MAX {
            let decoded = EncodingByte::from_byte(byte);
            assert_eq!(decoded.to_byte(), byte);
        }
    }

    #[test]
    fn fixint_ranges() {
        assert_eq!(EncodingByte::from_byte(0x00), EncodingByte::PositiveFixInt(0));
        assert_eq!(EncodingByte::from_byte(0x7F), EncodingByte::PositiveFixInt(127));
        assert_eq!(EncodingByte::from_byte(0xFF), EncodingByte::NegativeFixInt(-1));
        assert_eq!(EncodingByte::from_byte(0xE0), EncodingByte::NegativeFixInt(-32));
    }

    #[test]
    fn reserved_bytes_stay_reserved() {
        assert_eq!(EncodingByte::from_byte(0xC1), EncodingByte::Reserved(0xC1));
        for byte in (0x80..=0xBF).chain(0xD6..=0xDF) {
            assert_eq!(EncodingByte::from_byte(byte), EncodingByte::Reserved(byte));
        }
    }

    #[test]
    fn prefix_determines_kind_uniquely() {
        // No two distinct non-fixint assignments share a byte.
        let assigned = [
            EncodingByte::Nil,
            EncodingByte::False,
            EncodingByte::True,
            EncodingByte::Binary,
            EncodingByte::String,
            EncodingByte::Array,
            EncodingByte::Map,
            EncodingByte::Structure,
            EncodingByte::Variant,
            EncodingByte::Handle,
            EncodingByte::Table,
            EncodingByte::U8,
            EncodingByte::U16,
            EncodingByte::U32,
            EncodingByte::U64,
            EncodingByte::I8,
            EncodingByte::I16,
            EncodingByte::I32,
            EncodingByte::I64,
            EncodingByte::F32,
            EncodingByte::F64,
        ];
        for (i, a) in assigned.iter().enumerate() {
            for b in &assigned[i + 1..] {
                assert_ne!(a.to_byte(), b.to_byte());
            }
        }
    }
}
