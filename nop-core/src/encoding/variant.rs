//! Tagged-union declarations and their codec.
//!
//! A variant frame is `[Variant][SInt(index)][element?]`: the signed
//! alternative index in compact form, then the active element's frame. An
//! index of -1 marks the empty state and carries no element.

use crate::encoding::{Encoding, EncodingByte};
use crate::error::{NopError, Status};
use crate::io::{Reader, Writer};

/// Declare a closed tagged union with an explicit empty state.
///
/// The macro generates a Rust enum with an implicit `Empty` variant ahead
/// of the declared alternatives, a `Default` impl yielding the empty
/// state, the alternative-index operations, and the variant codec.
/// Alternative indices follow declaration order starting at 0; the empty
/// state is index -1.
///
/// Construction, access, and visitation use native enum syntax: a variant
/// literal constructs an alternative in place, `if let` extracts one, and
/// `match` visits whichever is active (the `Empty` arm is the empty
/// sentinel).
///
/// ```
/// use nop_core::nop_variant;
///
/// nop_variant! {
///     /// Either a number or a name.
///     pub enum NumberOrName {
///         /// A numeric payload.
///         Number(u32),
///         /// A textual payload.
///         Name(String),
///     }
/// }
///
/// let value = NumberOrName::Number(7);
/// assert_eq!(value.index(), 0);
/// assert!(!value.is_empty());
/// assert_eq!(NumberOrName::default().index(), NumberOrName::EMPTY_INDEX);
/// ```
#[macro_export]
macro_rules! nop_variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($payload:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            /// The empty state: no alternative is alive.
            Empty,
            $(
                $(#[$variant_meta])*
                $variant($payload),
            )+
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::Empty
            }
        }

        impl $name {
            /// Index reported when no alternative is alive.
            pub const EMPTY_INDEX: i32 = -1;

            /// Index of the active alternative in declaration order, or
            /// [`Self::EMPTY_INDEX`] when empty.
            #[must_use]
            pub fn index(&self) -> i32 {
                let mut next: i32 = 0;
                $(
                    if let Self::$variant(_) = self {
                        return next;
                    }
                    next += 1;
                )+
                let _ = next;
                Self::EMPTY_INDEX
            }

            /// Returns `true` when no alternative is alive.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                matches!(self, Self::Empty)
            }

            /// Destroy the active alternative, becoming empty.
            pub fn clear(&mut self) {
                *self = Self::Empty;
            }

            /// Become the alternative at `index`, default-constructing its
            /// element. No action is taken when `index` already names the
            /// active alternative; an out-of-range index leaves the value
            /// empty.
            pub fn become_index(&mut self, index: i32)
            where
                $($payload: ::core::default::Default),+
            {
                if index == self.index() {
                    return;
                }
                let mut next: i32 = 0;
                $(
                    if index == next {
                        *self = Self::$variant(::core::default::Default::default());
                        return;
                    }
                    next += 1;
                )+
                let _ = next;
                *self = Self::Empty;
            }
        }

        impl $crate::encoding::Encoding for $name {
            fn prefix(&self) -> $crate::EncodingByte {
                $crate::EncodingByte::Variant
            }

            fn encoded_size(&self) -> usize {
                let payload = match self {
                    Self::Empty => 0,
                    $(Self::$variant(value) => {
                        $crate::encoding::Encoding::encoded_size(value)
                    })+
                };
                1 + $crate::encoding::Encoding::encoded_size(&self.index()) + payload
            }

            fn matches(prefix: $crate::EncodingByte) -> bool {
                prefix == $crate::EncodingByte::Variant
            }

            fn write_payload<W: $crate::io::Writer + ?Sized>(
                &self,
                _prefix: $crate::EncodingByte,
                writer: &mut W,
            ) -> $crate::Status<()> {
                $crate::encoding::Encoding::write(&self.index(), writer)?;
                match self {
                    Self::Empty => Ok(()),
                    $(Self::$variant(value) => {
                        $crate::encoding::Encoding::write(value, writer)
                    })+
                }
            }

            fn read_payload<R: $crate::io::Reader + ?Sized>(
                _prefix: $crate::EncodingByte,
                reader: &mut R,
            ) -> $crate::Status<Self> {
                let index = <i32 as $crate::encoding::Encoding>::read(reader)?;
                if index == Self::EMPTY_INDEX {
                    return Ok(Self::Empty);
                }
                let mut next: i32 = 0;
                $(
                    if index == next {
                        let value =
                            <$payload as $crate::encoding::Encoding>::read(reader)?;
                        return Ok(Self::$variant(value));
                    }
                    next += 1;
                )+
                let _ = next;
                Err($crate::NopError::UnexpectedEncodingType)
            }
        }
    };
}

impl<T: Encoding> Encoding for Option<T> {
    fn prefix(&self) -> EncodingByte {
        EncodingByte::Variant
    }

    fn encoded_size(&self) -> usize {
        match self {
            None => 2,
            Some(value) => 2 + value.encoded_size(),
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
            None => (-1i32).write(writer),
            Some(value) => {
                0i32.write(writer)?;
                value.write(writer)
            }
        }
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        match i32::read(reader)? {
            -1 => Ok(None),
            0 => Ok(Some(T::read(reader)?)),
            _ => Err(NopError::UnexpectedEncodingType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{BufferReader, BufferWriter};

    nop_variant! {
        /// Test union of an integer and a string.
        pub enum IntOrText {
            /// Integer alternative.
            Int(u32),
            /// Text alternative.
            Text(String),
        }
    }

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
    fn empty_variant_is_prefix_and_minus_one() {
        let value = IntOrText::default();
        assert!(value.is_empty());
        assert_eq!(encode(&value), [0xC9, 0xFF]);
        assert_eq!(decode::<IntOrText>(&[0xC9, 0xFF]), Ok(IntOrText::Empty));
    }

    #[test]
    fn alternatives_carry_their_index() {
        let value = IntOrText::Int(300);
        assert_eq!(value.index(), 0);
        assert_eq!(encode(&value), [0xC9, 0x00, 0xCD, 0x2C, 0x01]);

        let value = IntOrText::Text("hi".to_owned());
        assert_eq!(value.index(), 1);
        assert_eq!(encode(&value), [0xC9, 0x01, 0xC5, 0x02, b'h', b'i']);
    }

    #[test]
    fn round_trips() {
        for value in
            [IntOrText::Empty, IntOrText::Int(0), IntOrText::Text("abc".to_owned())]
        {
            assert_eq!(decode::<IntOrText>(&encode(&value)), Ok(value));
        }
    }

    #[test]
    fn size_matches_output() {
        for value in
            [IntOrText::Empty, IntOrText::Int(u32::MAX), IntOrText::Text("xyz".to_owned())]
        {
            assert_eq!(value.encoded_size(), encode(&value).len());
        }
    }

    #[test]
    fn unknown_index_is_rejected() {
        assert_eq!(decode::<IntOrText>(&[0xC9, 0x02]), Err(NopError::UnexpectedEncodingType));
    }

    #[test]
    fn mismatched_element_surfaces_unchanged() {
        // Index 0 names the integer alternative but a string frame
        // follows.
        let bytes = [0xC9, 0x00, 0xC5, 0x01, b'x'];
        assert_eq!(decode::<IntOrText>(&bytes), Err(NopError::UnexpectedEncodingType));
    }

    #[test]
    fn become_index_transitions() {
        let mut value = IntOrText::Text("abc".to_owned());
        value.become_index(0);
        assert_eq!(value, IntOrText::Int(0));

        // Same index: no action, element preserved.
        let mut value = IntOrText::Int(9);
        value.become_index(0);
        assert_eq!(value, IntOrText::Int(9));

        // Out of range: becomes empty.
        let mut value = IntOrText::Int(9);
        value.become_index(5);
        assert!(value.is_empty());

        let mut value = IntOrText::Int(9);
        value.become_index(IntOrText::EMPTY_INDEX);
        assert!(value.is_empty());
    }

    #[test]
    fn clear_destroys_the_element() {
        let mut value = IntOrText::Text("abc".to_owned());
        value.clear();
        assert_eq!(value.index(), IntOrText::EMPTY_INDEX);
    }

    #[test]
    fn option_uses_the_variant_production() {
        let value: Option<u32> = None;
        assert_eq!(encode(&value), [0xC9, 0xFF]);

        let value = Some(300u32);
        assert_eq!(encode(&value), [0xC9, 0x00, 0xCD, 0x2C, 0x01]);
        assert_eq!(decode::<Option<u32>>(&encode(&value)), Ok(value));
        assert_eq!(decode::<Option<u32>>(&[0xC9, 0xFF]), Ok(None));
    }

    #[test]
    fn option_size_matches_output() {
        for value in [None, Some("text".to_owned())] {
            assert_eq!(value.encoded_size(), encode(&value).len());
        }
    }
}
