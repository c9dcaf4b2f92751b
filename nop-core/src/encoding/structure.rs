//! Structure declarations.
//!
//! A structure frame is `[Structure][U64(member_count)][members...]` with
//! members in declaration order. Member names never reach the wire; two
//! structures with the same declaration arity and pairwise fungible
//! members produce identical bytes.

/// Declare the ordered member list of a struct, deriving its codec.
///
/// Every field of the struct must appear exactly once, either as a plain
/// member or inside a parenthesized `(array, count)` pair that serializes
/// the two fields as one logical buffer (only the first `count` elements
/// reach the wire, and decoding restores `count`). An omitted field fails
/// to compile, so the declaration always covers the whole struct.
///
/// Decoding rejects a frame whose member count differs from the
/// declaration with
/// [`InvalidMemberCount`](crate::NopError::InvalidMemberCount).
///
/// ```
/// use nop_core::nop_structure;
///
/// /// A point in screen space.
/// pub struct Point {
///     /// Horizontal position.
///     pub x: u32,
///     /// Vertical position.
///     pub y: i32,
/// }
/// nop_structure!(Point { x, y });
///
/// /// A packet with an inline payload buffer.
/// #[derive(Default)]
/// pub struct Packet {
///     /// Payload storage.
///     pub data: [u8; 16],
///     /// Live bytes in `data`.
///     pub size: usize,
///     /// Routing flags.
///     pub flags: u32,
/// }
/// nop_structure!(Packet { (data, size), flags });
/// ```
#[macro_export]
macro_rules! nop_structure {
    ($name:ident { $($member:tt),+ $(,)? }) => {
        impl $crate::encoding::Encoding for $name {
            fn prefix(&self) -> $crate::EncodingByte {
                $crate::EncodingByte::Structure
            }

            fn encoded_size(&self) -> usize {
                let member_count: u64 = $crate::nop_structure!(@count $($member),+);
                1 + $crate::encoding::Encoding::encoded_size(&member_count)
                    $(+ $crate::nop_structure!(@size self, $member))+
            }

            fn matches(prefix: $crate::EncodingByte) -> bool {
                prefix == $crate::EncodingByte::Structure
            }

            fn write_payload<W: $crate::io::Writer + ?Sized>(
                &self,
                _prefix: $crate::EncodingByte,
                writer: &mut W,
            ) -> $crate::Status<()> {
                let member_count: u64 = $crate::nop_structure!(@count $($member),+);
                $crate::encoding::Encoding::write(&member_count, writer)?;
                $($crate::nop_structure!(@write self, writer, $member)?;)+
                Ok(())
            }

            fn read_payload<R: $crate::io::Reader + ?Sized>(
                _prefix: $crate::EncodingByte,
                reader: &mut R,
            ) -> $crate::Status<Self> {
                let member_count = <u64 as $crate::encoding::Encoding>::read(reader)?;
                if member_count != $crate::nop_structure!(@count $($member),+) {
                    return Err($crate::NopError::InvalidMemberCount);
                }
                $($crate::nop_structure!(@read reader, $member);)+
                Ok($crate::nop_structure!(@assemble [] $($member),+))
            }
        }
    };

    // Member counting.
    (@count $($member:tt),+) => {
        (0u64 $(+ $crate::nop_structure!(@one $member))+)
    };
    (@one $member:tt) => { 1u64 };

    // Per-member frame size.
    (@size $self:expr, ($array:ident, $count:ident)) => {
        $crate::encoding::buffer_member_size(&$self.$array, $self.$count as usize)
    };
    (@size $self:expr, $field:ident) => {
        $crate::encoding::Encoding::encoded_size(&$self.$field)
    };

    // Per-member write.
    (@write $self:expr, $writer:expr, ($array:ident, $count:ident)) => {
        $crate::encoding::write_buffer_member(&$self.$array, $self.$count as usize, $writer)
    };
    (@write $self:expr, $writer:expr, $field:ident) => {
        $crate::encoding::Encoding::write(&$self.$field, $writer)
    };

    // Per-member read into locals named after the fields.
    (@read $reader:expr, ($array:ident, $count:ident)) => {
        let ($array, $count) = $crate::encoding::read_buffer_member($reader, true)?;
    };
    (@read $reader:expr, $field:ident) => {
        let $field = $crate::encoding::Encoding::read($reader)?;
    };

    // Accumulate the struct literal's field list, then emit it.
    (@assemble [$($fields:tt)*] ($array:ident, $count:ident) $(, $rest:tt)*) => {
        $crate::nop_structure!(@assemble [$($fields)* $array, $count: $count as _,] $($rest),*)
    };
    (@assemble [$($fields:tt)*] $field:ident $(, $rest:tt)*) => {
        $crate::nop_structure!(@assemble [$($fields)* $field,] $($rest),*)
    };
    (@assemble [$($fields:tt)*]) => {
        Self { $($fields)* }
    };
}
