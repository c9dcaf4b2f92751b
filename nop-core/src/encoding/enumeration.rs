//! Enumeration declarations.
//!
//! A declared enumeration travels as its underlying integer type: compact
//! on write, permissive on read, with unknown discriminants rejected.

/// Declare a C-like enumeration over a named underlying integer type,
/// deriving its codec.
///
/// Each variant needs an explicit discriminant; decoding a value that
/// names no variant fails with
/// [`UnexpectedEncodingType`](crate::NopError::UnexpectedEncodingType).
///
/// ```
/// use nop_core::nop_enum;
///
/// nop_enum! {
///     /// Kinds of phone number.
///     pub enum PhoneKind: u8 {
///         /// Work number.
///         Work = 0,
///         /// Home number.
///         Home = 1,
///         /// Mobile number.
///         Cell = 2,
///     }
/// }
///
/// assert_eq!(PhoneKind::Cell as u8, 2);
/// ```
#[macro_export]
macro_rules! nop_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $crate::encoding::Encoding for $name {
            fn prefix(&self) -> $crate::EncodingByte {
                $crate::encoding::Encoding::prefix(&(*self as $repr))
            }

            fn encoded_size(&self) -> usize {
                $crate::encoding::Encoding::encoded_size(&(*self as $repr))
            }

            fn matches(prefix: $crate::EncodingByte) -> bool {
                <$repr as $crate::encoding::Encoding>::matches(prefix)
            }

            fn write_payload<W: $crate::io::Writer + ?Sized>(
                &self,
                prefix: $crate::EncodingByte,
                writer: &mut W,
            ) -> $crate::Status<()> {
                $crate::encoding::Encoding::write_payload(&(*self as $repr), prefix, writer)
            }

            fn read_payload<R: $crate::io::Reader + ?Sized>(
                prefix: $crate::EncodingByte,
                reader: &mut R,
            ) -> $crate::Status<Self> {
                let value =
                    <$repr as $crate::encoding::Encoding>::read_payload(prefix, reader)?;
                $(
                    if value == $value {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::NopError::UnexpectedEncodingType)
            }
        }
    };
}
