//! Codec for out-of-band handles.

use crate::encoding::{Encoding, EncodingByte};
use crate::error::Status;
use crate::io::{Reader, Writer};
use crate::types::{Handle, HandleReference};

// The in-stream form is the fixed-width reference the transport assigns
// when the handle is pushed. A fixed 4-byte payload keeps the frame size
// independent of whatever reference the side table hands back.
impl Encoding for Handle {
    fn prefix(&self) -> EncodingByte {
        EncodingByte::Handle
    }

    fn encoded_size(&self) -> usize {
        5
    }

    fn matches(prefix: EncodingByte) -> bool {
        prefix == EncodingByte::Handle
    }

    fn write_payload<W: Writer + ?Sized>(
        &self,
        _prefix: EncodingByte,
        writer: &mut W,
    ) -> Status<()> {
        let reference = writer.push_handle(*self)?;
        writer.write_all(&reference.value().to_le_bytes())
    }

    fn read_payload<R: Reader + ?Sized>(_prefix: EncodingByte, reader: &mut R) -> Status<Self> {
        let mut bytes = [0u8; 4];
        reader.read_exact(&mut bytes)?;
        reader.get_handle(HandleReference::new(i32::from_le_bytes(bytes)))
    }
}
