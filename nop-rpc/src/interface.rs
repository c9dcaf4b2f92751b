//! Interface and method descriptors.

use core::marker::PhantomData;

use nop_core::io::{Reader, Writer};
use nop_core::{BoundedReader, Deserializer, Encoding, EncodingByte, NopError, Serializer, Status};

use crate::selector::method_selector;
use crate::sender::MethodSender;

/// A named group of methods sharing one string identifier.
///
/// The identifier feeds every method selector, so two interfaces with
/// different identifiers never collide even when method names repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interface {
    id: &'static str,
}

impl Interface {
    /// Declare an interface with the given identifier.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self { id }
    }

    /// The interface identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Declare a method of this interface with the given argument tuple
    /// and return type.
    #[must_use]
    pub fn method<Args: Encoding, Ret: Encoding>(
        &self,
        name: &'static str,
    ) -> Method<Args, Ret> {
        Method {
            selector: method_selector(self.id, name),
            name,
            _signature: PhantomData,
        }
    }
}

/// A typed method descriptor: a wire selector plus the signature.
///
/// `Args` is the argument tuple and `Ret` the return type. The descriptor
/// drives both ends of a call: clients send request frames with
/// [`invoke`](Self::invoke) (or the split
/// [`send_request`](Self::send_request)/[`read_response`](Self::read_response)
/// phases on half-duplex transports), and services bind it to a handler
/// in a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug)]
pub struct Method<Args, Ret> {
    selector: u64,
    name: &'static str,
    _signature: PhantomData<fn(Args) -> Ret>,
}

impl<Args: Encoding, Ret: Encoding> Method<Args, Ret> {
    /// The method's wire selector.
    #[must_use]
    pub const fn selector(&self) -> u64 {
        self.selector
    }

    /// The method's declared name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Encode a request frame for `arguments` onto the serializer.
    ///
    /// The frame is the encoded `(selector, arguments)` pair preceded by
    /// its byte length, so receivers can scope a bounded reader to it.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the writer fails.
    pub fn send_request<W: Writer>(
        &self,
        serializer: &mut Serializer<W>,
        arguments: &Args,
    ) -> Status<()> {
        let pair_count = 2u64;
        let body = 1
            + pair_count.encoded_size()
            + self.selector.encoded_size()
            + arguments.encoded_size();

        let writer = serializer.writer();
        (body as u64).write(writer)?;
        EncodingByte::Array.write(writer)?;
        pair_count.write(writer)?;
        self.selector.write(writer)?;
        arguments.write(writer)
    }

    /// Decode a response frame from the deserializer.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame is malformed or does not hold the
    /// return type.
    pub fn read_response<R: Reader>(&self, deserializer: &mut Deserializer<R>) -> Status<Ret> {
        let reader = deserializer.reader();
        let frame_bytes = u64::read(reader)?;
        let frame_bytes =
            usize::try_from(frame_bytes).map_err(|_| NopError::InvalidContainerLength)?;

        let mut frame = BoundedReader::new(reader, frame_bytes);
        let value = Ret::read(&mut frame)?;
        frame.read_padding()?;
        Ok(value)
    }

    /// Perform a full call: send the request, then read the response.
    ///
    /// # Errors
    ///
    /// Returns an error if either phase fails.
    pub fn invoke<W: Writer, R: Reader>(
        &self,
        sender: &mut MethodSender<'_, W, R>,
        arguments: &Args,
    ) -> Status<Ret> {
        let (serializer, deserializer) = sender.split();
        self.send_request(serializer, arguments)?;
        self.read_response(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nop_core::{BufferReader, BufferWriter};

    #[test]
    fn methods_inherit_the_interface_id() {
        let interface = Interface::new("example.Calculator");
        let add = interface.method::<(u32, u32), u64>("Add");
        assert_eq!(add.name(), "Add");
        assert_eq!(add.selector(), method_selector("example.Calculator", "Add"));
    }

    #[test]
    fn request_frame_length_covers_the_body() {
        let interface = Interface::new("example.Calculator");
        let add = interface.method::<(u32, u32), u64>("Add");

        let mut serializer = Serializer::new(BufferWriter::new());
        add.send_request(&mut serializer, &(1, 2)).expect("in-memory write");

        let (bytes, _) = serializer.into_writer().into_parts();
        let mut reader = BufferReader::new(&bytes);
        let frame_bytes = u64::read(&mut reader).expect("length header");
        assert_eq!(frame_bytes as usize, reader.remaining());
    }

    #[test]
    fn response_frame_round_trips() {
        let interface = Interface::new("example.Calculator");
        let add = interface.method::<(u32, u32), u64>("Add");

        // A response frame is the length header then the value.
        let mut writer = BufferWriter::new();
        (300u64.encoded_size() as u64).write(&mut writer).expect("in-memory write");
        300u64.write(&mut writer).expect("in-memory write");

        let (bytes, _) = writer.into_parts();
        let mut deserializer = Deserializer::new(BufferReader::new(&bytes));
        assert_eq!(add.read_response(&mut deserializer), Ok(300));
    }
}
